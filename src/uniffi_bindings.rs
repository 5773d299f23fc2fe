//! UniFFI bindings for thirsty
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{ChartSlice, DrinkCard, DrinkSummary, Ingredient, ThirstyError};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    /// Empty string if the catalog gave no measure
    pub measure: String,
    /// `#RRGGBB` swatch color for this list position
    pub color: String,
}

/// FFI-compatible chart wedge
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiChartSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// FFI-compatible search hit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiDrinkSummary {
    pub id: String,
    pub name: String,
    /// Empty string if none
    pub thumbnail: String,
}

/// FFI-compatible drink detail page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiDrinkCard {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub alcoholic: String,
    pub glass: String,
    pub instructions: String,
    pub ingredients: Vec<FfiIngredient>,
    pub slices: Vec<FfiChartSlice>,
}

impl From<ChartSlice> for FfiChartSlice {
    fn from(slice: ChartSlice) -> Self {
        FfiChartSlice {
            name: slice.name,
            value: slice.value,
            color: slice.color.to_string(),
        }
    }
}

impl From<DrinkSummary> for FfiDrinkSummary {
    fn from(summary: DrinkSummary) -> Self {
        FfiDrinkSummary {
            id: summary.id,
            name: summary.name,
            thumbnail: summary.thumbnail.unwrap_or_default(),
        }
    }
}

impl From<DrinkCard> for FfiDrinkCard {
    fn from(card: DrinkCard) -> Self {
        let drink = card.drink;
        FfiDrinkCard {
            id: drink.id,
            name: drink.name,
            thumbnail: drink.thumbnail,
            category: drink.category,
            alcoholic: drink.alcoholic,
            glass: drink.glass,
            instructions: drink.instructions,
            ingredients: card
                .lines
                .into_iter()
                .map(|line| FfiIngredient {
                    name: line.name,
                    measure: line.measure,
                    color: line.color.to_string(),
                })
                .collect(),
            slices: card.slices.into_iter().map(Into::into).collect(),
        }
    }
}

fn ffi_ingredients(ingredients: Vec<Ingredient>) -> Vec<FfiIngredient> {
    crate::ingredient_lines(&ingredients)
        .into_iter()
        .map(|line| FfiIngredient {
            name: line.name,
            measure: line.measure,
            color: line.color.to_string(),
        })
        .collect()
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiThirstyError {
    /// Failed to reach the catalog
    FetchError { message: String },
    /// No drink for the requested id
    DrinkNotFound { message: String },
    /// Response or input JSON could not be decoded
    ParseError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiThirstyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiThirstyError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiThirstyError::DrinkNotFound { message } => {
                write!(f, "Drink not found: {}", message)
            }
            FfiThirstyError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiThirstyError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiThirstyError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiThirstyError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiThirstyError {}

impl From<ThirstyError> for FfiThirstyError {
    fn from(err: ThirstyError) -> Self {
        match err {
            ThirstyError::FetchError(e) => FfiThirstyError::FetchError {
                message: e.to_string(),
            },
            ThirstyError::DrinkNotFound(id) => FfiThirstyError::DrinkNotFound { message: id },
            ThirstyError::ParseError(msg) => FfiThirstyError::ParseError { message: msg },
            ThirstyError::InvalidQuery(msg) => FfiThirstyError::InvalidInput { message: msg },
            ThirstyError::BuilderError(msg) => FfiThirstyError::InvalidInput { message: msg },
            ThirstyError::ConfigError(e) => FfiThirstyError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Catalog settings for FFI calls
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiLookupConfig {
    /// Optional catalog base URL (uses configuration if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (uses configuration if not specified)
    pub timeout_seconds: Option<u64>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiThirstyError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiThirstyError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn lookup_builder(config: Option<FfiLookupConfig>) -> crate::DrinkLookupBuilder {
    let config = config.unwrap_or_default();
    let mut builder = crate::DrinkLookup::builder();

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    builder
}

/// Extract the ingredient list from one catalog record given as JSON
///
/// # Arguments
/// * `record_json` - A single drink object, as found in the `drinks` array
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_ingredients_from_json(
    record_json: String,
) -> Result<Vec<FfiIngredient>, FfiThirstyError> {
    let drink =
        crate::DrinkDetail::from_json(&record_json).map_err(|e| FfiThirstyError::ParseError {
            message: e.to_string(),
        })?;
    Ok(ffi_ingredients(crate::extract_ingredients(&drink)))
}

/// Fluid-ounce weight of a free-form measure such as "1 1/2 oz"
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_measure(measure: String) -> f64 {
    crate::normalize_measure(&measure)
}

/// The fixed ingredient palette, in assignment order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn chart_colors() -> Vec<String> {
    crate::CHART_COLORS.iter().map(|c| c.to_string()).collect()
}

/// Search the catalog by drink name
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_drinks(
    term: String,
    config: Option<FfiLookupConfig>,
) -> Result<Vec<FfiDrinkSummary>, FfiThirstyError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        match lookup_builder(config).search(term).build().await? {
            crate::LookupResult::Drinks(drinks) => Ok(drinks.into_iter().map(Into::into).collect()),
            _ => Err(FfiThirstyError::InvalidInput {
                message: "Unexpected drink result when searching".to_string(),
            }),
        }
    })
}

/// Look up one drink and analyse its ingredients
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn lookup_drink(
    id: String,
    config: Option<FfiLookupConfig>,
) -> Result<FfiDrinkCard, FfiThirstyError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        match lookup_builder(config).id(id).build().await? {
            crate::LookupResult::Card(card) => Ok(card.into()),
            _ => Err(FfiThirstyError::InvalidInput {
                message: "Unexpected result when looking up a drink".to_string(),
            }),
        }
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
