//! Search TheCocktailDB and break a cocktail down into ingredient proportions.
//!
//! The catalog stores ingredients as fifteen numbered `strIngredientN` /
//! `strMeasureN` pairs with free-form measures such as `"1 1/2 oz"`,
//! `"2 dashes"` or `"to taste"`. This crate turns a record into an ordered
//! ingredient list, weighs each measure in fluid ounces, and colors each
//! ingredient from a fixed palette so a list and a pie chart can agree.
//!
//! # Example
//!
//! ```
//! use thirsty::{extract_ingredients, normalize_measure, DrinkDetail};
//!
//! let drink = DrinkDetail::from_json(
//!     r#"{"strDrink": "Gimlet", "strIngredient1": "Gin", "strMeasure1": "2 oz"}"#,
//! ).unwrap();
//!
//! let ingredients = extract_ingredients(&drink);
//! assert_eq!(ingredients[0].name, "Gin");
//! assert_eq!(normalize_measure(&ingredients[0].measure), 2.0);
//! ```

pub mod builder;
pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod measure;
pub mod model;
pub mod palette;
pub mod render;
pub mod uniffi_bindings;

// Re-export commonly used types
pub use builder::{DrinkLookup, DrinkLookupBuilder, LookupResult, OutputMode, Query};
pub use chart::{
    chart_slices, ingredient_lines, slice_shares, ChartSlice, DrinkCard, IngredientLine,
};
pub use client::{CocktailClient, DrinkSource};
pub use config::{ChartConfig, ThirstyConfig};
pub use error::ThirstyError;
pub use ingredients::extract_ingredients;
pub use measure::{normalize_measure, parse_numeric_value, read_measure, MeasureReading, UnitKind};
pub use model::{DrinkDetail, DrinkSummary, Ingredient, IngredientSlot, SLOT_COUNT};
pub use palette::{color_for, CHART_COLORS};
pub use render::{render_card, render_search_results};

/// Search the configured catalog by drink name
///
/// A blank term returns no drinks without contacting the catalog.
pub async fn search_drinks(term: &str) -> Result<Vec<DrinkSummary>, ThirstyError> {
    let config = ThirstyConfig::load()?;
    let client = CocktailClient::from_config(&config.api)?;
    client.search(term).await
}

/// Fetch one drink record by id from the configured catalog
pub async fn lookup_drink(id: &str) -> Result<DrinkDetail, ThirstyError> {
    let config = ThirstyConfig::load()?;
    let client = CocktailClient::from_config(&config.api)?;
    client.lookup(id).await
}

/// Fetch one drink and extract its ingredients and chart slices
pub async fn drink_card(id: &str) -> Result<DrinkCard, ThirstyError> {
    lookup_drink(id).await.map(DrinkCard::from_detail)
}
