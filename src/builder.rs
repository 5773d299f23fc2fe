use std::time::Duration;

use crate::{
    CocktailClient, DrinkCard, DrinkDetail, DrinkSource, DrinkSummary, ThirstyConfig,
    ThirstyError,
};

/// What to ask the catalog for
#[derive(Debug, Clone)]
pub enum Query {
    /// Search drinks by name
    Search(String),
    /// Look up a single drink by id
    Lookup(String),
}

/// Represents the desired output for an id lookup
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Record plus extracted ingredients and chart slices (default)
    #[default]
    Card,
    /// The record as decoded, no ingredient analysis
    Record,
}

/// Result of a catalog lookup
#[derive(Debug, Clone)]
pub enum LookupResult {
    /// Search hits, possibly empty
    Drinks(Vec<DrinkSummary>),
    /// Analysed drink
    Card(DrinkCard),
    /// Raw drink record
    Record(DrinkDetail),
}

/// Builder for configuring and executing catalog lookups
#[derive(Default)]
pub struct DrinkLookupBuilder {
    query: Option<Query>,
    mode: OutputMode,
    base_url: Option<String>,
    timeout: Option<Duration>,
    source: Option<Box<dyn DrinkSource>>,
}

impl DrinkLookupBuilder {
    /// Search drinks by name
    ///
    /// # Example
    /// ```
    /// use thirsty::DrinkLookup;
    ///
    /// let builder = DrinkLookup::builder().search("margarita");
    /// ```
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.query = Some(Query::Search(term.into()));
        self
    }

    /// Look up one drink by its catalog id
    ///
    /// # Example
    /// ```
    /// use thirsty::DrinkLookup;
    ///
    /// let builder = DrinkLookup::builder().id("11007");
    /// ```
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.query = Some(Query::Lookup(id.into()));
        self
    }

    /// Return the decoded record without extracting ingredients
    ///
    /// Only valid together with [`id`](Self::id).
    pub fn raw(mut self) -> Self {
        self.mode = OutputMode::Record;
        self
    }

    /// Override the catalog base URL from the configuration
    ///
    /// # Example
    /// ```
    /// use thirsty::DrinkLookup;
    ///
    /// let builder = DrinkLookup::builder()
    ///     .id("11007")
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests. A zero duration keeps the default.
    ///
    /// # Example
    /// ```
    /// use thirsty::DrinkLookup;
    /// use std::time::Duration;
    ///
    /// let builder = DrinkLookup::builder()
    ///     .search("negroni")
    ///     .timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom [`DrinkSource`] instead of the HTTP catalog client.
    /// `base_url` and `timeout` are ignored when a source is given.
    pub fn source(mut self, source: impl DrinkSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build and execute the lookup
    ///
    /// # Errors
    /// Returns `ThirstyError` if:
    /// - No query was specified
    /// - `raw()` was combined with a search
    /// - The catalog request fails or returns an unreadable body
    /// - An id lookup finds no drink
    ///
    /// # Example
    /// ```no_run
    /// # use thirsty::DrinkLookup;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = DrinkLookup::builder()
    ///     .search("margarita")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<LookupResult, ThirstyError> {
        let query = self.query.ok_or_else(|| {
            ThirstyError::BuilderError(
                "No query specified. Use .search() or .id()".to_string(),
            )
        })?;

        if let (Query::Search(_), OutputMode::Record) = (&query, self.mode) {
            return Err(ThirstyError::BuilderError(
                "Cannot use raw() with a search. Search results are already raw summaries."
                    .to_string(),
            ));
        }

        let source: Box<dyn DrinkSource> = match self.source {
            Some(source) => source,
            None => {
                let api = ThirstyConfig::load()?.api;
                let timeout = self.timeout.or_else(|| api.request_timeout());
                let base_url = self.base_url.unwrap_or(api.base_url);
                Box::new(CocktailClient::with_user_agent(
                    base_url,
                    timeout,
                    &api.user_agent,
                )?)
            }
        };

        match (query, self.mode) {
            (Query::Search(term), _) => Ok(LookupResult::Drinks(source.search(&term).await?)),
            (Query::Lookup(id), OutputMode::Card) => {
                let drink = source.lookup(&id).await?;
                Ok(LookupResult::Card(DrinkCard::from_detail(drink)))
            }
            (Query::Lookup(id), OutputMode::Record) => {
                Ok(LookupResult::Record(source.lookup(&id).await?))
            }
        }
    }
}

/// Main entry point for the builder API
pub struct DrinkLookup;

impl DrinkLookup {
    /// Creates a new builder for catalog lookups
    ///
    /// # Example
    /// ```
    /// use thirsty::DrinkLookup;
    ///
    /// let builder = DrinkLookup::builder();
    /// ```
    pub fn builder() -> DrinkLookupBuilder {
        DrinkLookupBuilder::default()
    }
}
