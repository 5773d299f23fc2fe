use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::ThirstyError;
use crate::model::{DrinkDetail, DrinkSummary};

pub const USER_AGENT: &str = concat!("thirsty/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer catalog searches and id lookups
#[async_trait]
pub trait DrinkSource: Send + Sync {
    /// Drinks whose name matches `term`. A blank term matches nothing.
    async fn search(&self, term: &str) -> Result<Vec<DrinkSummary>, ThirstyError>;

    /// The full record for one drink id
    async fn lookup(&self, id: &str) -> Result<DrinkDetail, ThirstyError>;
}

/// The catalog answers `{"drinks": [...]}`, `{"drinks": null}` when nothing
/// matched, and occasionally a string in place of the array.
#[derive(Debug, Deserialize)]
struct DrinksEnvelope {
    #[serde(default)]
    drinks: Value,
}

/// HTTP client for TheCocktailDB `search.php` / `lookup.php` endpoints
pub struct CocktailClient {
    client: Client,
    base_url: String,
}

impl CocktailClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ThirstyError> {
        Self::with_user_agent(base_url, timeout, USER_AGENT)
    }

    pub fn with_user_agent(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, ThirstyError> {
        let client = Client::builder()
            .timeout(
                timeout
                    .filter(|timeout| !timeout.is_zero())
                    .unwrap_or(DEFAULT_TIMEOUT),
            )
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ThirstyError> {
        Self::with_user_agent(
            config.base_url.as_str(),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_drinks<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ThirstyError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let drinks = parse_drinks(&body)?;
        debug!("{} returned {} drink(s)", endpoint, drinks.len());
        Ok(drinks)
    }
}

#[async_trait]
impl DrinkSource for CocktailClient {
    async fn search(&self, term: &str) -> Result<Vec<DrinkSummary>, ThirstyError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_drinks("search.php", &[("s", term)]).await
    }

    async fn lookup(&self, id: &str) -> Result<DrinkDetail, ThirstyError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ThirstyError::InvalidQuery(
                "Drink id cannot be empty".to_string(),
            ));
        }

        self.fetch_drinks::<DrinkDetail>("lookup.php", &[("i", id)])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ThirstyError::DrinkNotFound(id.to_string()))
    }
}

/// Decode the `drinks` array of a response body.
///
/// A blank body, a null or non-array `drinks` all mean "no drinks". Entries
/// that don't decode are skipped with a warning rather than failing the
/// whole response.
fn parse_drinks<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ThirstyError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let envelope: DrinksEnvelope =
        serde_json::from_str(body).map_err(|e| ThirstyError::ParseError(e.to_string()))?;

    let entries = match envelope.drinks {
        Value::Array(entries) => entries,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!("drinks field is not a list: {}", other);
            return Ok(Vec::new());
        }
    };

    let total = entries.len();
    let drinks: Vec<T> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(drink) => Some(drink),
            Err(e) => {
                warn!("Skipping malformed drink entry: {}", e);
                None
            }
        })
        .collect();

    if drinks.len() < total {
        warn!("{} of {} drink entries were unusable", total - drinks.len(), total);
    }

    Ok(drinks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_null_drinks() {
        let drinks: Vec<DrinkSummary> = parse_drinks(r#"{"drinks": null}"#).unwrap();
        assert!(drinks.is_empty());
    }

    #[test]
    fn test_parse_blank_body() {
        let drinks: Vec<DrinkDetail> = parse_drinks("  ").unwrap();
        assert!(drinks.is_empty());
    }

    #[test]
    fn test_parse_string_instead_of_list() {
        let drinks: Vec<DrinkSummary> = parse_drinks(r#"{"drinks": "no data found"}"#).unwrap();
        assert!(drinks.is_empty());
    }

    #[test]
    fn test_parse_skips_bad_entries() {
        let body = r#"{"drinks": [{"idDrink": "1", "strDrink": "Gimlet"}, {"strDrink": "No id"}]}"#;
        let drinks: Vec<DrinkSummary> = parse_drinks(body).unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "Gimlet");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result: Result<Vec<DrinkSummary>, _> = parse_drinks("<html>oops</html>");
        assert!(matches!(result, Err(ThirstyError::ParseError(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CocktailClient::new("http://localhost:1234/api/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/api");
    }

    #[tokio::test]
    async fn test_blank_search_skips_request() {
        // Nothing listens on this port; a request would fail
        let client = CocktailClient::new("http://127.0.0.1:9", None).unwrap();
        assert!(client.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_lookup_is_invalid() {
        let client = CocktailClient::new("http://127.0.0.1:9", None).unwrap();
        let result = client.lookup("").await;
        assert!(matches!(result, Err(ThirstyError::InvalidQuery(_))));
    }
}
