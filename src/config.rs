use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Public TheCocktailDB endpoint using the shared test key
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ThirstyConfig {
    /// Catalog API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Ingredient chart settings
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Configuration for the cocktail catalog API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL that `search.php` and `lookup.php` are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; 0 means the default
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Configured request timeout, `None` when it is unset (0)
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

/// Configuration for the ingredient proportion chart
#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    /// Whether the proportion chart is rendered under the ingredient list
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,
    /// Width in characters of a 100% proportion bar
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    /// Paint ingredient swatches with 24-bit ANSI colors
    #[serde(default = "default_use_color")]
    pub use_color: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_chart: default_show_chart(),
            bar_width: default_bar_width(),
            use_color: default_use_color(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("thirsty/{}", env!("CARGO_PKG_VERSION"))
}

fn default_show_chart() -> bool {
    true
}

fn default_bar_width() -> usize {
    30
}

fn default_use_color() -> bool {
    true
}

impl ThirstyConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with THIRSTY__ prefix
/// 2. thirsty.toml file in current directory
/// 3. Default values
///
/// Environment variable format: THIRSTY__API__BASE_URL
pub fn load_config() -> Result<ThirstyConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("thirsty").required(false))
        // Use double underscore for nested: THIRSTY__API__TIMEOUT
        .add_source(
            Environment::with_prefix("THIRSTY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
