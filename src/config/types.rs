use serde::Deserialize;

/// Default browser-like user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Quill-Scraper
///
/// Every section is optional in the TOML file; missing keys fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub quotes: QuotesConfig,
    pub preview: PreviewConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Pause after each successful fetch (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            delay_ms: 1000,
        }
    }
}

/// Paginated quote crawl configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuotesConfig {
    /// Site root; pages are fetched from `{base-url}/page/{n}/`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Hard cap on the number of pages requested
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// CSV file the quotes are written to
    #[serde(rename = "output-path")]
    pub output_path: String,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            base_url: "http://quotes.toscrape.com".to_string(),
            max_pages: 3,
            output_path: "quotes.csv".to_string(),
        }
    }
}

/// Console preview configuration for selector extraction
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Number of results shown
    pub limit: usize,

    /// Characters of text shown per result
    #[serde(rename = "max-chars")]
    pub max_chars: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            max_chars: 100,
        }
    }
}
