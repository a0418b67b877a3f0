//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with a fixed user agent and timeout
//! - GET requests with status checking
//! - Charset-aware body decoding
//! - The throttling pause after each successful request
//!
//! A failed fetch is never retried; the caller decides what "no content"
//! means for it.

use crate::config::ClientConfig;
use reqwest::{header::CONTENT_TYPE, Client};
use std::time::Duration;
use thiserror::Error;

/// Failure of a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the client timeout
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    /// The server answered with a 4xx or 5xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Connection, DNS, TLS, or body transfer failure
    #[error("HTTP error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url } | Self::Status { url, .. } | Self::Network { url, .. } => url,
        }
    }

    fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// Cookies persist for the lifetime of the returned client.
///
/// # Arguments
///
/// * `config` - The client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .cookie_store(true)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sequential page fetcher
///
/// Owns the one HTTP client used for the whole process run. Construct it once
/// and pass it by reference to the crawler and the extractor.
///
/// # Example
///
/// ```no_run
/// use quill_scraper::config::ClientConfig;
/// use quill_scraper::crawler::Fetcher;
///
/// # async fn example() {
/// let fetcher = Fetcher::new(&ClientConfig::default()).unwrap();
/// match fetcher.fetch("http://quotes.toscrape.com/").await {
///     Ok(body) => println!("{} bytes", body.len()),
///     Err(e) => eprintln!("{}", e),
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    /// Creates a fetcher from the client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            delay: Duration::from_millis(config.delay_ms),
        })
    }

    /// Replaces the post-success delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The pause applied after every successful fetch
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fetches a URL and returns its decoded body
    ///
    /// # Request Flow
    ///
    /// 1. Send GET (redirects are followed by the client)
    /// 2. A final 4xx/5xx status → `FetchError::Status`
    /// 3. Decode the body with the encoding detected from its bytes
    /// 4. Sleep for the configured delay, then return the text
    ///
    /// The delay is only applied on success.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let body = decode_body(&bytes, content_type.as_deref());
        tracing::debug!("Fetched {} ({} bytes, status {})", url, bytes.len(), status);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(body)
    }
}

/// Decodes body bytes using the encoding detected from the bytes
///
/// The declared `Content-Type` charset is only compared against the detected
/// encoding; servers often declare `iso-8859-1` for UTF-8 pages.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let detected = detector.guess(None, true);

    if let Some(charset) = content_type.and_then(extract_charset) {
        match encoding_rs::Encoding::for_label(charset.as_bytes()) {
            Some(declared) if declared != detected => tracing::debug!(
                "Declared charset '{}' disagrees with detected {}, using detected",
                charset,
                detected.name()
            ),
            Some(_) => {}
            None => tracing::debug!("Unknown charset '{}', using detected", charset),
        }
    }

    let (decoded, _, _) = detected.decode(body);
    decoded.into_owned()
}

/// Extracts the charset parameter from a Content-Type header value
fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches('"').trim_matches('\'').to_string())
        })
        .filter(|charset| !charset.is_empty())
}
