use crate::config::types::{ClientConfig, Config, PreviewConfig, QuotesConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_client_config(&config.client)?;
    validate_quotes_config(&config.quotes)?;
    validate_preview_config(&config.preview)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates quote crawl configuration
fn validate_quotes_config(config: &QuotesConfig) -> Result<(), ConfigError> {
    parse_http_url(&config.base_url).map_err(|message| {
        ConfigError::InvalidUrl(format!("base_url '{}': {}", config.base_url, message))
    })?;

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.output_path.is_empty() {
        return Err(ConfigError::Validation(
            "output_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates preview configuration
fn validate_preview_config(config: &PreviewConfig) -> Result<(), ConfigError> {
    if config.limit < 1 {
        return Err(ConfigError::Validation(format!(
            "preview limit must be >= 1, got {}",
            config.limit
        )));
    }

    if config.max_chars < 1 {
        return Err(ConfigError::Validation(format!(
            "preview max_chars must be >= 1, got {}",
            config.max_chars
        )));
    }

    Ok(())
}

/// Parses a URL and checks that it uses the http or https scheme
///
/// Shared by config validation and command construction; each caller wraps
/// the message in its own error type.
pub fn parse_http_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!("unsupported scheme '{}'", scheme)),
    }
}
