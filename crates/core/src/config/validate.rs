use reqwest::Url;
use scraper::Selector;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Portal URLs parse
/// - Pacing range is non-empty (end > start)
/// - Extractor selectors parse
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    for (name, url) in [
        ("portal.login_url", &config.portal.login_url),
        ("portal.status_url", &config.portal.status_url),
    ] {
        Url::parse(url).map_err(|e| {
            ConfigError::ValidationError(format!("{} is not a valid URL ({}): {}", name, url, e))
        })?;
    }

    if config.pacing.end_secs <= config.pacing.start_secs {
        return Err(ConfigError::ValidationError(format!(
            "pacing.end_secs ({}) must be greater than pacing.start_secs ({})",
            config.pacing.end_secs, config.pacing.start_secs
        )));
    }

    for (name, selector) in [
        ("extractor.error_selector", &config.extractor.error_selector),
        ("extractor.headline_selector", &config.extractor.headline_selector),
        ("extractor.details_selector", &config.extractor.details_selector),
    ] {
        Selector::parse(selector).map_err(|e| {
            ConfigError::ValidationError(format!("{} is not a valid selector: {}", name, e))
        })?;
    }

    Ok(())
}
