use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub duplicates: DuplicateMode,
}

/// Case status portal endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_status_url")]
    pub status_url: String,
    /// Value sent as the `userNameRules` login field.
    #[serde(default = "default_user_name_rule")]
    pub user_name_rule: String,
    /// Request timeout in seconds. Unset means requests may block indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            status_url: default_status_url(),
            user_name_rule: default_user_name_rule(),
            timeout_secs: None,
        }
    }
}

fn default_login_url() -> String {
    "https://egov.uscis.gov/casestatus/login.do".to_string()
}

fn default_status_url() -> String {
    "https://egov.uscis.gov/casestatus/mycasestatus.do".to_string()
}

fn default_user_name_rule() -> String {
    "userNameRequired".to_string()
}

/// Wait range between successive lookups, in whole seconds.
///
/// The wait is drawn from `[start_secs, end_secs)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PacingConfig {
    #[serde(default = "default_start_secs")]
    pub start_secs: u64,
    #[serde(default = "default_end_secs")]
    pub end_secs: u64,
}

impl PacingConfig {
    /// Midpoint of the pacing range, used for remaining-time estimates.
    pub fn average_wait_secs(&self) -> f64 {
        (self.end_secs as f64 - self.start_secs as f64) / 2.0 + self.start_secs as f64
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            start_secs: default_start_secs(),
            end_secs: default_end_secs(),
        }
    }
}

fn default_start_secs() -> u64 {
    1
}

fn default_end_secs() -> u64 {
    2
}

/// Result file settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Append a newline after each record. When false, records run together.
    #[serde(default = "default_terminate_records")]
    pub terminate_records: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            terminate_records: default_terminate_records(),
        }
    }
}

fn default_terminate_records() -> bool {
    true
}

/// CSS selectors and labels used to pull status text out of a result page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractorConfig {
    #[serde(default = "default_error_selector")]
    pub error_selector: String,
    /// Text the error banner must start with to count as a failed lookup.
    #[serde(default = "default_error_marker")]
    pub error_marker: String,
    #[serde(default = "default_headline_selector")]
    pub headline_selector: String,
    #[serde(default = "default_details_selector")]
    pub details_selector: String,
    /// Message written when nothing usable was found on the page.
    #[serde(default = "default_not_found_message")]
    pub not_found_message: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            error_selector: default_error_selector(),
            error_marker: default_error_marker(),
            headline_selector: default_headline_selector(),
            details_selector: default_details_selector(),
            not_found_message: default_not_found_message(),
        }
    }
}

const STATUS_BLOCK: &str = "html > body > div:nth-of-type(2) > form > div > div:nth-of-type(1) \
     > div > div > div:nth-of-type(2) > div:nth-of-type(3)";

fn default_error_selector() -> String {
    "div#formErrorMessages > h4".to_string()
}

fn default_error_marker() -> String {
    "Validation Error(s)".to_string()
}

fn default_headline_selector() -> String {
    format!("{STATUS_BLOCK} > h1")
}

fn default_details_selector() -> String {
    format!("{STATUS_BLOCK} > p")
}

fn default_not_found_message() -> String {
    "Not found or other error".to_string()
}

/// How repeated identifiers in one input file are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateMode {
    /// Look up each identifier once; repeats get an "already in dictionary" record.
    #[default]
    Skip,
    /// Look up every occurrence, repeats included.
    Refetch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(
            config.portal.status_url,
            "https://egov.uscis.gov/casestatus/mycasestatus.do"
        );
        assert_eq!(config.portal.user_name_rule, "userNameRequired");
        assert!(config.portal.timeout_secs.is_none());
        assert_eq!(config.pacing, PacingConfig { start_secs: 1, end_secs: 2 });
        assert!(config.output.terminate_records);
        assert_eq!(config.duplicates, DuplicateMode::Skip);
        assert_eq!(config.extractor.error_marker, "Validation Error(s)");
    }

    #[test]
    fn test_deserialize_overrides() {
        let toml = r#"
duplicates = "refetch"

[portal]
status_url = "http://127.0.0.1:9000/status"
timeout_secs = 20

[pacing]
start_secs = 3
end_secs = 7

[output]
terminate_records = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.duplicates, DuplicateMode::Refetch);
        assert_eq!(config.portal.status_url, "http://127.0.0.1:9000/status");
        assert_eq!(config.portal.login_url, default_login_url());
        assert_eq!(config.portal.timeout_secs, Some(20));
        assert_eq!(config.pacing.start_secs, 3);
        assert_eq!(config.pacing.end_secs, 7);
        assert!(!config.output.terminate_records);
    }

    #[test]
    fn test_average_wait_is_midpoint() {
        assert_eq!(PacingConfig::default().average_wait_secs(), 1.5);
        let pacing = PacingConfig {
            start_secs: 4,
            end_secs: 10,
        };
        assert_eq!(pacing.average_wait_secs(), 7.0);
    }

    #[test]
    fn test_default_selectors_point_at_status_block() {
        let extractor = ExtractorConfig::default();
        assert!(extractor.headline_selector.ends_with("div:nth-of-type(3) > h1"));
        assert!(extractor.details_selector.ends_with("div:nth-of-type(3) > p"));
    }

    #[test]
    fn test_unknown_duplicate_mode_fails() {
        let result: Result<Config, _> = toml::from_str(r#"duplicates = "merge""#);
        assert!(result.is_err());
    }
}
