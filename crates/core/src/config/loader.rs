use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment variable overrides, e.g. `CASESTATUS_PACING__END_SECS=5`.
pub const ENV_PREFIX: &str = "CASESTATUS_";

/// Load configuration from defaults, an optional TOML file, then environment overrides
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicateMode;
    use figment::Jail;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[pacing]
start_secs = 2
end_secs = 4
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.pacing.start_secs, 2);
        assert_eq!(config.pacing.end_secs, 4);
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let toml = r#"
[pacing]
start_secs = "soon"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Some(Path::new("/nonexistent/casestatus.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    // Tests that read the environment run inside a Jail so overrides set by
    // one test stay invisible to the others.

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).unwrap();
            assert_eq!(config.portal.user_name_rule, "userNameRequired");
            assert_eq!(config.pacing.end_secs, 2);
            Ok(())
        });
    }

    #[test]
    fn test_load_config_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "casestatus.toml",
                r#"
duplicates = "refetch"

[portal]
login_url = "http://127.0.0.1:3000/login.do"
"#,
            )?;

            let config = load_config(Some(Path::new("casestatus.toml"))).unwrap();
            assert_eq!(config.portal.login_url, "http://127.0.0.1:3000/login.do");
            assert_eq!(config.duplicates, DuplicateMode::Refetch);
            assert_eq!(config.pacing.end_secs, 2);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        Jail::expect_with(|jail| {
            jail.set_env("CASESTATUS_PACING__END_SECS", 9);
            jail.set_env("CASESTATUS_PORTAL__TIMEOUT_SECS", 4);

            let config = load_config(None).unwrap();
            assert_eq!(config.pacing.start_secs, 1);
            assert_eq!(config.pacing.end_secs, 9);
            assert_eq!(config.portal.timeout_secs, Some(4));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file_values() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "casestatus.toml",
                r#"
[pacing]
start_secs = 3
end_secs = 5
"#,
            )?;
            jail.set_env("CASESTATUS_PACING__END_SECS", 8);

            let config = load_config(Some(Path::new("casestatus.toml"))).unwrap();
            assert_eq!(config.pacing.start_secs, 3);
            assert_eq!(config.pacing.end_secs, 8);
            Ok(())
        });
    }
}
