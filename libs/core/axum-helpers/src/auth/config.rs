//! Configuration for the static bearer-token check.
//!
//! Follows the same `FromEnv` pattern as `ServerConfig` in `core_config`.

use core_config::{ConfigError, Environment, FromEnv, env_or_default, env_required};

/// Token accepted when `API_TOKEN` is unset outside production.
pub const DEVELOPMENT_TOKEN: &str = "valid-token-123";

/// Path prefixes that skip authentication when `AUTH_EXEMPT_PATHS` is unset:
/// the health probe, the Swagger UI and the OpenAPI document it loads.
pub const DEFAULT_EXEMPT_PATHS: &str = "/health,/swagger-ui,/api-docs";

/// Static bearer-token authentication configuration.
///
/// Loaded from environment variables:
/// - `API_TOKEN` - the single accepted token. Required when `APP_ENV=production`,
///   defaults to [`DEVELOPMENT_TOKEN`] otherwise.
/// - `AUTH_EXEMPT_PATHS` - comma-separated path prefixes served without a token.
///
/// Exempting diagnostics in production is a deliberate, reviewable setting:
/// set `AUTH_EXEMPT_PATHS` explicitly to narrow it.
#[derive(Clone, Debug)]
pub struct StaticTokenConfig {
    pub token: String,
    pub exempt_paths: Vec<String>,
}

impl StaticTokenConfig {
    /// Create a config with the given token and exempt path prefixes.
    ///
    /// # Errors
    /// Returns [`ConfigError::ParseError`] if the token is blank or an exempt
    /// path does not start with `/`.
    pub fn new<I, S>(token: impl Into<String>, exempt_paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_TOKEN".to_string(),
                details: "must not be blank".to_string(),
            });
        }

        let exempt_paths: Vec<String> = exempt_paths.into_iter().map(Into::into).collect();
        if let Some(path) = exempt_paths.iter().find(|p| !p.starts_with('/')) {
            return Err(ConfigError::ParseError {
                key: "AUTH_EXEMPT_PATHS".to_string(),
                details: format!("'{}' must start with '/'", path),
            });
        }

        Ok(Self {
            token,
            exempt_paths,
        })
    }
}

impl Default for StaticTokenConfig {
    fn default() -> Self {
        Self {
            token: DEVELOPMENT_TOKEN.to_string(),
            exempt_paths: parse_path_list(DEFAULT_EXEMPT_PATHS),
        }
    }
}

impl FromEnv for StaticTokenConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let token = if Environment::from_env().is_production() {
            env_required("API_TOKEN")?
        } else {
            env_or_default("API_TOKEN", DEVELOPMENT_TOKEN)
        };

        let exempt_paths =
            parse_path_list(&env_or_default("AUTH_EXEMPT_PATHS", DEFAULT_EXEMPT_PATHS));

        Self::new(token, exempt_paths)
    }
}

fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StaticTokenConfig::default();
        assert_eq!(config.token, DEVELOPMENT_TOKEN);
        assert_eq!(config.exempt_paths, vec!["/health", "/swagger-ui", "/api-docs"]);
    }

    #[test]
    fn test_new_rejects_blank_token() {
        let err = StaticTokenConfig::new("  ", Vec::<String>::new()).unwrap_err();
        assert!(err.to_string().contains("API_TOKEN"));
    }

    #[test]
    fn test_new_rejects_relative_exempt_path() {
        let err = StaticTokenConfig::new("s3cret", ["/health", "docs"]).unwrap_err();
        assert!(err.to_string().contains("AUTH_EXEMPT_PATHS"));
    }

    #[test]
    fn test_new_accepts_valid_input() {
        let config = StaticTokenConfig::new("s3cret", ["/health"]).unwrap();
        assert_eq!(config.token, "s3cret");
        assert_eq!(config.exempt_paths, vec!["/health"]);
    }

    #[test]
    fn test_from_env_development_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("API_TOKEN", None),
                ("AUTH_EXEMPT_PATHS", None),
            ],
            || {
                let config = StaticTokenConfig::from_env().unwrap();
                assert_eq!(config.token, DEVELOPMENT_TOKEN);
                assert_eq!(config.exempt_paths.len(), 3);
            },
        );
    }

    #[test]
    fn test_from_env_production_requires_token() {
        temp_env::with_vars(
            [("APP_ENV", Some("production")), ("API_TOKEN", None::<&str>)],
            || {
                let err = StaticTokenConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("API_TOKEN"));
            },
        );
    }

    #[test]
    fn test_from_env_custom_values() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("API_TOKEN", Some("s3cret")),
                ("AUTH_EXEMPT_PATHS", Some(" /health/ , ,/docs")),
            ],
            || {
                let config = StaticTokenConfig::from_env().unwrap();
                assert_eq!(config.token, "s3cret");
                assert_eq!(config.exempt_paths, vec!["/health", "/docs"]);
            },
        );
    }

    #[test]
    fn test_from_env_rejects_relative_exempt_path() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("API_TOKEN", None),
                ("AUTH_EXEMPT_PATHS", Some("health")),
            ],
            || {
                let err = StaticTokenConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("AUTH_EXEMPT_PATHS"));
            },
        );
    }
}
