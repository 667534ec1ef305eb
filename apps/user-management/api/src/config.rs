use axum_helpers::StaticTokenConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub auth: StaticTokenConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let auth = StaticTokenConfig::from_env()?; // API_TOKEN required in production

        Ok(Self {
            app: app_info!(),
            server,
            auth,
            environment,
        })
    }

    /// Development defaults without touching the environment.
    pub fn development() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            auth: StaticTokenConfig::default(),
            environment: Environment::Development,
        }
    }
}
