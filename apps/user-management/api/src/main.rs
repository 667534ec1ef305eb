use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;
use user_management_api::config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    if config.environment.is_production() && config.auth.exempt_paths.iter().any(|p| p != "/health")
    {
        tracing::warn!(
            exempt_paths = ?config.auth.exempt_paths,
            "Documentation routes are served without authentication; set AUTH_EXEMPT_PATHS to narrow this"
        );
    }

    let app = user_management_api::app(&config);

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User management API shutdown complete");
    Ok(())
}
