//! HTTP server initialization and runtime setup.
//!
//! Handles the CMS database connection, tab registry loading and the Axum
//! server lifecycle.

use crate::application::services::{AuthService, LinkResolutionService};
use crate::config::Config;
use crate::domain::localization::{IdentityLocalizer, Localizer};
use crate::domain::tabs::TabRegistry;
use crate::infrastructure::localization::StaticLocalizer;
use crate::infrastructure::persistence::PgRecordRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Tab registry from the configured JSON document
/// - Label translation map (identity when not configured)
/// - CMS PostgreSQL connection pool
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The tab configuration cannot be read or parsed
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let tabs = load_tab_registry(&config)?;
    tracing::info!(
        "Tab registry loaded: {}",
        tabs.anchor_types().collect::<Vec<_>>().join(", ")
    );

    let localizer = load_localizer(&config)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the CMS database")?;
    tracing::info!("Connected to the CMS database");

    let tabs = Arc::new(tabs);
    let record_repository = Arc::new(PgRecordRepository::new(Arc::new(pool), &tabs));

    let link_service = Arc::new(LinkResolutionService::new(
        tabs.clone(),
        record_repository.clone(),
        localizer,
    ));
    let auth_service = Arc::new(AuthService::new(config.api_token_hash.clone()));

    let state = AppState {
        link_service,
        auth_service,
        tabs,
        record_repository,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Reads and parses the tab configuration document.
fn load_tab_registry(config: &Config) -> Result<TabRegistry> {
    let document = std::fs::read_to_string(&config.tabs_config_path).with_context(|| {
        format!(
            "Failed to read tab configuration from {}",
            config.tabs_config_path
        )
    })?;

    let registry = TabRegistry::from_json(&document)?;

    if registry.is_empty() {
        tracing::warn!("Tab configuration contains no tabs; the link browser will be empty");
    }

    Ok(registry)
}

/// Builds the localizer, falling back to identity when no translation map
/// is configured.
fn load_localizer(config: &Config) -> Result<Arc<dyn Localizer>> {
    match &config.labels_config_path {
        Some(path) => {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read label translations from {path}"))?;
            let localizer = StaticLocalizer::from_json(&document)
                .context("Invalid label translation document")?;
            Ok(Arc::new(localizer))
        }
        None => Ok(Arc::new(IdentityLocalizer)),
    }
}
