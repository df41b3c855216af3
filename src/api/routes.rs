//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{href_handler, link_info_handler, tab_handler, tabs_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET  /tabs`               - Tab menu in configuration order
/// - `GET  /tabs/{anchor_type}` - Single tab configuration
/// - `GET  /link-info`          - Interpret an href as a record link
/// - `POST /href`               - Serialize a record reference into an href
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/tabs", get(tabs_handler))
        .route("/tabs/{anchor_type}", get(tab_handler))
        .route("/link-info", get(link_info_handler))
        .route("/href", post(href_handler))
}
