//! Handlers for the tab menu endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::tabs::{TabDto, TabsQuery, TabsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the configured anchor type tabs, in configuration order.
///
/// # Endpoint
///
/// `GET /api/tabs?current_href=<href>`
///
/// When `current_href` decodes as a record link, the matching tab carries
/// `"active": true`; a malformed or foreign href activates no tab and is
/// not an error.
///
/// # Response
///
/// ```json
/// {
///   "tabs": [
///     {
///       "anchor_type": "page",
///       "label": "Page",
///       "active": false,
///       "enable_search_box": true,
///       "allowed_tables": ["pages"]
///     }
///   ]
/// }
/// ```
pub async fn tabs_handler(
    State(state): State<AppState>,
    Query(query): Query<TabsQuery>,
) -> Json<TabsResponse> {
    let tabs = state
        .link_service
        .menu(query.current_href.as_deref())
        .into_iter()
        .map(TabDto::from)
        .collect();

    Json(TabsResponse { tabs })
}

/// Returns a single tab by anchor type.
///
/// # Endpoint
///
/// `GET /api/tabs/{anchor_type}`
///
/// # Errors
///
/// Returns 500 `configuration_error` when the anchor type has no tab
/// configuration. This is deliberate: an unconfigured anchor type is an
/// operator defect that must surface, not be papered over with a default
/// tab.
pub async fn tab_handler(
    State(state): State<AppState>,
    Path(anchor_type): Path<String>,
) -> Result<Json<TabDto>, AppError> {
    let tab = state.link_service.tab(&anchor_type)?;
    Ok(Json(TabDto::from(tab)))
}
