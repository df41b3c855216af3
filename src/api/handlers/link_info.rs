//! Handler for the link info endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::link_info::{LinkInfoQuery, LinkInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Interprets an href as a record link.
///
/// # Endpoint
///
/// `GET /api/link-info?href=<href>`
///
/// # Behavior
///
/// A well-formed record href is decoded and enriched with the linked
/// record's label and parent page. An href that is not a record link
/// (external URL, mailto, malformed metadata) responds **200** with
/// `"matched": false` — the dialog keeps its existing link info, and a
/// foreign href never produces an error.
///
/// # Response
///
/// ```json
/// {
///   "matched": true,
///   "anchor_type": "page",
///   "record_table": "pages",
///   "record_uid": "17",
///   "parent_page_uid": 1,
///   "label": "Page: Welcome"
/// }
/// ```
///
/// # Errors
///
/// Returns 500 only when the record lookup itself fails.
pub async fn link_info_handler(
    State(state): State<AppState>,
    Query(query): Query<LinkInfoQuery>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let info = state.link_service.parse_current_url(&query.href).await?;
    Ok(Json(LinkInfoResponse::from(info)))
}
