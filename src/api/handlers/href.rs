//! Handler for the href encoding endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::href::{HrefRequest, HrefResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Serializes a record reference into a storable href.
///
/// # Endpoint
///
/// `POST /api/href`
///
/// # Request Body
///
/// ```json
/// {
///   "anchor_type": "page",
///   "table": "pages",
///   "uid": 17
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "href": "record:page:pages:17" }
/// ```
///
/// # Errors
///
/// - 400 when a segment contains a colon, the uid is negative, or the
///   table is not allowed for the anchor type
/// - 500 `configuration_error` when the anchor type is not configured
pub async fn href_handler(
    State(state): State<AppState>,
    Json(payload): Json<HrefRequest>,
) -> Result<Json<HrefResponse>, AppError> {
    payload.validate()?;

    let href = state
        .link_service
        .encode_href(&payload.anchor_type, &payload.table, payload.uid)?;

    Ok(Json(HrefResponse { href }))
}
