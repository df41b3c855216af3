//! DTOs for the href encoding endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for colon-free href segments.
static SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^:]+$").unwrap());

/// Request to serialize a record reference into an href.
#[derive(Debug, Deserialize, Validate)]
pub struct HrefRequest {
    /// Anchor type the link belongs to; must be a configured tab.
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(path = "*SEGMENT_REGEX", message = "must not contain colons"))]
    pub anchor_type: String,

    /// Table of the linked record.
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(path = "*SEGMENT_REGEX", message = "must not contain colons"))]
    pub table: String,

    /// Uid of the linked record.
    #[validate(range(min = 0))]
    pub uid: i64,
}

/// The serialized record href.
#[derive(Debug, Serialize)]
pub struct HrefResponse {
    pub href: String,
}
