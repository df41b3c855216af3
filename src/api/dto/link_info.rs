//! DTOs for the link info endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::LinkInfo;

/// Query parameters for link resolution.
#[derive(Debug, Deserialize)]
pub struct LinkInfoQuery {
    /// The href to interpret, exactly as stored in content.
    pub href: String,
}

/// Link information for the editor dialog.
///
/// `matched: false` means the href is not a record link; all other fields
/// are absent and the dialog keeps its current link info.
#[derive(Debug, Serialize)]
pub struct LinkInfoResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_page_uid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<LinkInfo> for LinkInfoResponse {
    fn from(info: LinkInfo) -> Self {
        Self {
            matched: info.is_record_link(),
            anchor_type: info.anchor_type,
            record_table: info.record_table,
            record_uid: info.record_uid,
            parent_page_uid: info.parent_page_uid,
            label: info.label,
        }
    }
}
