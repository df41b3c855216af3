//! DTOs for the tab menu endpoints.

use serde::{Deserialize, Serialize};

use crate::application::services::TabMenuEntry;

/// Query parameters for the tab menu listing.
#[derive(Debug, Deserialize)]
pub struct TabsQuery {
    /// Href currently held by the editor; used to flag the active tab.
    pub current_href: Option<String>,
}

/// The tab menu, in configuration order.
#[derive(Debug, Serialize)]
pub struct TabsResponse {
    pub tabs: Vec<TabDto>,
}

/// One tab of the "insert link" dialog.
#[derive(Debug, Serialize)]
pub struct TabDto {
    pub anchor_type: String,
    pub label: String,
    pub active: bool,
    pub enable_search_box: bool,
    pub allowed_tables: Vec<String>,
}

impl From<TabMenuEntry> for TabDto {
    fn from(entry: TabMenuEntry) -> Self {
        Self {
            anchor_type: entry.anchor_type,
            label: entry.label,
            active: entry.active,
            enable_search_box: entry.enable_search_box,
            allowed_tables: entry.allowed_tables,
        }
    }
}
