//! Link resolution service.
//!
//! Orchestrates the codec, the tab registry and the record/localization
//! collaborators: inbound hrefs are decoded and enriched with a record
//! description, outbound hrefs are validated against the tab configuration
//! and serialized.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::link_metadata::{self, LinkMetadata};
use crate::domain::localization::Localizer;
use crate::domain::repositories::RecordRepository;
use crate::domain::tabs::{AnchorTypeConfig, TabRegistry};
use crate::error::AppError;

/// Link information handed back to the editor dialog.
///
/// All fields `None` means "not a record link": the dialog keeps whatever
/// link info it already had.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInfo {
    pub anchor_type: Option<String>,
    pub record_table: Option<String>,
    pub record_uid: Option<String>,
    pub parent_page_uid: Option<i64>,
    pub label: Option<String>,
}

impl LinkInfo {
    /// The untouched default returned for hrefs that are not record links.
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn is_record_link(&self) -> bool {
        self.anchor_type.is_some()
    }
}

/// One entry of the tab menu, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabMenuEntry {
    pub anchor_type: String,
    pub label: String,
    pub active: bool,
    pub enable_search_box: bool,
    pub allowed_tables: Vec<String>,
}

/// Service for resolving record links against the tab configuration.
///
/// The registry and collaborators are explicit constructor parameters; the
/// service holds no ambient state and every call is independent.
pub struct LinkResolutionService {
    tabs: Arc<TabRegistry>,
    records: Arc<dyn RecordRepository>,
    localizer: Arc<dyn Localizer>,
}

impl LinkResolutionService {
    pub fn new(
        tabs: Arc<TabRegistry>,
        records: Arc<dyn RecordRepository>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            tabs,
            records,
            localizer,
        }
    }

    /// Interprets the href currently held by the editor.
    ///
    /// Absolute `http(s)` hrefs are reduced to a candidate first: the `id`
    /// query parameter when present, otherwise the last path segment. The
    /// candidate is then decoded as a record link.
    ///
    /// A [`LinkFormatError`] is caught here and degrades to
    /// [`LinkInfo::unchanged`]: a malformed or foreign href (external URL,
    /// mailto, plain page link) must never fail the dialog, it simply does
    /// not get record-specific info.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only when the record lookup itself
    /// fails; format problems are not errors at this boundary.
    pub async fn parse_current_url(&self, href: &str) -> Result<LinkInfo, AppError> {
        let candidate = extract_candidate(href);

        match LinkMetadata::decode(&candidate) {
            Ok(metadata) => self.build_link_info(&metadata).await,
            Err(reason) => {
                tracing::debug!(href, %reason, "Href is not a record link, leaving link info unchanged");
                Ok(LinkInfo::unchanged())
            }
        }
    }

    /// Builds the full link info for decoded metadata.
    async fn build_link_info(&self, metadata: &LinkMetadata) -> Result<LinkInfo, AppError> {
        let table = metadata.database_table();

        // Non-numeric or negative uid segments are treated as a lookup
        // miss, not a format error; the original never validated the uid.
        let record = match metadata.numeric_uid() {
            Some(uid) => self.records.get_record(table, uid).await?,
            None => None,
        };

        let label = self.build_link_label(table, record.as_ref().and_then(|r| r.title.as_deref()));

        Ok(LinkInfo {
            anchor_type: Some(metadata.anchor_type().to_string()),
            record_table: Some(table.to_string()),
            record_uid: Some(metadata.record_uid().to_string()),
            parent_page_uid: record.and_then(|r| r.parent_page_uid),
            label,
        })
    }

    /// Human-readable description of a linked record.
    ///
    /// Joins the localized table label and the record title, tolerating a
    /// missing record and an unconfigured table: `"Page: Welcome"`,
    /// `"Page"`, `"Welcome"` or nothing at all.
    fn build_link_label(&self, table: &str, record_title: Option<&str>) -> Option<String> {
        let table_label = self
            .tabs
            .table(table)
            .and_then(|config| config.label.as_deref())
            .map(|key| self.localizer.localize(key));

        match (table_label, record_title) {
            (Some(table_label), Some(title)) => Some(format!("{table_label}: {title}")),
            (Some(table_label), None) => Some(table_label),
            (None, Some(title)) => Some(title.to_string()),
            (None, None) => None,
        }
    }

    /// Serializes a record reference into an href.
    ///
    /// The anchor type must be configured and the table permitted by its
    /// `allowed_tables`; only then is the codec's encode reached, which
    /// keeps the encode-side precondition (colon-free segments) satisfied
    /// by construction for configured tables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] for an unknown anchor type and
    /// [`AppError::Validation`] for a table the tab does not allow or
    /// segments containing a colon.
    pub fn encode_href(&self, anchor_type: &str, table: &str, uid: i64) -> Result<String, AppError> {
        let tab = self.tabs.resolve(anchor_type)?;

        if anchor_type.contains(':') || table.contains(':') {
            return Err(AppError::bad_request(
                "Anchor type and table must not contain colons",
                json!({ "anchor_type": anchor_type, "table": table }),
            ));
        }

        if !tab.allows_table(table) {
            return Err(AppError::bad_request(
                "Table is not allowed for this anchor type",
                json!({ "anchor_type": anchor_type, "table": table, "allowed_tables": tab.allowed_tables }),
            ));
        }

        if uid < 0 {
            return Err(AppError::bad_request(
                "Record uid must be non-negative",
                json!({ "uid": uid }),
            ));
        }

        Ok(link_metadata::encode_href(anchor_type, table, uid))
    }

    /// The tab menu, one entry per configured anchor type in declaration
    /// order.
    ///
    /// When `current_href` decodes to a record link, the matching tab is
    /// flagged active; a malformed href simply activates nothing.
    pub fn menu(&self, current_href: Option<&str>) -> Vec<TabMenuEntry> {
        let active_anchor_type = current_href.and_then(|href| {
            LinkMetadata::decode(&extract_candidate(href))
                .map(|metadata| metadata.anchor_type().to_string())
                .ok()
        });

        self.tabs
            .tabs()
            .iter()
            .map(|tab| self.menu_entry(tab, active_anchor_type.as_deref()))
            .collect()
    }

    /// A single tab, resolved by anchor type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when the anchor type is not
    /// configured; the caller must report this, never render a default tab.
    pub fn tab(&self, anchor_type: &str) -> Result<TabMenuEntry, AppError> {
        let tab = self.tabs.resolve(anchor_type)?;
        Ok(self.menu_entry(tab, None))
    }

    fn menu_entry(&self, tab: &AnchorTypeConfig, active: Option<&str>) -> TabMenuEntry {
        TabMenuEntry {
            anchor_type: tab.anchor_type.clone(),
            label: self.localizer.localize(&tab.label),
            active: active == Some(tab.anchor_type.as_str()),
            enable_search_box: tab.enable_search_box,
            allowed_tables: tab.allowed_tables.clone(),
        }
    }
}

/// Reduces an href to the string that may carry record metadata.
///
/// Depending on link style and CMS setup the stored href can be a complete
/// absolute URL. For `http(s)` URLs the record reference travels either in
/// the `id` query parameter or as the last path segment; everything else is
/// passed through untouched.
fn extract_candidate(href: &str) -> String {
    if !href.starts_with("http://") && !href.starts_with("https://") {
        return href.to_string();
    }

    let Ok(url) = Url::parse(href) else {
        return href.to_string();
    };

    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "id") {
        return id.into_owned();
    }

    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| href.to_string())
}
