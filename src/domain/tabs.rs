//! Anchor type (tab) configuration and resolution.
//!
//! Each anchor type describes one tab of the editor's "insert link" dialog:
//! its label, the record tables it may link to and its search behavior. The
//! configuration is supplied by the CMS operator as a JSON document and is
//! read-only for the lifetime of the process.

use std::collections::HashMap;

use serde::Deserialize;

/// Raised when a requested anchor type has no configuration.
///
/// This is an operator-configuration defect, not an input problem: callers
/// must stop and surface it rather than substitute a default, because a tab
/// without configuration has no label, no permitted tables and no search
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No tab configuration found for anchor type \"{0}\"")]
pub struct UnknownAnchorTypeError(pub String);

/// Errors that can occur while building a [`TabRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid tab configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate anchor type \"{0}\" in tab configuration")]
    DuplicateAnchorType(String),
}

/// Configuration of a single anchor type tab.
#[derive(Debug, Clone, Deserialize)]
pub struct AnchorTypeConfig {
    /// Unique anchor type name, the second segment of record hrefs.
    pub anchor_type: String,

    /// Display label, as a pre-localization identifier.
    pub label: String,

    /// Tables this tab may link to. Empty means unrestricted.
    #[serde(default)]
    pub allowed_tables: Vec<String>,

    /// Extra search constraint per table, appended by the record-listing
    /// collaborator.
    #[serde(default)]
    pub additional_search_queries: HashMap<String, String>,

    #[serde(default = "default_true")]
    pub enable_search_box: bool,
}

impl AnchorTypeConfig {
    /// Whether this tab may link to records of the given table.
    pub fn allows_table(&self, table: &str) -> bool {
        self.allowed_tables.is_empty() || self.allowed_tables.iter().any(|t| t == table)
    }
}

/// Per-table metadata used for label building and SQL allow-listing.
///
/// Mirrors what the CMS keeps in its table control section: which column
/// holds the human-readable title and which column points at the parent
/// page.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// Column holding the record's display title.
    pub title_column: String,

    /// Display label for the table itself, as a pre-localization identifier.
    #[serde(default)]
    pub label: Option<String>,

    /// Column holding the uid of the record's parent page.
    #[serde(default = "default_page_id_column")]
    pub page_id_column: String,
}

fn default_true() -> bool {
    true
}

fn default_page_id_column() -> String {
    "pid".to_string()
}

#[derive(Debug, Deserialize)]
struct RegistryDocument {
    tabs: Vec<AnchorTypeConfig>,
    #[serde(default)]
    tables: HashMap<String, TableConfig>,
}

/// The anchor type → configuration mapping, in declaration order.
///
/// Backed by a `Vec` on purpose: the order of the `tabs` array in the
/// configuration document drives the tab display order, and a JSON array
/// keeps that order structural instead of relying on object-key ordering.
#[derive(Debug, Clone)]
pub struct TabRegistry {
    tabs: Vec<AnchorTypeConfig>,
    tables: HashMap<String, TableConfig>,
}

impl TabRegistry {
    /// Parses a registry from its JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed JSON and
    /// [`RegistryError::DuplicateAnchorType`] when two tabs share a name.
    pub fn from_json(document: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument = serde_json::from_str(document)?;

        let mut seen = Vec::with_capacity(document.tabs.len());
        for tab in &document.tabs {
            if seen.contains(&tab.anchor_type.as_str()) {
                return Err(RegistryError::DuplicateAnchorType(tab.anchor_type.clone()));
            }
            seen.push(tab.anchor_type.as_str());
        }

        Ok(Self {
            tabs: document.tabs,
            tables: document.tables,
        })
    }

    /// Builds a registry from already-parsed parts. Order is preserved.
    pub fn new(tabs: Vec<AnchorTypeConfig>, tables: HashMap<String, TableConfig>) -> Self {
        Self { tabs, tables }
    }

    /// Looks up the configuration for an anchor type.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAnchorTypeError`] when the anchor type is not
    /// configured. The result is the stored configuration unchanged; no
    /// merging or defaulting happens here.
    pub fn resolve(&self, anchor_type: &str) -> Result<&AnchorTypeConfig, UnknownAnchorTypeError> {
        self.tabs
            .iter()
            .find(|tab| tab.anchor_type == anchor_type)
            .ok_or_else(|| UnknownAnchorTypeError(anchor_type.to_string()))
    }

    /// Configured anchor type names, in declaration order.
    pub fn anchor_types(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.anchor_type.as_str())
    }

    /// All tab configurations, in declaration order.
    pub fn tabs(&self) -> &[AnchorTypeConfig] {
        &self.tabs
    }

    /// Metadata for a record table, if configured.
    pub fn table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.get(name)
    }

    /// Names of all configured record tables.
    ///
    /// This is the allow-list the persistence layer checks before
    /// interpolating a table name into SQL.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "tabs": [
            {
                "anchor_type": "page",
                "label": "LLL:linkhandler.tab.page",
                "allowed_tables": ["pages"]
            },
            {
                "anchor_type": "file",
                "label": "LLL:linkhandler.tab.file",
                "allowed_tables": ["sys_file"],
                "enable_search_box": false
            },
            {
                "anchor_type": "news",
                "label": "LLL:linkhandler.tab.news",
                "allowed_tables": ["tx_news_domain_model_news"],
                "additional_search_queries": {
                    "tx_news_domain_model_news": "AND hidden = 0"
                }
            }
        ],
        "tables": {
            "pages": { "title_column": "title", "label": "LLL:table.pages" },
            "tx_news_domain_model_news": { "title_column": "header" }
        }
    }"#;

    #[test]
    fn test_anchor_types_keep_declaration_order() {
        let registry = TabRegistry::from_json(DOCUMENT).unwrap();
        let order: Vec<&str> = registry.anchor_types().collect();
        assert_eq!(order, vec!["page", "file", "news"]);
    }

    #[test]
    fn test_resolve_known_anchor_type() {
        let registry = TabRegistry::from_json(DOCUMENT).unwrap();
        let tab = registry.resolve("news").unwrap();
        assert_eq!(tab.label, "LLL:linkhandler.tab.news");
        assert_eq!(
            tab.additional_search_queries["tx_news_domain_model_news"],
            "AND hidden = 0"
        );
        assert!(tab.enable_search_box);
    }

    #[test]
    fn test_resolve_unknown_anchor_type() {
        let registry = TabRegistry::from_json(DOCUMENT).unwrap();
        let err = registry.resolve("calendar").unwrap_err();
        assert_eq!(err, UnknownAnchorTypeError("calendar".to_string()));
    }

    #[test]
    fn test_search_box_default_and_override() {
        let registry = TabRegistry::from_json(DOCUMENT).unwrap();
        assert!(registry.resolve("page").unwrap().enable_search_box);
        assert!(!registry.resolve("file").unwrap().enable_search_box);
    }

    #[test]
    fn test_allows_table() {
        let registry = TabRegistry::from_json(DOCUMENT).unwrap();
        let tab = registry.resolve("page").unwrap();
        assert!(tab.allows_table("pages"));
        assert!(!tab.allows_table("sys_file"));
    }

    #[test]
    fn test_empty_allowed_tables_means_unrestricted() {
        let tab: AnchorTypeConfig =
            serde_json::from_str(r#"{ "anchor_type": "any", "label": "LLL:any" }"#).unwrap();
        assert!(tab.allows_table("pages"));
        assert!(tab.allows_table("whatever"));
    }

    #[test]
    fn test_duplicate_anchor_type_rejected() {
        let document = r#"{
            "tabs": [
                { "anchor_type": "page", "label": "a" },
                { "anchor_type": "page", "label": "b" }
            ]
        }"#;
        let err = TabRegistry::from_json(document).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateAnchorType(name) if name == "page"));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(matches!(
            TabRegistry::from_json("{").unwrap_err(),
            RegistryError::Parse(_)
        ));
    }

    #[test]
    fn test_table_metadata() {
        let registry = TabRegistry::from_json(DOCUMENT).unwrap();
        let pages = registry.table("pages").unwrap();
        assert_eq!(pages.title_column, "title");
        assert_eq!(pages.page_id_column, "pid");
        assert!(registry.table("sys_file").is_none());
    }
}
