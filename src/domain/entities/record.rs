//! Record summary entity returned by record lookups.

/// A linked record as seen by the link browser.
///
/// Only the fields needed to describe the link target: a display title and
/// the uid of the parent page, which the browser uses to expand the page
/// tree around the linked element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub table: String,
    pub uid: i64,
    pub title: Option<String>,
    pub parent_page_uid: Option<i64>,
}

impl RecordSummary {
    pub fn new(
        table: String,
        uid: i64,
        title: Option<String>,
        parent_page_uid: Option<i64>,
    ) -> Self {
        Self {
            table,
            uid,
            title,
            parent_page_uid,
        }
    }
}
