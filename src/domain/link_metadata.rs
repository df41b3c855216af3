//! Codec for the `record:<anchorType>:<table>:<uid>` link format.
//!
//! This is the one bit-exact wire contract of the service: the string is
//! stored as an href value inside CMS content, so previously stored links
//! must keep decoding forever. The parser is deliberately strict. Any
//! deviation from the grammar is rejected instead of best-effort corrected,
//! because a lenient parse could silently point the editor at the wrong
//! record.

/// Literal prefix every record link starts with.
pub const RECORD_PREFIX: &str = "record:";

/// Number of colon separators in a well-formed record link (4 segments).
const SEPARATOR_COUNT: usize = 3;

/// Errors that can occur while decoding a record link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkFormatError {
    #[error("Link metadata must begin with \"record:\"")]
    MissingPrefix,

    #[error("Link metadata must consist of 4 parts separated by colons")]
    WrongSegmentCount,
}

/// The decoded triple carried by a record link.
///
/// An instance exists only if the originating string satisfied the grammar;
/// [`LinkMetadata::decode`] is the sole construction point and there is no
/// mutation after construction.
///
/// The uid is kept as the raw string segment. The codec is a pure grammar
/// component: numeric coercion and existence checks against the CMS database
/// happen in the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMetadata {
    anchor_type: String,
    database_table: String,
    record_uid: String,
}

impl LinkMetadata {
    /// Decodes a raw href into link metadata.
    ///
    /// Validation happens before splitting, in a fixed order:
    ///
    /// 1. the string starts with the literal `record:` prefix, otherwise
    ///    [`LinkFormatError::MissingPrefix`];
    /// 2. the string contains exactly 3 colons (4 segments), otherwise
    ///    [`LinkFormatError::WrongSegmentCount`].
    ///
    /// On success the leading `record` literal is discarded and the
    /// remaining segments bind positionally to anchor type, database table
    /// and record uid.
    pub fn decode(raw: &str) -> Result<Self, LinkFormatError> {
        Self::validate_format(raw)?;

        let mut segments = raw.split(':').skip(1);

        // validate_format guarantees exactly three remaining segments
        let anchor_type = segments.next().unwrap_or_default().to_string();
        let database_table = segments.next().unwrap_or_default().to_string();
        let record_uid = segments.next().unwrap_or_default().to_string();

        Ok(Self {
            anchor_type,
            database_table,
            record_uid,
        })
    }

    fn validate_format(raw: &str) -> Result<(), LinkFormatError> {
        if !raw.starts_with(RECORD_PREFIX) {
            return Err(LinkFormatError::MissingPrefix);
        }

        if raw.bytes().filter(|b| *b == b':').count() != SEPARATOR_COUNT {
            return Err(LinkFormatError::WrongSegmentCount);
        }

        Ok(())
    }

    /// The configured tab/category this link belongs to (e.g. `page`).
    pub fn anchor_type(&self) -> &str {
        &self.anchor_type
    }

    /// Name of the record's source table.
    pub fn database_table(&self) -> &str {
        &self.database_table
    }

    /// The raw uid segment, exactly as it appeared in the href.
    pub fn record_uid(&self) -> &str {
        &self.record_uid
    }

    /// The uid as a non-negative integer, if the raw segment is one.
    pub fn numeric_uid(&self) -> Option<i64> {
        self.record_uid.parse::<i64>().ok().filter(|uid| *uid >= 0)
    }
}

/// Serializes an (anchor type, table, uid) triple into a record href.
///
/// No validation is performed here. Decode is a trust boundary (the href
/// comes from stored content), encode is not: inputs are expected to come
/// from a resolved tab configuration and a known record. Callers must
/// guarantee that `anchor_type` and `table` contain no colon; under that
/// precondition `LinkMetadata::decode(&encode_href(a, t, u))` round-trips.
pub fn encode_href(anchor_type: &str, table: &str, uid: i64) -> String {
    format!("record:{anchor_type}:{table}:{uid}")
}
