//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`RecordSummary`] - A CMS record as seen by the link browser

pub mod record;

pub use record::RecordSummary;
