//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits against the CMS
//! database. Queries are dynamic (the CMS owns arbitrary record tables) but
//! restricted to the configured table allow-list.
//!
//! # Repositories
//!
//! - [`PgRecordRepository`] - Record title and parent page lookups

pub mod pg_record_repository;

pub use pg_record_repository::PgRecordRepository;
