//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`RecordRepository`] - Read-only CMS record lookups

pub mod record_repository;

pub use record_repository::RecordRepository;

#[cfg(test)]
pub use record_repository::MockRecordRepository;
