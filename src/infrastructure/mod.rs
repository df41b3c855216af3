//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the CMS database and label translation.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`localization`] - Translation map backed localizer

pub mod localization;
pub mod persistence;
