//! Domain layer containing the link codec, tab resolution and ports.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! Everything here is synchronous, stateless across invocations and free of
//! infrastructure concerns; the codec and the tab registry are pure and can
//! be tested without any data store.
//!
//! # Architecture
//!
//! - [`link_metadata`] - The `record:<anchorType>:<table>:<uid>` codec
//! - [`tabs`] - Anchor type configuration and resolution
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`localization`] - Label translation port
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Collaborator contracts (record lookup, localization) are traits
//!   implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod link_metadata;
pub mod localization;
pub mod repositories;
pub mod tabs;
