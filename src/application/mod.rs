//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the codec, the
//! tab registry and collaborator ports. Services consume domain traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkResolutionService`] - Record link decoding, encoding and tab menus
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
