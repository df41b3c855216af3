//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod href;
pub mod link_info;
pub mod tabs;

pub use health::health_handler;
pub use href::href_handler;
pub use link_info::link_info_handler;
pub use tabs::{tab_handler, tabs_handler};
