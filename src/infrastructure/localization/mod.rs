//! Localization implementations.

pub mod static_localizer;

pub use static_localizer::StaticLocalizer;
