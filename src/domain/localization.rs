//! Localization port.
//!
//! Labels in the tab configuration are pre-localization identifiers (e.g.
//! `LLL:linkhandler.tab.page`). Translating them is the host platform's
//! job; the core passes identifiers through this port unmodified.

/// Resolves a label identifier to a display string.
#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    /// Returns the display string for a label identifier.
    ///
    /// Implementations fall back to returning the identifier itself when no
    /// translation is known; a missing translation must never hide a tab.
    fn localize(&self, key: &str) -> String;
}

/// Localizer that returns every identifier unchanged.
///
/// Used when no translation source is configured and in tests.
#[derive(Debug, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn localize(&self, key: &str) -> String {
        key.to_string()
    }
}
