//! Localizer backed by a static translation map.

use std::collections::HashMap;

use crate::domain::localization::Localizer;

/// Resolves label identifiers from a flat JSON object
/// (`{"LLL:tab.page": "Page", ...}`).
///
/// Unknown identifiers fall back to themselves, so an incomplete
/// translation file degrades to visible identifiers instead of hiding tabs.
#[derive(Debug, Default)]
pub struct StaticLocalizer {
    translations: HashMap<String, String>,
}

impl StaticLocalizer {
    pub fn new(translations: HashMap<String, String>) -> Self {
        Self { translations }
    }

    /// Parses a translation map from its JSON document.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(document)?))
    }
}

impl Localizer for StaticLocalizer {
    fn localize(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_translated() {
        let localizer =
            StaticLocalizer::from_json(r#"{ "LLL:tab.page": "Page" }"#).unwrap();
        assert_eq!(localizer.localize("LLL:tab.page"), "Page");
    }

    #[test]
    fn test_unknown_key_falls_back_to_identifier() {
        let localizer = StaticLocalizer::default();
        assert_eq!(localizer.localize("LLL:tab.file"), "LLL:tab.file");
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(StaticLocalizer::from_json("[1, 2]").is_err());
    }
}
