//! Multi-language text carried by several entities.

use serde::{Deserialize, Serialize};

/// Text provided in every language the platform publishes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Translations {
    /// English text.
    #[serde(default)]
    pub english: String,
    /// Arabic text.
    #[serde(default)]
    pub arabic: String,
    /// Kurdish (Sorani) text.
    #[serde(default)]
    pub kurdish: String,
}

impl Translations {
    /// First non-empty variant in English, Arabic, Kurdish order.
    #[must_use]
    pub fn any(&self) -> &str {
        [
            self.english.as_str(),
            self.arabic.as_str(),
            self.kurdish.as_str(),
        ]
        .into_iter()
        .find(|text| !text.trim().is_empty())
        .unwrap_or_default()
    }
}
