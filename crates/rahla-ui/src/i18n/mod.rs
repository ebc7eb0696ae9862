//! Lightweight JSON-backed translations with per-locale bundles.

use rahla_api_models::Translations;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Arabic.
    Ar,
    /// Kurdish (Sorani).
    Ku,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Ar, Self::Ku]
    }

    /// Two-letter code persisted to storage and set on `<html lang>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Ku => "ku",
        }
    }

    /// Human-friendly label for the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
            Self::Ku => "کوردی",
        }
    }

    /// Whether the locale is written right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar | Self::Ku)
    }

    /// Value for the `dir` attribute.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// Attributes to set on the document root for this locale.
    #[must_use]
    pub const fn root_attributes(self) -> [(&'static str, &'static str); 2] {
        [("dir", self.dir()), ("lang", self.code())]
    }

    /// Map an arbitrary language tag to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        match base {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            "ku" | "ckb" => Some(Self::Ku),
            _ => None,
        }
    }

    /// Entity text in this locale, falling back to English, then any non-empty variant.
    #[must_use]
    pub fn pick(self, text: &Translations) -> String {
        let preferred = match self {
            Self::En => &text.english,
            Self::Ar => &text.arabic,
            Self::Ku => &text.kurdish,
        };
        if !preferred.trim().is_empty() {
            return preferred.clone();
        }
        if !text.english.trim().is_empty() {
            return text.english.clone();
        }
        text.any().to_string()
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to English, then to the caller's default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve a template and substitute `{name}` placeholders.
    #[must_use]
    pub fn format(&self, path: &str, default: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(path, default), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Whether the locale prefers RTL layout.
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.locale.is_rtl()
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
        LocaleCode::Ku => include_str!("../../i18n/ku.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Ar);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn rtl_follows_locale() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert!(TranslationBundle::new(LocaleCode::Ku).rtl());
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
        assert_eq!(LocaleCode::Ku.dir(), "rtl");
    }

    #[test]
    fn root_attributes_carry_direction_and_language() {
        assert_eq!(LocaleCode::Ar.root_attributes(), [("dir", "rtl"), ("lang", "ar")]);
        assert_eq!(LocaleCode::En.root_attributes(), [("dir", "ltr"), ("lang", "en")]);
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("nav.cities", "").is_empty());
            assert!(!bundle.text("validation.required", "").is_empty());
        }
    }

    #[test]
    fn format_substitutes_placeholders() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            bundle.format("validation.required", "", &[("field", "Name")]),
            "Name is required"
        );
    }

    #[test]
    fn lang_tags_map_to_locales() {
        assert_eq!(LocaleCode::from_lang_tag("ar-IQ"), Some(LocaleCode::Ar));
        assert_eq!(LocaleCode::from_lang_tag("ckb"), Some(LocaleCode::Ku));
        assert_eq!(LocaleCode::from_lang_tag("EN_us"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
    }

    #[test]
    fn pick_falls_back_to_english_then_any() {
        let text = Translations {
            english: "Erbil".to_string(),
            arabic: "أربيل".to_string(),
            kurdish: String::new(),
        };
        assert_eq!(LocaleCode::Ar.pick(&text), "أربيل");
        assert_eq!(LocaleCode::Ku.pick(&text), "Erbil");
        let arabic_only = Translations {
            arabic: "دهوك".to_string(),
            ..Translations::default()
        };
        assert_eq!(LocaleCode::Ku.pick(&arabic_only), "دهوك");
    }
}
