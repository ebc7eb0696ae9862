//! Display formatting for API values.

use crate::core::forms::{FieldKind, FieldSpec};
use crate::i18n::TranslationBundle;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rahla_api_models::{Ad, Translations};
use serde_json::Value;

/// Placeholder shown for missing values.
pub const MISSING: &str = "–";

/// Translation key for a choice value the client does not recognize.
pub const UNKNOWN_KEY: &str = "common.unknown";

/// Parse an API date or timestamp into a naive UTC date-time.
#[must_use]
pub fn parse_api_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `YYYY-MM-DD`, the raw text when unparsable, or [`MISSING`].
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    format_with(raw, "%Y-%m-%d")
}

/// `YYYY-MM-DD HH:MM`, the raw text when unparsable, or [`MISSING`].
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_with(raw, "%Y-%m-%d %H:%M")
}

fn format_with(raw: Option<&str>, pattern: &str) -> String {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => MISSING.to_string(),
        Some(value) => parse_api_datetime(value)
            .map_or_else(|| value.to_string(), |parsed| parsed.format(pattern).to_string()),
    }
}

/// Text or [`MISSING`] when blank.
#[must_use]
pub fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

/// Price with two decimals and its currency code.
#[must_use]
pub fn format_price(amount: f64, currency: &str) -> String {
    let currency = currency.trim();
    if currency.is_empty() {
        format!("{amount:.2}")
    } else {
        format!("{amount:.2} {currency}")
    }
}

/// Read-only rendering of one field of a serialized record.
#[must_use]
pub fn field_display(field: &FieldSpec, document: &Value, bundle: &TranslationBundle) -> String {
    let raw = document.get(field.key).unwrap_or(&Value::Null);
    match field.kind {
        FieldKind::Localized | FieldKind::LocalizedLong => {
            let text = serde_json::from_value::<Translations>(raw.clone()).unwrap_or_default();
            or_missing(&bundle.locale.pick(&text))
        }
        FieldKind::Toggle => {
            let key = if raw.as_bool().unwrap_or(false) {
                "common.yes"
            } else {
                "common.no"
            };
            bundle.text(key, key)
        }
        FieldKind::Select(options) => {
            let value = scalar(raw);
            options
                .iter()
                .find(|option| option.value == value)
                .map_or_else(
                    || {
                        if value.is_empty() {
                            MISSING.to_string()
                        } else {
                            bundle.text(UNKNOWN_KEY, &value)
                        }
                    },
                    |option| bundle.text(option.label_key, &value),
                )
        }
        FieldKind::Date => format_date(raw.as_str()),
        FieldKind::DateTime => format_timestamp(raw.as_str()),
        _ => or_missing(&scalar(raw)),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Visibility of an ad derived from its schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdStatus {
    /// Start date still ahead.
    Scheduled,
    /// Within the inclusive date range.
    Active,
    /// End date passed.
    Expired,
    /// Switched off regardless of dates.
    Disabled,
}

impl AdStatus {
    /// Translation key for the badge label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Scheduled => "ad_status.scheduled",
            Self::Active => "ad_status.active",
            Self::Expired => "ad_status.expired",
            Self::Disabled => "ad_status.disabled",
        }
    }

    /// Badge style modifier.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Scheduled => "info",
            Self::Active => "success",
            Self::Expired => "neutral",
            Self::Disabled => "warning",
        }
    }
}

/// Infer the status of `ad` on `today`. Missing bounds are open-ended.
#[must_use]
pub fn ad_status(ad: &Ad, today: NaiveDate) -> AdStatus {
    if !ad.is_active {
        return AdStatus::Disabled;
    }
    let day = |raw: &Option<String>| {
        raw.as_deref()
            .and_then(parse_api_datetime)
            .map(|parsed| parsed.date())
    };
    if day(&ad.start_date).is_some_and(|start| today < start) {
        return AdStatus::Scheduled;
    }
    if day(&ad.end_date).is_some_and(|end| today > end) {
        return AdStatus::Expired;
    }
    AdStatus::Active
}
