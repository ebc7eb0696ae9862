//! Declarative form and filter fields shared by every entity.
//!
//! # Design
//! - Entities describe their inputs as static field lists; the create modal,
//!   the edit form, and validation are written once against those lists.
//! - Form values stay as strings for lossless editing and convert to JSON only
//!   on submit.
//! - Validation runs before any request is built, so a rejected form never
//!   reaches the network.

use crate::i18n::TranslationBundle;
use chrono::{NaiveDate, NaiveDateTime};
use rahla_api_models::Payload;
use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Raw string values keyed by field key (`title.english` for translations).
pub type FormValues = BTreeMap<String, String>;

/// Entity-specific check run on a complete, already-typed payload.
pub type PayloadCheck = fn(&Payload) -> Result<(), FormError>;

/// Languages carried by multi-language fields: JSON key and label key.
pub const LANGUAGES: [(&str, &str); 3] = [
    ("english", "language.english"),
    ("arabic", "language.arabic"),
    ("kurdish", "language.kurdish"),
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Choice offered by a select input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Wire value.
    pub value: &'static str,
    /// Translation key for the label.
    pub label_key: &'static str,
}

/// Input kind, which drives both rendering and conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    LongText,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Absolute http(s) URL.
    Url,
    /// Whole number.
    Integer,
    /// Decimal number.
    Decimal,
    /// Calendar date (`YYYY-MM-DD`).
    Date,
    /// Local date and time, sent as UTC RFC 3339.
    DateTime,
    /// Boolean switch.
    Toggle,
    /// One of a fixed set of values.
    Select(&'static [SelectOption]),
    /// Single-line text in every language.
    Localized,
    /// Multi-line text in every language.
    LocalizedLong,
}

impl FieldKind {
    /// Whether the field holds one value per language.
    #[must_use]
    pub const fn is_localized(self) -> bool {
        matches!(self, Self::Localized | Self::LocalizedLong)
    }

    /// HTML `type` of the `<input>` rendering this kind.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Url => "url",
            Self::Integer | Self::Decimal => "number",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
            Self::Toggle => "checkbox",
            _ => "text",
        }
    }
}

/// One form input bound to a top-level JSON field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key on the entity.
    pub key: &'static str,
    /// Translation key for the label.
    pub label_key: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether a value must be supplied.
    pub required: bool,
}

impl FieldSpec {
    /// Required field.
    #[must_use]
    pub const fn required(key: &'static str, label_key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label_key,
            kind,
            required: true,
        }
    }

    /// Optional field.
    #[must_use]
    pub const fn optional(key: &'static str, label_key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label_key,
            kind,
            required: false,
        }
    }

    /// Value keys this field owns in [`FormValues`].
    #[must_use]
    pub fn value_keys(&self) -> Vec<String> {
        if self.kind.is_localized() {
            LANGUAGES
                .iter()
                .map(|(language, _)| localized_key(self.key, language))
                .collect()
        } else {
            vec![self.key.to_string()]
        }
    }
}

/// Filter input on a list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text, debounced.
    Search,
    /// Fixed choices, applied immediately.
    Select(&'static [SelectOption]),
}

/// One filter control bound to a query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    /// Query parameter name.
    pub key: &'static str,
    /// Translation key for the label/placeholder.
    pub label_key: &'static str,
    /// Control kind.
    pub kind: FilterKind,
}

/// Client-side validation failure. Field names are translation keys.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A required value is blank.
    #[error("{field} is required")]
    Required {
        /// Label key of the field.
        field: &'static str,
    },
    /// A required multi-language value is missing one language.
    #[error("{field} is missing its {language} text")]
    MissingTranslation {
        /// Label key of the field.
        field: &'static str,
        /// Label key of the language.
        language: &'static str,
    },
    /// Not a whole number.
    #[error("{field} must be a whole number")]
    InvalidInteger {
        /// Label key of the field.
        field: &'static str,
    },
    /// Not a finite number.
    #[error("{field} must be a number")]
    InvalidDecimal {
        /// Label key of the field.
        field: &'static str,
    },
    /// Not an email address.
    #[error("{field} must be a valid email address")]
    InvalidEmail {
        /// Label key of the field.
        field: &'static str,
    },
    /// Not an http(s) URL.
    #[error("{field} must start with http:// or https://")]
    InvalidUrl {
        /// Label key of the field.
        field: &'static str,
    },
    /// Not a parseable date or date-time.
    #[error("{field} must be a valid date")]
    InvalidDate {
        /// Label key of the field.
        field: &'static str,
    },
    /// Not one of the offered choices.
    #[error("{field} has an unknown value")]
    InvalidOption {
        /// Label key of the field.
        field: &'static str,
    },
    /// End date precedes start date.
    #[error("{end} must not be before {start}")]
    DateRange {
        /// Label key of the start field.
        start: &'static str,
        /// Label key of the end field.
        end: &'static str,
    },
}

impl FormError {
    /// Label key of the field to highlight.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::MissingTranslation { field, .. }
            | Self::InvalidInteger { field }
            | Self::InvalidDecimal { field }
            | Self::InvalidEmail { field }
            | Self::InvalidUrl { field }
            | Self::InvalidDate { field }
            | Self::InvalidOption { field } => *field,
            Self::DateRange { end, .. } => *end,
        }
    }

    /// Render the error in the bundle's locale.
    #[must_use]
    pub fn localized(&self, bundle: &TranslationBundle) -> String {
        let label = |key: &str| bundle.text(key, key);
        match self {
            Self::Required { field } => bundle.format(
                "validation.required",
                "{field} is required",
                &[("field", &label(field))],
            ),
            Self::MissingTranslation { field, language } => bundle.format(
                "validation.missing_translation",
                "{field} is missing its {language} text",
                &[("field", &label(field)), ("language", &label(language))],
            ),
            Self::InvalidInteger { field } => bundle.format(
                "validation.integer",
                "{field} must be a whole number",
                &[("field", &label(field))],
            ),
            Self::InvalidDecimal { field } => bundle.format(
                "validation.decimal",
                "{field} must be a number",
                &[("field", &label(field))],
            ),
            Self::InvalidEmail { field } => bundle.format(
                "validation.email",
                "{field} must be a valid email address",
                &[("field", &label(field))],
            ),
            Self::InvalidUrl { field } => bundle.format(
                "validation.url",
                "{field} must start with http:// or https://",
                &[("field", &label(field))],
            ),
            Self::InvalidDate { field } => bundle.format(
                "validation.date",
                "{field} must be a valid date",
                &[("field", &label(field))],
            ),
            Self::InvalidOption { field } => bundle.format(
                "validation.option",
                "{field} has an unknown value",
                &[("field", &label(field))],
            ),
            Self::DateRange { start, end } => bundle.format(
                "validation.date_range",
                "{end} must not be before {start}",
                &[("start", &label(start)), ("end", &label(end))],
            ),
        }
    }
}

/// Fields plus an optional cross-field check: everything a form needs.
#[derive(Clone, Copy, Debug)]
pub struct FormSchema {
    /// Inputs in display order.
    pub fields: &'static [FieldSpec],
    /// Check over the whole payload, run after per-field validation.
    pub check: Option<PayloadCheck>,
}

impl PartialEq for FormSchema {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl FormSchema {
    /// Schema without a cross-field check.
    #[must_use]
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            check: None,
        }
    }

    /// Attach a cross-field check.
    #[must_use]
    pub const fn with_check(self, check: PayloadCheck) -> Self {
        Self {
            fields: self.fields,
            check: Some(check),
        }
    }

    /// Blank values for a create form.
    #[must_use]
    pub fn blank(&self) -> FormValues {
        blank_values(self.fields)
    }

    /// Full payload for a create request.
    ///
    /// # Errors
    /// Returns the first field error, then the cross-field error.
    pub fn payload(&self, values: &FormValues) -> Result<Payload, FormError> {
        let payload = build_payload(self.fields, values)?;
        if let Some(check) = self.check {
            check(&payload)?;
        }
        Ok(payload)
    }

    /// Partial payload for an update request, validated as a whole form first.
    ///
    /// # Errors
    /// Returns the first field error, then the cross-field error.
    pub fn patch(&self, original: &FormValues, edited: &FormValues) -> Result<Payload, FormError> {
        self.payload(edited)?;
        build_patch(self.fields, original, edited)
    }
}

/// Value key of one language of a multi-language field.
#[must_use]
pub fn localized_key(field: &str, language: &str) -> String {
    format!("{field}.{language}")
}

/// Initial values for a blank form: selects on their first option, toggles off.
#[must_use]
pub fn blank_values(fields: &[FieldSpec]) -> FormValues {
    let mut values = FormValues::new();
    for field in fields {
        let initial = match field.kind {
            FieldKind::Select(options) => options
                .first()
                .map(|option| option.value.to_string())
                .unwrap_or_default(),
            FieldKind::Toggle => "false".to_string(),
            _ => String::new(),
        };
        for key in field.value_keys() {
            values.insert(key, initial.clone());
        }
    }
    values
}

/// Snapshot an entity into editable string values.
#[must_use]
pub fn values_from_entity<T: Serialize>(fields: &[FieldSpec], entity: &T) -> FormValues {
    let document = serde_json::to_value(entity).unwrap_or(Value::Null);
    let mut values = FormValues::new();
    for field in fields {
        let raw = document.get(field.key).unwrap_or(&Value::Null);
        if field.kind.is_localized() {
            for (language, _) in LANGUAGES {
                let text = raw.get(language).and_then(Value::as_str).unwrap_or_default();
                values.insert(localized_key(field.key, language), text.to_string());
            }
            continue;
        }
        let text = scalar_to_string(raw);
        let text = match field.kind {
            FieldKind::Date => date_input_value(&text),
            FieldKind::DateTime => datetime_input_value(&text),
            FieldKind::Toggle if text.is_empty() => "false".to_string(),
            _ => text,
        };
        values.insert(field.key.to_string(), text);
    }
    values
}

/// Validate every field and build the JSON body. Blank optional fields are omitted.
///
/// # Errors
/// Returns the first [`FormError`] in field order.
pub fn build_payload(fields: &[FieldSpec], values: &FormValues) -> Result<Payload, FormError> {
    let mut payload = Payload::new();
    for field in fields {
        if let Some(value) = field_value(field, values)? {
            payload.insert(field.key.to_string(), value);
        }
    }
    Ok(payload)
}

/// Build a partial update containing only fields that differ from `original`.
///
/// Every field is still validated. Optional fields that were cleared are sent
/// as `null`.
///
/// # Errors
/// Returns the first [`FormError`] in field order.
pub fn build_patch(
    fields: &[FieldSpec],
    original: &FormValues,
    edited: &FormValues,
) -> Result<Payload, FormError> {
    let full = build_payload(fields, edited)?;
    let mut patch = Payload::new();
    for field in fields {
        let changed = field
            .value_keys()
            .iter()
            .any(|key| read(original, key).trim() != read(edited, key).trim());
        if changed {
            let value = full.get(field.key).cloned().unwrap_or(Value::Null);
            patch.insert(field.key.to_string(), value);
        }
    }
    Ok(patch)
}

/// Reject payloads whose end date precedes the start date.
///
/// # Errors
/// Returns [`FormError::DateRange`] when both dates are present and out of order.
pub fn check_date_range(
    payload: &Payload,
    start: &FieldSpec,
    end: &FieldSpec,
) -> Result<(), FormError> {
    let parse = |field: &FieldSpec| {
        payload
            .get(field.key)
            .and_then(Value::as_str)
            .and_then(|text| NaiveDate::parse_from_str(text.get(..10)?, DATE_FORMAT).ok())
    };
    match (parse(start), parse(end)) {
        (Some(from), Some(to)) if to < from => Err(FormError::DateRange {
            start: start.label_key,
            end: end.label_key,
        }),
        _ => Ok(()),
    }
}

fn field_value(field: &FieldSpec, values: &FormValues) -> Result<Option<Value>, FormError> {
    let label = field.label_key;
    if field.kind.is_localized() {
        let mut object = serde_json::Map::new();
        let mut any = false;
        for (language, language_label) in LANGUAGES {
            let text = read(values, &localized_key(field.key, language)).trim();
            if text.is_empty() && field.required {
                return Err(FormError::MissingTranslation {
                    field: label,
                    language: language_label,
                });
            }
            any |= !text.is_empty();
            object.insert(language.to_string(), Value::String(text.to_string()));
        }
        return Ok(any.then_some(Value::Object(object)));
    }

    let text = read(values, field.key).trim();
    if field.kind == FieldKind::Toggle {
        return Ok(Some(Value::Bool(text == "true")));
    }
    if text.is_empty() {
        return if field.required {
            Err(FormError::Required { field: label })
        } else {
            Ok(None)
        };
    }

    let value = match field.kind {
        FieldKind::Text | FieldKind::LongText | FieldKind::Phone => text_value(text),
        FieldKind::Email => {
            if !is_email(text) {
                return Err(FormError::InvalidEmail { field: label });
            }
            text_value(text)
        }
        FieldKind::Url => {
            if !(text.starts_with("http://") || text.starts_with("https://")) {
                return Err(FormError::InvalidUrl { field: label });
            }
            text_value(text)
        }
        FieldKind::Integer => text
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| FormError::InvalidInteger { field: label })?,
        FieldKind::Decimal => text
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or(FormError::InvalidDecimal { field: label })?,
        FieldKind::Date => {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map_err(|_| FormError::InvalidDate { field: label })?;
            text_value(text)
        }
        FieldKind::DateTime => {
            let parsed = NaiveDateTime::parse_from_str(text, DATETIME_INPUT_FORMAT)
                .map_err(|_| FormError::InvalidDate { field: label })?;
            Value::String(
                parsed
                    .and_utc()
                    .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            )
        }
        FieldKind::Select(options) => {
            if !options.iter().any(|option| option.value == text) {
                return Err(FormError::InvalidOption { field: label });
            }
            text_value(text)
        }
        FieldKind::Toggle | FieldKind::Localized | FieldKind::LocalizedLong => Value::Null,
    };
    Ok(Some(value))
}

fn read<'a>(values: &'a FormValues, key: &str) -> &'a str {
    values.get(key).map_or("", String::as_str)
}

fn text_value(text: &str) -> Value {
    Value::String(text.to_string())
}

fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !text.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

fn date_input_value(raw: &str) -> String {
    raw.get(..10)
        .filter(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).is_ok())
        .map_or_else(|| raw.to_string(), ToString::to_string)
}

fn datetime_input_value(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |parsed| {
            parsed
                .naive_utc()
                .format(DATETIME_INPUT_FORMAT)
                .to_string()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use serde_json::json;

    const STATUS: &[SelectOption] = &[
        SelectOption {
            value: "active",
            label_key: "status.active",
        },
        SelectOption {
            value: "inactive",
            label_key: "status.inactive",
        },
    ];

    const TITLE: FieldSpec = FieldSpec::required("title", "fields.title", FieldKind::Localized);
    const START: FieldSpec = FieldSpec::optional("startDate", "fields.start_date", FieldKind::Date);
    const END: FieldSpec = FieldSpec::optional("endDate", "fields.end_date", FieldKind::Date);

    fn fields() -> Vec<FieldSpec> {
        vec![
            TITLE,
            FieldSpec::required("email", "fields.email", FieldKind::Email),
            FieldSpec::optional("capacity", "fields.capacity", FieldKind::Integer),
            FieldSpec::optional("status", "fields.status", FieldKind::Select(STATUS)),
            FieldSpec::optional("isActive", "fields.is_active", FieldKind::Toggle),
            START,
            END,
        ]
    }

    fn filled() -> FormValues {
        let mut values = blank_values(&fields());
        values.insert("title.english".into(), "Back to school".into());
        values.insert("title.arabic".into(), "العودة".into());
        values.insert("title.kurdish".into(), "گەڕانەوە".into());
        values.insert("email".into(), "ops@rahla.app".into());
        values
    }

    #[test]
    fn blank_values_seed_selects_and_toggles() {
        let values = blank_values(&fields());
        assert_eq!(values.get("status").map(String::as_str), Some("active"));
        assert_eq!(values.get("isActive").map(String::as_str), Some("false"));
        assert_eq!(values.get("title.kurdish").map(String::as_str), Some(""));
    }

    #[test]
    fn missing_kurdish_title_is_rejected() {
        let mut values = filled();
        values.insert("title.kurdish".into(), "  ".into());
        assert_eq!(
            build_payload(&fields(), &values),
            Err(FormError::MissingTranslation {
                field: "fields.title",
                language: "language.kurdish"
            })
        );
    }

    #[test]
    fn payload_omits_blank_optionals_and_types_values() {
        let mut values = filled();
        values.insert("capacity".into(), " 14 ".into());
        let payload = build_payload(&fields(), &values).expect("payload");
        assert_eq!(payload.get("capacity"), Some(&json!(14)));
        assert_eq!(payload.get("isActive"), Some(&json!(false)));
        assert_eq!(payload.get("status"), Some(&json!("active")));
        assert!(payload.get("startDate").is_none());
        assert_eq!(
            payload.get("title"),
            Some(&json!({ "english": "Back to school", "arabic": "العودة", "kurdish": "گەڕانەوە" }))
        );
    }

    #[test]
    fn invalid_scalars_are_reported() {
        let mut values = filled();
        values.insert("email".into(), "not-an-email".into());
        assert_eq!(
            build_payload(&fields(), &values),
            Err(FormError::InvalidEmail {
                field: "fields.email"
            })
        );
        let mut values = filled();
        values.insert("capacity".into(), "twelve".into());
        assert!(matches!(
            build_payload(&fields(), &values),
            Err(FormError::InvalidInteger { .. })
        ));
        let mut values = filled();
        values.insert("status".into(), "deleted".into());
        assert!(matches!(
            build_payload(&fields(), &values),
            Err(FormError::InvalidOption { .. })
        ));
        let mut values = filled();
        values.insert("startDate".into(), "2026-13-40".into());
        assert!(matches!(
            build_payload(&fields(), &values),
            Err(FormError::InvalidDate { .. })
        ));
    }

    #[test]
    fn patch_contains_only_changed_fields() {
        let original = filled();
        let mut edited = original.clone();
        edited.insert("title.arabic".into(), "عودة".into());
        edited.insert("isActive".into(), "true".into());
        let patch = build_patch(&fields(), &original, &edited).expect("patch");
        assert_eq!(patch.len(), 2);
        assert_eq!(patch.get("isActive"), Some(&json!(true)));
        assert_eq!(
            patch
                .get("title")
                .and_then(|title| title.get("arabic"))
                .and_then(Value::as_str),
            Some("عودة")
        );
    }

    #[test]
    fn cleared_optional_field_is_sent_as_null() {
        let mut original = filled();
        original.insert("capacity".into(), "20".into());
        let mut edited = original.clone();
        edited.insert("capacity".into(), String::new());
        let patch = build_patch(&fields(), &original, &edited).expect("patch");
        assert_eq!(patch.get("capacity"), Some(&Value::Null));
    }

    #[test]
    fn snapshot_reads_entity_fields() {
        let entity = json!({
            "title": { "english": "Hello", "arabic": "مرحبا", "kurdish": "سڵاو" },
            "email": "a@b.co",
            "capacity": 12,
            "isActive": true,
            "startDate": "2026-09-01T00:00:00.000Z"
        });
        let values = values_from_entity(&fields(), &entity);
        assert_eq!(values.get("title.kurdish").map(String::as_str), Some("سڵاو"));
        assert_eq!(values.get("capacity").map(String::as_str), Some("12"));
        assert_eq!(values.get("isActive").map(String::as_str), Some("true"));
        assert_eq!(values.get("startDate").map(String::as_str), Some("2026-09-01"));
        assert_eq!(values.get("endDate").map(String::as_str), Some(""));
    }

    #[test]
    fn datetime_round_trips_through_input_format() {
        let field = FieldSpec::required("scheduledAt", "fields.scheduled_at", FieldKind::DateTime);
        let values = values_from_entity(&[field], &json!({ "scheduledAt": "2026-09-01T07:30:00Z" }));
        assert_eq!(
            values.get("scheduledAt").map(String::as_str),
            Some("2026-09-01T07:30")
        );
        let payload = build_payload(&[field], &values).expect("payload");
        assert_eq!(payload.get("scheduledAt"), Some(&json!("2026-09-01T07:30:00Z")));
    }

    #[test]
    fn date_range_is_checked() {
        let mut values = filled();
        values.insert("startDate".into(), "2026-09-10".into());
        values.insert("endDate".into(), "2026-09-01".into());
        let payload = build_payload(&fields(), &values).expect("payload");
        assert_eq!(
            check_date_range(&payload, &START, &END),
            Err(FormError::DateRange {
                start: "fields.start_date",
                end: "fields.end_date"
            })
        );
        values.insert("endDate".into(), "2026-09-10".into());
        let payload = build_payload(&fields(), &values).expect("payload");
        assert!(check_date_range(&payload, &START, &END).is_ok());
    }

    #[test]
    fn schema_runs_cross_field_check_on_full_form() {
        fn range(payload: &Payload) -> Result<(), FormError> {
            check_date_range(payload, &START, &END)
        }
        const FIELDS: &[FieldSpec] = &[START, END];
        let schema = FormSchema::new(FIELDS).with_check(range);
        let mut original = schema.blank();
        original.insert("startDate".into(), "2026-09-10".into());
        original.insert("endDate".into(), "2026-09-20".into());
        let mut edited = original.clone();
        edited.insert("endDate".into(), "2026-09-01".into());
        assert!(matches!(
            schema.patch(&original, &edited),
            Err(FormError::DateRange { .. })
        ));
        edited.insert("endDate".into(), "2026-09-25".into());
        let patch = schema.patch(&original, &edited).expect("patch");
        assert_eq!(patch.len(), 1);
    }

    #[test]
    fn errors_render_with_translated_labels() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let message = FormError::MissingTranslation {
            field: "fields.title",
            language: "language.kurdish",
        }
        .localized(&bundle);
        assert_eq!(message, "Title is missing its Kurdish text");
    }

    #[test]
    fn errors_point_at_their_field() {
        let range = FormError::DateRange {
            start: "fields.start_date",
            end: "fields.end_date",
        };
        assert_eq!(range.field(), "fields.end_date");
        assert_eq!(
            FormError::InvalidUrl {
                field: "fields.link"
            }
            .field(),
            "fields.link"
        );
        assert_eq!(FieldKind::DateTime.input_type(), "datetime-local");
        assert_eq!(FieldKind::Select(STATUS).input_type(), "text");
    }
}
