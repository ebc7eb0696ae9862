//! Push notification broadcasts.

use crate::core::forms::{FieldKind, FieldSpec, FilterKind, FilterSpec, FormSchema, SelectOption};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::Notification;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Recipient groups.
pub const AUDIENCES: &[SelectOption] = &[
    SelectOption {
        value: "all",
        label_key: "audience.all",
    },
    SelectOption {
        value: "drivers",
        label_key: "audience.drivers",
    },
    SelectOption {
        value: "parents",
        label_key: "audience.parents",
    },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", "fields.title", FieldKind::Localized),
    FieldSpec::required("body", "fields.body", FieldKind::LocalizedLong),
    FieldSpec::required("audience", "fields.audience", FieldKind::Select(AUDIENCES)),
];

const DETAIL: &[FieldSpec] = &[
    FieldSpec::required("title", "fields.title", FieldKind::Localized),
    FieldSpec::required("body", "fields.body", FieldKind::LocalizedLong),
    FieldSpec::required("audience", "fields.audience", FieldKind::Select(AUDIENCES)),
    FieldSpec::optional("sentAt", "fields.sent_at", FieldKind::DateTime),
];

impl Feature for Notification {
    const TITLE_KEY: &'static str = "nav.notifications";
    const SINGULAR_KEY: &'static str = "entity.notification";
    const FILTERS: &'static [FilterSpec] = &[
        SEARCH,
        FilterSpec {
            key: "audience",
            label_key: "fields.audience",
            kind: FilterKind::Select(AUDIENCES),
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS);
    const DETAIL: &'static [FieldSpec] = DETAIL;

    fn label(&self, locale: LocaleCode) -> String {
        label_or_id(locale.pick(&self.title), &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::FormError;
    use serde_json::json;

    #[test]
    fn audience_must_be_a_known_group() {
        let mut values = Notification::FORM.blank();
        for field in ["title", "body"] {
            for language in ["english", "arabic", "kurdish"] {
                values.insert(format!("{field}.{language}"), "Snow day".to_string());
            }
        }
        assert_eq!(values.get("audience").map(String::as_str), Some("all"));
        values.insert("audience".to_string(), "teachers".to_string());
        assert_eq!(
            Notification::FORM.payload(&values),
            Err(FormError::InvalidOption {
                field: "fields.audience"
            })
        );
        values.insert("audience".to_string(), "parents".to_string());
        let payload = Notification::FORM.payload(&values).expect("payload");
        assert_eq!(payload.get("audience"), Some(&json!("parents")));
    }
}
