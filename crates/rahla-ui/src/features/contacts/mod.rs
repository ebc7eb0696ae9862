//! Messages from the public contact form. Staff can only triage them.

use crate::core::forms::{FieldKind, FieldSpec, FilterKind, FilterSpec, FormSchema, SelectOption};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::Contact;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Read-state filter choices.
pub const READ_STATES: &[SelectOption] = &[
    SelectOption {
        value: "false",
        label_key: "contact.unread",
    },
    SelectOption {
        value: "true",
        label_key: "contact.read",
    },
];

const FIELDS: &[FieldSpec] = &[FieldSpec::optional(
    "isRead",
    "fields.is_read",
    FieldKind::Toggle,
)];

const DETAIL: &[FieldSpec] = &[
    FieldSpec::required("name", "fields.name", FieldKind::Text),
    FieldSpec::required("email", "fields.email", FieldKind::Email),
    FieldSpec::optional("phone", "fields.phone", FieldKind::Phone),
    FieldSpec::optional("subject", "fields.subject", FieldKind::Text),
    FieldSpec::required("message", "fields.message", FieldKind::LongText),
    FieldSpec::optional("isRead", "fields.is_read", FieldKind::Toggle),
    FieldSpec::optional("createdAt", "fields.created_at", FieldKind::DateTime),
];

impl Feature for Contact {
    const TITLE_KEY: &'static str = "nav.contacts";
    const SINGULAR_KEY: &'static str = "entity.contact";
    const FILTERS: &'static [FilterSpec] = &[
        SEARCH,
        FilterSpec {
            key: "isRead",
            label_key: "fields.is_read",
            kind: FilterKind::Select(READ_STATES),
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS);
    const DETAIL: &'static [FieldSpec] = DETAIL;
    const CAN_CREATE: bool = false;

    fn label(&self, _locale: LocaleCode) -> String {
        let subject = if self.subject.trim().is_empty() {
            self.name.clone()
        } else {
            self.subject.clone()
        };
        label_or_id(subject, &self.id)
    }
}
