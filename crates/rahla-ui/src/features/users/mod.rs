//! Platform accounts. Accounts sign up through the apps, so there is no create form.

use crate::core::forms::{FieldKind, FieldSpec, FilterKind, FilterSpec, FormSchema, SelectOption};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::User;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Account roles.
pub const ROLES: &[SelectOption] = &[
    SelectOption {
        value: "parent",
        label_key: "role.parent",
    },
    SelectOption {
        value: "driver",
        label_key: "role.driver",
    },
    SelectOption {
        value: "admin",
        label_key: "role.admin",
    },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("fullName", "fields.full_name", FieldKind::Text),
    FieldSpec::required("email", "fields.email", FieldKind::Email),
    FieldSpec::optional("phone", "fields.phone", FieldKind::Phone),
    FieldSpec::required("role", "fields.role", FieldKind::Select(ROLES)),
    FieldSpec::optional("isActive", "fields.is_active", FieldKind::Toggle),
];

impl Feature for User {
    const TITLE_KEY: &'static str = "nav.users";
    const SINGULAR_KEY: &'static str = "entity.user";
    const FILTERS: &'static [FilterSpec] = &[
        SEARCH,
        FilterSpec {
            key: "role",
            label_key: "fields.role",
            kind: FilterKind::Select(ROLES),
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS);
    const CAN_CREATE: bool = false;

    fn label(&self, _locale: LocaleCode) -> String {
        let name = if self.full_name.trim().is_empty() {
            self.email.clone()
        } else {
            self.full_name.clone()
        };
        label_or_id(name, &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::values_from_entity;
    use serde_json::json;

    #[test]
    fn deactivating_sends_only_the_flag() {
        let user = User {
            id: "u-1".to_string(),
            full_name: "Rebin Omar".to_string(),
            email: "rebin@rahla.iq".to_string(),
            role: "parent".to_string(),
            is_active: true,
            ..User::default()
        };
        let original = values_from_entity(User::FORM.fields, &user);
        assert_eq!(original.get("isActive").map(String::as_str), Some("true"));
        let mut edited = original.clone();
        edited.insert("isActive".to_string(), "false".to_string());
        let patch = User::FORM.patch(&original, &edited).expect("patch");
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("isActive"), Some(&json!(false)));
    }

    #[test]
    fn label_falls_back_to_email() {
        let user = User {
            id: "u-2".to_string(),
            email: "sara@rahla.iq".to_string(),
            ..User::default()
        };
        assert_eq!(user.label(LocaleCode::Ku), "sara@rahla.iq");
    }
}
