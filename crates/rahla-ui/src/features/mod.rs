//! Per-entity descriptors binding each record type to the generic views.
//!
//! # Design
//! - A feature only declares data: form fields, filters, labels, columns.
//! - Fetching, dialogs, and pagination live once in the shared components.

use crate::core::forms::{FieldSpec, FilterKind, FilterSpec, FormSchema, SelectOption};
use crate::core::store::StoreResource;
use crate::i18n::LocaleCode;
use serde::Serialize;

pub mod ads;
pub mod cities;
pub mod contacts;
pub mod drivers;
pub mod groups;
pub mod notifications;
pub mod schools;
pub mod subscriptions;
pub mod trips;
pub mod users;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Static description of one managed entity.
pub trait Feature: StoreResource {
    /// Translation key of the plural title (navigation and list header).
    const TITLE_KEY: &'static str;
    /// Translation key of the singular noun used in buttons and prompts.
    const SINGULAR_KEY: &'static str;
    /// Filter controls above the list.
    const FILTERS: &'static [FilterSpec];
    /// Create and edit form.
    const FORM: FormSchema;
    /// Fields shown read-only on the detail page.
    const DETAIL: &'static [FieldSpec] = Self::FORM.fields;
    /// Whether the list offers a create dialog.
    const CAN_CREATE: bool = true;
    /// Whether records may be deleted.
    const CAN_DELETE: bool = true;

    /// Short human label for prompts and headers.
    fn label(&self, locale: LocaleCode) -> String;
}

/// `label` unless blank, else the record id.
pub(crate) fn label_or_id(label: String, id: &str) -> String {
    if label.trim().is_empty() {
        id.to_string()
    } else {
        label
    }
}

/// Translation key of the option matching `value`'s wire form.
#[must_use]
pub fn option_key<T: Serialize>(options: &[SelectOption], value: &T) -> Option<&'static str> {
    let wire = serde_json::to_value(value).ok()?;
    options
        .iter()
        .find(|option| wire.as_str() == Some(option.value))
        .map(|option| option.label_key)
}

/// Search box bound to the `search` query parameter.
pub(crate) const SEARCH: FilterSpec = FilterSpec {
    key: "search",
    label_key: "list.search",
    kind: FilterKind::Search,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::{FieldKind, LANGUAGES};
    use crate::i18n::TranslationBundle;
    use std::collections::BTreeSet;

    fn keys_of<F: Feature>() -> Vec<&'static str> {
        let mut keys = vec![F::TITLE_KEY, F::SINGULAR_KEY];
        let mut options: Vec<&'static [SelectOption]> = Vec::new();
        for field in F::FORM.fields.iter().chain(F::DETAIL) {
            keys.push(field.label_key);
            if let FieldKind::Select(choices) = field.kind {
                options.push(choices);
            }
        }
        for filter in F::FILTERS {
            keys.push(filter.label_key);
            if let FilterKind::Select(choices) = filter.kind {
                options.push(choices);
            }
        }
        keys.extend(options.iter().flat_map(|choices| choices.iter().map(|o| o.label_key)));
        keys
    }

    fn assert_translated<F: Feature>() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for key in keys_of::<F>() {
                assert!(
                    !bundle.text(key, "").is_empty(),
                    "{} missing {key} in {}",
                    F::NAME,
                    locale.code()
                );
            }
        }
    }

    fn assert_unique_fields<F: Feature>() {
        let mut seen = BTreeSet::new();
        for field in F::FORM.fields {
            assert!(seen.insert(field.key), "{} repeats {}", F::NAME, field.key);
            assert_ne!(field.key, F::ID_FIELD);
        }
    }

    macro_rules! check_all {
        ($check:ident) => {
            $check::<rahla_api_models::City>();
            $check::<rahla_api_models::School>();
            $check::<rahla_api_models::Driver>();
            $check::<rahla_api_models::TripGroup>();
            $check::<rahla_api_models::Trip>();
            $check::<rahla_api_models::Ad>();
            $check::<rahla_api_models::Notification>();
            $check::<rahla_api_models::Contact>();
            $check::<rahla_api_models::Subscription>();
            $check::<rahla_api_models::User>();
        };
    }

    #[test]
    fn every_label_is_translated() {
        check_all!(assert_translated);
    }

    #[test]
    fn form_fields_are_unique() {
        check_all!(assert_unique_fields);
    }

    #[test]
    fn language_labels_are_translated() {
        let bundle = TranslationBundle::new(LocaleCode::Ku);
        for (_, label_key) in LANGUAGES {
            assert!(!bundle.text(label_key, "").is_empty());
        }
    }
}
