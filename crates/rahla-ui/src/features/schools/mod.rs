//! Schools students ride to.

use crate::core::forms::{FieldKind, FieldSpec, FilterKind, FilterSpec, FormSchema};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::School;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "fields.name", FieldKind::Localized),
    FieldSpec::required("cityId", "fields.city_id", FieldKind::Text),
    FieldSpec::optional("address", "fields.address", FieldKind::LongText),
    FieldSpec::optional("phone", "fields.phone", FieldKind::Phone),
    FieldSpec::optional("isActive", "fields.is_active", FieldKind::Toggle),
];

impl Feature for School {
    const TITLE_KEY: &'static str = "nav.schools";
    const SINGULAR_KEY: &'static str = "entity.school";
    const FILTERS: &'static [FilterSpec] = &[
        SEARCH,
        FilterSpec {
            key: "cityId",
            label_key: "fields.city_id",
            kind: FilterKind::Search,
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS);

    fn label(&self, locale: LocaleCode) -> String {
        label_or_id(locale.pick(&self.name), &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn city_reference_is_required() {
        let mut values = School::FORM.blank();
        for language in ["english", "arabic", "kurdish"] {
            values.insert(format!("name.{language}"), "Al Noor".to_string());
        }
        assert!(School::FORM.payload(&values).is_err());
        values.insert("cityId".to_string(), "c-1".to_string());
        let payload = School::FORM.payload(&values).expect("payload");
        assert_eq!(payload.get("cityId"), Some(&json!("c-1")));
        assert!(!payload.contains_key("phone"));
    }
}
