//! Cities served by the platform.

use crate::core::forms::{FieldKind, FieldSpec, FilterSpec, FormSchema};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::City;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "fields.name", FieldKind::Localized),
    FieldSpec::optional("isActive", "fields.is_active", FieldKind::Toggle),
];

impl Feature for City {
    const TITLE_KEY: &'static str = "nav.cities";
    const SINGULAR_KEY: &'static str = "entity.city";
    const FILTERS: &'static [FilterSpec] = &[SEARCH];
    const FORM: FormSchema = FormSchema::new(FIELDS);

    fn label(&self, locale: LocaleCode) -> String {
        label_or_id(locale.pick(&self.name), &self.id)
    }
}
