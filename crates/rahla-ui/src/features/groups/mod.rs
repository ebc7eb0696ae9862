//! Trip groups: students sharing a route and a driver.

use crate::core::forms::{FieldKind, FieldSpec, FilterKind, FilterSpec, FormSchema, SelectOption};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::TripGroup;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Riding shifts.
pub const SHIFTS: &[SelectOption] = &[
    SelectOption {
        value: "morning",
        label_key: "shift.morning",
    },
    SelectOption {
        value: "afternoon",
        label_key: "shift.afternoon",
    },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "fields.name", FieldKind::Text),
    FieldSpec::required("schoolId", "fields.school_id", FieldKind::Text),
    FieldSpec::optional("driverId", "fields.driver_id", FieldKind::Text),
    FieldSpec::required("capacity", "fields.capacity", FieldKind::Integer),
    FieldSpec::required("shift", "fields.shift", FieldKind::Select(SHIFTS)),
];

impl Feature for TripGroup {
    const TITLE_KEY: &'static str = "nav.groups";
    const SINGULAR_KEY: &'static str = "entity.group";
    const FILTERS: &'static [FilterSpec] = &[
        SEARCH,
        FilterSpec {
            key: "schoolId",
            label_key: "fields.school_id",
            kind: FilterKind::Search,
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS);

    fn label(&self, _locale: LocaleCode) -> String {
        label_or_id(self.name.clone(), &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::FormError;
    use serde_json::json;

    fn values(capacity: &str) -> crate::core::forms::FormValues {
        let mut values = TripGroup::FORM.blank();
        values.insert("name".to_string(), "Ankawa morning".to_string());
        values.insert("schoolId".to_string(), "s-1".to_string());
        values.insert("capacity".to_string(), capacity.to_string());
        values
    }

    #[test]
    fn capacity_must_be_a_whole_number() {
        assert_eq!(
            TripGroup::FORM.payload(&values("12.5")),
            Err(FormError::InvalidInteger {
                field: "fields.capacity"
            })
        );
        let payload = TripGroup::FORM.payload(&values("14")).expect("payload");
        assert_eq!(payload.get("capacity"), Some(&json!(14)));
        assert_eq!(payload.get("shift"), Some(&json!("morning")));
    }

    #[test]
    fn unassigning_driver_sends_null() {
        let group = TripGroup {
            id: "g-1".to_string(),
            name: "Ankawa".to_string(),
            school_id: "s-1".to_string(),
            driver_id: Some("d-1".to_string()),
            capacity: 14,
            ..TripGroup::default()
        };
        let original = crate::core::forms::values_from_entity(FIELDS, &group);
        let mut edited = original.clone();
        edited.insert("driverId".to_string(), String::new());
        let patch = TripGroup::FORM.patch(&original, &edited).expect("patch");
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("driverId"), Some(&serde_json::Value::Null));
    }
}
