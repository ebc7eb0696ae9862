//! Drivers and their review status.

use crate::core::forms::{FieldKind, FieldSpec, FilterKind, FilterSpec, FormSchema, SelectOption};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::Driver;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Review states offered in forms and filters.
pub const STATUSES: &[SelectOption] = &[
    SelectOption {
        value: "pending",
        label_key: "driver_status.pending",
    },
    SelectOption {
        value: "active",
        label_key: "driver_status.active",
    },
    SelectOption {
        value: "suspended",
        label_key: "driver_status.suspended",
    },
    SelectOption {
        value: "inactive",
        label_key: "driver_status.inactive",
    },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("fullName", "fields.full_name", FieldKind::Text),
    FieldSpec::required("phone", "fields.phone", FieldKind::Phone),
    FieldSpec::optional("email", "fields.email", FieldKind::Email),
    FieldSpec::required("licenseNumber", "fields.license_number", FieldKind::Text),
    FieldSpec::required("vehiclePlate", "fields.vehicle_plate", FieldKind::Text),
    FieldSpec::optional("cityId", "fields.city_id", FieldKind::Text),
    FieldSpec::required("status", "fields.status", FieldKind::Select(STATUSES)),
];

impl Feature for Driver {
    const TITLE_KEY: &'static str = "nav.drivers";
    const SINGULAR_KEY: &'static str = "entity.driver";
    const FILTERS: &'static [FilterSpec] = &[
        SEARCH,
        FilterSpec {
            key: "status",
            label_key: "fields.status",
            kind: FilterKind::Select(STATUSES),
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS);

    fn label(&self, _locale: LocaleCode) -> String {
        label_or_id(self.full_name.clone(), &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::option_key;
    use rahla_api_models::DriverStatus;
    use serde_json::json;

    #[test]
    fn new_driver_defaults_to_pending() {
        let values = Driver::FORM.blank();
        assert_eq!(values.get("status").map(String::as_str), Some("pending"));
    }

    #[test]
    fn status_key_matches_wire_value() {
        assert_eq!(
            option_key(STATUSES, &DriverStatus::Suspended),
            Some("driver_status.suspended")
        );
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut values = Driver::FORM.blank();
        for (key, value) in [
            ("fullName", "Karwan Aziz"),
            ("phone", "0750 123 4567"),
            ("licenseNumber", "L-5521"),
            ("vehiclePlate", "22 E 4411"),
            ("email", "karwan-at-mail"),
        ] {
            values.insert(key.to_string(), value.to_string());
        }
        assert!(Driver::FORM.payload(&values).is_err());
        values.insert("email".to_string(), "karwan@mail.iq".to_string());
        let payload = Driver::FORM.payload(&values).expect("payload");
        assert_eq!(payload.get("status"), Some(&json!("pending")));
    }
}
