//! Individual trips run by a group's driver.

use crate::core::forms::{FieldKind, FieldSpec, FilterKind, FilterSpec, FormSchema, SelectOption};
use crate::core::format::format_timestamp;
use crate::features::Feature;
use crate::i18n::LocaleCode;
use rahla_api_models::Trip;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Trip lifecycle states.
pub const STATUSES: &[SelectOption] = &[
    SelectOption {
        value: "scheduled",
        label_key: "trip_status.scheduled",
    },
    SelectOption {
        value: "inProgress",
        label_key: "trip_status.in_progress",
    },
    SelectOption {
        value: "completed",
        label_key: "trip_status.completed",
    },
    SelectOption {
        value: "cancelled",
        label_key: "trip_status.cancelled",
    },
];

/// Trip directions.
pub const KINDS: &[SelectOption] = &[
    SelectOption {
        value: "pickup",
        label_key: "trip_kind.pickup",
    },
    SelectOption {
        value: "dropoff",
        label_key: "trip_kind.dropoff",
    },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("groupId", "fields.group_id", FieldKind::Text),
    FieldSpec::required("driverId", "fields.driver_id", FieldKind::Text),
    FieldSpec::required("kind", "fields.kind", FieldKind::Select(KINDS)),
    FieldSpec::required("status", "fields.status", FieldKind::Select(STATUSES)),
    FieldSpec::required("scheduledAt", "fields.scheduled_at", FieldKind::DateTime),
];

const DETAIL: &[FieldSpec] = &[
    FieldSpec::required("groupId", "fields.group_id", FieldKind::Text),
    FieldSpec::required("driverId", "fields.driver_id", FieldKind::Text),
    FieldSpec::required("kind", "fields.kind", FieldKind::Select(KINDS)),
    FieldSpec::required("status", "fields.status", FieldKind::Select(STATUSES)),
    FieldSpec::required("scheduledAt", "fields.scheduled_at", FieldKind::DateTime),
    FieldSpec::optional("startedAt", "fields.started_at", FieldKind::DateTime),
    FieldSpec::optional("endedAt", "fields.ended_at", FieldKind::DateTime),
];

impl Feature for Trip {
    const TITLE_KEY: &'static str = "nav.trips";
    const SINGULAR_KEY: &'static str = "entity.trip";
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec {
            key: "status",
            label_key: "fields.status",
            kind: FilterKind::Select(STATUSES),
        },
        FilterSpec {
            key: "groupId",
            label_key: "fields.group_id",
            kind: FilterKind::Search,
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS);
    const DETAIL: &'static [FieldSpec] = DETAIL;

    fn label(&self, _locale: LocaleCode) -> String {
        format!(
            "{} {}",
            self.group_id,
            format_timestamp(self.scheduled_at.as_deref())
        )
        .trim()
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schedule_is_sent_as_utc() {
        let mut values = Trip::FORM.blank();
        values.insert("groupId".to_string(), "g-1".to_string());
        values.insert("driverId".to_string(), "d-1".to_string());
        values.insert("scheduledAt".to_string(), "2026-09-01T07:30".to_string());
        let payload = Trip::FORM.payload(&values).expect("payload");
        assert_eq!(payload.get("scheduledAt"), Some(&json!("2026-09-01T07:30:00Z")));
        assert_eq!(payload.get("kind"), Some(&json!("pickup")));
        assert_eq!(payload.get("status"), Some(&json!("scheduled")));
    }

    #[test]
    fn label_combines_group_and_time() {
        let trip = Trip {
            id: "t-1".to_string(),
            group_id: "g-7".to_string(),
            scheduled_at: Some("2026-09-01T07:30:00Z".to_string()),
            ..Trip::default()
        };
        assert_eq!(trip.label(LocaleCode::En), "g-7 2026-09-01 07:30");
    }
}
