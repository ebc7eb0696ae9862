//! Parents' paid transport plans.

use crate::core::format::format_price;
use crate::core::forms::{
    FieldKind, FieldSpec, FilterKind, FilterSpec, FormError, FormSchema, SelectOption,
    check_date_range,
};
use crate::features::{Feature, label_or_id};
use crate::i18n::LocaleCode;
use rahla_api_models::{Payload, Subscription};

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Billing states.
pub const STATUSES: &[SelectOption] = &[
    SelectOption {
        value: "pending",
        label_key: "subscription_status.pending",
    },
    SelectOption {
        value: "active",
        label_key: "subscription_status.active",
    },
    SelectOption {
        value: "expired",
        label_key: "subscription_status.expired",
    },
    SelectOption {
        value: "cancelled",
        label_key: "subscription_status.cancelled",
    },
];

const START: FieldSpec = FieldSpec::required("startDate", "fields.start_date", FieldKind::Date);
const END: FieldSpec = FieldSpec::required("endDate", "fields.end_date", FieldKind::Date);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("userId", "fields.user_id", FieldKind::Text),
    FieldSpec::optional("groupId", "fields.group_id", FieldKind::Text),
    FieldSpec::required("planName", "fields.plan_name", FieldKind::Text),
    FieldSpec::required("price", "fields.price", FieldKind::Decimal),
    FieldSpec::required("currency", "fields.currency", FieldKind::Text),
    FieldSpec::required("status", "fields.status", FieldKind::Select(STATUSES)),
    START,
    END,
];

fn coverage_in_order(payload: &Payload) -> Result<(), FormError> {
    check_date_range(payload, &START, &END)
}

impl Feature for Subscription {
    const TITLE_KEY: &'static str = "nav.subscriptions";
    const SINGULAR_KEY: &'static str = "entity.subscription";
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec {
            key: "status",
            label_key: "fields.status",
            kind: FilterKind::Select(STATUSES),
        },
        FilterSpec {
            key: "userId",
            label_key: "fields.user_id",
            kind: FilterKind::Search,
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS).with_check(coverage_in_order);

    fn label(&self, _locale: LocaleCode) -> String {
        let plan = self.plan_name.trim();
        if plan.is_empty() {
            return label_or_id(String::new(), &self.id);
        }
        format!("{plan} ({})", format_price(self.price, &self.currency))
    }
}
