//! In-app advertisement banners with a display window.
//!
//! The badge shown in the list is derived from the window and the kill
//! switch; the API stores no status of its own.

use crate::core::format::{AdStatus, ad_status};
use crate::core::forms::{
    FieldKind, FieldSpec, FilterKind, FilterSpec, FormError, FormSchema, SelectOption,
    check_date_range,
};
use crate::features::{Feature, SEARCH, label_or_id};
use crate::i18n::LocaleCode;
use chrono::NaiveDate;
use rahla_api_models::{Ad, Payload};

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Derived display states offered as a list filter.
pub const STATUSES: &[SelectOption] = &[
    SelectOption {
        value: "scheduled",
        label_key: "ad_status.scheduled",
    },
    SelectOption {
        value: "active",
        label_key: "ad_status.active",
    },
    SelectOption {
        value: "expired",
        label_key: "ad_status.expired",
    },
    SelectOption {
        value: "disabled",
        label_key: "ad_status.disabled",
    },
];

const START: FieldSpec = FieldSpec::required("startDate", "fields.start_date", FieldKind::Date);
const END: FieldSpec = FieldSpec::required("endDate", "fields.end_date", FieldKind::Date);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", "fields.title", FieldKind::Localized),
    FieldSpec::required("description", "fields.description", FieldKind::LocalizedLong),
    FieldSpec::required("imageUrl", "fields.image_url", FieldKind::Url),
    FieldSpec::optional("link", "fields.link", FieldKind::Url),
    START,
    END,
    FieldSpec::optional("isActive", "fields.is_active", FieldKind::Toggle),
];

fn window_in_order(payload: &Payload) -> Result<(), FormError> {
    check_date_range(payload, &START, &END)
}

impl Feature for Ad {
    const TITLE_KEY: &'static str = "nav.ads";
    const SINGULAR_KEY: &'static str = "entity.ad";
    const FILTERS: &'static [FilterSpec] = &[
        SEARCH,
        FilterSpec {
            key: "status",
            label_key: "fields.status",
            kind: FilterKind::Select(STATUSES),
        },
    ];
    const FORM: FormSchema = FormSchema::new(FIELDS).with_check(window_in_order);

    fn label(&self, locale: LocaleCode) -> String {
        label_or_id(locale.pick(&self.title), &self.id)
    }
}

/// Status of `ad` on the local calendar day.
#[must_use]
pub fn status_today(ad: &Ad) -> AdStatus {
    ad_status(ad, today())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
