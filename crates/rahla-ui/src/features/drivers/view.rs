use crate::app::Route;
use crate::core::format::{MISSING, UNKNOWN_KEY};
use crate::features::drivers::STATUSES;
use crate::features::option_key;
use crate::features::view::{Column, ResourceView, badge};
use rahla_api_models::{Driver, DriverStatus};
use yew::prelude::*;

fn tone(status: DriverStatus) -> &'static str {
    match status {
        DriverStatus::Active => "success",
        DriverStatus::Pending => "info",
        DriverStatus::Suspended => "warning",
        DriverStatus::Inactive | DriverStatus::Unknown => "neutral",
    }
}

impl ResourceView for Driver {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("fullName"),
            Column::Field("phone"),
            Column::Field("vehiclePlate"),
            Column::Custom {
                label_key: "fields.status",
                render: |driver, bundle| {
                    let key = option_key(STATUSES, &driver.status).unwrap_or(UNKNOWN_KEY);
                    badge(bundle.text(key, key), tone(driver.status))
                },
            },
            Column::Custom {
                label_key: "fields.rating",
                render: |driver, _| {
                    let rating = driver
                        .rating
                        .map_or_else(|| MISSING.to_string(), |rating| format!("{rating:.1}"));
                    html! { {rating} }
                },
            },
        ]
    }

    fn list_route() -> Route {
        Route::Drivers
    }

    fn detail_route(id: &str) -> Route {
        Route::Driver { id: id.to_string() }
    }
}
