use crate::app::Route;
use crate::core::format::UNKNOWN_KEY;
use crate::features::option_key;
use crate::features::trips::STATUSES;
use crate::features::view::{Column, ResourceView, badge};
use rahla_api_models::{Trip, TripStatus};

fn tone(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Scheduled => "info",
        TripStatus::InProgress => "warning",
        TripStatus::Completed => "success",
        TripStatus::Cancelled | TripStatus::Unknown => "neutral",
    }
}

impl ResourceView for Trip {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("scheduledAt"),
            Column::Field("groupId"),
            Column::Field("driverId"),
            Column::Field("kind"),
            Column::Custom {
                label_key: "fields.status",
                render: |trip, bundle| {
                    let key = option_key(STATUSES, &trip.status).unwrap_or(UNKNOWN_KEY);
                    badge(bundle.text(key, key), tone(trip.status))
                },
            },
        ]
    }

    fn list_route() -> Route {
        Route::Trips
    }

    fn detail_route(id: &str) -> Route {
        Route::Trip { id: id.to_string() }
    }
}
