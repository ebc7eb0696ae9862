use crate::app::Route;
use crate::features::ads::status_today;
use crate::features::view::{Column, ResourceView, badge};
use rahla_api_models::Ad;

impl ResourceView for Ad {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("title"),
            Column::Field("startDate"),
            Column::Field("endDate"),
            Column::Custom {
                label_key: "fields.status",
                render: |ad, bundle| {
                    let status = status_today(ad);
                    badge(bundle.text(status.label_key(), ""), status.tone())
                },
            },
        ]
    }

    fn list_route() -> Route {
        Route::Ads
    }

    fn detail_route(id: &str) -> Route {
        Route::Ad { id: id.to_string() }
    }
}
