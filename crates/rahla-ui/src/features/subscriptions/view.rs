use crate::app::Route;
use crate::core::format::format_price;
use crate::features::view::{Column, ResourceView};
use rahla_api_models::Subscription;
use yew::prelude::*;

impl ResourceView for Subscription {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("planName"),
            Column::Field("userId"),
            Column::Custom {
                label_key: "fields.price",
                render: |subscription, _| {
                    html! { {format_price(subscription.price, &subscription.currency)} }
                },
            },
            Column::Field("status"),
            Column::Field("startDate"),
            Column::Field("endDate"),
        ]
    }

    fn list_route() -> Route {
        Route::Subscriptions
    }

    fn detail_route(id: &str) -> Route {
        Route::Subscription { id: id.to_string() }
    }
}
