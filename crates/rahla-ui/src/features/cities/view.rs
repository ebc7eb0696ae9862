use crate::app::Route;
use crate::core::format::format_date;
use crate::features::view::{Column, ResourceView};
use rahla_api_models::City;
use yew::prelude::*;

impl ResourceView for City {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("name"),
            Column::Field("isActive"),
            Column::Custom {
                label_key: "fields.created_at",
                render: |city, _| html! { {format_date(city.created_at.as_deref())} },
            },
        ]
    }

    fn list_route() -> Route {
        Route::Cities
    }

    fn detail_route(id: &str) -> Route {
        Route::City { id: id.to_string() }
    }
}
