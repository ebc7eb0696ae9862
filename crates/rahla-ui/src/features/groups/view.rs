use crate::app::Route;
use crate::features::view::{Column, ResourceView};
use rahla_api_models::TripGroup;
use yew::prelude::*;

impl ResourceView for TripGroup {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("name"),
            Column::Field("schoolId"),
            Column::Field("driverId"),
            Column::Field("shift"),
            Column::Custom {
                label_key: "fields.seats",
                render: |group, _| html! { {format!("{}/{}", group.students_count, group.capacity)} },
            },
        ]
    }

    fn list_route() -> Route {
        Route::Groups
    }

    fn detail_route(id: &str) -> Route {
        Route::Group { id: id.to_string() }
    }
}
