use crate::app::Route;
use crate::features::view::{Column, ResourceView};
use rahla_api_models::School;

impl ResourceView for School {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("name"),
            Column::Field("cityId"),
            Column::Field("phone"),
            Column::Field("isActive"),
        ]
    }

    fn list_route() -> Route {
        Route::Schools
    }

    fn detail_route(id: &str) -> Route {
        Route::School { id: id.to_string() }
    }
}
