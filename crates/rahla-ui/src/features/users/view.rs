use crate::app::Route;
use crate::features::view::{Column, ResourceView};
use rahla_api_models::User;

impl ResourceView for User {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("fullName"),
            Column::Field("email"),
            Column::Field("role"),
            Column::Field("isActive"),
        ]
    }

    fn list_route() -> Route {
        Route::Users
    }

    fn detail_route(id: &str) -> Route {
        Route::User { id: id.to_string() }
    }
}
