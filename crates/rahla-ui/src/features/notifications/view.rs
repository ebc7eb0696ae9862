use crate::app::Route;
use crate::features::view::{Column, ResourceView};
use rahla_api_models::Notification;

impl ResourceView for Notification {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("title"),
            Column::Field("audience"),
            Column::Field("sentAt"),
        ]
    }

    fn list_route() -> Route {
        Route::Notifications
    }

    fn detail_route(id: &str) -> Route {
        Route::Notification { id: id.to_string() }
    }
}
