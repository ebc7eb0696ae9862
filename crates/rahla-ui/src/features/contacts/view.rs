use crate::app::Route;
use crate::features::view::{Column, ResourceView, badge};
use rahla_api_models::Contact;

impl ResourceView for Contact {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::Field("name"),
            Column::Field("email"),
            Column::Field("subject"),
            Column::Field("createdAt"),
            Column::Custom {
                label_key: "fields.is_read",
                render: |contact, bundle| {
                    if contact.is_read {
                        badge(bundle.text("contact.read", ""), "neutral")
                    } else {
                        badge(bundle.text("contact.unread", ""), "info")
                    }
                },
            },
        ]
    }

    fn list_route() -> Route {
        Route::Contacts
    }

    fn detail_route(id: &str) -> Route {
        Route::Contact { id: id.to_string() }
    }
}
