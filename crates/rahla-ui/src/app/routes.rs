//! Routing definitions for the back-office UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/cities")]
    Cities,
    #[at("/cities/:id")]
    City { id: String },
    #[at("/schools")]
    Schools,
    #[at("/schools/:id")]
    School { id: String },
    #[at("/drivers")]
    Drivers,
    #[at("/drivers/:id")]
    Driver { id: String },
    #[at("/groups")]
    Groups,
    #[at("/groups/:id")]
    Group { id: String },
    #[at("/trips")]
    Trips,
    #[at("/trips/:id")]
    Trip { id: String },
    #[at("/ads")]
    Ads,
    #[at("/ads/:id")]
    Ad { id: String },
    #[at("/notifications")]
    Notifications,
    #[at("/notifications/:id")]
    Notification { id: String },
    #[at("/contacts")]
    Contacts,
    #[at("/contacts/:id")]
    Contact { id: String },
    #[at("/subscriptions")]
    Subscriptions,
    #[at("/subscriptions/:id")]
    Subscription { id: String },
    #[at("/users")]
    Users,
    #[at("/users/:id")]
    User { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// List route a detail route belongs to; list routes map to themselves.
    pub(crate) fn section(&self) -> Self {
        match self {
            Self::City { .. } => Self::Cities,
            Self::School { .. } => Self::Schools,
            Self::Driver { .. } => Self::Drivers,
            Self::Group { .. } => Self::Groups,
            Self::Trip { .. } => Self::Trips,
            Self::Ad { .. } => Self::Ads,
            Self::Notification { .. } => Self::Notifications,
            Self::Contact { .. } => Self::Contacts,
            Self::Subscription { .. } => Self::Subscriptions,
            Self::User { .. } => Self::Users,
            other => other.clone(),
        }
    }
}
