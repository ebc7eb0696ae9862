//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - One generic resource slice per entity; views reach theirs through
//!   [`StoreResource`] and never touch unrelated slices.
//! - Signing out drops every slice's data except pending toasts; request
//!   sequences survive so responses from the old session stay stale.

use crate::core::auth::Session;
use crate::core::errors::ApiError;
use crate::core::resource::ResourceSlice;
use crate::models::{Toast, ToastKind};
use rahla_api_models::Resource;
use rahla_api_models::entities::{
    Ad, City, Contact, Driver, Notification, School, Subscription, Trip, TripGroup, User,
};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Signed-in session.
    pub auth: AuthSlice,
    /// Toasts and other shell state.
    pub ui: UiSlice,
    /// Cities.
    pub cities: ResourceSlice<City>,
    /// Schools.
    pub schools: ResourceSlice<School>,
    /// Drivers.
    pub drivers: ResourceSlice<Driver>,
    /// Trip groups.
    pub groups: ResourceSlice<TripGroup>,
    /// Trips.
    pub trips: ResourceSlice<Trip>,
    /// Ads.
    pub ads: ResourceSlice<Ad>,
    /// Notifications.
    pub notifications: ResourceSlice<Notification>,
    /// Contact messages.
    pub contacts: ResourceSlice<Contact>,
    /// Subscriptions.
    pub subscriptions: ResourceSlice<Subscription>,
    /// Users.
    pub users: ResourceSlice<User>,
}

/// Shared authentication state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSlice {
    /// Active session; `None` routes to the login screen.
    pub session: Option<Session>,
    /// Login request in flight.
    pub login_busy: bool,
    /// Last login failure.
    pub login_error: Option<ApiError>,
    /// The previous session ended because the server rejected it.
    pub session_expired: bool,
}

/// Shell state that is not tied to an entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiSlice {
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiSlice {
    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a toast by id.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

impl AppStore {
    /// Install a fresh session.
    pub fn sign_in(&mut self, session: Session) {
        self.auth = AuthSlice {
            session: Some(session),
            ..AuthSlice::default()
        };
    }

    /// Drop the session and every cached record. Toasts survive.
    pub fn sign_out(&mut self) {
        self.auth = AuthSlice::default();
        self.reset_slices();
    }

    /// Sign out because the session was rejected or ran out.
    pub fn expire_session(&mut self) {
        self.sign_out();
        self.auth.session_expired = true;
    }
}

/// Dispatcher for the global app store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Entity types that own a slice in [`AppStore`].
pub trait StoreResource: Resource {
    /// Shared view of this entity's slice.
    fn slice(store: &AppStore) -> &ResourceSlice<Self>;
    /// Mutable view of this entity's slice.
    fn slice_mut(store: &mut AppStore) -> &mut ResourceSlice<Self>;
}

macro_rules! store_resource {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl StoreResource for $ty {
                fn slice(store: &AppStore) -> &ResourceSlice<Self> {
                    &store.$field
                }

                fn slice_mut(store: &mut AppStore) -> &mut ResourceSlice<Self> {
                    &mut store.$field
                }
            }
        )+

        impl AppStore {
            fn reset_slices(&mut self) {
                $(self.$field.reset();)+
            }
        }
    };
}

store_resource!(
    City => cities,
    School => schools,
    Driver => drivers,
    TripGroup => groups,
    Trip => trips,
    Ad => ads,
    Notification => notifications,
    Contact => contacts,
    Subscription => subscriptions,
    User => users,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rahla_api_models::Page;

    #[test]
    fn toasts_get_monotonic_ids() {
        let mut ui = UiSlice::default();
        let first = ui.push_toast(ToastKind::Success, "Saved");
        let second = ui.push_toast(ToastKind::Error, "Failed");
        assert!(second > first);
        ui.dismiss_toast(first);
        assert_eq!(ui.toasts.len(), 1);
        assert_eq!(ui.toasts[0].kind, ToastKind::Error);
        let third = ui.push_toast(ToastKind::Info, "Hi");
        assert!(third > second);
    }

    #[test]
    fn slices_are_routed_by_type() {
        let mut store = AppStore::default();
        let seq = School::slice_mut(&mut store).begin_list();
        School::slice_mut(&mut store).finish_list_ok(
            seq,
            Page {
                items: vec![School {
                    id: "s-1".to_string(),
                    ..School::default()
                }],
                total_items: 1,
                total_pages: 1,
            },
        );
        assert_eq!(store.schools.items.len(), 1);
        assert!(City::slice(&store).items.is_empty());
    }

    #[test]
    fn sign_out_clears_slices_but_keeps_toasts() {
        let mut store = AppStore::default();
        store.sign_in(Session::new("a.b.c", "admin"));
        let generation = store.cities.begin_create();
        store.cities.finish_create_ok(
            generation,
            City {
                id: "c-1".to_string(),
                ..City::default()
            },
        );
        store.ui.push_toast(ToastKind::Info, "Signed out");
        store.sign_out();
        assert!(store.auth.session.is_none());
        assert!(store.cities.items.is_empty());
        assert_eq!(store.ui.toasts.len(), 1);
        assert!(!store.auth.session_expired);
    }

    #[test]
    fn expired_session_is_flagged_until_next_sign_in() {
        let mut store = AppStore::default();
        store.sign_in(Session::new("a.b.c", "admin"));
        store.expire_session();
        assert!(store.auth.session_expired);
        store.sign_in(Session::new("d.e.f", "admin"));
        assert!(!store.auth.session_expired);
        assert!(store.auth.session.is_some());
    }

    #[test]
    fn lists_load_again_after_signing_back_in() {
        let mut store = AppStore::default();
        store.sign_in(Session::new("a.b.c", "admin"));
        store.drivers.begin_list();
        let in_flight = store.drivers.begin_list();
        let pending_create = store.drivers.begin_create();
        store.expire_session();

        Driver::slice_mut(&mut store).cancel_list(in_flight);
        Driver::slice_mut(&mut store).finish_create_ok(
            pending_create,
            Driver {
                id: "d-old".to_string(),
                ..Driver::default()
            },
        );
        assert!(store.drivers.items.is_empty());

        store.sign_in(Session::new("d.e.f", "admin"));
        let seq = store.drivers.begin_list();
        assert!(store.drivers.finish_list_ok(
            seq,
            Page {
                items: vec![Driver {
                    id: "d-1".to_string(),
                    ..Driver::default()
                }],
                total_items: 1,
                total_pages: 1,
            },
        ));
        assert!(!store.drivers.loading);
        assert_eq!(store.drivers.items.len(), 1);
        assert_eq!(store.drivers.total_items, 1);
    }
}
