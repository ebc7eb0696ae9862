//! Domain records served by the back-office API.
//!
//! Records are fetched wholesale; cross references (`cityId`, `schoolId`, ...)
//! are opaque strings and never resolved client-side.

use crate::{Resource, Translations};
use serde::{Deserialize, Serialize};

macro_rules! impl_resource {
    ($ty:ty, $name:literal, $path:literal) => {
        impl Resource for $ty {
            const NAME: &'static str = $name;
            const PATH: &'static str = $path;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

/// City served by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Localized city name.
    #[serde(default)]
    pub name: Translations,
    /// Whether the city accepts new subscriptions.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// School students are transported to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct School {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Localized school name.
    #[serde(default)]
    pub name: Translations,
    /// Owning city id.
    #[serde(default)]
    pub city_id: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Whether the school is listed.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Review state of a driver account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    /// Awaiting document review.
    #[default]
    Pending,
    /// Approved and able to take trips.
    Active,
    /// Temporarily blocked.
    Suspended,
    /// Disabled by an administrator.
    Inactive,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Driver operating a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Full display name.
    #[serde(default)]
    pub full_name: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Driving license number.
    #[serde(default)]
    pub license_number: String,
    /// Vehicle plate.
    #[serde(default)]
    pub vehicle_plate: String,
    /// Home city id.
    #[serde(default)]
    pub city_id: String,
    /// Account status.
    #[serde(default)]
    pub status: DriverStatus,
    /// Average rating, when rated.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Part of the school day a group rides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Morning pickup.
    #[default]
    Morning,
    /// Afternoon dropoff.
    Afternoon,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Group of students sharing a route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripGroup {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Group label.
    #[serde(default)]
    pub name: String,
    /// School the group rides to.
    #[serde(default)]
    pub school_id: String,
    /// Assigned driver, if any.
    #[serde(default)]
    pub driver_id: Option<String>,
    /// Enrolled students.
    #[serde(default)]
    pub students_count: u32,
    /// Seat capacity.
    #[serde(default)]
    pub capacity: u32,
    /// Riding shift.
    #[serde(default)]
    pub shift: Shift,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Lifecycle of a single trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TripStatus {
    /// Planned, not started.
    #[default]
    Scheduled,
    /// Driver is on the road.
    InProgress,
    /// Finished normally.
    Completed,
    /// Called off.
    Cancelled,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Direction of a trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripKind {
    /// Home to school.
    #[default]
    Pickup,
    /// School to home.
    Dropoff,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// One run of a group's route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Group served by the trip.
    #[serde(default)]
    pub group_id: String,
    /// Driver running the trip.
    #[serde(default)]
    pub driver_id: String,
    /// Direction.
    #[serde(default)]
    pub kind: TripKind,
    /// Lifecycle status.
    #[serde(default)]
    pub status: TripStatus,
    /// Planned departure (ISO-8601).
    #[serde(default)]
    pub scheduled_at: Option<String>,
    /// Actual departure (ISO-8601).
    #[serde(default)]
    pub started_at: Option<String>,
    /// Actual arrival (ISO-8601).
    #[serde(default)]
    pub ended_at: Option<String>,
}

/// In-app advertisement banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Localized headline.
    #[serde(default)]
    pub title: Translations,
    /// Localized body copy.
    #[serde(default)]
    pub description: Translations,
    /// Banner image URL.
    #[serde(default)]
    pub image_url: String,
    /// Click-through link.
    #[serde(default)]
    pub link: String,
    /// First day shown (ISO-8601).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day shown (ISO-8601).
    #[serde(default)]
    pub end_date: Option<String>,
    /// Manual kill switch.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Recipients of a push notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Every account.
    #[default]
    All,
    /// Driver accounts only.
    Drivers,
    /// Parent accounts only.
    Parents,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Push notification broadcast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Localized title.
    #[serde(default)]
    pub title: Translations,
    /// Localized body.
    #[serde(default)]
    pub body: Translations,
    /// Recipients.
    #[serde(default)]
    pub audience: Audience,
    /// Send timestamp (ISO-8601).
    #[serde(default)]
    pub sent_at: Option<String>,
}

/// Message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Sender name.
    #[serde(default)]
    pub name: String,
    /// Sender email.
    #[serde(default)]
    pub email: String,
    /// Sender phone.
    #[serde(default)]
    pub phone: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Message body.
    #[serde(default)]
    pub message: String,
    /// Whether staff has read the message.
    #[serde(default)]
    pub is_read: bool,
    /// Submission timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Billing state of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Awaiting payment.
    #[default]
    Pending,
    /// Paid and running.
    Active,
    /// Past its end date.
    Expired,
    /// Cancelled before the end date.
    Cancelled,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A parent's paid transport plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Subscribing user id.
    #[serde(default)]
    pub user_id: String,
    /// Group the subscription rides with.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Plan label.
    #[serde(default)]
    pub plan_name: String,
    /// Price in minor-unit-free decimal form.
    #[serde(default)]
    pub price: f64,
    /// ISO currency code.
    #[serde(default)]
    pub currency: String,
    /// Billing status.
    #[serde(default)]
    pub status: SubscriptionStatus,
    /// Coverage start (ISO-8601).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Coverage end (ISO-8601).
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Platform account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Full display name.
    #[serde(default)]
    pub full_name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Role string (`admin`, `parent`, `driver`, ...).
    #[serde(default)]
    pub role: String,
    /// Whether the account may sign in.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl_resource!(City, "cities", "/cities");
impl_resource!(School, "schools", "/schools");
impl_resource!(Driver, "drivers", "/drivers");
impl_resource!(TripGroup, "groups", "/groups");
impl_resource!(Trip, "trips", "/trips");
impl_resource!(Ad, "ads", "/ads");
impl_resource!(Notification, "notifications", "/notifications");
impl_resource!(Contact, "contacts", "/contacts");
impl_resource!(Subscription, "subscriptions", "/subscriptions");
impl_resource!(User, "users", "/users");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Payload;
    use serde_json::json;

    #[test]
    fn ad_reads_wire_shape() {
        let ad: Ad = serde_json::from_value(json!({
            "_id": "ad-1",
            "title": { "english": "Back to school", "arabic": "العودة", "kurdish": "گەڕانەوە" },
            "imageUrl": "https://cdn.example/ad.png",
            "startDate": "2026-09-01",
            "endDate": "2026-09-30"
        }))
        .expect("ad");
        assert_eq!(ad.id(), "ad-1");
        assert_eq!(ad.title.kurdish, "گەڕانەوە");
        assert!(ad.is_active);
        assert_eq!(ad.end_date.as_deref(), Some("2026-09-30"));
    }

    #[test]
    fn trip_status_uses_camel_case_names() {
        let trip: Trip = serde_json::from_value(json!({
            "_id": "t-1",
            "status": "inProgress",
            "kind": "dropoff"
        }))
        .expect("trip");
        assert_eq!(trip.status, TripStatus::InProgress);
        assert_eq!(trip.kind, TripKind::Dropoff);
    }

    #[test]
    fn unrecognized_status_decodes_as_unknown() {
        let drivers: Vec<Driver> = serde_json::from_value(json!([
            { "_id": "d-1", "status": "active" },
            { "_id": "d-2", "status": "rejected" }
        ]))
        .expect("drivers");
        assert_eq!(drivers[0].status, DriverStatus::Active);
        assert_eq!(drivers[1].status, DriverStatus::Unknown);

        let trip: Trip = serde_json::from_value(json!({
            "_id": "t-2",
            "status": "delayed",
            "kind": "shuttle"
        }))
        .expect("trip");
        assert_eq!(trip.status, TripStatus::Unknown);
        assert_eq!(trip.kind, TripKind::Unknown);
    }

    #[test]
    fn merge_patches_fields_but_keeps_id() {
        let city = City {
            id: "c-1".to_string(),
            name: Translations {
                english: "Erbil".to_string(),
                ..Translations::default()
            },
            is_active: false,
            created_at: Some("2026-01-01T00:00:00Z".to_string()),
        };
        let mut patch = Payload::new();
        patch.insert("isActive".to_string(), json!(true));
        patch.insert("_id".to_string(), json!("other"));
        let merged = city.merged_with(&patch).expect("merge");
        assert!(merged.is_active);
        assert_eq!(merged.id, "c-1");
        assert_eq!(merged.name.english, "Erbil");
        assert_eq!(merged.created_at, city.created_at);
    }

    #[test]
    fn merge_rejects_mistyped_patch() {
        let user = User {
            id: "u-1".to_string(),
            ..User::default()
        };
        let mut patch = Payload::new();
        patch.insert("isActive".to_string(), json!("yes"));
        assert!(user.merged_with(&patch).is_err());
    }

    #[test]
    fn item_path_joins_base_path() {
        assert_eq!(Driver::item_path("d-9"), "/drivers/d-9");
        assert_eq!(TripGroup::PATH, "/groups");
        assert_eq!(Contact::ID_FIELD, "_id");
    }
}
