//! The `Resource` contract every managed entity implements.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// JSON object body used for create and partial-update requests.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// An entity type served by a CRUD endpoint family.
///
/// Implementors describe where the entity lives (`PATH`), how it is named in
/// logs (`NAME`), and which JSON field carries its identifier.
pub trait Resource: Clone + Debug + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Short plural name used for logs and translation keys.
    const NAME: &'static str;
    /// Base endpoint path, e.g. `/cities`.
    const PATH: &'static str;
    /// JSON field holding the identifier.
    const ID_FIELD: &'static str = "_id";

    /// Opaque identifier.
    fn id(&self) -> &str;

    /// Path of a single record.
    #[must_use]
    fn item_path(id: &str) -> String {
        format!("{}/{id}", Self::PATH)
    }

    /// Apply a top-level JSON merge of `patch` onto `self`.
    ///
    /// Used when the server acknowledges an update without echoing the record.
    ///
    /// # Errors
    /// Returns an error when the merged document no longer matches the entity
    /// shape (for example a field patched with the wrong JSON type).
    fn merged_with(&self, patch: &Payload) -> Result<Self, serde_json::Error> {
        let mut document = serde_json::to_value(self)?;
        if let serde_json::Value::Object(fields) = &mut document {
            for (key, value) in patch {
                if key != Self::ID_FIELD {
                    fields.insert(key.clone(), value.clone());
                }
            }
        }
        serde_json::from_value(document)
    }
}
