//! Response envelope shared by every endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope code the API uses to signal success.
pub const SUCCESS_CODE: i64 = 200;

/// Localized message attached to every envelope.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct ApiMessage {
    /// Arabic rendition of the message.
    #[serde(default)]
    pub arabic: String,
    /// English rendition of the message.
    #[serde(default)]
    pub english: String,
}

impl ApiMessage {
    /// Best non-empty message, English first.
    #[must_use]
    pub fn preferred(&self) -> Option<&str> {
        [self.english.trim(), self.arabic.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
    }
}

// Some error paths answer with a bare string instead of the localized object.
impl<'de> Deserialize<'de> for ApiMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Localized {
            #[serde(default)]
            arabic: Option<String>,
            #[serde(default)]
            english: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Localized(Localized),
            Plain(String),
            Missing(()),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Localized(localized) => Self {
                arabic: localized.arabic.unwrap_or_default(),
                english: localized.english.unwrap_or_default(),
            },
            Raw::Plain(text) => Self {
                arabic: String::new(),
                english: text,
            },
            Raw::Missing(()) => Self::default(),
        })
    }
}

/// Wire envelope `{ code, data, message, totalItems?, totalPages? }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Business status code; [`SUCCESS_CODE`] means success.
    pub code: i64,
    /// Payload, absent on most errors.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Localized message.
    #[serde(default)]
    pub message: ApiMessage,
    /// Total matching records for list endpoints.
    #[serde(default)]
    pub total_items: Option<u64>,
    /// Total pages for list endpoints.
    #[serde(default)]
    pub total_pages: Option<u64>,
}

impl<T> Envelope<T> {
    /// Whether the envelope reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// One page of list results with the server's pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records in server order.
    pub items: Vec<T>,
    /// Server-reported total record count.
    pub total_items: u64,
    /// Server-reported page count.
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Build a page from a list envelope, trusting its metadata as-is.
    ///
    /// Missing `totalItems` falls back to the number of returned items and
    /// missing `totalPages` is derived from `page_size`.
    #[must_use]
    pub fn from_envelope(envelope: Envelope<Vec<T>>, page_size: u64) -> Self {
        let items = envelope.data.unwrap_or_default();
        let fallback_total = u64::try_from(items.len()).unwrap_or(u64::MAX);
        let total_items = envelope.total_items.unwrap_or(fallback_total);
        let total_pages = envelope
            .total_pages
            .unwrap_or_else(|| total_items.div_ceil(page_size.max(1)));
        Self {
            items,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_reads_camel_case_pagination() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_value(json!({
            "code": 200,
            "data": [1, 2, 3],
            "message": { "arabic": "تم", "english": "done" },
            "totalItems": 25,
            "totalPages": 3
        }))
        .expect("envelope");
        assert!(envelope.is_success());
        let page = Page::from_envelope(envelope, 10);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn message_accepts_plain_string_and_null() {
        let plain: Envelope<()> =
            serde_json::from_value(json!({ "code": 400, "message": "bad input" }))
                .expect("plain message");
        assert_eq!(plain.message.preferred(), Some("bad input"));

        let null: Envelope<()> = serde_json::from_value(json!({ "code": 500, "message": null }))
            .expect("null message");
        assert_eq!(null.message.preferred(), None);
        assert!(!null.is_success());
    }

    #[test]
    fn preferred_message_falls_back_to_arabic() {
        let message = ApiMessage {
            arabic: "خطأ".to_string(),
            english: "  ".to_string(),
        };
        assert_eq!(message.preferred(), Some("خطأ"));
    }

    #[test]
    fn page_without_metadata_uses_item_count() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_value(json!({ "code": 200, "data": [] })).expect("envelope");
        let page = Page::from_envelope(envelope, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn page_count_is_derived_when_missing() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_value(json!({
            "code": 200,
            "data": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            "totalItems": 25
        }))
        .expect("envelope");
        let page = Page::from_envelope(envelope, 10);
        assert_eq!(page.total_pages, 3);
    }
}
