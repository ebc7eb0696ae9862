//! Create and delete dialog state machines.
//!
//! # Design
//! - Dialogs overlay the list; closing never navigates.
//! - A failed create keeps the modal open with every typed value intact.
//! - A delete needs an explicit confirmation and only closes on success.

use crate::core::forms::{FormError, FormSchema, FormValues};
use rahla_api_models::Payload;

/// What a submit attempt produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// Send this payload.
    Send(Payload),
    /// Nothing changed; no request is needed.
    Unchanged,
    /// A request is already in flight or the form is not active.
    Busy,
}

/// Overlay form for creating one record.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateDialog {
    schema: FormSchema,
    open: bool,
    values: FormValues,
    submitting: bool,
    invalid: Option<FormError>,
    error: Option<String>,
}

impl CreateDialog {
    /// Closed dialog with blank values.
    #[must_use]
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            open: false,
            values: schema.blank(),
            submitting: false,
            invalid: None,
            error: None,
        }
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the create request is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current values.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Last validation failure.
    #[must_use]
    pub const fn invalid(&self) -> Option<&FormError> {
        self.invalid.as_ref()
    }

    /// Last server or transport failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show the overlay. Values typed before a cancel are kept.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the overlay unless a request is in flight.
    pub fn close(&mut self) {
        if !self.submitting {
            self.open = false;
            self.invalid = None;
            self.error = None;
        }
    }

    /// Update one value and clear stale messages.
    pub fn set_value(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.invalid = None;
    }

    /// Validate and, when valid, mark the request as in flight.
    ///
    /// # Errors
    /// Returns the validation failure; no request must be sent.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        if !self.open || self.submitting {
            return Ok(Submission::Busy);
        }
        match self.schema.payload(&self.values) {
            Ok(payload) => {
                self.submitting = true;
                self.invalid = None;
                self.error = None;
                Ok(Submission::Send(payload))
            }
            Err(err) => {
                self.invalid = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Reset to blank values and close.
    pub fn on_success(&mut self) {
        self.values = self.schema.blank();
        self.submitting = false;
        self.open = false;
        self.invalid = None;
        self.error = None;
    }

    /// Stay open with the error shown and values intact.
    pub fn on_failure(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}

/// Record targeted by a delete dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    /// Record id.
    pub id: String,
    /// Human label shown in the prompt.
    pub label: String,
}

/// Confirmation flow for deleting one record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeleteDialog {
    /// Not shown.
    #[default]
    Closed,
    /// Waiting for the user to confirm.
    Confirming(DeleteTarget),
    /// Request in flight.
    Deleting(DeleteTarget),
    /// Request failed; the user may retry or cancel.
    Failed {
        /// Record being deleted.
        target: DeleteTarget,
        /// Failure message.
        error: String,
    },
}

impl DeleteDialog {
    /// Ask for confirmation. Ignored while another delete is in flight.
    pub fn request(&mut self, id: &str, label: &str) {
        if self.buttons_disabled() {
            return;
        }
        *self = Self::Confirming(DeleteTarget {
            id: id.to_string(),
            label: label.to_string(),
        });
    }

    /// Confirm and return the id to delete. `None` unless awaiting confirmation.
    pub fn confirm(&mut self) -> Option<String> {
        let target = match std::mem::take(self) {
            Self::Confirming(target) | Self::Failed { target, .. } => target,
            other => {
                *self = other;
                return None;
            }
        };
        let id = target.id.clone();
        *self = Self::Deleting(target);
        Some(id)
    }

    /// Dismiss unless the request is in flight.
    pub fn cancel(&mut self) {
        if !self.buttons_disabled() {
            *self = Self::Closed;
        }
    }

    /// Close after a confirmed delete.
    pub fn on_success(&mut self) {
        if matches!(self, Self::Deleting(_)) {
            *self = Self::Closed;
        }
    }

    /// Keep the dialog open with the failure shown.
    pub fn on_failure(&mut self, message: String) {
        if let Self::Deleting(target) = std::mem::take(self) {
            *self = Self::Failed {
                target,
                error: message,
            };
        }
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether confirm/cancel are disabled.
    #[must_use]
    pub const fn buttons_disabled(&self) -> bool {
        matches!(self, Self::Deleting(_))
    }

    /// Record being deleted, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&DeleteTarget> {
        match self {
            Self::Closed => None,
            Self::Confirming(target) | Self::Deleting(target) | Self::Failed { target, .. } => {
                Some(target)
            }
        }
    }

    /// Failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::{FieldKind, FieldSpec};
    use serde_json::json;

    const AD_FIELDS: &[FieldSpec] = &[
        FieldSpec::required("title", "fields.title", FieldKind::Localized),
        FieldSpec::optional("link", "fields.link", FieldKind::Url),
    ];

    fn dialog() -> CreateDialog {
        let mut dialog = CreateDialog::new(FormSchema::new(AD_FIELDS));
        dialog.open();
        dialog.set_value("title.english", "Summer".to_string());
        dialog.set_value("title.arabic", "صيف".to_string());
        dialog
    }

    #[test]
    fn ad_missing_kurdish_title_never_submits() {
        let mut dialog = dialog();
        let mut sent = 0;
        if let Ok(Submission::Send(_)) = dialog.submit() {
            sent += 1;
        }
        assert_eq!(sent, 0);
        assert!(!dialog.is_submitting());
        assert!(matches!(
            dialog.invalid(),
            Some(FormError::MissingTranslation { .. })
        ));
        assert!(dialog.is_open());
    }

    #[test]
    fn success_resets_and_closes() {
        let mut dialog = dialog();
        dialog.set_value("title.kurdish", "هاوین".to_string());
        let Ok(Submission::Send(payload)) = dialog.submit() else {
            panic!("expected payload");
        };
        assert_eq!(
            payload.get("title"),
            Some(&json!({ "english": "Summer", "arabic": "صيف", "kurdish": "هاوین" }))
        );
        assert_eq!(dialog.submit(), Ok(Submission::Busy));
        dialog.close();
        assert!(dialog.is_open());
        dialog.on_success();
        assert!(!dialog.is_open());
        assert_eq!(dialog.values().get("title.english").map(String::as_str), Some(""));
    }

    #[test]
    fn failure_keeps_values_and_shows_error() {
        let mut dialog = dialog();
        dialog.set_value("title.kurdish", "هاوین".to_string());
        assert!(matches!(dialog.submit(), Ok(Submission::Send(_))));
        dialog.on_failure("duplicate title".to_string());
        assert!(dialog.is_open());
        assert!(!dialog.is_submitting());
        assert_eq!(dialog.error(), Some("duplicate title"));
        assert_eq!(
            dialog.values().get("title.english").map(String::as_str),
            Some("Summer")
        );
    }

    #[test]
    fn closed_dialog_does_not_submit() {
        let mut dialog = CreateDialog::new(FormSchema::new(AD_FIELDS));
        assert_eq!(dialog.submit(), Ok(Submission::Busy));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut dialog = DeleteDialog::default();
        assert_eq!(dialog.confirm(), None);
        dialog.request("c-1", "Erbil");
        assert!(dialog.is_open());
        assert!(!dialog.buttons_disabled());
        assert_eq!(dialog.confirm().as_deref(), Some("c-1"));
        assert!(dialog.buttons_disabled());
        assert_eq!(dialog.confirm(), None);
        dialog.cancel();
        assert!(dialog.is_open());
        dialog.on_success();
        assert_eq!(dialog, DeleteDialog::Closed);
    }

    #[test]
    fn delete_failure_stays_open_and_allows_retry() {
        let mut dialog = DeleteDialog::default();
        dialog.request("c-1", "Erbil");
        dialog.confirm();
        dialog.on_failure("in use".to_string());
        assert_eq!(dialog.error(), Some("in use"));
        assert_eq!(dialog.target().map(|t| t.label.as_str()), Some("Erbil"));
        assert_eq!(dialog.confirm().as_deref(), Some("c-1"));
        dialog.on_failure("in use".to_string());
        dialog.cancel();
        assert!(!dialog.is_open());
    }
}
