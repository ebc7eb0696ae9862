//! Read/edit toggle for the detail view.
//!
//! # Design
//! - Editing works on a snapshot; the store is untouched until the update succeeds.
//! - Cancel discards the snapshot.
//! - A failed save stays in edit mode with the error inline.

use crate::core::dialogs::Submission;
use crate::core::forms::{FormError, FormSchema, FormValues, values_from_entity};
use serde::Serialize;

/// Local state of an in-progress edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Snapshot taken when editing began.
    pub original: FormValues,
    /// Values as currently typed.
    pub draft: FormValues,
    /// Update request in flight.
    pub saving: bool,
    /// Last validation failure.
    pub invalid: Option<FormError>,
    /// Last server or transport failure.
    pub error: Option<String>,
}

/// Detail view mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailMode {
    /// Read-only fields.
    #[default]
    Reading,
    /// Editable form.
    Editing(EditSession),
}

/// Edit state machine bound to one form schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailEditor {
    schema: FormSchema,
    mode: DetailMode,
}

impl DetailEditor {
    /// Editor in read mode.
    #[must_use]
    pub const fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            mode: DetailMode::Reading,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> &DetailMode {
        &self.mode
    }

    /// Whether the form is shown.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, DetailMode::Editing(_))
    }

    /// Snapshot `entity` into a draft.
    pub fn begin_edit<T: Serialize>(&mut self, entity: &T) {
        if self.is_editing() {
            return;
        }
        let original = values_from_entity(self.schema.fields, entity);
        self.mode = DetailMode::Editing(EditSession {
            draft: original.clone(),
            original,
            saving: false,
            invalid: None,
            error: None,
        });
    }

    /// Update one draft value.
    pub fn set_value(&mut self, key: &str, value: String) {
        if let DetailMode::Editing(session) = &mut self.mode {
            session.draft.insert(key.to_string(), value);
            session.invalid = None;
        }
    }

    /// Discard the draft unless a save is in flight.
    pub fn cancel(&mut self) {
        if let DetailMode::Editing(session) = &self.mode {
            if !session.saving {
                self.mode = DetailMode::Reading;
            }
        }
    }

    /// Validate and build the partial update. An unchanged draft returns to read mode.
    ///
    /// # Errors
    /// Returns the validation failure; no request must be sent.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        let DetailMode::Editing(session) = &mut self.mode else {
            return Ok(Submission::Busy);
        };
        if session.saving {
            return Ok(Submission::Busy);
        }
        match self.schema.patch(&session.original, &session.draft) {
            Ok(patch) if patch.is_empty() => {
                self.mode = DetailMode::Reading;
                Ok(Submission::Unchanged)
            }
            Ok(patch) => {
                session.saving = true;
                session.invalid = None;
                session.error = None;
                Ok(Submission::Send(patch))
            }
            Err(err) => {
                session.invalid = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Leave edit mode after a successful save.
    pub fn on_success(&mut self) {
        self.mode = DetailMode::Reading;
    }

    /// Stay in edit mode with the error inline.
    pub fn on_failure(&mut self, message: String) {
        if let DetailMode::Editing(session) = &mut self.mode {
            session.saving = false;
            session.error = Some(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::{FieldKind, FieldSpec};
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", "fields.name", FieldKind::Text),
        FieldSpec::optional("phone", "fields.phone", FieldKind::Phone),
    ];

    fn editing() -> DetailEditor {
        let mut editor = DetailEditor::new(FormSchema::new(FIELDS));
        editor.begin_edit(&json!({ "_id": "s-1", "name": "Al Noor", "phone": "0750" }));
        editor
    }

    #[test]
    fn cancel_discards_draft() {
        let mut editor = editing();
        editor.set_value("name", "Changed".to_string());
        editor.cancel();
        assert_eq!(editor.mode(), &DetailMode::Reading);
        editor.begin_edit(&json!({ "name": "Al Noor" }));
        let DetailMode::Editing(session) = editor.mode() else {
            panic!("expected edit mode");
        };
        assert_eq!(session.draft.get("name").map(String::as_str), Some("Al Noor"));
    }

    #[test]
    fn submit_sends_only_changes() {
        let mut editor = editing();
        editor.set_value("phone", "0751".to_string());
        let Ok(Submission::Send(patch)) = editor.submit() else {
            panic!("expected patch");
        };
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("phone"), Some(&json!("0751")));
        assert_eq!(editor.submit(), Ok(Submission::Busy));
        editor.cancel();
        assert!(editor.is_editing());
        editor.on_success();
        assert!(!editor.is_editing());
    }

    #[test]
    fn unchanged_draft_returns_to_reading() {
        let mut editor = editing();
        assert_eq!(editor.submit(), Ok(Submission::Unchanged));
        assert!(!editor.is_editing());
    }

    #[test]
    fn failure_keeps_edit_mode() {
        let mut editor = editing();
        editor.set_value("name", "Al Noor Academy".to_string());
        assert!(matches!(editor.submit(), Ok(Submission::Send(_))));
        editor.on_failure("name taken".to_string());
        let DetailMode::Editing(session) = editor.mode() else {
            panic!("expected edit mode");
        };
        assert!(!session.saving);
        assert_eq!(session.error.as_deref(), Some("name taken"));
        assert_eq!(
            session.draft.get("name").map(String::as_str),
            Some("Al Noor Academy")
        );
    }

    #[test]
    fn invalid_draft_is_rejected() {
        let mut editor = editing();
        editor.set_value("name", "  ".to_string());
        assert_eq!(
            editor.submit(),
            Err(FormError::Required {
                field: "fields.name"
            })
        );
        assert!(editor.is_editing());
    }
}
