//! Intents for the registration form.

use crate::registration::{FieldError, FieldName, FieldValue};
use crate::submit::Outcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// A control produced a new effective value.
    FieldChanged { field: FieldName, value: FieldValue },

    /// Schema result for the value that was current when `seq` was issued.
    FieldValidated {
        field: FieldName,
        seq: u64,
        error: Option<FieldError>,
    },

    FocusNext,
    FocusPrev,

    /// Submission accepted by the app; the request is about to be sent.
    SubmitStarted,

    /// The in-flight submission finished.
    SubmitCompleted { outcome: Outcome },
}

impl Intent for FormIntent {}
