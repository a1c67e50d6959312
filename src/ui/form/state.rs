//! State of the registration form.

use crate::registration::{FieldName, FormErrors, FormValues};
use crate::ui::mvi::UiState;

/// Control that receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::Username)
    }
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(FieldName::Username),
        Focus::Field(FieldName::FavLanguage),
        Focus::Field(FieldName::FavFood),
        Focus::Field(FieldName::Agreement),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::Submit => Self::ORDER.len() - 1,
        }
    }

    /// Next control, wrapping after submit.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping before username.
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Message from the server about the last completed submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerFeedback {
    #[default]
    None,
    Success(String),
    Failure(String),
}

impl ServerFeedback {
    pub fn success(&self) -> Option<&str> {
        match self {
            ServerFeedback::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            ServerFeedback::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Latest validation sequence number issued per field.
///
/// A validation result is applied only if it carries the latest number for
/// its field; anything older was computed for a value that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationTickets {
    latest: [u64; 4],
}

impl ValidationTickets {
    pub fn issue(&mut self, field: FieldName) -> u64 {
        let slot = &mut self.latest[field.index()];
        *slot += 1;
        *slot
    }

    pub fn latest(&self, field: FieldName) -> u64 {
        self.latest[field.index()]
    }

    pub fn is_current(&self, field: FieldName, seq: u64) -> bool {
        self.latest(field) == seq
    }

    /// Make every outstanding result stale.
    pub fn invalidate_all(&mut self) {
        for field in FieldName::ALL {
            self.issue(field);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub(super) values: FormValues,
    pub(super) errors: FormErrors,
    pub(super) submit_enabled: bool,
    pub(super) submission_in_progress: bool,
    pub(super) feedback: ServerFeedback,
    pub(super) tickets: ValidationTickets,
    pub(super) focus: Focus,
}

impl UiState for FormState {}

impl FormState {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Whether the current values satisfy the whole schema.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn submission_in_progress(&self) -> bool {
        self.submission_in_progress
    }

    /// Valid and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.submit_enabled && !self.submission_in_progress
    }

    pub fn feedback(&self) -> &ServerFeedback {
        &self.feedback
    }

    pub fn latest_ticket(&self, field: FieldName) -> u64 {
        self.tickets.latest(field)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }
}
