//! Reducer for the registration form.

use crate::registration::{schema, FormErrors, FormValues};
use crate::submit::Outcome;
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, ServerFeedback};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FieldChanged { field, value } => {
                state.values.set(field, value);
                state.tickets.issue(field);
                refresh_submit_enabled(&mut state);
                state
            }

            FormIntent::FieldValidated { field, seq, error } => {
                if state.tickets.is_current(field, seq) {
                    state
                        .errors
                        .set(field, error.map(|err| err.message.to_string()));
                }
                state
            }

            FormIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }

            FormIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }

            FormIntent::SubmitStarted => {
                if state.can_submit() {
                    state.submission_in_progress = true;
                }
                state
            }

            FormIntent::SubmitCompleted { outcome } => {
                // Nothing was sent, so there is nothing to settle.
                if !state.submission_in_progress {
                    return state;
                }
                state.submission_in_progress = false;
                match outcome {
                    Outcome::Success { message } => {
                        state.feedback = ServerFeedback::Success(message);
                        state.values = FormValues::default();
                        state.errors = FormErrors::default();
                        state.tickets.invalidate_all();
                        refresh_submit_enabled(&mut state);
                    }
                    Outcome::Failure { message } => {
                        state.feedback = ServerFeedback::Failure(message);
                    }
                }
                state
            }
        }
    }
}

fn refresh_submit_enabled(state: &mut FormState) {
    state.submit_enabled = schema().is_valid(&state.values);
}
