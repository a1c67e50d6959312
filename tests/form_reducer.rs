mod common;

use common::valid_values;
use regform::registration::{schema, FieldName, FieldValue, FormValues, USERNAME_MIN};
use regform::submit::Outcome;
use regform::ui::form::{FormIntent, FormReducer, FormState, ServerFeedback};
use regform::ui::mvi::Reducer;

/// Change a field and apply its validation in order, like the app does.
fn edit(state: FormState, field: FieldName, value: impl Into<FieldValue>) -> FormState {
    let value = value.into();
    let error = schema().validate_field(field, &value).err();
    let state = FormReducer::reduce(state, FormIntent::FieldChanged { field, value });
    let seq = state.latest_ticket(field);
    FormReducer::reduce(state, FormIntent::FieldValidated { field, seq, error })
}

fn filled(values: &FormValues) -> FormState {
    FieldName::ALL
        .into_iter()
        .fold(FormState::default(), |state, field| {
            edit(state, field, values.get(field))
        })
}

fn submitted(values: &FormValues) -> FormState {
    FormReducer::reduce(filled(values), FormIntent::SubmitStarted)
}

#[test]
fn valid_values_enable_submit_without_errors() {
    let state = filled(&valid_values());
    assert!(state.submit_enabled());
    assert!(state.can_submit());
    assert!(state.errors().is_empty());
}

#[test]
fn short_username_shows_error_and_disables_submit() {
    let values = valid_values().with(FieldName::Username, "ab");
    let state = filled(&values);
    assert_eq!(state.errors().get(FieldName::Username), Some(USERNAME_MIN));
    assert!(!state.submit_enabled());
}

#[test]
fn fixing_a_field_clears_its_error() {
    let state = edit(FormState::default(), FieldName::Username, "ab");
    assert_eq!(state.errors().get(FieldName::Username), Some(USERNAME_MIN));
    let state = edit(state, FieldName::Username, "abc");
    assert_eq!(state.errors().get(FieldName::Username), None);
}

#[test]
fn submit_enabled_tracks_every_change() {
    let state = filled(&valid_values());
    let state = edit(state, FieldName::Agreement, false);
    assert!(!state.submit_enabled());
    let state = edit(state, FieldName::Agreement, true);
    assert!(state.submit_enabled());
}

#[test]
fn stale_validation_result_is_discarded() {
    // "a" then "abc" typed; "a"'s result arrives last.
    let state = FormReducer::reduce(
        FormState::default(),
        FormIntent::FieldChanged {
            field: FieldName::Username,
            value: FieldValue::from("a"),
        },
    );
    let stale_seq = state.latest_ticket(FieldName::Username);
    let state = FormReducer::reduce(
        state,
        FormIntent::FieldChanged {
            field: FieldName::Username,
            value: FieldValue::from("abc"),
        },
    );
    let fresh_seq = state.latest_ticket(FieldName::Username);

    let state = FormReducer::reduce(
        state,
        FormIntent::FieldValidated {
            field: FieldName::Username,
            seq: fresh_seq,
            error: None,
        },
    );
    let stale_error = schema()
        .validate_field(FieldName::Username, &FieldValue::from("a"))
        .err();
    let state = FormReducer::reduce(
        state,
        FormIntent::FieldValidated {
            field: FieldName::Username,
            seq: stale_seq,
            error: stale_error,
        },
    );

    assert_eq!(state.errors().get(FieldName::Username), None);
}

#[test]
fn submit_started_sets_in_flight_guard() {
    let state = submitted(&valid_values());
    assert!(state.submission_in_progress());
    assert!(state.submit_enabled());
    assert!(!state.can_submit());
}

#[test]
fn second_start_while_in_flight_changes_nothing() {
    let state = submitted(&valid_values());
    let again = FormReducer::reduce(state.clone(), FormIntent::SubmitStarted);
    assert_eq!(again, state);
}

#[test]
fn success_resets_values_and_sets_success_message() {
    let state = submitted(&valid_values());
    let state = FormReducer::reduce(
        state,
        FormIntent::SubmitCompleted {
            outcome: Outcome::Success {
                message: "Success! Welcome, new user abc!".into(),
            },
        },
    );

    assert_eq!(state.values(), &FormValues::default());
    assert!(state.errors().is_empty());
    assert_eq!(
        state.feedback(),
        &ServerFeedback::Success("Success! Welcome, new user abc!".into())
    );
    assert!(!state.submission_in_progress());
    assert!(!state.submit_enabled());
}

#[test]
fn failure_keeps_values_and_replaces_success_message() {
    let state = submitted(&valid_values());
    let state = FormReducer::reduce(
        state,
        FormIntent::SubmitCompleted {
            outcome: Outcome::Success {
                message: "first".into(),
            },
        },
    );
    let state = FormReducer::reduce(
        edit_all(state, &valid_values()),
        FormIntent::SubmitStarted,
    );
    let state = FormReducer::reduce(
        state,
        FormIntent::SubmitCompleted {
            outcome: Outcome::Failure {
                message: "Username abc is already taken".into(),
            },
        },
    );

    assert_eq!(state.values(), &valid_values());
    assert_eq!(state.feedback().failure(), Some("Username abc is already taken"));
    assert_eq!(state.feedback().success(), None);
    assert!(!state.submission_in_progress());
    assert!(state.can_submit());
}

#[test]
fn validation_pending_at_reset_is_dropped() {
    let state = FormReducer::reduce(
        filled(&valid_values()),
        FormIntent::FieldChanged {
            field: FieldName::Username,
            value: FieldValue::from("ab"),
        },
    );
    let pending_seq = state.latest_ticket(FieldName::Username);
    let state = edit(state, FieldName::Username, "abc");
    let state = FormReducer::reduce(state, FormIntent::SubmitStarted);
    let state = FormReducer::reduce(
        state,
        FormIntent::SubmitCompleted {
            outcome: Outcome::Success {
                message: "ok".into(),
            },
        },
    );

    let state = FormReducer::reduce(
        state,
        FormIntent::FieldValidated {
            field: FieldName::Username,
            seq: pending_seq,
            error: schema()
                .validate_field(FieldName::Username, &FieldValue::from("ab"))
                .err(),
        },
    );
    assert!(state.errors().is_empty());
}

fn edit_all(state: FormState, values: &FormValues) -> FormState {
    FieldName::ALL
        .into_iter()
        .fold(state, |state, field| edit(state, field, values.get(field)))
}
