use crate::registration::{schema, ControlEvent, FieldName};
use crate::submit::{Outcome, UiCommand, UiCommandSender};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Registration form state (MVI pattern).
    form: FormState,
    /// Channel to the submit worker (resource, managed outside MVI).
    command_sender: Option<UiCommandSender>,
    /// Spinner frame while a submission is in flight.
    tick: u8,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            command_sender: None,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        if self.form.submission_in_progress() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn focus_next(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    /// A control changed: store its effective value, then record the schema's
    /// verdict for it under the ticket that change was issued.
    pub fn on_field_change(&mut self, field: FieldName, event: ControlEvent) {
        let value = event.effective_value();
        let error = schema().validate_field(field, &value).err();

        self.dispatch_form(FormIntent::FieldChanged { field, value });
        let seq = self.form.latest_ticket(field);
        self.dispatch_form(FormIntent::FieldValidated { field, seq, error });
    }

    /// Queue the current values for submission.
    ///
    /// Returns false when the form is invalid, a submission is already in
    /// flight, or there is no worker to send to.
    pub fn on_submit(&mut self) -> bool {
        if !self.form.can_submit() {
            tracing::debug!(
                submit_enabled = self.form.submit_enabled(),
                in_progress = self.form.submission_in_progress(),
                "Submit ignored"
            );
            return false;
        }
        let Some(sender) = self.command_sender.clone() else {
            tracing::warn!("Submit requested with no submit worker attached");
            return false;
        };

        self.dispatch_form(FormIntent::SubmitStarted);
        self.tick = 0;
        let values = self.form.values().clone();
        if let Err(err) = sender.try_send(UiCommand::Submit { values }) {
            tracing::error!("Failed to queue submission: {}", err);
            self.dispatch_form(FormIntent::SubmitCompleted {
                outcome: Outcome::interrupted(),
            });
            return false;
        }
        true
    }

    pub fn on_submit_completed(&mut self, outcome: Outcome) {
        tracing::info!(success = outcome.is_success(), "Submission settled");
        self.dispatch_form(FormIntent::SubmitCompleted { outcome });
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }
}
