//! Registration form feature module.
//!
//! Holds the form's MVI state, the intents that change it, the reducer, the
//! choice lists behind the radio group and select, and the view.

pub mod controls;
mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{Focus, FormState, ServerFeedback, ValidationTickets};
