//! Network adapter: posts the form to the registration endpoint.

mod client;
mod error;
mod outcome;
mod worker;

pub use client::RegistrationClient;
pub use error::SubmitError;
pub use outcome::Outcome;
pub use worker::{run_submit_worker, OutcomeSink, UiCommand, UiCommandSender};
