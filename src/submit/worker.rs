//! Background task that performs submissions for the interactive form.
//!
//! The UI thread sends [`UiCommand`]s over a tokio channel; each accepted
//! submission produces exactly one [`Outcome`] through the [`OutcomeSink`],
//! including when the task is dropped mid-request.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::registration::FormValues;
use crate::submit::client::RegistrationClient;
use crate::submit::outcome::Outcome;

#[derive(Debug)]
pub enum UiCommand {
    Submit { values: FormValues },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Where finished submissions are reported.
pub trait OutcomeSink: Send + Sync + 'static {
    fn deliver(&self, outcome: Outcome);
}

/// Process commands until every sender is dropped.
///
/// Submissions run one at a time, in arrival order.
pub async fn run_submit_worker<S: OutcomeSink>(
    client: RegistrationClient,
    mut commands: mpsc::Receiver<UiCommand>,
    sink: S,
) {
    let sink = Arc::new(sink);
    tracing::debug!(endpoint = %client.endpoint(), "Submit worker started");

    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Submit { values } => {
                let sink = Arc::clone(&sink);
                let mut pending = scopeguard::guard(Outcome::interrupted(), move |outcome| {
                    sink.deliver(outcome);
                });
                *pending = client.outcome(&values).await;
            }
        }
    }

    tracing::debug!("Submit worker stopped");
}
