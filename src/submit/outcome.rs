use super::error::SubmitError;

/// Result of one submission attempt as the form shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { message: String },
    Failure { message: String },
}

impl Outcome {
    /// Reported when a submission is dropped before the server answered.
    pub fn interrupted() -> Self {
        Outcome::Failure {
            message: "Submission was interrupted".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message } | Outcome::Failure { message } => message,
        }
    }
}

impl From<Result<String, SubmitError>> for Outcome {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(message) => Outcome::Success { message },
            Err(err) => Outcome::Failure {
                message: err.user_message(),
            },
        }
    }
}
