//! Static validation schema for the registration form.
//!
//! Each field owns an ordered list of rules. Validation stops at the first
//! rule the value does not satisfy and reports that rule's message, so the
//! order in which rules are declared is the order users see errors in:
//! required, then length or membership, then exact match.

use thiserror::Error;

use super::field::{FieldName, FieldValue};
use super::values::{FormErrors, FormValues};

pub const USERNAME_REQUIRED: &str = "username is required";
pub const USERNAME_MIN: &str = "username must be at least 3 characters";
pub const USERNAME_MAX: &str = "username cannot exceed 20 characters";
pub const FAV_LANGUAGE_REQUIRED: &str = "favLanguage is required";
pub const FAV_LANGUAGE_OPTIONS: &str = "favLanguage must be either javascript or rust";
pub const FAV_FOOD_REQUIRED: &str = "favFood is required";
pub const FAV_FOOD_OPTIONS: &str = "favFood must be either broccoli, spaghetti or pizza";
pub const AGREEMENT_REQUIRED: &str = "agreement is required";
pub const AGREEMENT_OPTIONS: &str = "agreement must be accepted";

pub const LANGUAGE_OPTIONS: &[&str] = &["javascript", "rust"];
pub const FOOD_OPTIONS: &[&str] = &["pizza", "broccoli", "spaghetti"];

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 20;

/// A value rejected by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: FieldName,
    pub message: &'static str,
}

/// How a field's value is read before rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text { trim: bool },
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinChars(usize),
    MaxChars(usize),
    OneOf(&'static [&'static str]),
    Equals(bool),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: &'static str,
}

#[derive(Debug)]
pub struct FieldSchema {
    pub field: FieldName,
    pub kind: ValueKind,
    pub rules: &'static [Rule],
}

#[derive(Debug)]
pub struct Schema {
    fields: [FieldSchema; 4],
}

static SCHEMA: Schema = Schema {
    fields: [
        FieldSchema {
            field: FieldName::Username,
            kind: ValueKind::Text { trim: true },
            rules: &[
                Rule {
                    constraint: Constraint::Required,
                    message: USERNAME_REQUIRED,
                },
                Rule {
                    constraint: Constraint::MinChars(USERNAME_MIN_CHARS),
                    message: USERNAME_MIN,
                },
                Rule {
                    constraint: Constraint::MaxChars(USERNAME_MAX_CHARS),
                    message: USERNAME_MAX,
                },
            ],
        },
        FieldSchema {
            field: FieldName::FavLanguage,
            kind: ValueKind::Text { trim: false },
            rules: &[
                Rule {
                    constraint: Constraint::Required,
                    message: FAV_LANGUAGE_REQUIRED,
                },
                Rule {
                    constraint: Constraint::OneOf(LANGUAGE_OPTIONS),
                    message: FAV_LANGUAGE_OPTIONS,
                },
            ],
        },
        FieldSchema {
            field: FieldName::FavFood,
            kind: ValueKind::Text { trim: false },
            rules: &[
                Rule {
                    constraint: Constraint::Required,
                    message: FAV_FOOD_REQUIRED,
                },
                Rule {
                    constraint: Constraint::OneOf(FOOD_OPTIONS),
                    message: FAV_FOOD_OPTIONS,
                },
            ],
        },
        FieldSchema {
            field: FieldName::Agreement,
            kind: ValueKind::Flag,
            rules: &[
                Rule {
                    constraint: Constraint::Required,
                    message: AGREEMENT_REQUIRED,
                },
                Rule {
                    constraint: Constraint::Equals(true),
                    message: AGREEMENT_OPTIONS,
                },
            ],
        },
    ],
};

/// The registration schema. Built at compile time and never mutated.
pub fn schema() -> &'static Schema {
    &SCHEMA
}

/// Value prepared for rule checks.
enum Candidate {
    Text(String),
    Flag(Option<bool>),
}

impl Constraint {
    fn admits(&self, candidate: &Candidate) -> bool {
        match (self, candidate) {
            (Constraint::Required, Candidate::Text(text)) => !text.is_empty(),
            (Constraint::Required, Candidate::Flag(flag)) => flag.is_some(),
            (Constraint::MinChars(min), Candidate::Text(text)) => text.chars().count() >= *min,
            (Constraint::MaxChars(max), Candidate::Text(text)) => text.chars().count() <= *max,
            (Constraint::OneOf(options), Candidate::Text(text)) => {
                options.contains(&text.as_str())
            }
            (Constraint::Equals(expected), Candidate::Flag(flag)) => *flag == Some(*expected),
            // Text-only rules say nothing about flags and vice versa.
            (Constraint::MinChars(_) | Constraint::MaxChars(_), Candidate::Flag(_)) => true,
            (Constraint::OneOf(_), Candidate::Flag(_)) => true,
            (Constraint::Equals(_), Candidate::Text(_)) => true,
        }
    }
}

impl FieldSchema {
    fn candidate(&self, value: &FieldValue) -> Candidate {
        match self.kind {
            ValueKind::Text { trim: true } => Candidate::Text(value.as_text().trim().to_string()),
            ValueKind::Text { trim: false } => Candidate::Text(value.as_text()),
            ValueKind::Flag => Candidate::Flag(value.as_flag()),
        }
    }

    /// First rule the value breaks, if any.
    pub fn check(&self, value: &FieldValue) -> Result<(), FieldError> {
        let candidate = self.candidate(value);
        match self
            .rules
            .iter()
            .find(|rule| !rule.constraint.admits(&candidate))
        {
            Some(rule) => Err(FieldError {
                field: self.field,
                message: rule.message,
            }),
            None => Ok(()),
        }
    }
}

impl Schema {
    pub fn field(&self, field: FieldName) -> &FieldSchema {
        &self.fields[field.index()]
    }

    pub fn validate_field(&self, field: FieldName, value: &FieldValue) -> Result<(), FieldError> {
        self.field(field).check(value)
    }

    /// Message for every field that currently fails.
    pub fn validate_all(&self, values: &FormValues) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in FieldName::ALL {
            let message = self
                .validate_field(field, &values.get(field))
                .err()
                .map(|err| err.message.to_string());
            errors.set(field, message);
        }
        errors
    }

    pub fn is_valid(&self, values: &FormValues) -> bool {
        FieldName::ALL
            .into_iter()
            .all(|field| self.validate_field(field, &values.get(field)).is_ok())
    }
}
