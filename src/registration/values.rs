use serde::{Deserialize, Serialize};

use super::field::{FieldName, FieldValue};

/// Current contents of every field. Serializes to the registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Username => FieldValue::Text(self.username.clone()),
            FieldName::FavLanguage => FieldValue::Text(self.fav_language.clone()),
            FieldName::FavFood => FieldValue::Text(self.fav_food.clone()),
            FieldName::Agreement => FieldValue::Flag(self.agreement),
        }
    }

    /// Store a value, coercing it to the field's type.
    ///
    /// A text value that does not read as a boolean clears the agreement.
    pub fn set(&mut self, field: FieldName, value: FieldValue) {
        match field {
            FieldName::Username => self.username = value.as_text(),
            FieldName::FavLanguage => self.fav_language = value.as_text(),
            FieldName::FavFood => self.fav_food = value.as_text(),
            FieldName::Agreement => self.agreement = value.as_flag().unwrap_or(false),
        }
    }

    pub fn with(mut self, field: FieldName, value: impl Into<FieldValue>) -> Self {
        self.set(field, value.into());
        self
    }
}

/// Inline message per field. `None` means the field has no error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    messages: [Option<String>; 4],
}

impl FormErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.messages[field.index()].as_deref()
    }

    pub fn set(&mut self, field: FieldName, message: Option<String>) {
        self.messages[field.index()] = message;
    }

    pub fn is_empty(&self) -> bool {
        self.messages.iter().all(Option::is_none)
    }

    /// Fields that currently carry a message, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|message| (field, message)))
    }
}
