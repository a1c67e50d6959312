//! Field identifiers, field values and the raw control events that produce them.

use std::fmt;

/// One named input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    FavLanguage,
    FavFood,
    Agreement,
}

impl FieldName {
    /// All fields in form order.
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::FavLanguage,
        FieldName::FavFood,
        FieldName::Agreement,
    ];

    /// Key used in the JSON payload.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::FavLanguage => "favLanguage",
            FieldName::FavFood => "favFood",
            FieldName::Agreement => "agreement",
        }
    }

    /// Position in [`FieldName::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldName::Username => 0,
            FieldName::FavLanguage => 1,
            FieldName::FavFood => 2,
            FieldName::Agreement => 3,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective value of a field after a control event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Value read as a string. Flags render as `"true"` / `"false"`.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }

    /// Value read as a boolean. Text other than `"true"` / `"false"` is missing.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(text) => match text.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Raw event emitted by a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// Text input edited; carries the full new contents.
    Text { value: String },
    /// Radio option picked.
    Radio { value: String },
    /// Select option picked; the placeholder is the empty string.
    Select { value: String },
    /// Checkbox toggled.
    Checkbox { checked: bool },
}

impl ControlEvent {
    /// Checkbox events yield their checked state, every other control its string value.
    pub fn effective_value(self) -> FieldValue {
        match self {
            ControlEvent::Checkbox { checked } => FieldValue::Flag(checked),
            ControlEvent::Text { value }
            | ControlEvent::Radio { value }
            | ControlEvent::Select { value } => FieldValue::Text(value),
        }
    }
}
