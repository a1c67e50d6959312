//! Choice lists behind the radio group and the select.

use crate::registration::{ControlEvent, FieldName, FormValues};

/// A selectable option: submitted value and on-screen label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

pub const LANGUAGE_CHOICES: &[Choice] = &[
    Choice {
        value: "javascript",
        label: "JavaScript",
    },
    Choice {
        value: "rust",
        label: "Rust",
    },
];

/// The first entry is the blank placeholder.
pub const FOOD_CHOICES: &[Choice] = &[
    Choice {
        value: "",
        label: "-- Select Favorite Food --",
    },
    Choice {
        value: "pizza",
        label: "Pizza",
    },
    Choice {
        value: "spaghetti",
        label: "Spaghetti",
    },
    Choice {
        value: "broccoli",
        label: "Broccoli",
    },
];

/// Step through `choices` from `current`, wrapping at both ends.
///
/// With nothing selected yet a forward step lands on the first choice and a
/// backward step on the last.
pub fn cycle(choices: &[Choice], current: &str, forward: bool) -> &'static str {
    let len = choices.len();
    if len == 0 {
        return "";
    }
    let next = match choices.iter().position(|choice| choice.value == current) {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    choices[next].value
}

pub fn label_for(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices
        .iter()
        .find(|choice| choice.value == value)
        .map(|choice| choice.label)
}

/// Control event for moving a choice field one step; `None` for other fields.
pub fn step_event(field: FieldName, values: &FormValues, forward: bool) -> Option<ControlEvent> {
    match field {
        FieldName::FavLanguage => Some(ControlEvent::Radio {
            value: cycle(LANGUAGE_CHOICES, &values.fav_language, forward).to_string(),
        }),
        FieldName::FavFood => Some(ControlEvent::Select {
            value: cycle(FOOD_CHOICES, &values.fav_food, forward).to_string(),
        }),
        FieldName::Username | FieldName::Agreement => None,
    }
}
