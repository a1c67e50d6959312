//! Registration form domain: fields, values and the validation schema.

mod field;
mod schema;
mod values;

pub use field::{ControlEvent, FieldName, FieldValue};
pub use schema::{
    schema, Constraint, FieldError, FieldSchema, Rule, Schema, ValueKind, AGREEMENT_OPTIONS,
    AGREEMENT_REQUIRED, FAV_FOOD_OPTIONS, FAV_FOOD_REQUIRED, FAV_LANGUAGE_OPTIONS,
    FAV_LANGUAGE_REQUIRED, FOOD_OPTIONS, LANGUAGE_OPTIONS, USERNAME_MAX, USERNAME_MAX_CHARS,
    USERNAME_MIN, USERNAME_MIN_CHARS, USERNAME_REQUIRED,
};
pub use values::{FormErrors, FormValues};
