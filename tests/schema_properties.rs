//! Field rules and whole-form validity.

mod common;

use common::valid_values;
use regform::registration::{
    schema, FieldName, FieldValue, FormValues, AGREEMENT_OPTIONS, FAV_FOOD_OPTIONS,
    FAV_LANGUAGE_OPTIONS, USERNAME_MAX, USERNAME_MIN, USERNAME_REQUIRED,
};

fn username_error(value: &str) -> Option<&'static str> {
    schema()
        .validate_field(FieldName::Username, &FieldValue::from(value))
        .err()
        .map(|err| err.message)
}

#[test]
fn username_length_bounds() {
    for len in 1..3 {
        assert_eq!(username_error(&"x".repeat(len)), Some(USERNAME_MIN), "len {}", len);
    }
    for len in 3..=20 {
        assert_eq!(username_error(&"x".repeat(len)), None, "len {}", len);
    }
    for len in 21..=30 {
        assert_eq!(username_error(&"x".repeat(len)), Some(USERNAME_MAX), "len {}", len);
    }
    assert_eq!(username_error(""), Some(USERNAME_REQUIRED));
}

#[test]
fn username_bounds_apply_after_trimming() {
    assert_eq!(username_error(&format!("  {}  ", "x".repeat(20))), None);
    assert_eq!(username_error(&format!("\t{}\n", "x".repeat(2))), Some(USERNAME_MIN));
}

#[test]
fn fav_language_membership() {
    for value in ["javascript", "rust"] {
        assert!(schema()
            .validate_field(FieldName::FavLanguage, &FieldValue::from(value))
            .is_ok());
    }
    for value in ["python", "JavaScript", "rust ", "go"] {
        let err = schema()
            .validate_field(FieldName::FavLanguage, &FieldValue::from(value))
            .unwrap_err();
        assert_eq!(err.message, FAV_LANGUAGE_OPTIONS, "value {:?}", value);
    }
}

#[test]
fn fav_food_membership() {
    for value in ["pizza", "broccoli", "spaghetti"] {
        assert!(schema()
            .validate_field(FieldName::FavFood, &FieldValue::from(value))
            .is_ok());
    }
    for value in ["sushi", "Pizza", "tacos"] {
        let err = schema()
            .validate_field(FieldName::FavFood, &FieldValue::from(value))
            .unwrap_err();
        assert_eq!(err.message, FAV_FOOD_OPTIONS, "value {:?}", value);
    }
}

#[test]
fn agreement_must_be_true() {
    let err = schema()
        .validate_field(FieldName::Agreement, &FieldValue::Flag(false))
        .unwrap_err();
    assert_eq!(err.message, AGREEMENT_OPTIONS);
    assert!(schema()
        .validate_field(FieldName::Agreement, &FieldValue::Flag(true))
        .is_ok());
}

#[test]
fn whole_form_valid_only_when_every_field_passes() {
    let valid = valid_values();
    assert!(schema().is_valid(&valid));
    assert!(schema().validate_all(&valid).is_empty());

    let broken: Vec<FormValues> = vec![
        valid.clone().with(FieldName::Username, "ab"),
        valid.clone().with(FieldName::FavLanguage, "python"),
        valid.clone().with(FieldName::FavFood, ""),
        valid.clone().with(FieldName::Agreement, false),
    ];
    for (field, values) in FieldName::ALL.into_iter().zip(broken) {
        assert!(!schema().is_valid(&values), "{} should break the form", field);
        let errors = schema().validate_all(&values);
        let failing: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(failing, vec![field]);
    }
}

#[test]
fn blank_form_reports_required_for_text_and_accept_for_agreement() {
    let errors = schema().validate_all(&FormValues::default());
    assert_eq!(errors.get(FieldName::Username), Some(USERNAME_REQUIRED));
    assert_eq!(errors.get(FieldName::FavLanguage), Some("favLanguage is required"));
    assert_eq!(errors.get(FieldName::FavFood), Some("favFood is required"));
    assert_eq!(errors.get(FieldName::Agreement), Some(AGREEMENT_OPTIONS));
}
