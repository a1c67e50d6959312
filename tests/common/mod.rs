//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use regform::config::EndpointConfig;
use regform::registration::{ControlEvent, FieldName, FormValues};
use regform::ui::app::App;
use std::net::TcpListener;

/// Values that pass every rule.
pub fn valid_values() -> FormValues {
    FormValues {
        username: "abc".to_string(),
        fav_language: "rust".to_string(),
        fav_food: "pizza".to_string(),
        agreement: true,
    }
}

/// Endpoint config pointing at `url` with short timeouts.
pub fn endpoint(url: &str) -> EndpointConfig {
    EndpointConfig {
        url: url.to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: 5,
    }
}

/// A URL nothing is listening on.
pub fn closed_endpoint_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/registration", port)
}

/// Drive the four controls the way a user would.
pub fn fill_form(app: &mut App, values: &FormValues) {
    app.on_field_change(
        FieldName::Username,
        ControlEvent::Text {
            value: values.username.clone(),
        },
    );
    app.on_field_change(
        FieldName::FavLanguage,
        ControlEvent::Radio {
            value: values.fav_language.clone(),
        },
    );
    app.on_field_change(
        FieldName::FavFood,
        ControlEvent::Select {
            value: values.fav_food.clone(),
        },
    );
    app.on_field_change(
        FieldName::Agreement,
        ControlEvent::Checkbox {
            checked: values.agreement,
        },
    );
}
