//! Terminal registration form.
//!
//! Collects a username, a favorite language, a favorite food and a terms
//! agreement, validates them against a fixed schema, and posts them to a
//! registration endpoint.

pub mod config;
pub mod logging;
pub mod registration;
pub mod submit;
pub mod ui;
