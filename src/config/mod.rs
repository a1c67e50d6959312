//! TOML configuration for the registration client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, LoggingConfig};
