//! Configuration loading and management

mod extension_config;
mod loader;

pub use extension_config::ExtensionConfig;
pub use loader::{parse_yaml, CONFIG_FILE_NAME};
