//! # extpack-core
//!
//! Core library for the extpack CLI providing:
//! - The extension context (project root and built renderer bundle)
//! - Declarative config parsing (extension.config.yml) with key allow-lists
//! - The merged extension config value
//! - Shared formatting utilities

pub mod config;
pub mod context;
pub mod error;
pub mod utils;

pub use config::{parse_yaml, ExtensionConfig, CONFIG_FILE_NAME};
pub use context::ExtensionContext;
pub use error::{Error, Result};
pub use utils::format_bytes;
