//! Error types for extpack-core

use thiserror::Error;

/// Result type alias using extpack-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for extpack
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration format
    #[error("Invalid configuration in {file}: {message}")]
    InvalidConfig { file: String, message: String },

    /// Configuration contains keys outside the allow-list
    #[error("Unpermitted keys in {file}: {keys}")]
    UnpermittedKeys { file: String, keys: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON conversion error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an unpermitted keys error from the offending keys
    pub fn unpermitted_keys(file: impl Into<String>, mut keys: Vec<String>) -> Self {
        keys.sort();
        Self::UnpermittedKeys {
            file: file.into(),
            keys: keys.join(", "),
        }
    }
}
