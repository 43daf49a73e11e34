//! Error types for extpack-extensions

use extpack_core::format_bytes;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Result type alias using extpack-extensions' Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Why a file under the extension root is not an acceptable locale file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameIssue {
    /// File lives in a subdirectory other than `locales`
    InvalidDirectory { directory: String },

    /// File inside `locales` without a `.json` extension
    InvalidExtension,

    /// Filename does not reduce to a locale code such as `en` or `en-US`
    InvalidLocale { locale: String },
}

impl fmt::Display for FilenameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirectory { directory } => write!(
                f,
                "invalid directory '{directory}', locale files must be placed in 'locales'"
            ),
            Self::InvalidExtension => write!(f, "only .json files are allowed in 'locales'"),
            Self::InvalidLocale { locale } => write!(f, "invalid locale format '{locale}'"),
        }
    }
}

/// Extension build errors
#[derive(Error, Debug)]
pub enum Error {
    /// A file under the extension root breaks the locale naming rules
    #[error("Invalid filename {path}: {reason}")]
    InvalidFilename { path: String, reason: FilenameIssue },

    /// Zero or several files carry the `.default` marker
    #[error("There must be one and only one locale identified as the default locale (found {found})")]
    SingleDefaultLocale { found: usize },

    /// A locale file exceeds the per-file size limit
    #[error("Locale file {path} is {}; single file size must not exceed {}", human(.size), human(.limit))]
    FileTooLarge { path: String, size: u64, limit: u64 },

    /// Two locale files resolve to the same locale code
    #[error("Locale '{locale}' is defined more than once (again in {path})")]
    DuplicateLocale { locale: String, path: String },

    /// A locale file is not valid UTF-8 text
    #[error("Locale file {path} is not valid UTF-8")]
    InvalidEncoding { path: String },

    /// The built renderer bundle does not exist
    #[error("Built script not found at {path}; build the extension or pass its location with --script")]
    ScriptNotFound { path: String },

    /// The built renderer bundle sits in a subdirectory of the extension
    /// root, where only `locales/` is allowed
    #[error("Built script {path} is inside the extension root, where only 'locales/' may contain files; build it outside the root and pass its location with --script")]
    ScriptInsideRoot { path: String },

    /// The renderer package is not declared in package.json
    #[error("Could not determine the version of renderer package '{package}' from package.json")]
    RendererVersionNotFound { package: String },

    /// Core error (config parsing)
    #[error(transparent)]
    Core(#[from] extpack_core::Error),

    /// Directory traversal error
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn human(bytes: &u64) -> String {
    format_bytes(*bytes)
}

impl Error {
    /// Create an invalid filename error for a path relative to the root
    pub fn invalid_filename(path: &Path, reason: FilenameIssue) -> Self {
        Self::InvalidFilename {
            path: path.display().to_string(),
            reason,
        }
    }

    /// Create a file too large error
    pub fn file_too_large(path: &Path, size: u64, limit: u64) -> Self {
        Self::FileTooLarge {
            path: path.display().to_string(),
            size,
            limit,
        }
    }
}
