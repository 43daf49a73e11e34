//! Extension context shared by every build step

use camino::{Utf8Path, Utf8PathBuf};

/// Default location of the built renderer bundle, relative to the root
pub const DEFAULT_SCRIPT_PATH: &str = "build/main.js";

/// The extension project a build step operates on.
///
/// Every path is resolved by joining against `root`; nothing here touches
/// the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionContext {
    /// Extension project root
    root: Utf8PathBuf,

    /// Built renderer bundle, when it lives somewhere other than the default
    script_path: Option<Utf8PathBuf>,
}

impl ExtensionContext {
    /// Create a context rooted at `root`
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            script_path: None,
        }
    }

    /// Override the built renderer bundle location
    pub fn with_script_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    /// Extension project root
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Resolve a path relative to the extension root
    pub fn join(&self, relative: impl AsRef<Utf8Path>) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Location of the built renderer bundle
    ///
    /// A relative override is resolved against the root.
    pub fn script_path(&self) -> Utf8PathBuf {
        match &self.script_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.join(path),
            None => self.join(DEFAULT_SCRIPT_PATH),
        }
    }
}
