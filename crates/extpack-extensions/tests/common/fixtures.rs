//! Extension project fixtures

use camino::Utf8PathBuf;
use extpack_core::ExtensionContext;
use std::path::Path;
use tempfile::TempDir;

/// Temporary extension project on disk
pub struct ExtensionFixture {
    temp_dir: TempDir,
}

impl ExtensionFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Extension root directory
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Context rooted at the fixture
    pub fn context(&self) -> ExtensionContext {
        let root = Utf8PathBuf::try_from(self.root().to_path_buf()).expect("temp path is UTF-8");
        ExtensionContext::new(root)
    }

    /// Write a file relative to the root, creating parent directories
    pub fn file(self, relative: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write fixture file");
        self
    }

    /// Write a locale file of `size` bytes of valid JSON-ish UTF-8
    pub fn locale_of_size(self, relative: &str, size: usize) -> Self {
        let content = sized_json(size);
        self.file(relative, content)
    }

    /// Write extension.config.yml
    pub fn config_yaml(self, yaml: &str) -> Self {
        self.file("extension.config.yml", yaml)
    }
}

/// A JSON document of exactly `size` bytes (minimum 2)
pub fn sized_json(size: usize) -> String {
    let padding = size.saturating_sub(2);
    format!("\"{}\"", "a".repeat(padding))
}
