//! Locale file discovery and encoding
//!
//! Locale files live in a single `locales/` directory directly under the
//! extension root and are named after their locale code:
//!
//! ```text
//! my-extension/
//! ├── extension.config.yml      (root files are never locale candidates)
//! └── locales/
//!     ├── en.default.json       (exactly one file carries `.default`)
//!     ├── fr.json
//!     └── pt-BR.json
//! ```
//!
//! Every other file below the root is an error, so a stray `assets/x.png`
//! fails the build instead of being silently ignored. Hidden entries are
//! not visited. Links to files are followed; links to directories are not.
//!
//! Localization is optional: a root without locale files produces `None`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, FilenameIssue, Result};

/// Directory (relative to the root) holding locale files
pub const L10N_DIRECTORY: &str = "locales";

/// Only extension accepted for locale files
pub const L10N_EXTENSION: &str = "json";

/// Per-file size limit in bytes
pub const L10N_SIZE_LIMIT: u64 = 64 * 1024;

/// Marker between the locale code and the extension of the default locale
const DEFAULT_MARKER: &str = ".default";

/// Key under which the localization block is merged into the config
pub const LOCALIZATION_KEY: &str = "localization";

static LOCALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$").expect("locale regex is valid"));

/// Check whether `code` is a well-formed locale code (`en`, `en-US`, `fil`)
pub fn is_valid_locale(code: &str) -> bool {
    LOCALE_RE.is_match(code)
}

/// Localization block of an extension config
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Localization {
    /// Locale code of the `.default` file
    pub default_locale: String,

    /// Locale code to base64-encoded file content, ordered by locale code
    pub files: BTreeMap<String, String>,
}

impl Localization {
    /// Wrap the block under the `localization` key, ready to merge
    pub fn into_config(self) -> Result<Map<String, Value>> {
        let mut config = Map::new();
        config.insert(LOCALIZATION_KEY.to_string(), serde_json::to_value(self)?);
        Ok(config)
    }
}

/// A locale file that passed filename validation
#[derive(Debug, Clone, PartialEq, Eq)]
struct LocaleCandidate {
    /// Path relative to the extension root
    path: PathBuf,
    locale: String,
    is_default: bool,
}

/// Outcome of checking one regular file under the root
#[derive(Debug, PartialEq, Eq)]
enum Scanned {
    Locale(LocaleCandidate),
    Skip,
}

/// A locale file read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Path relative to the extension root
    pub path: PathBuf,

    /// Locale code derived from the filename
    pub locale: String,

    /// Whether the filename carries the `.default` marker
    pub is_default: bool,

    /// Raw file content, guaranteed to be UTF-8
    pub content: Vec<u8>,
}

impl LocaleFile {
    fn read(root: &Path, candidate: LocaleCandidate) -> Result<Self> {
        let content = fs::read(root.join(&candidate.path))?;
        if std::str::from_utf8(&content).is_err() {
            return Err(Error::InvalidEncoding {
                path: candidate.path.display().to_string(),
            });
        }

        Ok(Self {
            path: candidate.path,
            locale: candidate.locale,
            is_default: candidate.is_default,
            content,
        })
    }

    /// Base64 (standard alphabet, padded) of the file content
    pub fn encoded(&self) -> String {
        STANDARD.encode(&self.content)
    }
}

/// Build the localization block for the extension rooted at `root`.
///
/// Validation stops at the first offending file. Returns `Ok(None)` when no
/// locale files exist.
pub fn build_localization(root: &Path) -> Result<Option<Localization>> {
    let candidates = scan(root)?;

    if candidates.is_empty() {
        debug!("No locale files under {}", root.display());
        return Ok(None);
    }

    let defaults: Vec<&LocaleCandidate> = candidates.iter().filter(|c| c.is_default).collect();
    let default_locale = match defaults.as_slice() {
        [only] => only.locale.clone(),
        _ => {
            return Err(Error::SingleDefaultLocale {
                found: defaults.len(),
            })
        }
    };

    let mut files = BTreeMap::new();
    for candidate in candidates {
        let file = match files.entry(candidate.locale.clone()) {
            Entry::Occupied(_) => {
                return Err(Error::DuplicateLocale {
                    locale: candidate.locale,
                    path: candidate.path.display().to_string(),
                })
            }
            Entry::Vacant(slot) => {
                let file = LocaleFile::read(root, candidate)?;
                slot.insert(file.encoded());
                file
            }
        };
        debug!(
            "Encoded {} ({} bytes{})",
            file.path.display(),
            file.content.len(),
            if file.is_default { ", default" } else { "" }
        );
    }

    info!(
        "Found {} locale file(s), default locale '{}'",
        files.len(),
        default_locale
    );

    Ok(Some(Localization {
        default_locale,
        files,
    }))
}

/// Walk the root and validate every regular file, in file-name order
fn scan(root: &Path) -> Result<Vec<LocaleCandidate>> {
    let mut candidates = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        // Directory links are not descended into, but a link to a regular
        // file counts as that file. Dangling links are ignored.
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => continue,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(Error::Io(e)),
        };

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let size = metadata.len();

        match classify(relative, size)? {
            Scanned::Locale(candidate) => candidates.push(candidate),
            Scanned::Skip => debug!("Skipping root file {}", relative.display()),
        }
    }

    Ok(candidates)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Apply the locale file rules to one file, given its path relative to the
/// root and its size in bytes.
fn classify(relative: &Path, size: u64) -> Result<Scanned> {
    let directory = relative.parent().unwrap_or_else(|| Path::new(""));
    if directory.as_os_str().is_empty() {
        return Ok(Scanned::Skip);
    }

    if directory != Path::new(L10N_DIRECTORY) {
        return Err(Error::invalid_filename(
            relative,
            FilenameIssue::InvalidDirectory {
                directory: directory.display().to_string(),
            },
        ));
    }

    if relative.extension().and_then(|ext| ext.to_str()) != Some(L10N_EXTENSION) {
        return Err(Error::invalid_filename(
            relative,
            FilenameIssue::InvalidExtension,
        ));
    }

    let stem = relative
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (locale, is_default) = match stem.strip_suffix(DEFAULT_MARKER) {
        Some(locale) => (locale.to_string(), true),
        None => (stem, false),
    };

    if !is_valid_locale(&locale) {
        return Err(Error::invalid_filename(
            relative,
            FilenameIssue::InvalidLocale { locale },
        ));
    }

    if size > L10N_SIZE_LIMIT {
        return Err(Error::file_too_large(relative, size, L10N_SIZE_LIMIT));
    }

    Ok(Scanned::Locale(LocaleCandidate {
        path: relative.to_path_buf(),
        locale,
        is_default,
    }))
}
