//! Declarative extension config (extension.config.yml) parsing

use crate::context::ExtensionContext;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use serde_yaml_ng::Value as YamlValue;
use std::fs;
use tracing::debug;

/// Declarative config file name, relative to the extension root
pub const CONFIG_FILE_NAME: &str = "extension.config.yml";

/// Parse `extension.config.yml` from the extension root into a JSON mapping.
///
/// A missing or empty file, or a document with no data in it (only
/// comments, or `~`), yields an empty mapping. When `permitted_keys` is not
/// empty every top-level key must appear in it.
pub fn parse_yaml(ctx: &ExtensionContext, permitted_keys: &[&str]) -> Result<Map<String, Value>> {
    let path = ctx.join(CONFIG_FILE_NAME);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No {} found at {}", CONFIG_FILE_NAME, path);
            return Ok(Map::new());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    if content.is_empty() {
        return Ok(Map::new());
    }

    let document: YamlValue = serde_yaml_ng::from_str(&content)?;
    let mapping = match document {
        YamlValue::Null => return Ok(Map::new()),
        YamlValue::Mapping(mapping) => mapping,
        _ => {
            return Err(Error::invalid_config(
                CONFIG_FILE_NAME,
                "expected a mapping at the top level",
            ))
        }
    };

    let mut config = Map::new();
    for (key, value) in mapping {
        let key = key.as_str().ok_or_else(|| {
            Error::invalid_config(CONFIG_FILE_NAME, "top-level keys must be strings")
        })?;
        config.insert(key.to_string(), serde_json::to_value(value)?);
    }

    if !permitted_keys.is_empty() {
        let unpermitted: Vec<String> = config
            .keys()
            .filter(|key| !permitted_keys.contains(&key.as_str()))
            .cloned()
            .collect();
        if !unpermitted.is_empty() {
            return Err(Error::unpermitted_keys(CONFIG_FILE_NAME, unpermitted));
        }
    }

    debug!("Parsed {} keys from {}", config.len(), path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    const PERMITTED: &[&str] = &["extension_points", "metafields", "name"];

    fn context_with(content: Option<&str>) -> (TempDir, ExtensionContext) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        if let Some(content) = content {
            std::fs::write(root.join(CONFIG_FILE_NAME), content).unwrap();
        }
        (temp, ExtensionContext::new(root))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp, ctx) = context_with(None);
        assert!(parse_yaml(&ctx, PERMITTED).unwrap().is_empty());
    }

    #[test]
    fn test_empty_and_comment_only_files_are_empty() {
        let (_temp, ctx) = context_with(Some(""));
        assert!(parse_yaml(&ctx, PERMITTED).unwrap().is_empty());

        let (_temp, ctx) = context_with(Some("# nothing configured yet\n"));
        assert!(parse_yaml(&ctx, PERMITTED).unwrap().is_empty());
    }

    #[test]
    fn test_parses_permitted_keys() {
        let yaml = r#"
name: Gift wrap
extension_points:
  - Checkout::Dynamic::Render
metafields:
  - namespace: gifts
    key: wrap
"#;
        let (_temp, ctx) = context_with(Some(yaml));
        let config = parse_yaml(&ctx, PERMITTED).unwrap();

        assert_eq!(config["name"], "Gift wrap");
        assert_eq!(config["extension_points"][0], "Checkout::Dynamic::Render");
        assert_eq!(config["metafields"][0]["namespace"], "gifts");
    }

    #[test]
    fn test_rejects_unpermitted_keys() {
        let (_temp, ctx) = context_with(Some("name: x\nversion: 2\nzone: a\n"));
        let err = parse_yaml(&ctx, PERMITTED).unwrap_err();

        match err {
            Error::UnpermittedKeys { keys, .. } => assert_eq!(keys, "version, zone"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_allow_list_accepts_anything() {
        let (_temp, ctx) = context_with(Some("anything: goes\n"));
        let config = parse_yaml(&ctx, &[]).unwrap();
        assert_eq!(config["anything"], "goes");
    }

    #[test]
    fn test_rejects_non_mapping_document() {
        let (_temp, ctx) = context_with(Some("- just\n- a list\n"));
        let err = parse_yaml(&ctx, PERMITTED).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_reports_syntax_errors() {
        let (_temp, ctx) = context_with(Some("name: [unterminated\n"));
        let err = parse_yaml(&ctx, PERMITTED).unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }
}
