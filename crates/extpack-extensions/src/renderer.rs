//! Renderer config: the built script and the renderer package version

use base64::{engine::general_purpose::STANDARD, Engine as _};
use extpack_core::ExtensionContext;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use tracing::debug;

use crate::error::{Error, Result};

/// Key holding the base64 of the built script
pub const SERIALIZED_SCRIPT_KEY: &str = "serialized_script";

/// Key holding the resolved renderer package version
pub const RENDERER_VERSION_KEY: &str = "renderer_version";

/// Source of the renderer part of an extension config
pub trait RendererConfig {
    /// Produce the renderer config for the extension, optionally including
    /// the renderer package version.
    fn config(&self, ctx: &ExtensionContext, include_renderer_version: bool)
        -> Result<Map<String, Value>>;
}

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: HashMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, String>,
}

/// Renderer config for script-based UI extensions
#[derive(Debug, Clone)]
pub struct ArgoRenderer {
    /// npm package providing the renderer
    package: String,
}

impl ArgoRenderer {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    fn serialized_script(&self, ctx: &ExtensionContext) -> Result<String> {
        let path = ctx.script_path();
        let script = fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ScriptNotFound {
                    path: path.to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        debug!("Serialized {} ({} bytes)", path, script.len());
        Ok(STANDARD.encode(script))
    }

    fn renderer_version(&self, ctx: &ExtensionContext) -> Result<String> {
        let not_found = || Error::RendererVersionNotFound {
            package: self.package.clone(),
        };

        let content = match fs::read_to_string(ctx.join("package.json")) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(Error::Io(e)),
        };
        let package_json: PackageJson = serde_json::from_str(&content)?;

        let requirement = package_json
            .dependencies
            .get(&self.package)
            .or_else(|| package_json.dev_dependencies.get(&self.package))
            .ok_or_else(not_found)?;

        let version = strip_range_operator(requirement);
        if version.is_empty() {
            return Err(not_found());
        }
        Ok(version.to_string())
    }
}

/// Strip a leading semver range operator (`^1.2.0` -> `1.2.0`)
fn strip_range_operator(requirement: &str) -> &str {
    requirement
        .trim()
        .trim_start_matches(['^', '~', '=', '>', '<'])
        .trim()
}

impl RendererConfig for ArgoRenderer {
    fn config(
        &self,
        ctx: &ExtensionContext,
        include_renderer_version: bool,
    ) -> Result<Map<String, Value>> {
        let mut config = Map::new();
        config.insert(
            SERIALIZED_SCRIPT_KEY.to_string(),
            Value::String(self.serialized_script(ctx)?),
        );

        if include_renderer_version {
            config.insert(
                RENDERER_VERSION_KEY.to_string(),
                Value::String(self.renderer_version(ctx)?),
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    const PACKAGE: &str = "@shopify/checkout-ui-extensions";

    fn extension_root() -> (TempDir, ExtensionContext) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("build")).unwrap();
        std::fs::write(root.join("build/main.js"), "console.log('hi');").unwrap();
        (temp, ExtensionContext::new(root))
    }

    #[test]
    fn test_serializes_script_without_version() {
        let (_temp, ctx) = extension_root();
        let config = ArgoRenderer::new(PACKAGE).config(&ctx, false).unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(
            config[SERIALIZED_SCRIPT_KEY],
            STANDARD.encode("console.log('hi');")
        );
    }

    #[test]
    fn test_includes_renderer_version() {
        let (_temp, ctx) = extension_root();
        std::fs::write(
            ctx.join("package.json"),
            format!(r#"{{"dependencies": {{"{PACKAGE}": "^0.14.1"}}}}"#),
        )
        .unwrap();

        let config = ArgoRenderer::new(PACKAGE).config(&ctx, true).unwrap();
        assert_eq!(config[RENDERER_VERSION_KEY], "0.14.1");
    }

    #[test]
    fn test_falls_back_to_dev_dependencies() {
        let (_temp, ctx) = extension_root();
        std::fs::write(
            ctx.join("package.json"),
            format!(r#"{{"devDependencies": {{"{PACKAGE}": "~1.0.0"}}}}"#),
        )
        .unwrap();

        let config = ArgoRenderer::new(PACKAGE).config(&ctx, true).unwrap();
        assert_eq!(config[RENDERER_VERSION_KEY], "1.0.0");
    }

    #[test]
    fn test_missing_renderer_package() {
        let (_temp, ctx) = extension_root();
        std::fs::write(ctx.join("package.json"), r#"{"dependencies": {}}"#).unwrap();

        let err = ArgoRenderer::new(PACKAGE).config(&ctx, true).unwrap_err();
        assert!(matches!(err, Error::RendererVersionNotFound { .. }));
    }

    #[test]
    fn test_missing_script() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let ctx = ExtensionContext::new(root);

        let err = ArgoRenderer::new(PACKAGE).config(&ctx, false).unwrap_err();
        assert!(matches!(err, Error::ScriptNotFound { .. }));
    }

    #[test]
    fn test_strip_range_operator() {
        assert_eq!(strip_range_operator("^1.2.3"), "1.2.3");
        assert_eq!(strip_range_operator(">= 2.0.0"), "2.0.0");
        assert_eq!(strip_range_operator("0.9.0"), "0.9.0");
    }
}
