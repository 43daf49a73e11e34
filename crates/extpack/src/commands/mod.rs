//! CLI command implementations

pub mod config;
pub mod localization;
pub mod resource_url;

use anyhow::{Context, Result};
use extpack_extensions::{ProductLookup, StaticProductLookup};

use crate::cli::ExtensionArgs;
use extpack_core::ExtensionContext;

/// Context for the extension project named on the command line
fn context_for(args: &ExtensionArgs) -> ExtensionContext {
    ExtensionContext::new(args.root.clone())
}

/// Load preview products, or an empty table when no file is given
fn load_products(path: Option<&camino::Utf8Path>) -> Result<Box<dyn ProductLookup>> {
    let lookup = match path {
        Some(path) => StaticProductLookup::from_json_file(path.as_std_path())
            .with_context(|| format!("Failed to load products from {}", path))?,
        None => StaticProductLookup::new(),
    };
    Ok(Box::new(lookup))
}
