//! Checkout UI extension handler

use camino::Utf8Component;
use extpack_core::{parse_yaml, ExtensionConfig, ExtensionContext};
use tracing::{debug, info};

use super::SpecificationHandler;
use crate::error::{Error, Result};
use crate::localization::build_localization;
use crate::product::ProductLookup;
use crate::renderer::{ArgoRenderer, RendererConfig};

/// Top-level keys allowed in a checkout UI extension's extension.config.yml
pub const PERMITTED_CONFIG_KEYS: &[&str] = &["extension_points", "metafields", "name"];

/// Renderer package for checkout UI extensions
pub const CHECKOUT_UI_RENDERER_PACKAGE: &str = "@shopify/checkout-ui-extensions";

/// Quantity of the preview variant placed in the cart
const RESOURCE_QUANTITY: u32 = 1;

/// Checkout UI extensions: declarative config, renderer script, and
/// localization, previewed through a cart permalink.
pub struct CheckoutUiExtension {
    renderer: Box<dyn RendererConfig>,
    products: Box<dyn ProductLookup>,
}

impl CheckoutUiExtension {
    pub fn new(products: Box<dyn ProductLookup>) -> Self {
        Self {
            renderer: Box::new(ArgoRenderer::new(CHECKOUT_UI_RENDERER_PACKAGE)),
            products,
        }
    }

    /// Replace the renderer config source
    pub fn with_renderer(mut self, renderer: Box<dyn RendererConfig>) -> Self {
        self.renderer = renderer;
        self
    }
}

impl SpecificationHandler for CheckoutUiExtension {
    fn identifier(&self) -> &str {
        "CHECKOUT_UI_EXTENSION"
    }

    /// Merge, later sources winning on key conflicts:
    /// 1. extension.config.yml, restricted to [`PERMITTED_CONFIG_KEYS`]
    /// 2. renderer config without the renderer version
    /// 3. the `localization` block, when the extension has locale files
    fn config(&self, ctx: &ExtensionContext) -> Result<ExtensionConfig> {
        info!("Building {} config from {}", self.identifier(), ctx.root());
        ensure_script_outside_root(ctx)?;

        let mut config = ExtensionConfig::from(parse_yaml(ctx, PERMITTED_CONFIG_KEYS)?);
        config.merge(self.renderer.config(ctx, false)?);

        match build_localization(ctx.root().as_std_path())? {
            Some(localization) => config.merge(localization.into_config()?),
            None => debug!("Extension has no localization"),
        }

        Ok(config)
    }

    fn supplies_resource_url(&self) -> bool {
        true
    }

    fn build_resource_url(&self, ctx: &ExtensionContext, shop: &str) -> Result<Option<String>> {
        let Some(product) = self.products.get_product(ctx, shop)? else {
            debug!("No product found for {}", shop);
            return Ok(None);
        };

        Ok(Some(format!(
            "/cart/{}:{}",
            product.variant_id, RESOURCE_QUANTITY
        )))
    }
}

/// Reject a built bundle that exists in a subdirectory of the root: the
/// locale scan would fail on it with a less helpful directory error.
fn ensure_script_outside_root(ctx: &ExtensionContext) -> Result<()> {
    let script = ctx.script_path();
    let Ok(relative) = script.strip_prefix(ctx.root()) else {
        return Ok(());
    };

    let in_subdirectory = relative.components().count() > 1
        && relative
            .components()
            .all(|c| matches!(c, Utf8Component::Normal(_)));

    if in_subdirectory && script.is_file() {
        return Err(Error::ScriptInsideRoot {
            path: relative.to_string(),
        });
    }

    Ok(())
}
