//! Handler for extension types without special config rules

use extpack_core::{ExtensionConfig, ExtensionContext};
use tracing::info;

use super::SpecificationHandler;
use crate::error::Result;
use crate::renderer::{ArgoRenderer, RendererConfig};

/// Renderer package used by extension types without their own
pub const DEFAULT_RENDERER_PACKAGE: &str = "@shopify/argo-admin";

/// Config is the renderer config, including the renderer version
pub struct DefaultHandler {
    identifier: String,
    renderer: Box<dyn RendererConfig>,
}

impl DefaultHandler {
    pub fn new(identifier: impl Into<String>, renderer_package: &str) -> Self {
        Self {
            identifier: identifier.into(),
            renderer: Box::new(ArgoRenderer::new(renderer_package)),
        }
    }

    /// Replace the renderer config source
    pub fn with_renderer(mut self, renderer: Box<dyn RendererConfig>) -> Self {
        self.renderer = renderer;
        self
    }
}

impl SpecificationHandler for DefaultHandler {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn config(&self, ctx: &ExtensionContext) -> Result<ExtensionConfig> {
        info!("Building {} config from {}", self.identifier, ctx.root());
        Ok(ExtensionConfig::from(self.renderer.config(ctx, true)?))
    }
}
