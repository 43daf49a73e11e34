//! Test doubles for handler collaborators

use extpack_core::ExtensionContext;
use extpack_extensions::{Product, ProductLookup, RendererConfig, Result};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

/// Renderer returning a fixed mapping and recording the version flag
#[derive(Clone, Default)]
pub struct MockRenderer {
    config: Map<String, Value>,
    calls: Arc<Mutex<Vec<bool>>>,
}

impl MockRenderer {
    pub fn returning(config: Value) -> Self {
        let config = match config {
            Value::Object(map) => map,
            _ => panic!("mock renderer config must be an object"),
        };
        Self {
            config,
            calls: Arc::default(),
        }
    }

    /// `include_renderer_version` flags seen so far
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

impl RendererConfig for MockRenderer {
    fn config(
        &self,
        _ctx: &ExtensionContext,
        include_renderer_version: bool,
    ) -> Result<Map<String, Value>> {
        self.calls.lock().unwrap().push(include_renderer_version);
        Ok(self.config.clone())
    }
}

/// Product lookup that records the shops it was asked about
#[derive(Clone, Default)]
pub struct MockProductLookup {
    product: Option<Product>,
    shops: Arc<Mutex<Vec<String>>>,
}

impl MockProductLookup {
    pub fn with_variant(variant_id: u64) -> Self {
        Self {
            product: Some(Product::new(variant_id)),
            shops: Arc::default(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn shops(&self) -> Vec<String> {
        self.shops.lock().unwrap().clone()
    }
}

impl ProductLookup for MockProductLookup {
    fn get_product(&self, _ctx: &ExtensionContext, shop: &str) -> Result<Option<Product>> {
        self.shops.lock().unwrap().push(shop.to_string());
        Ok(self.product.clone())
    }
}
