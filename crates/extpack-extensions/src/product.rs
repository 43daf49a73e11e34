//! Product lookup used to build checkout resource URLs

use extpack_core::ExtensionContext;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// A shop product a checkout extension can be previewed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Variant added to the cart when previewing
    pub variant_id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Product {
    pub fn new(variant_id: u64) -> Self {
        Self {
            variant_id,
            title: None,
        }
    }
}

/// Source of preview products for a shop
pub trait ProductLookup {
    /// Find a product for `shop`, or `None` when the shop has no products
    fn get_product(&self, ctx: &ExtensionContext, shop: &str) -> Result<Option<Product>>;
}

/// In-memory shop to product table
///
/// Loadable from a JSON file shaped like:
///
/// ```json
/// { "example.myshopify.com": { "variant_id": 12345, "title": "T-shirt" } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticProductLookup {
    products: HashMap<String, Product>,
}

impl StaticProductLookup {
    /// Create an empty lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the product for a shop
    pub fn with_product(mut self, shop: impl Into<String>, product: Product) -> Self {
        self.products.insert(shop.into(), product);
        self
    }

    /// Load a shop to product table from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let products: HashMap<String, Product> = serde_json::from_str(&content)?;
        debug!("Loaded products for {} shop(s) from {}", products.len(), path.display());
        Ok(Self { products })
    }
}

impl ProductLookup for StaticProductLookup {
    fn get_product(&self, _ctx: &ExtensionContext, shop: &str) -> Result<Option<Product>> {
        Ok(self.products.get(shop).cloned())
    }
}
