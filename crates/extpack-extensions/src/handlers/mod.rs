//! Specification handlers
//!
//! A specification handler knows how one extension type turns its project
//! directory into the config object uploaded with the extension, and whether
//! it can point a preview at a storefront resource.

mod checkout_ui;
mod default;

pub use checkout_ui::{CheckoutUiExtension, CHECKOUT_UI_RENDERER_PACKAGE, PERMITTED_CONFIG_KEYS};
pub use default::{DefaultHandler, DEFAULT_RENDERER_PACKAGE};

use extpack_core::{ExtensionConfig, ExtensionContext};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::product::ProductLookup;

/// Behavior specific to one extension type
pub trait SpecificationHandler {
    /// Extension type identifier (e.g. `CHECKOUT_UI_EXTENSION`)
    fn identifier(&self) -> &str;

    /// Assemble the extension config from the project at `ctx.root()`
    fn config(&self, ctx: &ExtensionContext) -> Result<ExtensionConfig>;

    /// Whether [`build_resource_url`](Self::build_resource_url) can return a URL
    fn supplies_resource_url(&self) -> bool {
        false
    }

    /// Storefront path the extension preview should open, if any
    fn build_resource_url(&self, _ctx: &ExtensionContext, _shop: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Supported extension types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionType {
    CheckoutUi,
    Default,
}

impl ExtensionType {
    /// Create the handler for this extension type
    pub fn handler(self, products: Box<dyn ProductLookup>) -> Box<dyn SpecificationHandler> {
        match self {
            Self::CheckoutUi => Box::new(CheckoutUiExtension::new(products)),
            Self::Default => Box::new(DefaultHandler::new(
                "DEFAULT",
                DEFAULT_RENDERER_PACKAGE,
            )),
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckoutUi => write!(f, "checkout-ui"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl FromStr for ExtensionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "checkout-ui" | "checkout-ui-extension" => Ok(Self::CheckoutUi),
            "default" => Ok(Self::Default),
            _ => Err(format!(
                "Unknown extension type: {s}. Valid types: checkout-ui, default"
            )),
        }
    }
}
