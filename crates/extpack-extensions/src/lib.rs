//! Extension specification handlers for extpack
//!
//! This crate handles:
//! - Locale file discovery, validation and encoding
//! - Renderer config (serialized script and renderer version)
//! - Product lookup for resource URLs
//! - Specification handlers that assemble an extension's config

pub mod error;
pub mod handlers;
pub mod localization;
pub mod product;
pub mod renderer;

pub use error::{Error, FilenameIssue, Result};
pub use handlers::{CheckoutUiExtension, DefaultHandler, ExtensionType, SpecificationHandler};
pub use localization::{build_localization, LocaleFile, Localization};
pub use product::{Product, ProductLookup, StaticProductLookup};
pub use renderer::{ArgoRenderer, RendererConfig};
