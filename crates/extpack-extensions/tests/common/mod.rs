//! Common test utilities for extpack-extensions
//!
//! Provides an on-disk extension project builder and test doubles for the
//! renderer and product lookup seams.

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
