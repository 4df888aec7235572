// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clash-Lite Model - Shared types for BIM clash detection
//!
//! This crate defines the data model exchanged between the clash detection
//! engine and its callers: building elements with optional mesh geometry,
//! run configuration, and the clash records the engine produces. It carries
//! no geometry math; the engine crate owns that.
//!
//! # Architecture
//!
//! - [`Element`] / [`MeshData`] - input elements as produced by an upstream
//!   model parser
//! - [`ElementCategory`] - typed element classification (structural, MEP, ...)
//! - [`ClashDetectionOptions`] - run configuration with fail-fast validation
//! - [`Clash`] / [`ClashDetectionResult`] - immutable run outputs
//!   (`resolved`/`notes` are owned by the presentation layer afterwards)
//!
//! # Example
//!
//! ```
//! use clash_lite_model::{ClashDetectionOptions, Element, ElementCategory, ElementId};
//!
//! let wall = Element::new(ElementId(1), ElementCategory::Wall, "Wall-A");
//! assert!(wall.geometry.is_none());
//!
//! let options = ClashDetectionOptions::default();
//! assert!(options.validate().is_ok());
//! ```

pub mod clash;
pub mod element;
pub mod error;
pub mod options;
pub mod types;

// Re-export all public types
pub use clash::*;
pub use element::*;
pub use error::*;
pub use options::*;
pub use types::*;
