// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Clash-Lite Engine
//!
//! Geometric clash detection for BIM models: given building elements with
//! triangle mesh geometry, finds element pairs whose geometry overlaps,
//! classifies each overlap by engineering severity, and aggregates the
//! findings into an exportable result.
//!
//! ## Pipeline
//!
//! - **Bounds**: one axis-aligned bounding box per element, built in parallel
//! - **Exclusion**: symmetric category-pair opt-out, applied before any
//!   geometric work
//! - **Broad phase**: naive O(N²) pair scan with AABB culling, progress
//!   reporting and cooperative cancellation
//! - **Narrow phase**: approximate intersection depth/volume from the AABB
//!   intersection box (deliberately not mesh CSG; swap this module for a
//!   boolean mesh library without touching the rest of the pipeline)
//! - **Classification**: (categories, depth, volume) → clash type + severity
//! - **Aggregation**: deterministic ids, summary counts, grouping views
//!
//! ## Quick Start
//!
//! ```
//! use clash_lite_engine::detect_clashes;
//! use clash_lite_model::{ClashDetectionOptions, Element, ElementCategory, ElementId, MeshData};
//!
//! let elements = vec![
//!     Element::new(ElementId(1), ElementCategory::Wall, "Wall-A").with_geometry(MeshData {
//!         positions: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
//!         indices: vec![],
//!     }),
//!     Element::new(ElementId(2), ElementCategory::Wall, "Wall-B").with_geometry(MeshData {
//!         positions: vec![0.5, 0.5, 0.5, 1.5, 1.5, 1.5],
//!         indices: vec![],
//!     }),
//! ];
//!
//! let result = detect_clashes(&elements, ClashDetectionOptions::default())?;
//! assert_eq!(result.total_checked, 1);
//! assert_eq!(result.hard_clashes, 1);
//! # Ok::<(), clash_lite_model::ClashError>(())
//! ```

pub mod aggregate;
pub mod bounds;
pub mod classify;
pub mod detector;
pub mod exclusion;
pub mod narrow;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

// Re-export main types
pub use aggregate::{
    group_by_category_pair, group_by_severity, ClashAccumulator, ClashFilter, SeverityStats,
};
pub use bounds::{build_bounds_index, BoundingBox};
pub use classify::classify;
pub use detector::{detect_clashes, CancelToken, ClashDetector, PROGRESS_INTERVAL};
pub use exclusion::ExclusionSet;
pub use narrow::{evaluate_pair, Overlap};
