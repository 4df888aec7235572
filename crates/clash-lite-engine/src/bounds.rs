// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes and the per-element bounds index

use clash_lite_model::{Element, ElementId};
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Axis-aligned bounding box
///
/// Derived once per element from its vertex buffer; immutable for the
/// duration of one detection run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Point3<f64>,
    /// Maximum corner
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Build a bounding box from a flattened [x, y, z, ...] vertex buffer
    ///
    /// A single pass over the buffer, stride 3. Returns `None` for an empty
    /// buffer, a buffer whose length is not a multiple of 3, or one that
    /// contains non-finite coordinates. Malformed buffers are treated as
    /// "no geometry", never as an error.
    pub fn from_positions(positions: &[f32]) -> Option<Self> {
        if positions.is_empty() || positions.len() % 3 != 0 {
            return None;
        }

        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

        for vertex in positions.chunks_exact(3) {
            let (x, y, z) = (vertex[0] as f64, vertex[1] as f64, vertex[2] as f64);
            if !(x.is_finite() && y.is_finite() && z.is_finite()) {
                return None;
            }
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        }

        Some(Self { min, max })
    }

    /// Check whether two boxes overlap (touching counts as overlapping)
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Exact intersection box via per-axis min/max clamp
    ///
    /// Returns `None` when the boxes do not actually overlap, which can
    /// happen at the broad-phase boundary under floating-point edge cases.
    pub fn intersection(&self, other: &Self) -> Option<BoundingBox> {
        let min = Point3::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.min.z.max(other.min.z),
        );
        let max = Point3::new(
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
            self.max.z.min(other.max.z),
        );
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return None;
        }
        Some(BoundingBox { min, max })
    }

    /// Box center
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Per-axis extents
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Box volume
    pub fn volume(&self) -> f64 {
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// Smallest per-axis extent
    pub fn min_extent(&self) -> f64 {
        let e = self.extents();
        e.x.min(e.y).min(e.z)
    }
}

/// Build the bounding box index for a set of elements
///
/// Elements without usable geometry produce no entry. O(total vertex count);
/// elements map in parallel, and the result is order-independent.
pub fn build_bounds_index(elements: &[Element]) -> FxHashMap<ElementId, BoundingBox> {
    elements
        .par_iter()
        .filter_map(|element| {
            let mesh = element.geometry.as_ref()?;
            BoundingBox::from_positions(&mesh.positions).map(|bounds| (element.id, bounds))
        })
        .collect()
}
