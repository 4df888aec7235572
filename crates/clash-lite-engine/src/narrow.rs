// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Narrow-phase intersection evaluation
//!
//! Approximates the overlap of two elements by the intersection of their
//! bounding boxes. This intentionally under- and over-reports relative to
//! exact CSG for non-box-like geometry; swapping in a boolean mesh library
//! replaces only this module, since the component boundary (boxes in,
//! depth/volume out) stays the same.

use crate::bounds::BoundingBox;
use nalgebra::Point3;

/// Measured overlap between two candidate elements
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    /// Minimum extent of the intersection box
    pub depth: f64,
    /// Volume of the intersection box
    pub volume: f64,
    /// Midpoint between the two elements' own box centers
    ///
    /// Not necessarily inside the intersection region; an approximation of
    /// the conflict location, not the intersection centroid.
    pub center: Point3<f64>,
}

/// Evaluate a candidate pair with known-overlapping bounding boxes
///
/// Returns `None` when the intersection is empty (floating-point edge cases
/// at the broad-phase boundary), when the intersection volume falls below
/// `tolerance` (applied as a volume threshold), or when the arithmetic
/// produces non-finite values. A failed evaluation skips this pair only.
pub fn evaluate_pair(a: &BoundingBox, b: &BoundingBox, tolerance: f64) -> Option<Overlap> {
    let intersection = a.intersection(b)?;

    let depth = intersection.min_extent();
    let volume = intersection.volume();
    if !depth.is_finite() || !volume.is_finite() {
        return None;
    }
    if volume < tolerance {
        return None;
    }

    let center = nalgebra::center(&a.center(), &b.center());
    Some(Overlap {
        depth,
        volume,
        center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube(lo: f64, hi: f64) -> BoundingBox {
        BoundingBox {
            min: Point3::new(lo, lo, lo),
            max: Point3::new(hi, hi, hi),
        }
    }

    #[test]
    fn test_overlapping_unit_cubes() {
        let overlap = evaluate_pair(&cube(0.0, 1.0), &cube(0.5, 1.5), 0.001).unwrap();
        assert_relative_eq!(overlap.depth, 0.5);
        assert_relative_eq!(overlap.volume, 0.125);
        // Midpoint of the two cube centers (0.5,0.5,0.5) and (1.0,1.0,1.0)
        assert_eq!(overlap.center, Point3::new(0.75, 0.75, 0.75));
    }

    #[test]
    fn test_disjoint_boxes_return_none() {
        assert!(evaluate_pair(&cube(0.0, 1.0), &cube(5.0, 6.0), 0.001).is_none());
    }

    #[test]
    fn test_volume_below_tolerance_is_no_clash() {
        // Overlap volume is exactly 0.001
        let a = cube(0.0, 1.0);
        let b = BoundingBox {
            min: Point3::new(0.9, 0.9, 0.9),
            max: Point3::new(1.9, 1.9, 1.9),
        };
        assert!(evaluate_pair(&a, &b, 0.01).is_none());
        assert!(evaluate_pair(&a, &b, 0.001).is_some());
    }

    #[test]
    fn test_touching_faces_have_zero_volume() {
        let a = cube(0.0, 1.0);
        let b = BoundingBox {
            min: Point3::new(1.0, 0.0, 0.0),
            max: Point3::new(2.0, 1.0, 1.0),
        };
        // Intersection is a degenerate face: volume 0 < any positive tolerance
        assert!(evaluate_pair(&a, &b, 1e-12).is_none());
    }
}
