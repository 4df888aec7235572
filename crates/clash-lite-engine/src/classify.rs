// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clash classification
//!
//! Maps element categories and the measured overlap onto a clash type and an
//! engineering severity. Pure functions; all thresholds are in the model's
//! native unit system (meters / cubic meters).

use clash_lite_model::{ClashDetectionOptions, ClashSeverity, ClashType, ElementCategory};

/// Classify an overlap into clash type and severity
///
/// Type rules, in order:
/// 1. both categories structural and depth above tolerance → hard
/// 2. one structural, the other MEP → hard, regardless of depth
/// 3. depth below the clearance distance → soft
/// 4. otherwise → clearance
///
/// Severity depends only on the overlap magnitude, with strict `>` at each
/// threshold.
pub fn classify(
    cat1: &ElementCategory,
    cat2: &ElementCategory,
    depth: f64,
    volume: f64,
    options: &ClashDetectionOptions,
) -> (ClashType, ClashSeverity) {
    (
        clash_type(cat1, cat2, depth, options),
        severity(depth, volume),
    )
}

fn clash_type(
    cat1: &ElementCategory,
    cat2: &ElementCategory,
    depth: f64,
    options: &ClashDetectionOptions,
) -> ClashType {
    if cat1.is_structural() && cat2.is_structural() && depth > options.tolerance {
        return ClashType::Hard;
    }

    if (cat1.is_structural() && cat2.is_mep()) || (cat1.is_mep() && cat2.is_structural()) {
        return ClashType::Hard;
    }

    if depth < options.clearance_distance {
        return ClashType::Soft;
    }

    ClashType::Clearance
}

fn severity(depth: f64, volume: f64) -> ClashSeverity {
    if volume > 1.0 || depth > 100.0 {
        return ClashSeverity::Critical;
    }
    if volume > 0.1 || depth > 50.0 {
        return ClashSeverity::Major;
    }
    if volume > 0.01 || depth > 10.0 {
        return ClashSeverity::Minor;
    }
    ClashSeverity::Warning
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ClashDetectionOptions {
        ClashDetectionOptions::default()
    }

    #[test]
    fn test_structural_pair_above_tolerance_is_hard() {
        let (ty, _) = classify(
            &ElementCategory::Wall,
            &ElementCategory::Column,
            0.5,
            0.125,
            &options(),
        );
        assert_eq!(ty, ClashType::Hard);
    }

    #[test]
    fn test_structural_pair_below_tolerance_is_not_hard() {
        // Depth at exactly the tolerance fails the strict comparison and
        // falls through to the clearance rules.
        let opts = ClashDetectionOptions {
            tolerance: 0.5,
            ..options()
        };
        let (ty, _) = classify(
            &ElementCategory::Wall,
            &ElementCategory::Slab,
            0.5,
            0.125,
            &opts,
        );
        assert_eq!(ty, ClashType::Clearance);
    }

    #[test]
    fn test_structural_vs_mep_is_hard_regardless_of_depth() {
        let (ty, _) = classify(
            &ElementCategory::Beam,
            &ElementCategory::Duct,
            1e-9,
            0.5,
            &options(),
        );
        assert_eq!(ty, ClashType::Hard);

        let (ty, _) = classify(
            &ElementCategory::Pipe,
            &ElementCategory::Footing,
            1e-9,
            0.5,
            &options(),
        );
        assert_eq!(ty, ClashType::Hard);
    }

    #[test]
    fn test_shallow_non_structural_overlap_is_soft() {
        let (ty, _) = classify(
            &ElementCategory::Door,
            &ElementCategory::Furniture,
            0.01,
            0.002,
            &options(),
        );
        assert_eq!(ty, ClashType::Soft);
    }

    #[test]
    fn test_deep_non_structural_overlap_is_clearance() {
        let (ty, _) = classify(
            &ElementCategory::Door,
            &ElementCategory::Furniture,
            0.2,
            0.002,
            &options(),
        );
        assert_eq!(ty, ClashType::Clearance);
    }

    #[test]
    fn test_severity_volume_boundaries_are_strict() {
        // Exactly at a threshold lands in the bucket below it
        assert_eq!(severity(0.0, 0.01), ClashSeverity::Warning);
        assert_eq!(severity(0.0, 0.010001), ClashSeverity::Minor);
        assert_eq!(severity(0.0, 0.1), ClashSeverity::Minor);
        assert_eq!(severity(0.0, 0.100001), ClashSeverity::Major);
        assert_eq!(severity(0.0, 1.0), ClashSeverity::Major);
        assert_eq!(severity(0.0, 1.000001), ClashSeverity::Critical);
    }

    #[test]
    fn test_severity_depth_boundaries_are_strict() {
        assert_eq!(severity(10.0, 0.0), ClashSeverity::Warning);
        assert_eq!(severity(10.1, 0.0), ClashSeverity::Minor);
        assert_eq!(severity(50.0, 0.0), ClashSeverity::Minor);
        assert_eq!(severity(50.1, 0.0), ClashSeverity::Major);
        assert_eq!(severity(100.0, 0.0), ClashSeverity::Major);
        assert_eq!(severity(100.1, 0.0), ClashSeverity::Critical);
    }

    #[test]
    fn test_overlapping_walls_are_hard_major() {
        // Overlapping unit cubes: depth 0.5, volume 0.125
        let (ty, sev) = classify(
            &ElementCategory::Wall,
            &ElementCategory::Wall,
            0.5,
            0.125,
            &ClashDetectionOptions {
                tolerance: 0.001,
                ..options()
            },
        );
        assert_eq!(ty, ClashType::Hard);
        assert_eq!(sev, ClashSeverity::Major);
    }
}
