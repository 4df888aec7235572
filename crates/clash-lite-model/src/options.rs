// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection run configuration

use crate::{ClashError, ElementCategory, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one clash detection run
///
/// All length values share the unit of the element geometry (meters for
/// typical models); `tolerance` is also applied as a volume threshold in the
/// same system (cubic meters). No unit conversion happens at this boundary.
///
/// Progress reporting and cancellation are not configuration data; they are
/// registered on the detector itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClashDetectionOptions {
    /// Minimum intersection volume to report, and the penetration depth above
    /// which a structural-structural overlap counts as hard
    pub tolerance: f64,
    /// Emit hard clashes
    pub check_hard_clash: bool,
    /// Emit soft clashes
    pub check_soft_clash: bool,
    /// Emit clearance violations
    pub check_clearance: bool,
    /// Required clearance between elements
    pub clearance_distance: f64,
    /// Category pairs to skip entirely, in either order
    pub exclude_pairs: Vec<(ElementCategory, ElementCategory)>,
}

impl Default for ClashDetectionOptions {
    fn default() -> Self {
        Self {
            // 1 mm expressed in meters
            tolerance: 0.001,
            check_hard_clash: true,
            check_soft_clash: true,
            check_clearance: false,
            // 50 mm expressed in meters
            clearance_distance: 0.05,
            exclude_pairs: Vec::new(),
        }
    }
}

impl ClashDetectionOptions {
    /// Validate the configuration
    ///
    /// Fails fast before any scanning; invalid values are rejected, never
    /// clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ClashError::InvalidTolerance(self.tolerance));
        }
        if self.check_clearance
            && (!self.clearance_distance.is_finite() || self.clearance_distance <= 0.0)
        {
            return Err(ClashError::InvalidClearance(self.clearance_distance));
        }
        Ok(())
    }
}
