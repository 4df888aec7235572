// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for clash detection

use thiserror::Error;

/// Result type alias for clash detection operations
pub type Result<T> = std::result::Result<T, ClashError>;

/// Errors that can occur when configuring or running a detection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClashError {
    /// Tolerance must be a positive, finite length
    #[error("invalid tolerance {0}: must be a positive, finite value")]
    InvalidTolerance(f64),

    /// Clearance distance must be positive when clearance checking is enabled
    #[error("invalid clearance distance {0}: must be a positive, finite value when clearance checking is enabled")]
    InvalidClearance(f64),
}
