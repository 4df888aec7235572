// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clash records and detection results

use crate::{ElementId, ElementRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of geometric conflict
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClashType {
    /// Solid elements that physically cannot coexist
    Hard,
    /// Minor overlap not involving a core structural conflict
    Soft,
    /// Elements closer than the required clearance distance
    Clearance,
}

impl fmt::Display for ClashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClashType::Hard => "hard",
            ClashType::Soft => "soft",
            ClashType::Clearance => "clearance",
        };
        write!(f, "{name}")
    }
}

/// Engineering severity of a clash
///
/// Ordered most-severe first so sorted views list critical clashes on top.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClashSeverity {
    Critical,
    Major,
    Minor,
    Warning,
}

impl fmt::Display for ClashSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClashSeverity::Critical => "critical",
            ClashSeverity::Major => "major",
            ClashSeverity::Minor => "minor",
            ClashSeverity::Warning => "warning",
        };
        write!(f, "{name}")
    }
}

/// One detected conflict between two elements
///
/// Produced at most once per unordered element pair per run. All fields are
/// immutable engine output except `resolved` and `notes`, which belong to the
/// presentation layer after the run completes; the engine never reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clash {
    /// Run-unique, deterministic id
    pub id: String,
    /// Clash type
    #[serde(rename = "type")]
    pub clash_type: ClashType,
    /// Severity bucket
    pub severity: ClashSeverity,
    /// First element (input order)
    pub element1: ElementRef,
    /// Second element (input order)
    pub element2: ElementRef,
    /// Minimum extent of the intersection box
    pub penetration_depth: f64,
    /// Volume of the intersection box
    pub volume: f64,
    /// Midpoint between the two elements' bounding box centers
    pub center: [f64; 3],
    /// Caller-mutable review status, initially false
    #[serde(default)]
    pub resolved: bool,
    /// Caller-mutable review notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Clash {
    /// Ids of both involved elements, for viewer highlighting
    pub fn element_ids(&self) -> [ElementId; 2] {
        [self.element1.id, self.element2.id]
    }

    /// Grouping key `"{CAT1}_{CAT2}"` over the two element categories
    pub fn category_pair_key(&self) -> String {
        format!(
            "{}_{}",
            self.element1.category.name(),
            self.element2.category.name()
        )
    }
}

/// Outcome of one detection run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClashDetectionResult {
    /// Detected clashes, in deterministic scan order
    pub clashes: Vec<Clash>,
    /// Every pair examined, including excluded and bounding-box-rejected pairs
    pub total_checked: u64,
    /// Number of hard clashes in `clashes`
    pub hard_clashes: usize,
    /// Number of soft clashes in `clashes`
    pub soft_clashes: usize,
    /// Number of clearance violations in `clashes`
    pub clearance_violations: usize,
    /// Wall-clock duration of the run in milliseconds
    pub processing_time_ms: f64,
    /// True when the run was cancelled and the result is partial
    #[serde(default)]
    pub cancelled: bool,
}

impl ClashDetectionResult {
    /// Total number of detected clashes
    pub fn clash_count(&self) -> usize {
        self.clashes.len()
    }
}
