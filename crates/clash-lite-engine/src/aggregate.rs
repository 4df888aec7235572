// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result aggregation, grouping views, and presentation helpers

use crate::narrow::Overlap;
use clash_lite_model::{
    Clash, ClashDetectionResult, ClashSeverity, ClashType, Element, ElementRef,
};
use std::collections::BTreeMap;

/// Accumulates accepted clashes during a scan
///
/// Assigns each clash a run-unique, deterministic id derived from the sorted
/// element ids plus a monotonic counter (never wall-clock time), and keeps
/// the per-type running counts for the result summary.
#[derive(Debug, Default)]
pub struct ClashAccumulator {
    clashes: Vec<Clash>,
    hard: usize,
    soft: usize,
    clearance: usize,
    next_seq: u64,
}

impl ClashAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted clash between two elements, in input order
    pub fn push(
        &mut self,
        element1: &Element,
        element2: &Element,
        clash_type: ClashType,
        severity: ClashSeverity,
        overlap: Overlap,
    ) {
        let (lo, hi) = if element1.id <= element2.id {
            (element1.id, element2.id)
        } else {
            (element2.id, element1.id)
        };
        let id = format!("clash_{}_{}_{}", lo.0, hi.0, self.next_seq);
        self.next_seq += 1;

        match clash_type {
            ClashType::Hard => self.hard += 1,
            ClashType::Soft => self.soft += 1,
            ClashType::Clearance => self.clearance += 1,
        }

        self.clashes.push(Clash {
            id,
            clash_type,
            severity,
            element1: ElementRef::new(element1.id, element1.name.clone(), element1.category.clone()),
            element2: ElementRef::new(element2.id, element2.name.clone(), element2.category.clone()),
            penetration_depth: overlap.depth,
            volume: overlap.volume,
            center: [overlap.center.x, overlap.center.y, overlap.center.z],
            resolved: false,
            notes: None,
        });
    }

    /// Number of clashes accumulated so far
    pub fn len(&self) -> usize {
        self.clashes.len()
    }

    /// Check if no clashes have been accumulated
    pub fn is_empty(&self) -> bool {
        self.clashes.is_empty()
    }

    /// Finish the run into a result
    pub fn finish(
        self,
        total_checked: u64,
        processing_time_ms: f64,
        cancelled: bool,
    ) -> ClashDetectionResult {
        ClashDetectionResult {
            clashes: self.clashes,
            total_checked,
            hard_clashes: self.hard,
            soft_clashes: self.soft,
            clearance_violations: self.clearance,
            processing_time_ms,
            cancelled,
        }
    }
}

/// Group clashes by severity
///
/// Partitions the input exactly: every clash appears in exactly one group and
/// the union of the groups is the input set. Groups iterate most-severe
/// first; clashes keep their scan order within each group.
pub fn group_by_severity(clashes: &[Clash]) -> BTreeMap<ClashSeverity, Vec<&Clash>> {
    let mut groups: BTreeMap<ClashSeverity, Vec<&Clash>> = BTreeMap::new();
    for clash in clashes {
        groups.entry(clash.severity).or_default().push(clash);
    }
    groups
}

/// Group clashes by category pair, keyed `"{CAT1}_{CAT2}"`
///
/// Same exact-partition guarantee as [`group_by_severity`].
pub fn group_by_category_pair(clashes: &[Clash]) -> BTreeMap<String, Vec<&Clash>> {
    let mut groups: BTreeMap<String, Vec<&Clash>> = BTreeMap::new();
    for clash in clashes {
        groups.entry(clash.category_pair_key()).or_default().push(clash);
    }
    groups
}

/// Summary counts over a clash list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityStats {
    pub total: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub warning: usize,
    pub resolved: usize,
}

impl SeverityStats {
    /// Count clashes per severity bucket plus resolved ones
    pub fn of(clashes: &[Clash]) -> Self {
        let mut stats = Self {
            total: clashes.len(),
            ..Self::default()
        };
        for clash in clashes {
            match clash.severity {
                ClashSeverity::Critical => stats.critical += 1,
                ClashSeverity::Major => stats.major += 1,
                ClashSeverity::Minor => stats.minor += 1,
                ClashSeverity::Warning => stats.warning += 1,
            }
            if clash.resolved {
                stats.resolved += 1;
            }
        }
        stats
    }
}

/// Presentation-side clash filter
///
/// All criteria are optional and combine with AND. `search` matches the
/// clash id and both element names, case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct ClashFilter {
    pub severity: Option<ClashSeverity>,
    pub resolved: Option<bool>,
    pub search: Option<String>,
}

impl ClashFilter {
    /// Apply the filter, preserving input order
    pub fn apply<'a>(&self, clashes: &'a [Clash]) -> Vec<&'a Clash> {
        clashes.iter().filter(|c| self.matches(c)).collect()
    }

    /// Check a single clash against all criteria
    pub fn matches(&self, clash: &Clash) -> bool {
        if let Some(severity) = self.severity {
            if clash.severity != severity {
                return false;
            }
        }
        if let Some(resolved) = self.resolved {
            if clash.resolved != resolved {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = clash.id.to_lowercase().contains(&needle)
                || clash.element1.name.to_lowercase().contains(&needle)
                || clash.element2.name.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}
