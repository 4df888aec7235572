// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Category-pair exclusion filtering
//!
//! Excluded category pairs never produce clashes regardless of geometric
//! overlap. The filter runs before any geometric work.

use clash_lite_model::ElementCategory;
use rustc_hash::FxHashSet;

/// Precomputed set of excluded category pairs
///
/// Pairs are stored under an unordered key, so `(Wall, Space)` and
/// `(Space, Wall)` are the same exclusion and lookup is O(1) per pair.
#[derive(Clone, Debug, Default)]
pub struct ExclusionSet {
    pairs: FxHashSet<(ElementCategory, ElementCategory)>,
}

impl ExclusionSet {
    /// Build the exclusion set from caller-supplied category pairs
    pub fn new(exclude_pairs: &[(ElementCategory, ElementCategory)]) -> Self {
        let pairs = exclude_pairs
            .iter()
            .map(|(a, b)| Self::key(a, b))
            .collect();
        Self { pairs }
    }

    /// Check whether a category pair is excluded, in either order
    pub fn is_excluded(&self, a: &ElementCategory, b: &ElementCategory) -> bool {
        if self.pairs.is_empty() {
            return false;
        }
        self.pairs.contains(&Self::key(a, b))
    }

    /// Number of distinct excluded pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if no exclusions are configured
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(a: &ElementCategory, b: &ElementCategory) -> (ElementCategory, ElementCategory) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }
}
