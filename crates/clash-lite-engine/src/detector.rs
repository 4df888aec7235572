// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection run orchestration
//!
//! Drives the full pipeline: bounds index, exclusion filter, O(N²) pair
//! scan with AABB culling, narrow-phase evaluation, classification, and
//! aggregation. The scan is synchronous and CPU-bound; hosts with thousands
//! of elements should run it off their interactive thread. Pair order is
//! deterministic (input order), so identical input and options produce an
//! identical clash list.
//!
//! The pair enumeration is the single biggest scalability risk (quadratic in
//! element count, fine up to tens of thousands of elements). A grid or BVH
//! broad phase would replace the inner loop of [`ClashDetector::detect`]
//! while keeping the progress, ordering, and exclusion contract intact.

use crate::aggregate::ClashAccumulator;
use crate::bounds::build_bounds_index;
use crate::classify::classify;
use crate::exclusion::ExclusionSet;
use crate::narrow::evaluate_pair;
use clash_lite_model::{ClashDetectionOptions, ClashDetectionResult, ClashType, Element, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Pairs between progress reports and cancellation checks
pub const PROGRESS_INTERVAL: u64 = 100;

/// Progress callback: (pairs checked so far, total pairs)
pub type ProgressFn = Box<dyn FnMut(u64, u64) + Send>;

/// Cooperative cancellation token
///
/// Cloneable handle over a shared flag; hand one clone to the detector and
/// keep another to cancel from a different thread. The scan checks the flag
/// at the progress cadence and returns a partial result flagged `cancelled`.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a new, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A configured clash detection run
///
/// Owns the options plus the non-data collaborators (progress callback,
/// cancellation token). Holds no state between runs; concurrent detectors
/// over different inputs are independent.
pub struct ClashDetector {
    options: ClashDetectionOptions,
    progress: Option<ProgressFn>,
    cancel: Option<CancelToken>,
}

impl ClashDetector {
    /// Create a detector with the given options
    pub fn new(options: ClashDetectionOptions) -> Self {
        Self {
            options,
            progress: None,
            cancel: None,
        }
    }

    /// Register a progress callback, invoked every [`PROGRESS_INTERVAL`] pairs
    ///
    /// A panicking callback is contained and never aborts the scan.
    pub fn with_progress(mut self, callback: impl FnMut(u64, u64) + Send + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Register a cancellation token, checked at the progress cadence
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run detection over the given elements
    ///
    /// Validates the options before any scanning. Elements without usable
    /// geometry take part in no geometric check but their pairs still count
    /// toward `total_checked`.
    pub fn detect(&mut self, elements: &[Element]) -> Result<ClashDetectionResult> {
        self.options.validate()?;

        let started = Instant::now();
        let n = elements.len() as u64;
        let total_pairs = n.saturating_mul(n.saturating_sub(1)) / 2;
        debug!(
            elements = elements.len(),
            total_pairs, "starting clash detection scan"
        );

        let bounds = build_bounds_index(elements);
        let exclusion = ExclusionSet::new(&self.options.exclude_pairs);

        let mut accumulator = ClashAccumulator::new();
        let mut checked: u64 = 0;
        let mut cancelled = false;

        'scan: for (i, element1) in elements.iter().enumerate() {
            for element2 in &elements[i + 1..] {
                checked += 1;

                if checked % PROGRESS_INTERVAL == 0 {
                    if let Some(callback) = self.progress.as_mut() {
                        // The callback belongs to the caller; a panic inside
                        // it must not abort the scan.
                        let _ = catch_unwind(AssertUnwindSafe(|| callback(checked, total_pairs)));
                    }
                    if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                        cancelled = true;
                        break 'scan;
                    }
                }

                if exclusion.is_excluded(&element1.category, &element2.category) {
                    continue;
                }

                let (Some(bounds1), Some(bounds2)) =
                    (bounds.get(&element1.id), bounds.get(&element2.id))
                else {
                    continue;
                };

                if !bounds1.intersects(bounds2) {
                    continue;
                }

                let Some(overlap) =
                    evaluate_pair(bounds1, bounds2, self.options.tolerance)
                else {
                    continue;
                };

                let (clash_type, severity) = classify(
                    &element1.category,
                    &element2.category,
                    overlap.depth,
                    overlap.volume,
                    &self.options,
                );

                if !self.type_enabled(clash_type) {
                    continue;
                }

                accumulator.push(element1, element2, clash_type, severity, overlap);
            }
        }

        let processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;
        info!(
            clashes = accumulator.len(),
            checked, cancelled, elapsed_ms = processing_time_ms, "clash detection scan finished"
        );

        Ok(accumulator.finish(checked, processing_time_ms, cancelled))
    }

    fn type_enabled(&self, clash_type: ClashType) -> bool {
        match clash_type {
            ClashType::Hard => self.options.check_hard_clash,
            ClashType::Soft => self.options.check_soft_clash,
            ClashType::Clearance => self.options.check_clearance,
        }
    }
}

/// Run clash detection with the given options
///
/// Convenience for one-shot runs without progress reporting or cancellation.
pub fn detect_clashes(
    elements: &[Element],
    options: ClashDetectionOptions,
) -> Result<ClashDetectionResult> {
    ClashDetector::new(options).detect(elements)
}
