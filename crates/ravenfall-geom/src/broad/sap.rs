// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;

use tracing::{debug, instrument, trace};

use super::endpoint::{project_into, Endpoint};
use super::pair::CollisionPair;
use super::BroadPhase;
use crate::frame::Frame;
use crate::narrow::intersects;
use crate::types::axis::Axis;

/// Counters describing the most recent [`SweepAndPrune`] pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Endpoints produced by the projector.
    pub endpoints: usize,
    /// Entities dropped for a zero-width effective X interval.
    pub degenerate: usize,
    /// Narrow-phase tests performed.
    pub candidates: usize,
    /// Pairs emitted.
    pub pairs: usize,
}

/// Sweep-and-prune broad phase over a single axis (X by default).
///
/// Each frame:
/// 1. endpoints are projected on the sweep axis (reach extension applied,
///    entities with zero effective X width dropped);
/// 2. they are insertion-sorted, which is near-linear because positions move
///    little between frames;
/// 3. a left-to-right sweep keeps the set of open intervals. When an interval
///    closes, its entity leaves the set and is narrow-tested against every
///    entity still open.
///
/// Tie policy: at equal value min endpoints sort before max endpoints, so
/// boxes touching on the sweep axis are still tested. Otherwise ties keep
/// input order because only strictly-greater elements are shifted.
///
/// The endpoint and active buffers are retained for reuse and are empty
/// between calls.
#[derive(Debug, Default)]
pub struct SweepAndPrune {
    axis: Axis,
    endpoints: Vec<Endpoint>,
    active: Vec<Endpoint>,
    stats: SweepStats,
}

impl SweepAndPrune {
    /// Creates an engine sweeping the X axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine sweeping `axis`.
    #[must_use]
    pub fn with_axis(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Axis being swept.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Counters from the last call to [`BroadPhase::detect_into`].
    #[must_use]
    pub const fn last_stats(&self) -> SweepStats {
        self.stats
    }
}

impl BroadPhase for SweepAndPrune {
    #[instrument(
        level = "debug",
        name = "sweep_and_prune",
        skip_all,
        fields(entities = frame.len(), reach_active = frame.reach_active(), axis = ?self.axis)
    )]
    fn detect_into(&mut self, frame: &Frame<'_>, out: &mut Vec<CollisionPair>) {
        self.endpoints.clear();
        self.active.clear();
        let emitted_before = out.len();

        let degenerate = project_into(frame, self.axis, &mut self.endpoints);
        insertion_sort(&mut self.endpoints);

        let entities = frame.entities();
        let mut candidates = 0;
        for ep in &self.endpoints {
            if ep.is_min() {
                self.active.push(*ep);
                continue;
            }
            if let Some(pos) = self.active.iter().position(|a| a.entity == ep.entity) {
                self.active.remove(pos);
            }
            let closing = &entities[ep.slot];
            for open in &self.active {
                candidates += 1;
                let other = &entities[open.slot];
                if intersects(closing, other, frame.reach_active()) {
                    trace!(first = %closing.id, second = %other.id, "pair");
                    out.push(CollisionPair::new(closing.id, other.id));
                }
            }
        }
        debug_assert!(self.active.is_empty(), "every opened interval must close");

        self.stats = SweepStats {
            endpoints: self.endpoints.len(),
            degenerate,
            candidates,
            pairs: out.len() - emitted_before,
        };
        self.endpoints.clear();
        self.active.clear();
        debug!(
            endpoints = self.stats.endpoints,
            degenerate, candidates, pairs = self.stats.pairs, "sweep complete"
        );
    }
}

/// Stable in-place insertion sort in sweep order.
///
/// Only elements that compare strictly greater than the key are shifted, so
/// equal endpoints keep their input order.
pub fn insertion_sort(endpoints: &mut [Endpoint]) {
    for i in 1..endpoints.len() {
        let key = endpoints[i];
        let mut j = i;
        while j > 0 && endpoints[j - 1].sweep_cmp(&key) == Ordering::Greater {
            endpoints[j] = endpoints[j - 1];
            j -= 1;
        }
        endpoints[j] = key;
    }
}
