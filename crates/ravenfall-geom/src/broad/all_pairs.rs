// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::pair::CollisionPair;
use super::BroadPhase;
use crate::frame::Frame;
use crate::narrow::intersects;

/// Brute-force broad phase: narrow-tests every pair of participating entities.
///
/// Applies the same participation rule as [`super::sap::SweepAndPrune`]
/// ([`Frame::participates`]), so both report the same unordered pair set
/// whatever axis the sweep sorts on. Pairs come out in input order,
/// `(earlier, later)`.
///
/// Intended as a correctness baseline for tests and benchmarks; cost is
/// `O(n^2)` regardless of how sparse the overlaps are.
#[derive(Debug, Default)]
pub struct AllPairs;

impl AllPairs {
    /// Creates the baseline.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BroadPhase for AllPairs {
    fn detect_into(&mut self, frame: &Frame<'_>, out: &mut Vec<CollisionPair>) {
        let live: Vec<_> = frame.entities().iter().filter(|e| frame.participates(e)).collect();
        for (i, a) in live.iter().enumerate() {
            for b in live.iter().skip(i + 1) {
                if intersects(a, b, frame.reach_active()) {
                    out.push(CollisionPair::new(a.id, b.id));
                }
            }
        }
    }
}
