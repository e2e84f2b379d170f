// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase interfaces, the sweep-and-prune engine, and an all-pairs
//! reference implementation.
//!
//! Contract shared by every implementation here:
//! - a pair is reported at most once per frame;
//! - entities whose effective sweep-axis interval is degenerate are excluded;
//! - the authoritative overlap decision is [`crate::narrow::intersects`], so
//!   implementations agree on the unordered pair set for any valid frame.
//!
//! Emission order is implementation-specific. Compare through
//! [`pair::canonical_pairs`] when order must not matter.

#[doc = "Reference O(n^2) broad phase used as an oracle."]
pub mod all_pairs;
#[doc = "Endpoint projection with reach extension."]
pub mod endpoint;
#[doc = "Collision pair record and canonical ordering helpers."]
pub mod pair;
#[doc = "Insertion-sorted sweep-and-prune over one axis."]
pub mod sap;

use crate::frame::Frame;
use pair::CollisionPair;

/// Per-frame collision detection over a validated [`Frame`].
///
/// Implementations may keep working buffers between calls for allocation
/// reuse, but no result or algorithm state carries over from one frame to the
/// next.
pub trait BroadPhase {
    /// Finds every intersecting pair in `frame`, appending them to `out`.
    fn detect_into(&mut self, frame: &Frame<'_>, out: &mut Vec<CollisionPair>);

    /// Finds every intersecting pair in `frame`.
    fn detect(&mut self, frame: &Frame<'_>) -> Vec<CollisionPair> {
        let mut out = Vec::new();
        self.detect_into(frame, &mut out);
        out
    }
}
