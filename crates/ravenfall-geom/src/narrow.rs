// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Narrow phase: exact two-axis AABB test with reach extension.
//!
//! Both axes are re-derived from the entity records here even though the
//! broad phase already projected the sweep axis. Reusing the swept interval
//! would be equivalent; it is recomputed so the test stays a pure function of
//! two entities and the reach flag.

use crate::entity::Entity;
use crate::types::axis::Axis;

/// Returns `true` if the effective boxes of `a` and `b` overlap on both axes.
///
/// Each entity is extended independently (on X only) when it is privileged and
/// `reach_active` is set. Intervals are closed: touching counts as overlap.
#[must_use]
pub fn intersects(a: &Entity, b: &Entity, reach_active: bool) -> bool {
    let separated_x = a
        .effective_interval(Axis::X, reach_active)
        .separated_from(&b.effective_interval(Axis::X, reach_active));
    let separated_y = a
        .effective_interval(Axis::Y, reach_active)
        .separated_from(&b.effective_interval(Axis::Y, reach_active));
    !(separated_x || separated_y)
}
