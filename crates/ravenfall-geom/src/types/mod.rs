// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the collision core (AABB, axis, interval).
//!
//! Overlap semantics are inclusive on faces: two boxes that merely touch are
//! reported as overlapping.

#[doc = "Axis-aligned bounding boxes (world space, two axes)."]
pub mod aabb;
#[doc = "Projection axes and closed 1-D intervals."]
pub mod axis;
