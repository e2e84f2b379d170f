// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Collision core for Ravenfall.

This crate provides:
- Two-axis bounding boxes (`Aabb2`) and closed intervals.
- Entity records with a category and an optional directional `Reach`.
- A validated per-frame view (`Frame`).
- The endpoint projector, the insertion-sorted sweep-and-prune engine, and the
  narrow-phase AABB test.
- An all-pairs baseline implementing the same `BroadPhase` trait.

Design notes:
- Frame-synchronous and pure: entity records are only read; results are
  returned to the caller and never stored globally.
- Overlap is inclusive on faces. Entities with zero effective X width are
  excluded whichever axis the sweep sorts on.
- Only one privileged entity may carry a reach; a frame with two is rejected.
"]

/// Broad phase: endpoint projection, sweep-and-prune, all-pairs baseline.
pub mod broad;
/// Entity identity, category, and per-axis effective bounds.
pub mod entity;
/// Validated frame view and caller-contract errors.
pub mod frame;
/// Exact two-axis intersection test.
pub mod narrow;
/// Directional reach extension.
pub mod reach;
/// Foundational geometric types.
pub mod types;

pub use broad::endpoint::{project, project_into, Bound, Endpoint};
pub use broad::pair::{canonical_pairs, CollisionPair};
pub use broad::{all_pairs::AllPairs, sap::SweepAndPrune, sap::SweepStats, BroadPhase};
pub use entity::{Category, Entity, EntityId};
pub use frame::{Frame, FrameError};
pub use narrow::intersects;
pub use reach::{Facing, Reach};
pub use types::aabb::Aabb2;
pub use types::axis::{Axis, Interval};

/// Detects all collision pairs of one frame with a fresh sweep-and-prune pass.
///
/// Convenience for callers that do not keep an engine around between frames.
pub fn detect_pairs(entities: &[Entity], reach_active: bool) -> Result<Vec<CollisionPair>, FrameError> {
    let frame = Frame::new(entities, reach_active)?;
    Ok(SweepAndPrune::new().detect(&frame))
}
