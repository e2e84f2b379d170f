// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Entity records the collision core reads each frame.

use core::fmt;

use crate::reach::Reach;
use crate::types::aabb::Aabb2;
use crate::types::axis::{Axis, Interval};

/// Opaque entity identity, unique within a frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gameplay category of an entity.
///
/// The core treats categories uniformly except for [`Category::PrimaryActor`],
/// the only category eligible for reach extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// The player-controlled attacker.
    PrimaryActor,
    /// Flying enemy.
    HostileFlyer,
    /// Enemy projectile.
    HostileProjectile,
    /// Anything else that participates in detection.
    Other,
}

impl Category {
    /// Returns `true` for the category that may carry a reach extension.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::PrimaryActor)
    }
}

/// An entity as seen by the collision core for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Entity {
    /// Identity, unique within the frame.
    pub id: EntityId,
    /// Gameplay category.
    pub category: Category,
    /// World-space bounding box.
    pub bounds: Aabb2,
    /// Optional reach descriptor. Ignored unless the category is privileged.
    pub reach: Option<Reach>,
}

impl Entity {
    /// Creates an entity without a reach descriptor.
    #[must_use]
    pub const fn new(id: EntityId, category: Category, bounds: Aabb2) -> Self {
        Self {
            id,
            category,
            bounds,
            reach: None,
        }
    }

    /// Attaches a reach descriptor.
    #[must_use]
    pub const fn with_reach(mut self, reach: Reach) -> Self {
        self.reach = Some(reach);
        self
    }

    /// Reach that actually applies this frame, if any.
    #[must_use]
    pub fn active_reach(&self, reach_active: bool) -> Option<Reach> {
        if reach_active && self.category.is_privileged() {
            self.reach
        } else {
            None
        }
    }

    /// Effective bounds on `axis`: the raw projection, extended by the active
    /// reach when one applies.
    #[must_use]
    pub fn effective_interval(&self, axis: Axis, reach_active: bool) -> Interval {
        let raw = self.bounds.interval(axis);
        match self.active_reach(reach_active) {
            Some(reach) => reach.extend(raw, axis),
            None => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::reach::Facing;

    fn boxed(category: Category) -> Entity {
        Entity::new(EntityId(1), category, Aabb2::new([0.0, 0.0], [1.0, 1.0]))
            .with_reach(Reach::new(2.0, Facing::Positive))
    }

    #[test]
    fn reach_applies_only_when_active_and_privileged() {
        let actor = boxed(Category::PrimaryActor);
        assert_eq!(
            actor.effective_interval(Axis::X, true),
            Interval::new(0.0, 3.0)
        );
        assert_eq!(
            actor.effective_interval(Axis::X, false),
            Interval::new(0.0, 1.0)
        );
    }

    #[test]
    fn unprivileged_reach_is_ignored() {
        for category in [
            Category::HostileFlyer,
            Category::HostileProjectile,
            Category::Other,
        ] {
            let e = boxed(category);
            assert_eq!(e.effective_interval(Axis::X, true), Interval::new(0.0, 1.0));
            assert!(e.active_reach(true).is_none());
        }
    }
}
