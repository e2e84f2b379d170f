// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Validated per-frame view over the entity set.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::entity::{Entity, EntityId};
use crate::types::axis::{Axis, Interval};

/// Caller contract violations detected while building a [`Frame`].
///
/// These are programmer errors in the code that assembles the entity set; they
/// are reported, never retried or silently repaired.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// Two entities in the same frame share an identity.
    #[error("duplicate entity id {0} in frame")]
    DuplicateEntity(EntityId),
    /// An entity record's corners are inverted or non-finite, so no
    /// [`Aabb2`](crate::Aabb2) can be built for it.
    #[error("entity {entity} has invalid bounds")]
    InvalidBounds {
        /// Offending entity.
        entity: EntityId,
    },
    /// A reach length is negative or non-finite.
    #[error("entity {entity} has invalid reach length {length}")]
    InvalidReach {
        /// Offending entity.
        entity: EntityId,
        /// Rejected length.
        length: f32,
    },
    /// More than one privileged entity carries a reach descriptor.
    #[error("entities {first} and {second} both carry a reach; only one attacker is supported")]
    MultiplePrivileged {
        /// First reach carrier in input order.
        first: EntityId,
        /// Second reach carrier in input order.
        second: EntityId,
    },
}

/// Snapshot of one simulation frame: the entity set plus the global
/// reach-active flag.
///
/// Construction validates the caller contract; every detection routine in this
/// crate takes a `Frame` and can therefore assume unique identities, valid
/// reach lengths, and at most one reach carrier.
#[derive(Debug, Copy, Clone)]
pub struct Frame<'a> {
    entities: &'a [Entity],
    reach_active: bool,
}

impl<'a> Frame<'a> {
    /// Validates `entities` and wraps them for detection.
    pub fn new(entities: &'a [Entity], reach_active: bool) -> Result<Self, FrameError> {
        let mut seen = FxHashSet::default();
        seen.reserve(entities.len());
        let mut carrier: Option<EntityId> = None;
        for e in entities {
            if !seen.insert(e.id) {
                return Err(FrameError::DuplicateEntity(e.id));
            }
            let Some(reach) = e.reach else { continue };
            if !reach.is_valid() {
                return Err(FrameError::InvalidReach {
                    entity: e.id,
                    length: reach.length,
                });
            }
            if e.category.is_privileged() {
                if let Some(first) = carrier {
                    return Err(FrameError::MultiplePrivileged {
                        first,
                        second: e.id,
                    });
                }
                carrier = Some(e.id);
            }
        }
        Ok(Self {
            entities,
            reach_active,
        })
    }

    /// Entities in input order.
    #[must_use]
    pub const fn entities(&self) -> &'a [Entity] {
        self.entities
    }

    /// Whether the privileged entity's reach applies this frame.
    #[must_use]
    pub const fn reach_active(&self) -> bool {
        self.reach_active
    }

    /// Number of entities in the frame.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` when the frame has no entities.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Looks an entity up by identity (linear scan).
    #[must_use]
    pub fn find(&self, id: EntityId) -> Option<&'a Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Effective interval of `entity` on `axis` under this frame's reach flag.
    #[must_use]
    pub fn interval_of(&self, entity: &Entity, axis: Axis) -> Interval {
        entity.effective_interval(axis, self.reach_active)
    }

    /// Returns `false` for an entity whose effective X interval has zero
    /// extent. Such an entity takes no part in this frame's detection,
    /// whichever axis the endpoints are sorted on.
    #[must_use]
    pub fn participates(&self, entity: &Entity) -> bool {
        !self.interval_of(entity, Axis::X).is_degenerate()
    }
}
