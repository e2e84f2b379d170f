// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Endpoint projector: entities to 1-D interval endpoints on one axis.

use core::cmp::Ordering;

use crate::entity::EntityId;
use crate::frame::Frame;
use crate::types::axis::Axis;

/// Which end of an interval an [`Endpoint`] marks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Interval opens here.
    Min,
    /// Interval closes here.
    Max,
}

/// One end of an entity's projected interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Endpoint {
    /// Projected scalar value on the sweep axis.
    pub value: f32,
    /// Min/max discriminator.
    pub bound: Bound,
    /// Owning entity.
    pub entity: EntityId,
    /// Position of the owning entity in the frame's input slice.
    pub slot: usize,
}

impl Endpoint {
    /// Returns `true` if this endpoint opens an interval.
    #[must_use]
    pub fn is_min(&self) -> bool {
        self.bound == Bound::Min
    }

    /// Sweep order between two endpoints.
    ///
    /// Ascending by value; at equal value a min precedes a max so touching
    /// intervals are both open when one of them closes. Endpoints that compare
    /// `Equal` keep their relative input order under the insertion sort.
    #[must_use]
    pub fn sweep_cmp(&self, other: &Self) -> Ordering {
        match self.value.partial_cmp(&other.value) {
            Some(Ordering::Equal) | None => match (self.bound, other.bound) {
                (Bound::Min, Bound::Max) => Ordering::Less,
                (Bound::Max, Bound::Min) => Ordering::Greater,
                _ => Ordering::Equal,
            },
            Some(ord) => ord,
        }
    }
}

/// Appends the `axis` endpoints of every participating entity in `frame` to
/// `out`.
///
/// The reach extension is applied per [`Frame::interval_of`]. Entities that do
/// not [participate](Frame::participates) (zero extent on X after extension)
/// contribute nothing, even when sorting on Y. Returns the number of entities
/// skipped that way.
pub fn project_into(frame: &Frame<'_>, axis: Axis, out: &mut Vec<Endpoint>) -> usize {
    out.reserve(frame.len() * 2);
    let mut skipped = 0;
    for (slot, entity) in frame.entities().iter().enumerate() {
        if !frame.participates(entity) {
            skipped += 1;
            continue;
        }
        let interval = frame.interval_of(entity, axis);
        out.push(Endpoint {
            value: interval.min,
            bound: Bound::Min,
            entity: entity.id,
            slot,
        });
        out.push(Endpoint {
            value: interval.max,
            bound: Bound::Max,
            entity: entity.id,
            slot,
        });
    }
    skipped
}

/// Allocating convenience over [`project_into`].
#[must_use]
pub fn project(frame: &Frame<'_>, axis: Axis) -> Vec<Endpoint> {
    let mut out = Vec::new();
    project_into(frame, axis, &mut out);
    out
}
