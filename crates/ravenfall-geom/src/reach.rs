// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Directional reach extension for the attacking actor.
//!
//! A reach widens the actor's box along its facing while an attack is active.
//! Only the leading edge moves: `Positive` pushes `max.x` right, `Negative`
//! pushes `min.x` left. The visual/physical box is never modified.

use crate::types::axis::{Axis, Interval};

/// Which horizontal edge of a box leads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Facing {
    /// Leading edge is `max.x` (facing right).
    #[default]
    Positive,
    /// Leading edge is `min.x` (facing left).
    Negative,
}

impl Facing {
    /// Facing implied by a horizontal input value, or `None` when the input is zero.
    #[must_use]
    pub fn from_axis(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Self::Positive)
        } else if x < 0.0 {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// Returns `true` when a point at horizontal offset `dx` (target minus
    /// origin) lies on the facing side. A zero offset counts as the right side.
    #[must_use]
    pub fn faces_offset(self, dx: f32) -> bool {
        match self {
            Self::Positive => dx >= 0.0,
            Self::Negative => dx < 0.0,
        }
    }
}

/// Reach descriptor: extension length plus the direction it applies in.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reach {
    /// Non-negative extension length in world units.
    pub length: f32,
    /// Edge that receives the extension.
    pub facing: Facing,
}

impl Reach {
    /// Creates a reach descriptor.
    #[must_use]
    pub const fn new(length: f32, facing: Facing) -> Self {
        Self { length, facing }
    }

    /// Returns `true` when the length is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.length.is_finite() && self.length >= 0.0
    }

    /// Applies the reach to `interval` projected on `axis`.
    ///
    /// Vertical projections are returned unchanged; on X exactly one bound moves.
    #[must_use]
    pub fn extend(&self, interval: Interval, axis: Axis) -> Interval {
        match (axis, self.facing) {
            (Axis::Y, _) => interval,
            (Axis::X, Facing::Positive) => Interval::new(interval.min, interval.max + self.length),
            (Axis::X, Facing::Negative) => Interval::new(interval.min - self.length, interval.max),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn positive_reach_moves_only_max() {
        let r = Reach::new(2.0, Facing::Positive);
        assert_eq!(
            r.extend(Interval::new(0.0, 1.0), Axis::X),
            Interval::new(0.0, 3.0)
        );
    }

    #[test]
    fn negative_reach_moves_only_min() {
        let r = Reach::new(2.0, Facing::Negative);
        assert_eq!(
            r.extend(Interval::new(0.0, 1.0), Axis::X),
            Interval::new(-2.0, 1.0)
        );
    }

    #[test]
    fn vertical_axis_is_never_extended() {
        let r = Reach::new(5.0, Facing::Positive);
        assert_eq!(
            r.extend(Interval::new(0.0, 1.0), Axis::Y),
            Interval::new(0.0, 1.0)
        );
    }

    #[test]
    fn facing_from_axis_ignores_zero() {
        assert_eq!(Facing::from_axis(0.3), Some(Facing::Positive));
        assert_eq!(Facing::from_axis(-1.0), Some(Facing::Negative));
        assert_eq!(Facing::from_axis(0.0), None);
    }

    #[test]
    fn validity() {
        assert!(Reach::new(0.0, Facing::Negative).is_valid());
        assert!(!Reach::new(-0.5, Facing::Positive).is_valid());
        assert!(!Reach::new(f32::NAN, Facing::Positive).is_valid());
    }
}
