// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::axis::{Axis, Interval};

/// Axis-aligned bounding box in world coordinates (two axes).
///
/// Invariants:
/// - every component is finite;
/// - `min` components are less than or equal to `max` components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb2 {
    min: [f32; 2],
    max: [f32; 2],
}

impl Aabb2 {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component is non-finite or `min` exceeds `max` on an axis.
    #[must_use]
    pub fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        assert!(Self::valid(min, max), "invalid AABB: {min:?}..{max:?}");
        Self { min, max }
    }

    /// Fallible counterpart of [`Aabb2::new`] for externally supplied bounds.
    #[must_use]
    pub fn try_new(min: [f32; 2], max: [f32; 2]) -> Option<Self> {
        Self::valid(min, max).then_some(Self { min, max })
    }

    fn valid(min: [f32; 2], max: [f32; 2]) -> bool {
        min.iter().chain(max.iter()).all(|v| v.is_finite())
            && min[0] <= max[0]
            && min[1] <= max[1]
    }

    /// Returns the minimum corner.
    #[must_use]
    pub const fn min(&self) -> [f32; 2] {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub const fn max(&self) -> [f32; 2] {
        self.max
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> [f32; 2] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
        ]
    }

    /// Projection of the box onto `axis`.
    #[must_use]
    pub const fn interval(&self, axis: Axis) -> Interval {
        let i = axis.index();
        Interval::new(self.min[i], self.max[i])
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self
            .interval(Axis::X)
            .separated_from(&other.interval(Axis::X))
            || self
                .interval(Axis::Y)
                .separated_from(&other.interval(Axis::Y)))
    }

    /// Translates the box by `delta`.
    #[must_use]
    pub fn translated(&self, delta: [f32; 2]) -> Self {
        Self {
            min: [self.min[0] + delta[0], self.min[1] + delta[1]],
            max: [self.max[0] + delta[0], self.max[1] + delta[1]],
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn touching_faces_overlap() {
        let a = Aabb2::new([0.0, 0.0], [1.0, 1.0]);
        let b = Aabb2::new([1.0, 0.0], [2.0, 1.0]);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn gap_on_either_axis_separates() {
        let a = Aabb2::new([0.0, 0.0], [1.0, 1.0]);
        assert!(!a.overlaps(&Aabb2::new([1.5, 0.0], [2.0, 1.0])));
        assert!(!a.overlaps(&Aabb2::new([0.0, 1.5], [1.0, 2.0])));
    }

    #[test]
    fn try_new_rejects_inverted_and_non_finite() {
        assert!(Aabb2::try_new([1.0, 0.0], [0.0, 1.0]).is_none());
        assert!(Aabb2::try_new([0.0, f32::NAN], [1.0, 1.0]).is_none());
        assert!(Aabb2::try_new([0.0, 0.0], [f32::INFINITY, 1.0]).is_none());
        assert!(Aabb2::try_new([2.0, 0.0], [2.0, 1.0]).is_some());
    }

    #[test]
    fn translation_moves_both_corners() {
        let a = Aabb2::new([0.0, -1.0], [2.0, 1.0]).translated([3.0, 0.5]);
        assert_eq!(a.min(), [3.0, -0.5]);
        assert_eq!(a.max(), [5.0, 1.5]);
        assert_eq!(a.center(), [4.0, 0.5]);
    }
}
