// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// One of the two world axes a box can be projected onto.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Horizontal axis. Reach extension only ever applies here.
    #[default]
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Component index of this axis in `[x, y]` arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Closed interval `[min, max]` on a single axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
}

impl Interval {
    /// Creates an interval from its bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns `true` when the interval has zero extent.
    ///
    /// Bounds are validated as `min <= max` on entry, so "not strictly
    /// increasing" is exactly `min == max`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Returns `true` when the two intervals are strictly apart.
    ///
    /// Touching bounds are not a separation.
    #[must_use]
    pub fn separated_from(&self, other: &Self) -> bool {
        self.max < other.min || other.max < self.min
    }
}
