// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ravenfall_geom::Facing;

/// Remembers which way the actor faces.
///
/// Facing follows the sign of the last nonzero horizontal input; frames with
/// no horizontal input keep the previous facing. Starts facing right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacingTracker {
    facing: Facing,
}

impl FacingTracker {
    /// Feeds one frame of horizontal input and returns the resulting facing.
    pub fn observe(&mut self, horizontal: f32) -> Facing {
        if let Some(f) = Facing::from_axis(horizontal) {
            self.facing = f;
        }
        self.facing
    }

    /// Current facing.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn zero_input_keeps_last_facing() {
        let mut t = FacingTracker::default();
        assert_eq!(t.facing(), Facing::Positive);
        assert_eq!(t.observe(-1.0), Facing::Negative);
        assert_eq!(t.observe(0.0), Facing::Negative);
        assert_eq!(t.observe(0.25), Facing::Positive);
        assert_eq!(t.observe(0.0), Facing::Positive);
    }
}
