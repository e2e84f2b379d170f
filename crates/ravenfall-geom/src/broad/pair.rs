// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::entity::EntityId;

/// Two entities whose effective boxes intersect this frame.
///
/// Pairs are emitted in discovery order: `first` is the entity whose interval
/// closed during the sweep, `second` an entity still open at that moment. Use
/// [`CollisionPair::canonical`] when an order-free identity is needed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionPair {
    /// Entity whose max endpoint triggered the test.
    pub first: EntityId,
    /// Entity that was active when `first` closed.
    pub second: EntityId,
}

impl CollisionPair {
    /// Creates a pair.
    #[must_use]
    pub const fn new(first: EntityId, second: EntityId) -> Self {
        Self { first, second }
    }

    /// Returns the pair as `(min_id, max_id)`.
    #[must_use]
    pub fn canonical(&self) -> (EntityId, EntityId) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    /// Returns `true` if `id` is one of the two members.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.first == id || self.second == id
    }
}

/// Canonicalizes and sorts a pair list lexicographically by `(min_id, max_id)`.
#[must_use]
pub fn canonical_pairs(pairs: &[CollisionPair]) -> Vec<(EntityId, EntityId)> {
    let mut out: Vec<_> = pairs.iter().map(CollisionPair::canonical).collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn canonical_ignores_discovery_order() {
        let a = CollisionPair::new(EntityId(9), EntityId(2));
        let b = CollisionPair::new(EntityId(2), EntityId(9));
        assert_eq!(a.canonical(), (EntityId(2), EntityId(9)));
        assert_eq!(a.canonical(), b.canonical());
        assert_eq!(
            canonical_pairs(&[a, CollisionPair::new(EntityId(1), EntityId(3))]),
            vec![(EntityId(1), EntityId(3)), (EntityId(2), EntityId(9))]
        );
    }
}
