// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for Ravenfall benchmarks.

use ravenfall_geom::{Aabb2, Category, Entity, EntityId, Facing, Reach};

/// Builds a field of `n` entities spread along X, one reach-carrying actor first.
///
/// Positions come from a fixed integer hash so runs are reproducible.
#[must_use]
pub fn field(n: u32) -> Vec<Entity> {
    let mut out = Vec::with_capacity(n as usize);
    if n == 0 {
        return out;
    }
    out.push(
        Entity::new(EntityId(0), Category::PrimaryActor, Aabb2::new([0.0, 0.0], [1.0, 2.0]))
            .with_reach(Reach::new(2.3, Facing::Positive)),
    );
    for i in 1..n {
        let h = i.wrapping_mul(2_654_435_761);
        let x = f32::from(u16::try_from(h % 4096).unwrap_or(0)) * 0.05;
        let y = f32::from(u16::try_from((h >> 12) % 64).unwrap_or(0)) * 0.1;
        let category = match h % 3 {
            0 => Category::HostileFlyer,
            1 => Category::HostileProjectile,
            _ => Category::Other,
        };
        out.push(Entity::new(
            EntityId(u64::from(i)),
            category,
            Aabb2::new([x, y], [x + 1.0, y + 1.0]),
        ));
    }
    out
}

/// Moves every entity left by `dx` (flyers approach the actor).
pub fn drift(entities: &mut [Entity], dx: f32) {
    for e in entities.iter_mut().skip(1) {
        e.bounds = e.bounds.translated([-dx, 0.0]);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use ravenfall_geom::Frame;

    #[test]
    fn field_is_a_valid_frame() {
        let set = field(500);
        assert_eq!(set.len(), 500);
        assert!(Frame::new(&set, true).is_ok());
    }
}
