// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Gameplay meaning of collision pairs.
//!
//! The collision core reports every intersecting pair regardless of category;
//! deciding what a pair means happens here, by exhaustive matching on the two
//! categories.

use ravenfall_geom::{Category, CollisionPair, Entity, EntityId, Facing, Frame};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

/// Actor state that decides how an actor/flyer contact resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackContext {
    /// Attack input pressed this frame.
    pub attacking: bool,
    /// Actor is not moving on either axis.
    pub stationary: bool,
    /// Direction the actor faces when it carries no [`Reach`]. An actor with
    /// a reach faces the way its reach extends.
    ///
    /// [`Reach`]: ravenfall_geom::Reach
    pub facing: Facing,
}

/// What a collision pair means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A projectile struck a flyer; the flyer starts falling.
    FlyerDowned {
        /// Struck flyer.
        flyer: EntityId,
        /// Projectile that hit it.
        projectile: EntityId,
    },
    /// The actor's attack landed on a flyer.
    FlyerSlain {
        /// Attacking actor.
        actor: EntityId,
        /// Defeated flyer.
        flyer: EntityId,
    },
    /// The actor was hit.
    ActorDefeated {
        /// Defeated actor.
        actor: EntityId,
        /// Entity that hit the actor.
        by: EntityId,
    },
    /// The actor's spell removed a hostile.
    Banished {
        /// Casting actor.
        actor: EntityId,
        /// Removed flyer or projectile.
        target: EntityId,
    },
}

/// Classifies `pairs` found in `frame` into outcomes, in pair order.
///
/// Rules:
/// - flyer and projectile: `FlyerDowned`, at most once per flyer per frame;
/// - actor and projectile: `ActorDefeated`;
/// - actor and flyer: `FlyerSlain` if the actor is attacking, stationary, and
///   facing the flyer; otherwise `ActorDefeated`;
/// - any other combination carries no meaning.
///
/// Pairs naming an entity not in `frame` are skipped.
#[must_use]
pub fn classify(pairs: &[CollisionPair], frame: &Frame<'_>, ctx: AttackContext) -> Vec<Outcome> {
    let mut out = Vec::new();
    let mut downed = FxHashSet::default();
    for pair in pairs {
        let (Some(a), Some(b)) = (frame.find(pair.first), frame.find(pair.second)) else {
            debug!(?pair, "pair references unknown entity");
            continue;
        };
        let outcome = match (a.category, b.category) {
            (Category::HostileFlyer, Category::HostileProjectile) => {
                downed.insert(a.id).then_some(Outcome::FlyerDowned {
                    flyer: a.id,
                    projectile: b.id,
                })
            }
            (Category::HostileProjectile, Category::HostileFlyer) => {
                downed.insert(b.id).then_some(Outcome::FlyerDowned {
                    flyer: b.id,
                    projectile: a.id,
                })
            }
            (Category::PrimaryActor, Category::HostileProjectile) => Some(Outcome::ActorDefeated {
                actor: a.id,
                by: b.id,
            }),
            (Category::HostileProjectile, Category::PrimaryActor) => Some(Outcome::ActorDefeated {
                actor: b.id,
                by: a.id,
            }),
            (Category::PrimaryActor, Category::HostileFlyer) => Some(melee(a, b, ctx)),
            (Category::HostileFlyer, Category::PrimaryActor) => Some(melee(b, a, ctx)),
            _ => None,
        };
        out.extend(outcome);
    }
    out
}

fn melee(actor: &Entity, flyer: &Entity, ctx: AttackContext) -> Outcome {
    let facing = actor.reach.map_or(ctx.facing, |r| r.facing);
    let dx = flyer.bounds.center()[0] - actor.bounds.center()[0];
    if ctx.attacking && ctx.stationary && facing.faces_offset(dx) {
        Outcome::FlyerSlain {
            actor: actor.id,
            flyer: flyer.id,
        }
    } else {
        Outcome::ActorDefeated {
            actor: actor.id,
            by: flyer.id,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use ravenfall_geom::{Aabb2, Reach};

    fn ent(id: u64, category: Category, x: f32) -> Entity {
        Entity::new(EntityId(id), category, Aabb2::new([x, 0.0], [x + 1.0, 1.0]))
    }

    fn pair(a: u64, b: u64) -> CollisionPair {
        CollisionPair::new(EntityId(a), EntityId(b))
    }

    const SWING: AttackContext = AttackContext {
        attacking: true,
        stationary: true,
        facing: Facing::Positive,
    };

    #[test]
    fn flyer_is_downed_once_per_frame() {
        let set = [
            ent(1, Category::HostileFlyer, 0.0),
            ent(2, Category::HostileProjectile, 0.5),
            ent(3, Category::HostileProjectile, 0.2),
        ];
        let frame = Frame::new(&set, false).unwrap();
        let out = classify(&[pair(2, 1), pair(1, 3)], &frame, SWING);
        assert_eq!(
            out,
            vec![Outcome::FlyerDowned {
                flyer: EntityId(1),
                projectile: EntityId(2)
            }]
        );
    }

    #[test]
    fn projectile_defeats_actor_even_mid_swing() {
        let set = [
            ent(1, Category::PrimaryActor, 0.0),
            ent(2, Category::HostileProjectile, 0.5),
        ];
        let frame = Frame::new(&set, true).unwrap();
        assert_eq!(
            classify(&[pair(2, 1)], &frame, SWING),
            vec![Outcome::ActorDefeated {
                actor: EntityId(1),
                by: EntityId(2)
            }]
        );
    }

    #[test]
    fn melee_needs_attack_stillness_and_facing() {
        let set = [
            ent(1, Category::PrimaryActor, 0.0),
            ent(2, Category::HostileFlyer, 1.5),
        ];
        let frame = Frame::new(&set, true).unwrap();
        let slain = Outcome::FlyerSlain {
            actor: EntityId(1),
            flyer: EntityId(2),
        };
        let hit = Outcome::ActorDefeated {
            actor: EntityId(1),
            by: EntityId(2),
        };
        assert_eq!(classify(&[pair(2, 1)], &frame, SWING), vec![slain]);
        for ctx in [
            AttackContext { attacking: false, ..SWING },
            AttackContext { stationary: false, ..SWING },
            AttackContext { facing: Facing::Negative, ..SWING },
        ] {
            assert_eq!(classify(&[pair(1, 2)], &frame, ctx), vec![hit]);
        }
    }

    #[test]
    fn melee_follows_the_reach_facing() {
        let actor = ent(1, Category::PrimaryActor, 0.0).with_reach(Reach::new(3.0, Facing::Negative));
        let set = [actor, ent(2, Category::HostileFlyer, -2.5)];
        let frame = Frame::new(&set, true).unwrap();
        assert_eq!(
            classify(&[pair(1, 2)], &frame, SWING),
            vec![Outcome::FlyerSlain {
                actor: EntityId(1),
                flyer: EntityId(2)
            }]
        );
    }

    #[test]
    fn unrelated_categories_are_ignored() {
        let set = [
            ent(1, Category::HostileFlyer, 0.0),
            ent(2, Category::HostileFlyer, 0.5),
            ent(3, Category::Other, 0.2),
        ];
        let frame = Frame::new(&set, false).unwrap();
        assert!(classify(&[pair(1, 2), pair(3, 1), pair(9, 1)], &frame, SWING).is_empty());
    }
}
