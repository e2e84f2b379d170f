// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ravenfall_geom::{Category, Entity, Frame};
use tracing::debug;

use crate::outcome::Outcome;

/// Area spell with a cooldown.
///
/// Unlike melee, the spell does not go through the collision core: it is a
/// radius query around the actor's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpellCaster {
    radius: f32,
    cooldown: f32,
    remaining: f32,
}

impl SpellCaster {
    /// Ready-to-cast spell reaching `radius` units and recharging for
    /// `cooldown` seconds after each cast.
    #[must_use]
    pub const fn new(radius: f32, cooldown: f32) -> Self {
        Self {
            radius,
            cooldown,
            remaining: 0.0,
        }
    }

    /// Seconds until the spell can be cast again; zero or less when ready.
    #[must_use]
    pub const fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Advances one frame of `dt` seconds. Casts first if `cast` is set and the
    /// spell is ready, then lets the cooldown run. Returns whether it cast.
    pub fn tick(&mut self, cast: bool, dt: f32) -> bool {
        let fired = cast && self.remaining <= 0.0;
        if fired {
            self.remaining = self.cooldown;
        }
        if self.remaining > 0.0 {
            self.remaining -= dt;
        }
        fired
    }

    /// One [`Outcome::Banished`] for every hostile in `frame` whose center lies
    /// within the radius of `actor`'s center, in input order.
    ///
    /// Entities that take no part in detection this frame are already out of
    /// play and are left alone.
    #[must_use]
    pub fn banish(&self, frame: &Frame<'_>, actor: &Entity) -> Vec<Outcome> {
        let [ax, ay] = actor.bounds.center();
        frame
            .entities()
            .iter()
            .filter(|e| match e.category {
                Category::HostileFlyer | Category::HostileProjectile => frame.participates(e),
                Category::PrimaryActor | Category::Other => false,
            })
            .filter(|e| {
                let [x, y] = e.bounds.center();
                (x - ax).hypot(y - ay) <= self.radius
            })
            .map(|e| {
                debug!(entity = %e.id, "banished");
                Outcome::Banished {
                    actor: actor.id,
                    target: e.id,
                }
            })
            .collect()
    }
}
