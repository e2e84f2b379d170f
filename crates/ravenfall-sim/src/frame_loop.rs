// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ravenfall_app_core::prefs::{CombatPrefs, SweepAxis};
use ravenfall_geom::{Axis, BroadPhase, CollisionPair, Frame, Reach, SweepAndPrune, SweepStats};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::error::SimError;
use crate::facing::FacingTracker;
use crate::outcome::{classify, AttackContext, Outcome};
use crate::snapshot::FrameSnapshot;
use crate::spell::SpellCaster;

/// Result of one frame, owned by the caller.
///
/// Replaces the previous frame's report entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// Zero-based index of the frame within this loop.
    pub index: u64,
    /// Intersecting pairs in sweep order.
    pub pairs: Vec<CollisionPair>,
    /// Gameplay outcomes: collision outcomes in pair order, then any spell
    /// banishments.
    pub outcomes: Vec<Outcome>,
}

/// Drives collision detection once per frame.
///
/// Between frames it keeps only the sweep engine's reusable buffers, the
/// actor's facing, and the spell cooldown; every report is built from the
/// snapshot alone.
#[derive(Debug)]
pub struct FrameLoop {
    engine: SweepAndPrune,
    facing: FacingTracker,
    spell: SpellCaster,
    reach_length: f32,
    frames: u64,
}

impl FrameLoop {
    /// Loop configured from `prefs`.
    #[must_use]
    pub fn new(prefs: &CombatPrefs) -> Self {
        let axis = match prefs.sweep_axis {
            SweepAxis::X => Axis::X,
            SweepAxis::Y => Axis::Y,
        };
        Self {
            engine: SweepAndPrune::with_axis(axis),
            facing: FacingTracker::default(),
            spell: SpellCaster::new(prefs.spell_radius, prefs.spell_cooldown),
            reach_length: prefs.reach_length,
            frames: 0,
        }
    }

    /// Current actor facing.
    #[must_use]
    pub const fn facing(&self) -> FacingTracker {
        self.facing
    }

    /// Spell cooldown state.
    #[must_use]
    pub const fn spell(&self) -> SpellCaster {
        self.spell
    }

    /// Sweep counters from the most recent frame.
    #[must_use]
    pub const fn last_stats(&self) -> SweepStats {
        self.engine.last_stats()
    }

    /// Runs one frame: updates facing from input, detects pairs, classifies
    /// them, then resolves a spell cast.
    ///
    /// On error the frame is rejected and not counted; facing has still
    /// advanced, since it depends on input alone, but the spell cooldown has
    /// not.
    pub fn step(&mut self, snapshot: &FrameSnapshot) -> Result<FrameReport, SimError> {
        let index = self.frames;
        let span = info_span!("frame", index, entities = snapshot.entities.len());
        let _guard = span.enter();

        let facing = self.facing.observe(snapshot.input.axis[0]);
        if !(snapshot.dt.is_finite() && snapshot.dt >= 0.0) {
            return Err(SimError::InvalidDt(snapshot.dt));
        }
        let reach = Reach::new(self.reach_length, facing);
        let entities = snapshot.to_entities(Some(reach))?;
        let frame = Frame::new(&entities, snapshot.input.attack)?;

        let pairs = self.engine.detect(&frame);
        let ctx = AttackContext {
            attacking: snapshot.input.attack,
            stationary: snapshot.input.is_stationary(),
            facing,
        };
        let mut outcomes = classify(&pairs, &frame, ctx);

        let actor = entities.iter().find(|e| e.category.is_privileged());
        if self.spell.tick(snapshot.input.cast && actor.is_some(), snapshot.dt) {
            if let Some(actor) = actor {
                outcomes.extend(self.spell.banish(&frame, actor));
            }
        }
        debug!(pairs = pairs.len(), outcomes = outcomes.len(), ?facing, "frame done");

        self.frames += 1;
        Ok(FrameReport {
            index,
            pairs,
            outcomes,
        })
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(&CombatPrefs::default())
    }
}
