// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Combat tunables shared by Ravenfall tools.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::ConfigError;

/// Shortest spell cooldown, in seconds: one full cast animation.
pub const MIN_SPELL_COOLDOWN: f32 = 0.66;

/// A prefs record stored under a fixed key.
pub trait Prefs: Serialize + DeserializeOwned + Default {
    /// Storage key.
    const KEY: &'static str;

    /// Rejects values the consumers of these prefs would refuse.
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Axis the broad phase sorts endpoints along.
///
/// Only the sort order changes; which entities take part and which pairs are
/// reported is the same on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SweepAxis {
    /// Horizontal sweep (the usual choice for a side-scroller).
    #[default]
    X,
    /// Vertical sweep.
    Y,
}

/// Tunables read by the frame loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CombatPrefs {
    /// Length of the actor's melee reach, in world units.
    pub reach_length: f32,
    /// Broad-phase sweep axis.
    pub sweep_axis: SweepAxis,
    /// Hostiles whose centers lie within this distance of the actor's center
    /// are banished by a spell, in world units.
    pub spell_radius: f32,
    /// Seconds before the spell can be cast again.
    pub spell_cooldown: f32,
}

impl Default for CombatPrefs {
    fn default() -> Self {
        Self {
            reach_length: 2.3,
            sweep_axis: SweepAxis::X,
            spell_radius: 8.0,
            spell_cooldown: 4.0,
        }
    }
}

impl Prefs for CombatPrefs {
    const KEY: &'static str = "combat";

    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("reach_length", self.reach_length)?;
        non_negative("spell_radius", self.spell_radius)?;
        if !(self.spell_cooldown.is_finite() && self.spell_cooldown >= MIN_SPELL_COOLDOWN) {
            return Err(ConfigError::Invalid(format!(
                "spell_cooldown must be at least {MIN_SPELL_COOLDOWN}, got {}",
                self.spell_cooldown
            )));
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
