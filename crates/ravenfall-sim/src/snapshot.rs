// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON frame snapshots exchanged with the host simulation.
//!
//! ```json
//! {
//!   "dt": 0.016,
//!   "input": { "attack": true, "cast": false, "axis": [0.0, 0.0] },
//!   "entities": [
//!     { "id": 1, "category": "primary_actor", "min": [0, 0], "max": [1, 2] },
//!     { "id": 7, "category": "hostile_flyer", "min": [2.5, 0.5], "max": [3.5, 1.5] }
//!   ]
//! }
//! ```
//!
//! A file may hold a single snapshot or an array of them. `dt` defaults to one
//! sixtieth of a second.

use std::io::Read;

use ravenfall_geom::{Aabb2, Category, Entity, EntityId, FrameError, Reach};
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Player input sampled for the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    /// Attack input pressed this frame. Also the frame's reach-active flag.
    pub attack: bool,
    /// Spell input pressed this frame.
    pub cast: bool,
    /// Movement axes `[horizontal, vertical]`, each in `[-1, 1]`.
    pub axis: [f32; 2],
}

impl InputState {
    /// Returns `true` when neither movement axis is engaged.
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.axis[0] == 0.0 && self.axis[1] == 0.0
    }
}

/// One entity as recorded in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Identity, unique within the snapshot.
    pub id: EntityId,
    /// Gameplay category.
    pub category: Category,
    /// Minimum corner `[x, y]`.
    pub min: [f32; 2],
    /// Maximum corner `[x, y]`.
    pub max: [f32; 2],
    /// Explicit reach; when absent the frame loop supplies the actor's reach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<Reach>,
}

impl EntityRecord {
    /// Converts to a core entity, validating the box.
    pub fn to_entity(&self) -> Result<Entity, FrameError> {
        let bounds =
            Aabb2::try_new(self.min, self.max).ok_or(FrameError::InvalidBounds { entity: self.id })?;
        Ok(Entity {
            id: self.id,
            category: self.category,
            bounds,
            reach: self.reach,
        })
    }
}

/// Frame duration assumed when a snapshot does not carry one.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

fn default_dt() -> f32 {
    DEFAULT_DT
}

/// Everything the frame loop needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Seconds elapsed since the previous frame.
    #[serde(default = "default_dt")]
    pub dt: f32,
    /// Input state for the frame.
    #[serde(default)]
    pub input: InputState,
    /// Candidate entities.
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            input: InputState::default(),
            entities: Vec::new(),
        }
    }
}

impl FrameSnapshot {
    /// Builds core entities. Privileged records without an explicit reach get
    /// `default_reach`.
    pub fn to_entities(&self, default_reach: Option<Reach>) -> Result<Vec<Entity>, FrameError> {
        self.entities
            .iter()
            .map(|rec| -> Result<Entity, FrameError> {
                let mut e = rec.to_entity()?;
                if e.reach.is_none() && e.category.is_privileged() {
                    e.reach = default_reach;
                }
                Ok(e)
            })
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<FrameSnapshot>),
    One(FrameSnapshot),
}

/// Reads one snapshot or an array of snapshots from `reader`.
pub fn read_snapshots(reader: impl Read) -> Result<Vec<FrameSnapshot>, SimError> {
    let parsed: OneOrMany = serde_json::from_reader(reader)?;
    Ok(match parsed {
        OneOrMany::Many(frames) => frames,
        OneOrMany::One(frame) => vec![frame],
    })
}
