// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ravenfall-sim: per-frame driver around the collision core.
//!
//! The frame loop owns the collision-pair list it produces and hands it to
//! consumers by reference for the frame it belongs to; nothing here keeps a
//! process-wide collision list.

mod error;
/// Facing derived from horizontal input.
pub mod facing;
/// Frame loop that runs detection and classification.
pub mod frame_loop;
/// Gameplay outcomes derived from collision pairs.
pub mod outcome;
/// Serializable frame snapshots.
pub mod snapshot;
/// Area spell with a cooldown.
pub mod spell;

pub use error::SimError;
pub use facing::FacingTracker;
pub use frame_loop::{FrameLoop, FrameReport};
pub use outcome::{classify, AttackContext, Outcome};
pub use snapshot::{EntityRecord, FrameSnapshot, InputState, DEFAULT_DT};
pub use spell::SpellCaster;
