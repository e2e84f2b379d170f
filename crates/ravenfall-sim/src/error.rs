// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ravenfall_geom::FrameError;
use thiserror::Error;

/// Errors surfaced by the frame loop and snapshot decoding.
#[derive(Debug, Error)]
pub enum SimError {
    /// The snapshot violates the collision core's input contract.
    #[error("invalid frame: {0}")]
    Frame(#[from] FrameError),
    /// Snapshot JSON could not be decoded.
    #[error("snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Frame duration is negative or non-finite.
    #[error("invalid frame duration {0}")]
    InvalidDt(f32),
    /// Snapshot source could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
