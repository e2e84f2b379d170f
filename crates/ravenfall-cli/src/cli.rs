// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ravenfall_app_core::prefs::SweepAxis;

#[derive(Parser, Debug)]
#[command(name = "ravenfall", author, version, about, long_about = None)]
pub struct Cli {
    /// Read and write config under this directory instead of the platform default
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the collision pairs found in each frame
    Pairs(ReplayArgs),
    /// Print the gameplay outcome of each frame's collisions
    Resolve(ReplayArgs),
    /// Inspect or initialize stored combat prefs
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Snapshot file (one frame or an array of frames); `-` reads stdin
    pub input: PathBuf,

    /// Override the actor's reach length
    #[arg(long)]
    pub reach_length: Option<f32>,

    /// Override the sweep axis
    #[arg(long, value_enum)]
    pub axis: Option<AxisArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective prefs as JSON
    Show,
    /// Write default prefs unless a file already exists (use --force to overwrite)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisArg {
    X,
    Y,
}

impl From<AxisArg> for SweepAxis {
    fn from(a: AxisArg) -> Self {
        match a {
            AxisArg::X => Self::X,
            AxisArg::Y => Self::Y,
        }
    }
}
