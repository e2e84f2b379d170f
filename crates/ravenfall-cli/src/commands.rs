// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use ravenfall_app_core::config::ConfigService;
use ravenfall_app_core::prefs::{CombatPrefs, Prefs};
use ravenfall_config_fs::FsConfigStore;
use ravenfall_sim::snapshot::read_snapshots;
use ravenfall_sim::{FrameLoop, FrameReport, FrameSnapshot};
use tracing::{debug, info, warn};

use crate::cli::{Cli, ConfigAction, ReplayArgs};
use crate::output;

pub fn pairs(cli: &Cli, args: &ReplayArgs, out: &mut impl Write) -> Result<()> {
    let reports = replay(cli, args)?;
    output::pairs(&reports, args.format, out)
}

pub fn resolve(cli: &Cli, args: &ReplayArgs, out: &mut impl Write) -> Result<()> {
    let reports = replay(cli, args)?;
    output::outcomes(&reports, args.format, out)
}

pub fn config(cli: &Cli, action: &ConfigAction, out: &mut impl Write) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let prefs = load_prefs(cli);
            serde_json::to_writer_pretty(&mut *out, &prefs)?;
            writeln!(out)?;
        }
        ConfigAction::Init { force } => {
            let svc = open_store(cli)?;
            let path = svc.store().path_for(CombatPrefs::KEY);
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            svc.save_prefs(&CombatPrefs::default())
                .with_context(|| format!("writing {}", path.display()))?;
            writeln!(out, "wrote {}", path.display())?;
        }
    }
    Ok(())
}

fn replay(cli: &Cli, args: &ReplayArgs) -> Result<Vec<FrameReport>> {
    let mut prefs = load_prefs(cli);
    if let Some(len) = args.reach_length {
        prefs.reach_length = len;
    }
    if let Some(axis) = args.axis {
        prefs.sweep_axis = axis.into();
    }
    prefs.validate().context("combat prefs")?;

    let frames = read_input(&args.input)?;
    info!(frames = frames.len(), reach = prefs.reach_length, "replaying");

    let mut frame_loop = FrameLoop::new(&prefs);
    frames
        .iter()
        .enumerate()
        .map(|(i, snap)| -> Result<FrameReport> {
            let report = frame_loop
                .step(snap)
                .with_context(|| format!("frame {i}"))?;
            debug!(frame = i, stats = ?frame_loop.last_stats(), "swept");
            Ok(report)
        })
        .collect()
}

fn read_input(path: &Path) -> Result<Vec<FrameSnapshot>> {
    if path.as_os_str() == "-" {
        return read_snapshots(io::stdin().lock()).context("reading snapshots from stdin");
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_snapshots(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

fn open_store(cli: &Cli) -> Result<ConfigService<FsConfigStore>> {
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config store")?;
    Ok(ConfigService::new(store))
}

/// Stored prefs, falling back to defaults when the store is unavailable,
/// empty, or unreadable.
fn load_prefs(cli: &Cli) -> CombatPrefs {
    let svc = match open_store(cli) {
        Ok(svc) => svc,
        Err(err) => {
            warn!(?err, "config store unavailable; using defaults");
            return CombatPrefs::default();
        }
    };
    svc.load_prefs().unwrap_or_else(|err| {
        warn!(%err, "ignoring unreadable combat prefs");
        CombatPrefs::default()
    })
}
