// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Table and JSON rendering of frame reports.

use std::io::Write;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use ravenfall_sim::{FrameReport, Outcome};
use serde::Serialize;

use crate::cli::Format;

#[derive(Serialize)]
struct PairsRow<'a> {
    frame: u64,
    pairs: &'a [ravenfall_geom::CollisionPair],
}

#[derive(Serialize)]
struct OutcomesRow<'a> {
    frame: u64,
    outcomes: &'a [Outcome],
}

pub fn pairs(reports: &[FrameReport], format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Json => {
            let rows: Vec<_> = reports
                .iter()
                .map(|r| PairsRow {
                    frame: r.index,
                    pairs: &r.pairs,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        Format::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(["frame", "first", "second"]);
            for r in reports {
                for p in &r.pairs {
                    table.add_row([r.index.to_string(), p.first.to_string(), p.second.to_string()]);
                }
            }
            writeln!(out, "{table}")?;
            writeln!(out, "{} pair(s) in {} frame(s)", count(reports, |r| r.pairs.len()), reports.len())?;
        }
    }
    Ok(())
}

pub fn outcomes(reports: &[FrameReport], format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Json => {
            let rows: Vec<_> = reports
                .iter()
                .map(|r| OutcomesRow {
                    frame: r.index,
                    outcomes: &r.outcomes,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        Format::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(["frame", "outcome", "subject", "cause"]);
            for r in reports {
                for o in &r.outcomes {
                    let (kind, subject, cause) = describe(o);
                    table.add_row([r.index.to_string(), kind.to_owned(), subject, cause]);
                }
            }
            writeln!(out, "{table}")?;
            writeln!(
                out,
                "{} outcome(s) in {} frame(s)",
                count(reports, |r| r.outcomes.len()),
                reports.len()
            )?;
        }
    }
    Ok(())
}

fn describe(o: &Outcome) -> (&'static str, String, String) {
    match *o {
        Outcome::FlyerDowned { flyer, projectile } => {
            ("flyer_downed", flyer.to_string(), projectile.to_string())
        }
        Outcome::FlyerSlain { actor, flyer } => ("flyer_slain", flyer.to_string(), actor.to_string()),
        Outcome::ActorDefeated { actor, by } => ("actor_defeated", actor.to_string(), by.to_string()),
        Outcome::Banished { actor, target } => ("banished", target.to_string(), actor.to_string()),
    }
}

fn count(reports: &[FrameReport], f: impl Fn(&FrameReport) -> usize) -> usize {
    reports.iter().map(f).sum()
}
