// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! Black-box tests for the `ravenfall` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const FRAMES: &str = r#"[
  {
    "input": { "attack": true, "axis": [0, 0] },
    "entities": [
      { "id": 1, "category": "primary_actor", "min": [0, 0], "max": [1, 2] },
      { "id": 7, "category": "hostile_flyer", "min": [2.5, 0.5], "max": [3.5, 1.5] }
    ]
  },
  {
    "input": { "attack": false, "axis": [0, 0] },
    "entities": [
      { "id": 1, "category": "primary_actor", "min": [0, 0], "max": [1, 2] },
      { "id": 7, "category": "hostile_flyer", "min": [2.5, 0.5], "max": [3.5, 1.5] },
      { "id": 8, "category": "hostile_projectile", "min": [3, 1], "max": [4, 2] }
    ]
  }
]"#;

fn ravenfall(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ravenfall").unwrap();
    cmd.arg("--config-dir").arg(config_dir).env_remove("RUST_LOG");
    cmd
}

fn write_frames(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("frames.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn pairs_json_lists_each_frame() {
    let dir = tempfile::tempdir().unwrap();
    let frames = write_frames(dir.path(), FRAMES);
    let out = ravenfall(dir.path())
        .args(["pairs", "--format", "json"])
        .arg(&frames)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["pairs"].as_array().unwrap().len(), 1);
    // Second frame: no attack, so only the flyer/projectile contact remains.
    assert_eq!(rows[1]["pairs"][0]["first"], 7);
    assert_eq!(rows[1]["pairs"][0]["second"], 8);
}

#[test]
fn resolve_table_reports_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let frames = write_frames(dir.path(), FRAMES);
    ravenfall(dir.path())
        .arg("resolve")
        .arg(&frames)
        .assert()
        .success()
        .stdout(predicate::str::contains("flyer_slain"))
        .stdout(predicate::str::contains("flyer_downed"))
        .stdout(predicate::str::contains("2 outcome(s) in 2 frame(s)"));
}

#[test]
fn reach_override_can_shorten_the_swing() {
    let dir = tempfile::tempdir().unwrap();
    let frames = write_frames(dir.path(), FRAMES);
    ravenfall(dir.path())
        .args(["resolve", "--reach-length", "0.5"])
        .arg(&frames)
        .assert()
        .success()
        .stdout(predicate::str::contains("flyer_slain").not())
        .stdout(predicate::str::contains("1 outcome(s) in 2 frame(s)"));
}

#[test]
fn spell_radius_comes_from_stored_prefs() {
    let dir = tempfile::tempdir().unwrap();
    let frames = write_frames(
        dir.path(),
        r#"{
            "input": { "cast": true },
            "entities": [
                { "id": 1, "category": "primary_actor", "min": [0, 0], "max": [1, 2] },
                { "id": 7, "category": "hostile_flyer", "min": [4, 0.5], "max": [5, 1.5] }
            ]
        }"#,
    );
    ravenfall(dir.path())
        .args(["resolve", "--format", "json"])
        .arg(&frames)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"banished\""));

    fs::write(dir.path().join("combat.json"), r#"{ "spell_radius": 2 }"#).unwrap();
    ravenfall(dir.path())
        .arg("resolve")
        .arg(&frames)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 outcome(s) in 1 frame(s)"));
}

#[test]
fn stdin_input_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    ravenfall(dir.path())
        .args(["pairs", "-", "--format", "json"])
        .write_stdin(r#"{ "entities": [] }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"frame\": 0"));
}

#[test]
fn duplicate_ids_fail_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let frames = write_frames(
        dir.path(),
        r#"{ "entities": [
            { "id": 3, "category": "other", "min": [0, 0], "max": [1, 1] },
            { "id": 3, "category": "other", "min": [5, 0], "max": [6, 1] }
        ] }"#,
    );
    ravenfall(dir.path())
        .arg("pairs")
        .arg(&frames)
        .assert()
        .failure()
        .stderr(predicate::str::contains("frame 0"))
        .stderr(predicate::str::contains("duplicate entity id #3"));
}

#[test]
fn config_init_then_show_uses_stored_prefs() {
    let dir = tempfile::tempdir().unwrap();
    ravenfall(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("combat.json"));
    ravenfall(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    fs::write(
        dir.path().join("combat.json"),
        r#"{ "reach_length": 0.25, "sweep_axis": "y" }"#,
    )
    .unwrap();
    ravenfall(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.25"))
        .stdout(predicate::str::contains("\"y\""));
}

#[test]
fn invalid_stored_reach_is_rejected_on_replay() {
    let dir = tempfile::tempdir().unwrap();
    let frames = write_frames(dir.path(), FRAMES);
    fs::write(dir.path().join("combat.json"), r#"{ "reach_length": -3 }"#).unwrap();
    ravenfall(dir.path())
        .arg("pairs")
        .arg(&frames)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reach_length"));
}
