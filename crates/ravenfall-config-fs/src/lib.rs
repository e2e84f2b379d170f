// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `ConfigStore` that keeps each key in its own `<key>.json` file.
//!
//! By default files live in the per-user config directory
//! (`~/.config/ravenfall` on Linux); `ravenfall --config-dir` roots the store
//! elsewhere.

use directories::ProjectDirs;
use ravenfall_app_core::config::{ConfigError, ConfigStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One JSON file per config key under a single directory.
pub struct FsConfigStore {
    dir: PathBuf,
}

impl FsConfigStore {
    /// Store in the platform's per-user config directory.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs =
            ProjectDirs::from("dev", "flyingrobots", "Ravenfall").ok_or(ConfigError::NoConfigDir)?;
        Self::at(dirs.config_dir())
    }

    /// Store under `dir`, which is created if missing.
    pub fn at(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// File holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        fs::read(self.path_for(key)).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::Io(err),
        })
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        // The directory may have been removed since the store was opened.
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use ravenfall_app_core::config::ConfigService;
    use ravenfall_app_core::prefs::{CombatPrefs, Prefs, SweepAxis};

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path()).unwrap();
        assert!(matches!(store.load_raw("nope"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn prefs_persist_as_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let svc = ConfigService::new(FsConfigStore::at(dir.path().join("nested")).unwrap());
        let prefs = CombatPrefs {
            reach_length: 3.5,
            sweep_axis: SweepAxis::Y,
            ..CombatPrefs::default()
        };
        svc.save_prefs(&prefs).unwrap();
        let file = svc.store().path_for(CombatPrefs::KEY);
        assert_eq!(file, dir.path().join("nested").join("combat.json"));
        assert!(file.is_file());
        assert_eq!(svc.load_prefs::<CombatPrefs>().unwrap(), prefs);
    }

    #[test]
    fn writes_recreate_a_removed_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("cfg");
        let store = FsConfigStore::at(&root).unwrap();
        fs::remove_dir(&root).unwrap();
        store.save_raw("k", b"1").unwrap();
        assert_eq!(store.load_raw("k").unwrap(), b"1");
    }
}
