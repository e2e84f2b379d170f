// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed prefs over a byte-blob storage port.
//!
//! Stores only move bytes by key; [`ConfigService`] owns the JSON encoding and
//! the [`Prefs`] contract (storage key, defaults for missing values, validation
//! before anything is written).

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::prefs::Prefs;

/// Byte storage for config blobs, addressed by key.
pub trait ConfigStore {
    /// Reads the blob stored under `key`; [`ConfigError::NotFound`] if absent.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces the blob stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failures while reading, decoding, validating, or writing config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing is stored under the key.
    #[error("not found")]
    NotFound,
    /// The store could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Stored bytes are not valid JSON for the requested type.
    #[error("malformed config: {0}")]
    Serde(#[from] serde_json::Error),
    /// A value decoded but lies outside what the collision core accepts.
    #[error("invalid value: {0}")]
    Invalid(String),
    /// The platform exposes no per-user config directory.
    #[error("no platform config directory available")]
    NoConfigDir,
}

/// JSON codec and prefs policy in front of a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decodes the value under `key`. A missing key or an empty blob is `Ok(None)`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => return Ok(None),
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Encodes `value` as pretty JSON under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        self.store.save_raw(key, &serde_json::to_vec_pretty(value)?)
    }

    /// Stored prefs of type `P`, or `P::default()` when none are stored.
    ///
    /// Not validated: callers usually apply overrides first and validate the
    /// result.
    pub fn load_prefs<P: Prefs>(&self) -> Result<P, ConfigError> {
        Ok(self.load(P::KEY)?.unwrap_or_default())
    }

    /// Validates `prefs` and stores them under `P::KEY`. Invalid prefs are
    /// never written.
    pub fn save_prefs<P: Prefs>(&self, prefs: &P) -> Result<(), ConfigError> {
        prefs.validate()?;
        self.save(P::KEY, prefs)
    }
}
