// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Ravenfall tools (config, prefs).
//! Keeps adapters thin and free of any storage or UI framework.

pub mod config;
pub mod prefs;
