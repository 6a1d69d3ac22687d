// SPDX-License-Identifier: Apache-2.0
//! Shared application services for rowmath tools (config, prefs).
//! Keeps the CLI thin and storage-agnostic.

pub mod config;
pub mod prefs;
