// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./numerio.toml` > `~/.config/numerio/numerio.toml`
//! > `/etc/numerio/numerio.toml` with environment variable overrides via the
//! `NUMERIO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::NumerioConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/numerio/numerio.toml` (system-wide)
/// 3. `~/.config/numerio/numerio.toml` (user XDG config)
/// 4. `./numerio.toml` (local directory)
/// 5. `NUMERIO_*` environment variables
pub fn load_config() -> Result<NumerioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NumerioConfig::default()))
        .merge(Toml::file("/etc/numerio/numerio.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("numerio/numerio.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("numerio.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<NumerioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NumerioConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NumerioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NumerioConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping. `Env::split("_")` would misparse keys that
/// themselves contain underscores (`NUMERIO_LIMITS_FACTORIAL_MAX` must map
/// to `limits.factorial_max`, not `limits.factorial.max`).
fn env_provider() -> Env {
    Env::prefixed("NUMERIO_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("log_", "log.", 1)
            .replacen("limits_", "limits.", 1);
        mapped.into()
    })
}
