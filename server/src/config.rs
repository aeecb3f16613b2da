//! Host configuration parsed from environment variables.
//!
//! The game itself has no runtime configuration; these settings only cover
//! where the SSR host listens and where it finds the built WASM bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use leptos::prelude::LeptosOptions;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: expected 1-65535")]
    InvalidPort { value: String },
    #[error("SPINNER_SITE_ROOT is set but empty")]
    EmptySiteRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides Leptos' `site-root` when serving `/pkg`.
    pub site_root_override: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SPINNER_SITE_ROOT`: directory containing the built `pkg/` bundle
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_root_override = match lookup("SPINNER_SITE_ROOT") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptySiteRoot),
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => None,
        };
        Ok(Self { port, site_root_override })
    }

    /// Directory the `/pkg` assets are served from.
    pub fn site_root(&self, options: &LeptosOptions) -> PathBuf {
        self.site_root_override
            .clone()
            .unwrap_or_else(|| PathBuf::from(options.site_root.as_ref()))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
