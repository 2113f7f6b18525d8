//! Configuration for the jobdeck CLI.
//!
//! Loads from TOML files, environment variables, and defaults using the
//! `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `JOBDECK_CONFIG` environment variable
//! 3. XDG default: `~/.config/jobdeck/config.toml`
//! 4. Built-in defaults

use confyg::{env, Confygery};
use jobdeck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the jobdeck CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobdeckConfig {
    /// Project name, used for env var prefixes and default paths.
    pub project_name: String,

    /// Base path the record and data directories are resolved against.
    /// Defaults to the current working directory.
    pub base_path: Option<String>,

    /// Record and output directory layout.
    pub paths: PathsConfig,
}

/// Directory layout under the base path. Absolute entries are used as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Job record directory.
    pub jobs: String,

    /// Seeker profile record directory.
    pub seekers: String,

    /// Compiled catalog output directory.
    pub data: String,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for JobdeckConfig {
    fn default() -> Self {
        Self {
            project_name: "jobdeck".to_string(),
            base_path: None,
            paths: PathsConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            jobs: "jobs".to_string(),
            seekers: "seekers".to_string(),
            data: "data".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl JobdeckConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `JOBDECK_CONFIG` env var
    /// 3. XDG default: `~/.config/jobdeck/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("JOBDECK");
        env_opts.add_section("paths");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. JOBDECK_CONFIG env var
        if let Ok(path) = std::env::var("JOBDECK_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("jobdeck").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    // ------------------------------------------------------------------------
    // Resolved directories
    // ------------------------------------------------------------------------

    /// Base path all relative directories hang off.
    pub fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(PathBuf::from(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    /// Directory job records are written to and compiled from.
    pub fn jobs_dir(&self) -> Result<PathBuf> {
        Ok(self.base_path()?.join(&self.paths.jobs))
    }

    /// Directory seeker profile records are written to and compiled from.
    pub fn seekers_dir(&self) -> Result<PathBuf> {
        Ok(self.base_path()?.join(&self.paths.seekers))
    }

    /// Directory the compiled catalogs land in.
    pub fn data_dir(&self) -> Result<PathBuf> {
        Ok(self.base_path()?.join(&self.paths.data))
    }
}

// ============================================================================
// Tests
// ============================================================================
