//! Application configuration.
//!
//! Settings come from the command line, with optional defaults read from
//! `~/.config/labpair/config.json`:
//!
//! ```json
//! { "base_url": "https://handins.ccs.neu.edu", "username": "jdoe", "output_dir": "reports" }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use labpair_core::api::DEFAULT_BASE_URL;
use labpair_core::PairingRequest;
use serde::Deserialize;
use tracing::warn;

use crate::cli_args::CliArgs;

/// Application name used for the config directory path
const APP_NAME: &str = "labpair";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Optional defaults from the config file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub course_id: u64,
    pub request: PairingRequest,
    pub sheet: Option<String>,
    pub latest: bool,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub username: Option<String>,
}

impl RunConfig {
    /// Merge command line arguments over file defaults and validate them.
    pub fn resolve(args: CliArgs, file: Config) -> Result<Self> {
        let staff: Vec<String> = args.staff.iter().map(|s| s.trim().to_string()).collect();
        if staff.is_empty() {
            anyhow::bail!("At least one staff member is required");
        }
        if let Some(position) = staff.iter().position(|s| s.is_empty()) {
            anyhow::bail!("Staff name {} is blank", position + 1);
        }
        for (i, name) in staff.iter().enumerate() {
            if staff[..i].contains(name) {
                warn!(staff = %name, "Staff member listed more than once");
            }
        }

        Ok(Self {
            course_id: args.course,
            request: PairingRequest {
                lab_section: args.lab,
                offset: args.offset,
                staff,
            },
            sheet: args.sheet,
            latest: args.latest,
            output_dir: args
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            base_url: args
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            username: file.username,
        })
    }
}
