//! Layered settings: built-in defaults, then the TOML file, then environment, then
//! command-line flags.

use anyhow::{Context as AnyhowContext, Result};
use repolens_client::{ClientConfig, DEFAULT_ANALYZE_TIMEOUT, DEFAULT_BASE_URL, DEFAULT_EXPLAIN_TIMEOUT};
use repolens_dashboard::{ReportLimits, TOP_FILES};
use repolens_text::heuristics::{DEFAULT_FLOW_ENTRIES, FOLDER_ROOTS, README_BULLETS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "REPOLENS_CONFIG";
pub const API_URL_ENV: &str = "REPOLENS_API_URL";
pub const ANALYZE_TIMEOUT_ENV: &str = "REPOLENS_ANALYZE_TIMEOUT_SECS";
pub const EXPLAIN_TIMEOUT_ENV: &str = "REPOLENS_EXPLAIN_TIMEOUT_SECS";
pub const DEFAULT_CONFIG_FILE: &str = "repolens.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub api_url: String,
    pub analyze_timeout_secs: u64,
    pub explain_timeout_secs: u64,
    pub limits: Limits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub readme_bullets: usize,
    pub folder_roots: usize,
    pub top_files: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            analyze_timeout_secs: DEFAULT_ANALYZE_TIMEOUT.as_secs(),
            explain_timeout_secs: DEFAULT_EXPLAIN_TIMEOUT.as_secs(),
            limits: Limits::default(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            readme_bullets: README_BULLETS,
            folder_roots: FOLDER_ROOTS,
            top_files: TOP_FILES,
        }
    }
}

impl CliConfig {
    /// Defaults overlaid with the config file (if any) and the environment.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok();
        let mut config = match config_path(explicit, &lookup) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(secs) = lookup(ANALYZE_TIMEOUT_ENV) {
            self.analyze_timeout_secs = parse_secs(ANALYZE_TIMEOUT_ENV, &secs)?;
        }
        if let Some(secs) = lookup(EXPLAIN_TIMEOUT_ENV) {
            self.explain_timeout_secs = parse_secs(EXPLAIN_TIMEOUT_ENV, &secs)?;
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            analyze_timeout: Duration::from_secs(self.analyze_timeout_secs),
            explain_timeout: Duration::from_secs(self.explain_timeout_secs),
        }
    }

    pub fn report_limits(&self) -> ReportLimits {
        ReportLimits {
            readme_bullets: self.limits.readme_bullets,
            folder_roots: self.limits.folder_roots,
            top_files: self.limits.top_files,
            flow_entries: DEFAULT_FLOW_ENTRIES,
        }
    }
}

/// `--config`, else `$REPOLENS_CONFIG`, else `./repolens.toml` when present.
fn config_path(explicit: Option<&Path>, lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = lookup(CONFIG_ENV).filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a whole number of seconds, got {value:?}"))
}
