//! Configuration file parsing for `tern.toml`.
//!
//! Searches current directory then ancestors, falling back to
//! `~/.config/tern/tern.toml` if no project-level file is found.

use crate::env::DEFAULT_SELF_HOSTED_MARKER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "tern.toml";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct PalConfig {
    #[serde(default)]
    pub runtime: RuntimeSection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RuntimeSection {
    /// Identity string to report instead of the built-in host identity.
    #[serde(default)]
    pub identity: Option<String>,
    /// Token whose presence in the identity selects the self-hosted backend.
    #[serde(default = "default_marker")]
    pub self_hosted_marker: String,
}

fn default_marker() -> String {
    DEFAULT_SELF_HOSTED_MARKER.to_string()
}

impl Default for RuntimeSection {
    fn default() -> Self {
        Self {
            identity: None,
            self_hosted_marker: default_marker(),
        }
    }
}

impl PalConfig {
    /// Find `tern.toml` in the current dir or a parent, then the global
    /// location, and return it with the path it was read from. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load_with_path() -> Result<Option<(PathBuf, Self)>, String> {
        let cwd = std::env::current_dir()
            .map_err(|e| format!("cannot determine current directory: {}", e))?;
        let home = std::env::var_os("HOME").map(PathBuf::from);
        Self::find_and_load(&cwd, home.as_deref())
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        toml::from_str(&content).map_err(|e| format!("invalid toml in '{}': {}", path.display(), e))
    }

    /// Parse a TOML string directly.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    fn find_and_load(
        start: &Path,
        home: Option<&Path>,
    ) -> Result<Option<(PathBuf, Self)>, String> {
        let project = start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|path| path.exists());
        let global = home.map(|home| home.join(".config").join("tern").join(CONFIG_FILE_NAME));
        match project.or_else(|| global.filter(|path| path.exists())) {
            Some(path) => {
                let cfg = Self::load_from(&path)?;
                Ok(Some((path, cfg)))
            }
            None => Ok(None),
        }
    }

    /// Generate a default `tern.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Tern bootstrap layer configuration

[runtime]
# Identity string reported to the environment detector.
# TERN_RUNTIME_IDENTITY overrides this value.
# identity = "tern-vm 0.1"

# Token that marks the self-hosted runtime.
self_hosted_marker = "tern-vm"
"#
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
