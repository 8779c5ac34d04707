//! Configuration file handling for memlay.

use anyhow::{Context, Result};
use memlay_core::TypeRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`Config::locate`].
pub const CONFIG_FILE: &str = "memlay.toml";

/// Represents the memlay.toml configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: Shell,
    /// Atomic types registered before any command runs.
    #[serde(default, rename = "atomic")]
    pub atomics: Vec<AtomicEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicEntry {
    pub name: String,
    pub size: i64,
    pub alignment: i64,
}

impl AtomicEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, size: i64, alignment: i64) -> Self {
        Self {
            name: name.into(),
            size,
            alignment,
        }
    }
}

impl Config {
    /// Creates a configuration with the default prompt and no prelude.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration whose prelude holds the usual C scalar types.
    #[must_use]
    pub fn with_c_prelude() -> Self {
        Self {
            shell: Shell::default(),
            atomics: vec![
                AtomicEntry::new("char", 1, 1),
                AtomicEntry::new("short", 2, 2),
                AtomicEntry::new("int", 4, 4),
                AtomicEntry::new("long", 8, 8),
                AtomicEntry::new("float", 4, 4),
                AtomicEntry::new("double", 8, 8),
            ],
        }
    }

    /// Loads configuration from a memlay.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
    }

    /// Saves configuration to a memlay.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Returns the path of the nearest memlay.toml, walking up from the current directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn locate() -> Result<Option<PathBuf>> {
        let mut current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(Some(config_path));
            }

            if !current_dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Registers every prelude atomic, in file order.
    ///
    /// # Errors
    /// Returns an error naming the first entry the registry rejects.
    pub fn apply_prelude(&self, registry: &mut TypeRegistry) -> Result<()> {
        for entry in &self.atomics {
            registry
                .register_atomic(&entry.name, entry.size, entry.alignment)
                .with_context(|| format!("Invalid prelude type '{}'", entry.name))?;
        }
        tracing::debug!(count = self.atomics.len(), "applied prelude");
        Ok(())
    }
}
