//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/modplan/modplan.toml`
//! 3. Environment variables: `MODPLAN_*` prefix
//!
//! The `--data-file` CLI flag overrides everything and is applied by the
//! caller after loading.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where the planner state is persisted.
    pub data_file: PathBuf,
    /// Prompt string shown by the interactive shell.
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            prompt: "> ".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "modplan")
}

fn default_data_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("planner.json"))
        .unwrap_or_else(|| PathBuf::from("planner.json"))
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "data_file",
                defaults.data_file.to_string_lossy().to_string(),
            )?
            .set_default("prompt", defaults.prompt)?;

        if let Some(dirs) = project_dirs() {
            let global = dirs.config_dir().join("modplan.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        builder
            .add_source(Environment::with_prefix("MODPLAN"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_a_json_file() {
        let settings = Settings::default();
        assert_eq!(
            settings.data_file.extension().and_then(|e| e.to_str()),
            Some("json")
        );
        assert_eq!(settings.prompt, "> ");
    }
}
