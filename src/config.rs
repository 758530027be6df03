use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::ranking::SelectionLimits;
use crate::GenerationOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashtagConfig {
    pub limits: SelectionLimits,
    /// Fallbacks for request fields the caller leaves out.
    pub defaults: GenerationOptions,
}

impl HashtagConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                Self::from_toml(&contents)?
            } else {
                HashtagConfig::default()
            }
        } else {
            HashtagConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|err| format!("failed to parse config: {}", err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(default_max) = env::var("HASHTAG_DEFAULT_MAX") {
            if let Ok(value) = default_max.parse::<usize>() {
                self.defaults.max_hashtags = value;
            }
        }
        if let Ok(niche) = env::var("HASHTAG_DEFAULT_NICHE") {
            if !niche.trim().is_empty() {
                self.defaults.niche = niche;
            }
        }
        if let Ok(style) = env::var("HASHTAG_DEFAULT_STYLE") {
            if !style.trim().is_empty() {
                self.defaults.content_style = style;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("HASHTAG_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/hashtags.toml")))
}
