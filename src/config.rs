//! Runtime configuration loaded from `config.yaml`.
//!
//! Every field has a default so an empty (or missing) file is valid. The file
//! only needs the keys that differ from the defaults:
//!
//! ```yaml
//! locator: google_news_rss
//! target_language: ta
//! audio_dir: ./audio
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Which backend discovers article locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorKind {
    #[default]
    GoogleSearch,
    GoogleNewsRss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarratorConfig {
    pub user_agent: String,
    pub locator: LocatorKind,
    pub max_articles: usize,
    pub locator_timeout_secs: u64,
    pub extractor_timeout_secs: u64,
    pub narration_timeout_secs: u64,
    pub source_language: String,
    pub target_language: String,
    pub audio_dir: PathBuf,
    /// Longest text the speech endpoint accepts per request.
    pub tts_chunk_chars: usize,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            locator: LocatorKind::default(),
            max_articles: 10,
            locator_timeout_secs: 10,
            extractor_timeout_secs: 5,
            narration_timeout_secs: 10,
            source_language: "en".to_string(),
            target_language: "hi".to_string(),
            audio_dir: PathBuf::from("."),
            tts_chunk_chars: 100,
        }
    }
}

impl NarratorConfig {
    pub fn locator_timeout(&self) -> Duration {
        Duration::from_secs(self.locator_timeout_secs)
    }

    pub fn extractor_timeout(&self) -> Duration {
        Duration::from_secs(self.extractor_timeout_secs)
    }

    pub fn narration_timeout(&self) -> Duration {
        Duration::from_secs(self.narration_timeout_secs)
    }

    pub fn from_yaml(yaml: &str, path: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

/// Load the configuration at `path`, or the defaults when no path is given.
#[instrument(level = "info")]
pub fn load_config(path: Option<&Path>) -> Result<NarratorConfig, ConfigError> {
    let Some(path) = path else {
        info!("No config file given; using defaults");
        return Ok(NarratorConfig::default());
    };

    let shown = path.display().to_string();
    let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: shown.clone(),
        source,
    })?;
    let config = NarratorConfig::from_yaml(&yaml, &shown)?;
    info!(path = %shown, locator = ?config.locator, target_language = %config.target_language, "Loaded configuration");
    Ok(config)
}
