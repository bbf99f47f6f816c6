use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::segmentation::SegmentationConfig;

const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Platform constraints shared by the segmenter and the scorers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformLimits {
    /// Hard cap on a single post, in characters.
    pub max_chars: usize,
    /// Headroom kept free when appending a call-to-action.
    pub cta_margin: usize,
    /// Counts within this many characters of the cap are flagged as near the limit.
    pub near_limit_margin: usize,
    pub reading_words_per_minute: u32,
}

impl Default for PlatformLimits {
    fn default() -> Self {
        Self {
            max_chars: 280,
            cta_margin: 5,
            near_limit_margin: 20,
            reading_words_per_minute: 200,
        }
    }
}

impl PlatformLimits {
    /// Longest body a call-to-action may produce.
    pub fn cta_ceiling(&self) -> usize {
        self.max_chars.saturating_sub(self.cta_margin)
    }
}

/// Weights of the thread composite. CTA effectiveness is reported but not weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadWeights {
    pub fragments: f64,
    pub hook: f64,
    pub flow: f64,
}

impl Default for ThreadWeights {
    fn default() -> Self {
        Self {
            fragments: 0.4,
            hook: 0.3,
            flow: 0.3,
        }
    }
}

/// Weights of the single-post composite over the engagement sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostWeights {
    pub likeability: f64,
    pub replyability: f64,
    pub retweetability: f64,
    pub quoteability: f64,
}

impl Default for PostWeights {
    fn default() -> Self {
        Self {
            likeability: 0.30,
            replyability: 0.30,
            retweetability: 0.25,
            quoteability: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub thread: ThreadWeights,
    pub post: PostWeights,
}

/// Everything the composer reads from its settings file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposerSettings {
    pub limits: PlatformLimits,
    pub segmentation: SegmentationConfig,
    pub scoring: ScoringConfig,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<ComposerSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    log_warn!(
                        "Ignoring malformed settings in {}: {}",
                        path.display(),
                        err
                    );
                    ComposerSettings::default()
                }
            }
        } else {
            ComposerSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn settings(&self) -> ComposerSettings {
        *self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn update_segmentation(&self, config: SegmentationConfig) -> Result<()> {
        let mut guard = self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.segmentation = config;
        self.write_file(&guard)
    }

    /// Replace everything with defaults and write them out.
    pub fn reset(&self) -> Result<()> {
        {
            let mut guard = self
                .data
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = ComposerSettings::default();
        }
        self.persist()
    }

    /// Write the current snapshot to disk.
    pub fn persist(&self) -> Result<()> {
        let snapshot = self.settings();
        self.write_file(&snapshot)
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: ComposerSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid settings in {}", self.path.display()))?;
        let mut guard = self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = data;
        Ok(())
    }

    fn write_file(&self, data: &ComposerSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
