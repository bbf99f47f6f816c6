use serde::{Deserialize, Serialize};

use crate::settings::PlatformLimits;

/// Length of `text` in characters, the unit every limit is expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// How close a body is to the platform's character cap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CharCountStatus {
    Ok,
    NearLimit,
    OverLimit,
}

impl CharCountStatus {
    pub fn for_count(count: usize, limits: &PlatformLimits) -> Self {
        if count > limits.max_chars {
            CharCountStatus::OverLimit
        } else if count > limits.max_chars.saturating_sub(limits.near_limit_margin) {
            CharCountStatus::NearLimit
        } else {
            CharCountStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharCountStatus::Ok => "ok",
            CharCountStatus::NearLimit => "near limit",
            CharCountStatus::OverLimit => "over limit",
        }
    }
}

/// One post of a thread. The id only correlates the fragment with its
/// analysis; order comes from the position in the owning sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub id: String,
    pub content: String,
}

impl Fragment {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    pub fn char_count(&self) -> usize {
        char_len(&self.content)
    }

    pub fn char_status(&self, limits: &PlatformLimits) -> CharCountStatus {
        CharCountStatus::for_count(self.char_count(), limits)
    }
}
