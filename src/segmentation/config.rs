use serde::{Deserialize, Serialize};

/// Smallest and largest fragment counts the composer offers.
pub const MIN_PARTS: usize = 3;
pub const MAX_PARTS: usize = 10;

/// Options for one segmentation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentationConfig {
    /// Upper bound on produced fragments; remaining text is dropped
    pub max_parts: usize,

    /// Prefix the first fragment with "Thread: " when it lacks a hook
    pub add_hook: bool,

    /// Append a call-to-action to the last fragment when it lacks one
    pub add_cta: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_parts: 5,
            add_hook: true,
            add_cta: true,
        }
    }
}

impl SegmentationConfig {
    /// Bring `max_parts` into the range offered to users.
    pub fn clamped(self) -> Self {
        Self {
            max_parts: self.max_parts.clamp(MIN_PARTS, MAX_PARTS),
            ..self
        }
    }
}
