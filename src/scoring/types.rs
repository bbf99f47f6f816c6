use serde::{Deserialize, Serialize};

/// Clamp an intermediate score into 0..=100.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Round a weighted composite to the nearest whole score, halves rounding up.
pub fn round_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartScore {
    pub id: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThreadAnalysis {
    pub total_score: u8,
    pub hook_strength: u8,
    pub flow_score: u8,
    pub cta_effectiveness: u8,
    /// One entry per analyzed fragment, in thread order.
    pub part_scores: Vec<PartScore>,
    pub suggestions: Vec<String>,
}

impl ThreadAnalysis {
    /// Result for a thread with no fragments.
    ///
    /// Hook, flow and call-to-action sit at their heuristic starting points.
    /// The total stays 0 because there is no content to average.
    pub fn neutral() -> Self {
        Self {
            total_score: 0,
            hook_strength: super::thread::HOOK_BASE,
            flow_score: super::thread::FLOW_BASE,
            cta_effectiveness: super::thread::CTA_BASE,
            part_scores: Vec::new(),
            suggestions: vec!["Add at least one tweet to analyze".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EngagementScores {
    pub likeability: u8,
    pub replyability: u8,
    pub retweetability: u8,
    pub quoteability: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub character_count: usize,
    pub over_limit: bool,
    pub word_count: usize,
    pub reading_time_seconds: u32,
    pub has_media: bool,
    pub media_count: usize,
    pub has_question: bool,
    pub question_count: usize,
    pub has_hashtags: bool,
    pub hashtag_count: usize,
    pub has_emojis: bool,
    pub emoji_count: usize,
    pub link_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub name: String,
    pub description: String,
}

impl Signal {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmSignals {
    pub positive_signals: Vec<Signal>,
    pub negative_signals: Vec<Signal>,
}

/// Declaration order is sort order: high-priority suggestions come first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub priority: Priority,
    pub message: String,
    pub potential_score_increase: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub message: String,
    pub score_impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overall_score: u8,
    pub engagement_scores: EngagementScores,
    pub content_metrics: ContentMetrics,
    pub algorithm_signals: AlgorithmSignals,
    pub suggestions: Vec<Suggestion>,
    pub warnings: Vec<Warning>,
}

/// Coarse label for any 0..=100 score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreRating::Excellent,
            60..=79 => ScoreRating::Good,
            40..=59 => ScoreRating::Fair,
            _ => ScoreRating::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::NeedsImprovement => "Needs Improvement",
        }
    }
}
