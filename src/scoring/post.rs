//! Single-post scoring.
//!
//! Content metrics follow fixed rules (see [`super::metrics`]). How those
//! metrics turn into engagement scores is a [`ScoringPolicy`], so a remote
//! analysis service or a retuned heuristic can replace [`HeuristicPolicy`]
//! without touching the clamping, weighting and ordering done here.

use crate::patterns::has_ascii_digit;
use crate::settings::{PlatformLimits, PostWeights};

use super::metrics::content_metrics;
use super::types::{
    clamp_score, round_score, AlgorithmSignals, ContentMetrics, EngagementScores, Priority,
    ScoreBreakdown, Signal, Suggestion, Warning,
};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Unclamped engagement scores as a policy computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawEngagement {
    pub likeability: i32,
    pub replyability: i32,
    pub retweetability: i32,
    pub quoteability: i32,
}

impl RawEngagement {
    fn add_all(&mut self, delta: i32) {
        self.likeability += delta;
        self.replyability += delta;
        self.retweetability += delta;
        self.quoteability += delta;
    }

    fn clamped(&self) -> EngagementScores {
        EngagementScores {
            likeability: clamp_score(self.likeability),
            replyability: clamp_score(self.replyability),
            retweetability: clamp_score(self.retweetability),
            quoteability: clamp_score(self.quoteability),
        }
    }
}

/// Everything a policy says about a post.
#[derive(Debug, Clone, Default)]
pub struct PolicyVerdict {
    pub engagement: RawEngagement,
    pub signals: AlgorithmSignals,
    pub suggestions: Vec<Suggestion>,
    pub warnings: Vec<Warning>,
}

pub trait ScoringPolicy {
    fn evaluate(
        &self,
        text: &str,
        metrics: &ContentMetrics,
        limits: &PlatformLimits,
    ) -> PolicyVerdict;
}

/// Default rules of thumb for short-form posts.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicPolicy {
    /// Character window that reads as neither thin nor padded.
    pub ideal_chars: (usize, usize),
    /// Fewer words than this is treated as too thin to engage with.
    pub min_words: usize,
    pub max_hashtags: usize,
    pub max_emojis: usize,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self {
            ideal_chars: (70, 240),
            min_words: 5,
            max_hashtags: 2,
            max_emojis: 3,
        }
    }
}

fn suggestion(priority: Priority, message: impl Into<String>, increase: u8) -> Suggestion {
    Suggestion {
        priority,
        message: message.into(),
        potential_score_increase: increase,
    }
}

fn warning(message: impl Into<String>, impact: impl Into<String>) -> Warning {
    Warning {
        message: message.into(),
        score_impact: impact.into(),
    }
}

fn addresses_reader(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|word| {
            let word = word.to_lowercase();
            matches!(word.as_str(), "you" | "your" | "you're" | "yours")
        })
}

impl ScoringPolicy for HeuristicPolicy {
    fn evaluate(
        &self,
        text: &str,
        metrics: &ContentMetrics,
        limits: &PlatformLimits,
    ) -> PolicyVerdict {
        let mut engagement = RawEngagement {
            likeability: 50,
            replyability: 40,
            retweetability: 45,
            quoteability: 40,
        };
        let mut signals = AlgorithmSignals::default();
        let mut suggestions = Vec::new();
        let mut warnings = Vec::new();

        let (ideal_min, ideal_max) = self.ideal_chars;
        let ideal_length =
            metrics.character_count >= ideal_min && metrics.character_count <= ideal_max;
        let too_short = metrics.word_count < self.min_words;
        let has_numbers = has_ascii_digit(text);

        if ideal_length {
            engagement.likeability += 10;
            engagement.replyability += 5;
            engagement.quoteability += 15;
            signals.positive_signals.push(Signal::new(
                "Optimal length",
                format!("Between {} and {} characters", ideal_min, ideal_max),
            ));
        }

        if metrics.has_question {
            engagement.replyability += 30;
            engagement.quoteability += 15;
            signals
                .positive_signals
                .push(Signal::new("Question", "Questions invite replies"));
        } else {
            suggestions.push(suggestion(
                Priority::Medium,
                "Ask a question to invite replies",
                10,
            ));
        }

        if addresses_reader(text) {
            engagement.replyability += 10;
            signals
                .positive_signals
                .push(Signal::new("Direct address", "Speaks to the reader"));
        }

        if metrics.has_media {
            engagement.likeability += 10;
            engagement.retweetability += 15;
            signals
                .positive_signals
                .push(Signal::new("Rich media", "Attached image or video"));
        } else {
            suggestions.push(suggestion(
                Priority::Medium,
                "Attach an image or video to boost engagement",
                10,
            ));
        }

        if has_numbers {
            engagement.retweetability += 10;
            engagement.quoteability += 10;
            signals
                .positive_signals
                .push(Signal::new("Concrete numbers", "Specific figures get shared"));
        }

        match metrics.hashtag_count {
            0 => suggestions.push(suggestion(
                Priority::Low,
                "Add a relevant hashtag for discoverability",
                5,
            )),
            n if n <= self.max_hashtags => {
                engagement.retweetability += 10;
                signals
                    .positive_signals
                    .push(Signal::new("Focused hashtags", format!("{} hashtag(s)", n)));
            }
            n => {
                engagement.retweetability -= 15;
                signals
                    .negative_signals
                    .push(Signal::new("Hashtag overload", format!("{} hashtags", n)));
                suggestions.push(suggestion(
                    Priority::Medium,
                    format!("Use at most {} hashtags", self.max_hashtags),
                    8,
                ));
                warnings.push(warning(
                    "Too many hashtags can look like spam",
                    "-15 retweetability",
                ));
            }
        }

        match metrics.emoji_count {
            0 => {}
            n if n <= self.max_emojis => {
                engagement.likeability += 10;
                signals
                    .positive_signals
                    .push(Signal::new("Expressive emojis", format!("{} emoji", n)));
            }
            n => {
                engagement.likeability -= 10;
                signals
                    .negative_signals
                    .push(Signal::new("Emoji overload", format!("{} emoji", n)));
                suggestions.push(suggestion(
                    Priority::Low,
                    format!("Keep emojis to {} or fewer", self.max_emojis),
                    5,
                ));
            }
        }

        if metrics.link_count > 0 {
            engagement.likeability -= 5;
            engagement.retweetability -= 10;
            signals
                .negative_signals
                .push(Signal::new("External link", "Links pull readers off the platform"));
            suggestions.push(suggestion(
                Priority::Low,
                "Move links to a reply to avoid reach penalties",
                5,
            ));
            warnings.push(warning(
                "External links reduce reach",
                "-10 retweetability, -5 likeability",
            ));
        }

        if too_short {
            engagement.add_all(-10);
            signals
                .negative_signals
                .push(Signal::new("Too short", format!("Under {} words", self.min_words)));
            suggestions.push(suggestion(
                Priority::High,
                "Expand the post with more context",
                15,
            ));
        }

        if metrics.over_limit {
            engagement.add_all(-25);
            signals.negative_signals.push(Signal::new(
                "Over character limit",
                format!("{} of {} characters", metrics.character_count, limits.max_chars),
            ));
            suggestions.push(suggestion(
                Priority::High,
                format!(
                    "Trim the post to {} characters or split it into a thread",
                    limits.max_chars
                ),
                20,
            ));
            warnings.push(warning(
                format!("Post exceeds {} characters", limits.max_chars),
                "-25 on every engagement score",
            ));
        }

        PolicyVerdict {
            engagement,
            signals,
            suggestions,
            warnings,
        }
    }
}

/// Scores single posts with a pluggable [`ScoringPolicy`].
pub struct PostScorer<P = HeuristicPolicy> {
    limits: PlatformLimits,
    weights: PostWeights,
    policy: P,
}

impl PostScorer {
    pub fn new(limits: PlatformLimits, weights: PostWeights) -> Self {
        Self {
            limits,
            weights,
            policy: HeuristicPolicy::default(),
        }
    }
}

impl Default for PostScorer {
    fn default() -> Self {
        Self::new(PlatformLimits::default(), PostWeights::default())
    }
}

impl<P: ScoringPolicy> PostScorer<P> {
    pub fn with_policy<Q: ScoringPolicy>(self, policy: Q) -> PostScorer<Q> {
        PostScorer {
            limits: self.limits,
            weights: self.weights,
            policy,
        }
    }

    /// Score `text` with the attached media URLs. Pure: identical input
    /// gives an identical breakdown.
    pub fn analyze(&self, text: &str, media_urls: &[String]) -> ScoreBreakdown {
        let content_metrics = content_metrics(text, media_urls, &self.limits);
        let verdict = self.policy.evaluate(text, &content_metrics, &self.limits);

        let engagement_scores = verdict.engagement.clamped();
        let overall_score = self.compose(&engagement_scores);

        let mut suggestions = verdict.suggestions;
        suggestions.sort_by_key(|s| s.priority);

        log_debug!(
            "Post of {} characters scored {} ({} suggestions, {} warnings)",
            content_metrics.character_count,
            overall_score,
            suggestions.len(),
            verdict.warnings.len()
        );

        ScoreBreakdown {
            overall_score,
            engagement_scores,
            content_metrics,
            algorithm_signals: verdict.signals,
            suggestions,
            warnings: verdict.warnings,
        }
    }

    /// Weighted mean of the clamped sub-scores, normalized by the weight sum.
    fn compose(&self, scores: &EngagementScores) -> u8 {
        let w = &self.weights;
        let total_weight = w.likeability + w.replyability + w.retweetability + w.quoteability;
        if total_weight <= 0.0 {
            return 0;
        }

        let weighted = scores.likeability as f64 * w.likeability
            + scores.replyability as f64 * w.replyability
            + scores.retweetability as f64 * w.retweetability
            + scores.quoteability as f64 * w.quoteability;

        round_score(weighted / total_weight)
    }
}

/// Score a post with the default policy, limits and weights, and no media.
pub fn analyze_post(text: &str) -> ScoreBreakdown {
    PostScorer::default().analyze(text, &[])
}
