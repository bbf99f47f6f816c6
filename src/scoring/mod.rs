pub mod metrics;
pub mod post;
pub mod thread;
pub mod types;

pub use metrics::content_metrics;
pub use post::{analyze_post, HeuristicPolicy, PolicyVerdict, PostScorer, RawEngagement, ScoringPolicy};
pub use thread::{analyze_thread, analyze_thread_default};
pub use types::{
    AlgorithmSignals, ContentMetrics, EngagementScores, PartScore, Priority, ScoreBreakdown,
    ScoreRating, Signal, Suggestion, ThreadAnalysis, Warning,
};
