//! Thread splitting and heuristic scoring for short-form social posts.
//!
//! Two independent, pure components:
//!
//! * [`segmentation`] splits free text into numbered fragments that fit the
//!   platform's character limit, optionally adding a hook and a call-to-action.
//! * [`scoring`] scores a single post ([`analyze_post`]) or an ordered thread
//!   ([`analyze_thread`]) and explains the score with suggestions.
//!
//! ```
//! use postcraft_lib::{analyze_thread_default, segment, SegmentationConfig};
//!
//! let config = SegmentationConfig { max_parts: 5, add_hook: false, add_cta: false };
//! let fragments = segment("Hello there. How are you? I am fine.", &config);
//! assert_eq!(fragments.len(), 1);
//!
//! let analysis = analyze_thread_default(&fragments);
//! assert_eq!(analysis.part_scores.len(), 1);
//! ```

mod cli;
pub mod models;
pub mod patterns;
pub mod scoring;
pub mod segmentation;
pub mod settings;
pub mod utils;

pub use cli::run;
pub use models::{CharCountStatus, Fragment, IdGenerator, SequentialIds, Thread, UuidIds};
pub use scoring::{
    analyze_post, analyze_thread, analyze_thread_default, PostScorer, ScoreBreakdown,
    ScoreRating, ScoringPolicy, ThreadAnalysis,
};
pub use segmentation::{
    segment, CtaChooser, FixedCta, RandomCta, SegmentationConfig, Segmenter,
};
pub use settings::{ComposerSettings, PlatformLimits, ScoringConfig, SettingsStore};
pub use utils::init_logging;
