pub mod algorithm;
pub mod config;
pub mod decorate;

pub use algorithm::split_sentences;
pub use config::SegmentationConfig;
pub use decorate::{CtaChooser, FixedCta, RandomCta, CTA_CANDIDATES, HOOK_PREFIX};

use crate::models::{Fragment, IdGenerator, UuidIds};
use crate::settings::PlatformLimits;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Splits source text into numbered, length-bounded thread fragments.
///
/// Identifier generation and call-to-action choice are injected so callers
/// (and tests) control every source of variation.
pub struct Segmenter<I = UuidIds, C = RandomCta> {
    limits: PlatformLimits,
    ids: I,
    cta: C,
}

impl Segmenter {
    pub fn new(limits: PlatformLimits) -> Self {
        Self::with_strategies(limits, UuidIds, RandomCta::new())
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(PlatformLimits::default())
    }
}

impl<I: IdGenerator, C: CtaChooser> Segmenter<I, C> {
    pub fn with_strategies(limits: PlatformLimits, ids: I, cta: C) -> Self {
        Self { limits, ids, cta }
    }

    pub fn limits(&self) -> &PlatformLimits {
        &self.limits
    }

    /// Segment `text`. Never returns an empty sequence and never more than
    /// `config.max_parts` fragments (a zero `max_parts` is treated as one).
    pub fn segment(&mut self, text: &str, config: &SegmentationConfig) -> Vec<Fragment> {
        // Blank source: a single undecorated empty fragment.
        if text.trim().is_empty() {
            log_debug!("Source text is blank, returning one empty fragment");
            return vec![Fragment::new(self.ids.next_id(), String::new())];
        }

        let sentences = split_sentences(text);
        let accumulated =
            algorithm::accumulate(&sentences, config.max_parts, &self.limits, &mut self.ids);
        let mut fragments = accumulated.fragments;

        let hooked = config.add_hook && decorate::apply_hook(&mut fragments);
        let closed =
            config.add_cta && decorate::apply_cta(&mut fragments, &self.limits, &mut self.cta);

        log_debug!(
            "Segmented {} sentences into {} fragments (truncated: {}, hook: {}, cta: {})",
            sentences.len(),
            fragments.len(),
            accumulated.truncated,
            hooked,
            closed
        );

        fragments
    }
}

/// Segment with default limits, random ids and a random call-to-action.
pub fn segment(text: &str, config: &SegmentationConfig) -> Vec<Fragment> {
    Segmenter::default().segment(text, config)
}
