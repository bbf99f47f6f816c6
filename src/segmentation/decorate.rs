use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{char_len, Fragment};
use crate::patterns::{has_engagement_verb, starts_with_lead_word};
use crate::settings::PlatformLimits;

pub const HOOK_PREFIX: &str = "Thread: ";

/// Closing lines offered when the last fragment has no call-to-action.
pub const CTA_CANDIDATES: [&str; 3] = [
    "\n\nFollow for more.",
    "\n\nRT to share.",
    "\n\nLike if this helped.",
];

/// Picks which call-to-action gets appended.
pub trait CtaChooser {
    fn choose<'a>(&mut self, candidates: &[&'a str]) -> &'a str;
}

/// Uniformly random choice; the only nondeterminism in the crate.
#[derive(Debug, Clone)]
pub struct RandomCta {
    rng: StdRng,
}

impl RandomCta {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCta {
    fn default() -> Self {
        Self::new()
    }
}

impl CtaChooser for RandomCta {
    fn choose<'a>(&mut self, candidates: &[&'a str]) -> &'a str {
        candidates.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

/// Always the candidate at `index` (wrapping).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCta(pub usize);

impl CtaChooser for FixedCta {
    fn choose<'a>(&mut self, candidates: &[&'a str]) -> &'a str {
        if candidates.is_empty() {
            return "";
        }
        candidates[self.0 % candidates.len()]
    }
}

impl<C: CtaChooser + ?Sized> CtaChooser for &mut C {
    fn choose<'a>(&mut self, candidates: &[&'a str]) -> &'a str {
        (**self).choose(candidates)
    }
}

/// Prefix the first fragment with the thread marker unless it already opens
/// with a question or a lead word. Returns whether the fragment changed.
pub fn apply_hook(fragments: &mut [Fragment]) -> bool {
    let Some(first) = fragments.first_mut() else {
        return false;
    };

    if first.content.contains('?') || starts_with_lead_word(&first.content) {
        return false;
    }

    first.content.insert_str(0, HOOK_PREFIX);
    true
}

/// Append a call-to-action to the last fragment of a multi-part thread.
///
/// Skipped when the fragment already asks for engagement, or when the result
/// would exceed `max_chars - cta_margin`. Returns whether the fragment changed.
pub fn apply_cta(
    fragments: &mut [Fragment],
    limits: &PlatformLimits,
    chooser: &mut impl CtaChooser,
) -> bool {
    if fragments.len() < 2 {
        return false;
    }
    let Some(last) = fragments.last_mut() else {
        return false;
    };

    if has_engagement_verb(&last.content) {
        return false;
    }

    let cta = chooser.choose(&CTA_CANDIDATES);
    if char_len(&last.content) + char_len(cta) > limits.cta_ceiling() {
        return false;
    }

    last.content.push_str(cta);
    true
}
