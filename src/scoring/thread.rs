use crate::models::{char_len, Fragment};
use crate::patterns::{
    has_ascii_digit, has_engagement_verb, split_on_whitespace_runs, starts_with_lead_word,
    THREAD_PREFIX,
};
use crate::settings::{PlatformLimits, ThreadWeights};

use super::types::{clamp_score, round_score, PartScore, ThreadAnalysis};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

const HOOK_THRESHOLD: u8 = 70;
const CTA_THRESHOLD: u8 = 70;
const FLOW_THRESHOLD: u8 = 75;
const RECOMMENDED_MIN_PARTS: usize = 3;

pub(super) const HOOK_BASE: u8 = 50;
pub(super) const CTA_BASE: u8 = 50;
pub(super) const FLOW_BASE: u8 = 70;

/// Words compared at each seam between two fragments.
const SEAM_WORDS: usize = 3;

/// Score one fragment on length, questions and concrete numbers.
pub fn score_fragment(content: &str, limits: &PlatformLimits) -> u8 {
    let len = char_len(content);
    let mut score: i32 = 50;

    if len > 50 {
        score += 10;
    }
    if len > 150 {
        score += 10;
    }
    if content.contains('?') {
        score += 5;
    }
    if has_ascii_digit(content) {
        score += 5;
    }
    if len > limits.max_chars {
        score -= 20;
    }

    clamp_score(score)
}

/// How strongly the opening fragment pulls readers in.
pub fn hook_strength(first: &str) -> u8 {
    let len = char_len(first);
    let mut score = HOOK_BASE as i32;

    if first.starts_with(THREAD_PREFIX) {
        score += 15;
    }
    if first.contains('?') {
        score += 15;
    }
    if starts_with_lead_word(first) {
        score += 10;
    }
    if len > 100 && len < 200 {
        score += 10;
    }

    clamp_score(score)
}

/// How clearly the closing fragment asks for engagement.
pub fn cta_effectiveness(last: &str) -> u8 {
    let mut score = CTA_BASE as i32;

    if has_engagement_verb(last) {
        score += 30;
    }
    if last.contains('?') {
        score += 10;
    }

    clamp_score(score)
}

/// Whether the end of `prev` and the start of `next` share a word longer
/// than three characters.
fn seam_connects(prev: &str, next: &str) -> bool {
    let prev = prev.to_lowercase();
    let next = next.to_lowercase();

    // Edge whitespace yields empty tokens that still take a slot in the window.
    let prev_words = split_on_whitespace_runs(&prev);
    let tail = &prev_words[prev_words.len().saturating_sub(SEAM_WORDS)..];
    let head: Vec<&str> = split_on_whitespace_runs(&next)
        .into_iter()
        .take(SEAM_WORDS)
        .collect();

    tail.iter().any(|word| char_len(word) > 3 && head.contains(word))
}

/// Lexical continuity across the thread: +5 for every connected seam.
pub fn flow_score(fragments: &[Fragment]) -> u8 {
    let connected = fragments
        .windows(2)
        .filter(|pair| seam_connects(&pair[0].content, &pair[1].content))
        .count();

    (FLOW_BASE as usize + 5 * connected).min(100) as u8
}

/// Analyze an ordered thread. An empty thread gets [`ThreadAnalysis::neutral`].
///
/// CTA effectiveness is reported but not part of the composite.
pub fn analyze_thread(
    fragments: &[Fragment],
    limits: &PlatformLimits,
    weights: &ThreadWeights,
) -> ThreadAnalysis {
    let (Some(first), Some(last)) = (fragments.first(), fragments.last()) else {
        return ThreadAnalysis::neutral();
    };

    let part_scores: Vec<PartScore> = fragments
        .iter()
        .map(|fragment| PartScore {
            id: fragment.id.clone(),
            score: score_fragment(&fragment.content, limits),
        })
        .collect();

    let avg_score = part_scores.iter().map(|p| p.score as f64).sum::<f64>() / part_scores.len() as f64;
    let hook = hook_strength(&first.content);
    let cta = cta_effectiveness(&last.content);
    let flow = flow_score(fragments);

    let total_score = round_score(
        avg_score * weights.fragments + hook as f64 * weights.hook + flow as f64 * weights.flow,
    );

    let mut suggestions = Vec::new();
    if hook < HOOK_THRESHOLD {
        suggestions.push("Add a stronger hook to your first tweet".to_string());
    }
    if cta < CTA_THRESHOLD {
        suggestions.push("Add a call-to-action to your last tweet".to_string());
    }
    if flow < FLOW_THRESHOLD {
        suggestions.push("Improve transitions between tweets for better flow".to_string());
    }
    if fragments.iter().any(|f| f.char_count() > limits.max_chars) {
        suggestions.push("Some tweets exceed character limit".to_string());
    }
    if fragments.len() < RECOMMENDED_MIN_PARTS {
        suggestions.push("Threads with 3+ tweets tend to perform better".to_string());
    }

    log_debug!(
        "Thread of {} fragments scored {} (hook {}, flow {}, cta {})",
        fragments.len(),
        total_score,
        hook,
        flow,
        cta
    );

    ThreadAnalysis {
        total_score,
        hook_strength: hook,
        flow_score: flow,
        cta_effectiveness: cta,
        part_scores,
        suggestions,
    }
}

/// [`analyze_thread`] with the default 280-character limit and weights.
pub fn analyze_thread_default(fragments: &[Fragment]) -> ThreadAnalysis {
    analyze_thread(fragments, &PlatformLimits::default(), &ThreadWeights::default())
}
