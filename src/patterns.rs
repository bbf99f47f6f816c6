//! Text patterns shared by the segmenter and the scorers.

use regex::Regex;
use std::sync::OnceLock;

/// Prefix that marks a first post as the opener of a thread.
pub const THREAD_PREFIX: &str = "Thread:";

fn lead_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(Here|This|I|You|Let|Want|Ready|Ever)").expect("valid regex")
    })
}

fn engagement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(follow|like|retweet|share|comment|reply)").expect("valid regex")
    })
}

fn hashtag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#\w+").expect("valid regex"))
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\bhttps?://\S+").expect("valid regex"))
}

fn whitespace_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Split on whitespace runs, keeping the empty tokens produced by leading or
/// trailing whitespace.
pub fn split_on_whitespace_runs(text: &str) -> Vec<&str> {
    whitespace_run_pattern().split(text).collect()
}

/// Whether the text opens with one of the hook lead words. This is a plain
/// prefix test, so "Interesting" counts as starting with "I".
pub fn starts_with_lead_word(text: &str) -> bool {
    lead_word_pattern().is_match(text)
}

/// Whether the text already asks the reader to engage (follow, like, ...).
pub fn has_engagement_verb(text: &str) -> bool {
    engagement_pattern().is_match(text)
}

pub fn hashtag_count(text: &str) -> usize {
    hashtag_pattern().find_iter(text).count()
}

pub fn link_count(text: &str) -> usize {
    link_pattern().find_iter(text).count()
}

pub fn has_ascii_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

/// Characters from the commonly used emoji blocks.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1F2FF // mahjong, cards, enclosed alphanumerics, regional indicators
            | 0x1F300..=0x1FAFF // pictographs, emoticons, transport, supplemental symbols
            | 0x2600..=0x27BF // misc symbols, dingbats
    )
}

pub fn emoji_count(text: &str) -> usize {
    text.chars().filter(|c| is_emoji(*c)).count()
}
