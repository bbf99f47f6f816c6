use crate::models::char_len;
use crate::patterns::{emoji_count, hashtag_count, link_count};
use crate::settings::PlatformLimits;

use super::types::ContentMetrics;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Seconds needed to read `words` at `words_per_minute`, rounded.
pub fn reading_time_seconds(words: usize, words_per_minute: u32) -> u32 {
    if words_per_minute == 0 {
        return 0;
    }
    (words as f64 / words_per_minute as f64 * 60.0).round() as u32
}

/// Measure a post. Media is never inferred from the text; the caller passes
/// the URLs it attached.
pub fn content_metrics(text: &str, media_urls: &[String], limits: &PlatformLimits) -> ContentMetrics {
    let character_count = char_len(text);
    let words = word_count(text);
    let question_count = text.matches('?').count();
    let hashtags = hashtag_count(text);
    let emojis = emoji_count(text);
    let media_count = media_urls.iter().filter(|url| !url.trim().is_empty()).count();

    ContentMetrics {
        character_count,
        over_limit: character_count > limits.max_chars,
        word_count: words,
        reading_time_seconds: reading_time_seconds(words, limits.reading_words_per_minute),
        has_media: media_count > 0,
        media_count,
        has_question: question_count > 0,
        question_count,
        has_hashtags: hashtags > 0,
        hashtag_count: hashtags,
        has_emojis: emojis > 0,
        emoji_count: emojis,
        link_count: link_count(text),
    }
}
