use std::fmt::Write;

use crate::models::Fragment;
use crate::scoring::{ScoreBreakdown, ScoreRating, ThreadAnalysis};
use crate::settings::PlatformLimits;

fn rated(score: u8) -> String {
    format!("{} ({})", score, ScoreRating::from_score(score).label())
}

pub(super) fn thread_report(
    fragments: &[Fragment],
    analysis: &ThreadAnalysis,
    limits: &PlatformLimits,
) -> String {
    let mut out = String::new();
    let total = fragments.len();

    for (index, fragment) in fragments.iter().enumerate() {
        let score = analysis
            .part_scores
            .get(index)
            .map(|p| p.score.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "[{}/{}] {}/{} chars, {}, score {}",
            index + 1,
            total,
            fragment.char_count(),
            limits.max_chars,
            fragment.char_status(limits).as_str(),
            score
        );
        if fragment.content.is_empty() {
            let _ = writeln!(out, "(empty)");
        } else {
            let _ = writeln!(out, "{}", fragment.content);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Thread score: {}", rated(analysis.total_score));
    let _ = writeln!(
        out,
        "  hook {}  flow {}  call-to-action {}",
        analysis.hook_strength, analysis.flow_score, analysis.cta_effectiveness
    );

    if !analysis.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions:");
        for suggestion in &analysis.suggestions {
            let _ = writeln!(out, "  - {}", suggestion);
        }
    }

    out.trim_end().to_string()
}

pub(super) fn post_report(breakdown: &ScoreBreakdown) -> String {
    let mut out = String::new();
    let e = &breakdown.engagement_scores;
    let m = &breakdown.content_metrics;

    let _ = writeln!(out, "Score: {}", rated(breakdown.overall_score));
    let _ = writeln!(
        out,
        "  likes {}  replies {}  reposts {}  quotes {}",
        e.likeability, e.replyability, e.retweetability, e.quoteability
    );
    let _ = writeln!(
        out,
        "  {} chars, {} words, ~{}s to read, {} media, {} questions, {} hashtags, {} emoji",
        m.character_count,
        m.word_count,
        m.reading_time_seconds,
        m.media_count,
        m.question_count,
        m.hashtag_count,
        m.emoji_count
    );

    for signal in &breakdown.algorithm_signals.positive_signals {
        let _ = writeln!(out, "  + {}: {}", signal.name, signal.description);
    }
    for signal in &breakdown.algorithm_signals.negative_signals {
        let _ = writeln!(out, "  - {}: {}", signal.name, signal.description);
    }

    if !breakdown.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions:");
        for suggestion in &breakdown.suggestions {
            let _ = writeln!(
                out,
                "  [{}] {} (+{})",
                suggestion.priority.as_str(),
                suggestion.message,
                suggestion.potential_score_increase
            );
        }
    }

    if !breakdown.warnings.is_empty() {
        let _ = writeln!(out, "Warnings:");
        for warning in &breakdown.warnings {
            let _ = writeln!(out, "  ! {} ({})", warning.message, warning.score_impact);
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{analyze_post, analyze_thread_default};

    #[test]
    fn thread_report_lists_parts_and_suggestions() {
        let fragments = vec![
            Fragment::new("a", "Thread: Did you know this?"),
            Fragment::new("b", ""),
        ];
        let analysis = analyze_thread_default(&fragments);
        let report = thread_report(&fragments, &analysis, &PlatformLimits::default());

        assert!(report.starts_with("[1/2] 26/280 chars, ok, score 55"));
        assert!(report.contains("(empty)"));
        assert!(report.contains("Thread score:"));
        assert!(report.contains("  - Add a call-to-action to your last tweet"));
    }

    #[test]
    fn post_report_shows_priorities() {
        let report = post_report(&analyze_post("gm"));
        assert!(report.starts_with("Score: "));
        assert!(report.contains("[high] Expand the post with more context (+15)"));
        assert!(report.contains("  - Too short: Under 5 words"));
    }
}
