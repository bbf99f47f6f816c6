use crate::models::{char_len, Fragment, IdGenerator};
use crate::settings::PlatformLimits;

/// Fragments produced by greedy accumulation, before decoration.
#[derive(Debug, Clone)]
pub struct Accumulated {
    pub fragments: Vec<Fragment>,
    /// Source text was left over once `max_parts` was reached.
    pub truncated: bool,
}

/// Split text after every `.`, `!` or `?` that is followed by whitespace.
///
/// The whitespace run is consumed. Abbreviations and decimals followed by a
/// space split too; this is a heuristic, not a grammar. Text that ends in a
/// terminator plus whitespace yields a trailing empty sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        let end = idx + c.len_utf8();
        let mut resume = end;
        while let Some(&(next_idx, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            resume = next_idx + next.len_utf8();
            chars.next();
        }

        if resume > end {
            sentences.push(&text[start..end]);
            start = resume;
        }
    }

    sentences.push(&text[start..]);
    sentences
}

/// Room left for text once the `"<n>/"` label and its separator are reserved.
fn available_chars(part_number: usize, limits: &PlatformLimits) -> usize {
    let label_width = char_len(&format!("{}/", part_number));
    limits.max_chars.saturating_sub(label_width + 1)
}

/// Greedily pack sentences into fragments of at most the available width.
///
/// A sentence wider than the budget becomes its own oversized fragment; it is
/// never hard-wrapped.
pub fn accumulate(
    sentences: &[&str],
    max_parts: usize,
    limits: &PlatformLimits,
    ids: &mut impl IdGenerator,
) -> Accumulated {
    let max_parts = max_parts.max(1);
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut produced = 0;
    let mut truncated = false;

    for sentence in sentences {
        let candidate = if current.is_empty() {
            sentence.to_string()
        } else {
            format!("{} {}", current, sentence)
        };

        if char_len(&candidate) <= available_chars(produced + 1, limits) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            fragments.push(Fragment::new(ids.next_id(), current.trim()));
            produced += 1;
            if produced >= max_parts {
                current.clear();
                truncated = true;
                break;
            }
        }
        current = sentence.to_string();
    }

    if !current.is_empty() && produced < max_parts {
        fragments.push(Fragment::new(ids.next_id(), current.trim()));
    }

    Accumulated {
        fragments,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequentialIds;

    fn bodies(acc: &Accumulated) -> Vec<&str> {
        acc.fragments.iter().map(|f| f.content.as_str()).collect()
    }

    /// A sentence of exactly `len` characters ending in a period.
    fn sentence_of(len: usize, fill: char) -> String {
        let mut s: String = std::iter::repeat(fill).take(len - 1).collect();
        s.push('.');
        s
    }

    #[test]
    fn splits_on_terminator_followed_by_whitespace() {
        assert_eq!(
            split_sentences("Hello there. How are you?  I am fine!"),
            vec!["Hello there.", "How are you?", "I am fine!"]
        );
    }

    #[test]
    fn does_not_split_without_whitespace() {
        assert_eq!(split_sentences("v1.2 is out...really"), vec!["v1.2 is out...really"]);
    }

    #[test]
    fn mis_splits_abbreviations() {
        assert_eq!(
            split_sentences("Talk to Dr. Smith now."),
            vec!["Talk to Dr.", "Smith now."]
        );
    }

    #[test]
    fn trailing_whitespace_yields_empty_sentence() {
        assert_eq!(split_sentences("Done. "), vec!["Done.", ""]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn newlines_count_as_whitespace() {
        assert_eq!(split_sentences("One.\n\nTwo."), vec!["One.", "Two."]);
    }

    #[test]
    fn short_text_stays_in_one_fragment() {
        let sentences = split_sentences("Hello there. How are you? I am fine.");
        let acc = accumulate(&sentences, 5, &PlatformLimits::default(), &mut SequentialIds::default());

        assert_eq!(bodies(&acc), vec!["Hello there. How are you? I am fine."]);
        assert!(!acc.truncated);
    }

    #[test]
    fn respects_reserved_label_width() {
        // 277 = 280 - "1/".len() - 1
        let exact = sentence_of(277, 'a');
        let acc = accumulate(&[exact.as_str()], 5, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 1);

        let a = sentence_of(200, 'a');
        let b = sentence_of(76, 'b');
        // 200 + 1 + 76 = 277 fits
        let acc = accumulate(&[a.as_str(), b.as_str()], 5, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 1);

        let c = sentence_of(77, 'c');
        // 200 + 1 + 77 = 278 does not
        let acc = accumulate(&[a.as_str(), c.as_str()], 5, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(bodies(&acc), vec![a.as_str(), c.as_str()]);
    }

    #[test]
    fn oversized_sentence_gets_its_own_fragment() {
        let long = sentence_of(400, 'x');
        let sentences = ["Short intro.", long.as_str(), "Short outro."];
        let acc = accumulate(&sentences, 5, &PlatformLimits::default(), &mut SequentialIds::default());

        assert_eq!(bodies(&acc), vec!["Short intro.", long.as_str(), "Short outro."]);
        assert_eq!(acc.fragments[1].char_count(), 400);
    }

    #[test]
    fn ten_sentences_of_fifty_chars() {
        let sentence = sentence_of(50, 'w');
        let sentences: Vec<&str> = std::iter::repeat(sentence.as_str()).take(10).collect();

        let acc = accumulate(&sentences, 5, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 2);
        for fragment in &acc.fragments {
            // five sentences joined by spaces
            assert_eq!(fragment.char_count(), 254);
            assert!(fragment.char_count() <= 277);
        }
        assert!(!acc.truncated);

        let acc = accumulate(&sentences, 2, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 2);
        assert!(!acc.truncated);

        let acc = accumulate(&sentences, 1, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 1);
        assert!(acc.truncated);
    }

    #[test]
    fn stops_at_max_parts_and_drops_the_rest() {
        let sentence = sentence_of(50, 'w');
        let sentences: Vec<&str> = std::iter::repeat(sentence.as_str()).take(15).collect();

        let acc = accumulate(&sentences, 2, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 2);
        assert!(acc.truncated);

        let acc = accumulate(&sentences, 5, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 3);
        assert!(!acc.truncated);
    }

    #[test]
    fn zero_max_parts_behaves_like_one() {
        let sentence = sentence_of(200, 'z');
        let sentences = [sentence.as_str(), sentence.as_str()];
        let acc = accumulate(&sentences, 0, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(acc.fragments.len(), 1);
    }

    #[test]
    fn empty_input_produces_nothing() {
        let acc = accumulate(&split_sentences(""), 5, &PlatformLimits::default(), &mut SequentialIds::default());
        assert!(acc.fragments.is_empty());
    }

    #[test]
    fn whitespace_only_input_produces_an_empty_fragment() {
        let acc = accumulate(&split_sentences("   "), 5, &PlatformLimits::default(), &mut SequentialIds::default());
        assert_eq!(bodies(&acc), vec![""]);
    }

    #[test]
    fn ids_follow_generator_order() {
        let a = sentence_of(200, 'a');
        let b = sentence_of(200, 'b');
        let acc = accumulate(&[a.as_str(), b.as_str()], 5, &PlatformLimits::default(), &mut SequentialIds::new("f"));
        let ids: Vec<&str> = acc.fragments.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f-1", "f-2"]);
    }
}
