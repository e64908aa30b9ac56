// tome-core/src/highlight.rs
//! Preview truncation and literal match-span computation.
//!
//! Highlighting is span-offset based: a list of byte `[start, end)` ranges
//! over the preview text. The query is always a literal substring — it is
//! never interpreted as any kind of pattern syntax, and no markup strings are
//! built or re-parsed.

use std::ops::Range;

/// Previews keep the first 200 characters of the content.
pub const PREVIEW_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Truncate `content` to [`PREVIEW_MAX_CHARS`] characters, appending an
/// ellipsis marker when anything was cut. Shorter content is returned
/// verbatim.
pub fn content_preview(content: &str) -> String {
    let mut iter = content.char_indices();
    match iter.nth(PREVIEW_MAX_CHARS) {
        Some((byte_end, _)) => {
            let mut preview = content[..byte_end].to_string();
            preview.push_str(ELLIPSIS);
            preview
        }
        None => content.to_string(),
    }
}

/// Byte ranges of every non-overlapping case-insensitive occurrence of the
/// literal `query` inside `text`, in left-to-right order.
///
/// Matching runs over the lowercase folding of `text`; the returned ranges
/// index into the original `text` and always sit on char boundaries. When a
/// match ends inside a character whose folding expands (e.g. 'ß' folds to
/// "ss"), the range is widened to cover that whole character.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    // Folded haystack plus, per folded byte, the byte offset of the original
    // character that produced it. One extra entry marks the end of the text.
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len() + 1);
    for (byte_idx, ch) in text.char_indices() {
        for low in ch.to_lowercase() {
            for _ in 0..low.len_utf8() {
                origin.push(byte_idx);
            }
            folded.push(low);
        }
    }
    origin.push(text.len());

    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut search_from = 0;
    while let Some(found) = folded[search_from..].find(&needle) {
        let folded_start = search_from + found;
        let folded_end = folded_start + needle.len();

        let start = origin[folded_start];
        let mut end = origin[folded_end];
        if end <= start {
            // Match ended mid-expansion; cover the whole source character.
            end = start
                + text[start..]
                    .chars()
                    .next()
                    .map_or(0, |c| c.len_utf8());
        }
        match ranges.last_mut() {
            // Two folded matches can land in the same source character
            // (query "s" against "ß"); keep the ranges monotonic.
            Some(prev) if start < prev.end => prev.end = prev.end.max(end),
            _ => ranges.push(start..end),
        }

        search_from = folded_end;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn short_content_is_verbatim() {
        assert_eq!(content_preview("budget forecast"), "budget forecast");
    }

    #[test]
    fn exactly_200_chars_is_verbatim() {
        let content = "x".repeat(200);
        assert_eq!(content_preview(&content), content);
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let content = "a".repeat(500);
        let preview = content_preview(&content);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..200], &content[..200]);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let content = "é".repeat(201);
        let preview = content_preview(&content);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.starts_with('é'));
    }

    #[rstest]
    #[case("budget forecast", "budget", vec![0..6])]
    #[case("Budget and BUDGET", "budget", vec![0..6, 11..17])]
    #[case("no hit here", "budget", vec![])]
    #[case("", "budget", vec![])]
    fn literal_case_insensitive_matches(
        #[case] text: &str,
        #[case] query: &str,
        #[case] expected: Vec<Range<usize>>,
    ) {
        assert_eq!(match_ranges(text, query), expected);
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert_eq!(match_ranges("anything", ""), Vec::<Range<usize>>::new());
    }

    #[test]
    fn pattern_metacharacters_are_literal() {
        let text = "price is (a.b) or a-b";
        assert_eq!(match_ranges(text, "(a.b)"), vec![9..14]);
        // '.' must not act as a wildcard
        assert_eq!(match_ranges(text, "a.b"), vec![10..13]);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        // "aaaa" contains "aa" at 0, 1, 2; non-overlapping keeps 0..2 and 2..4
        assert_eq!(match_ranges("aaaa", "aa"), vec![0..2, 2..4]);
    }

    #[test]
    fn ranges_are_valid_for_multibyte_text() {
        let text = "Łódź budget Łódź";
        let ranges = match_ranges(text, "łódź");
        assert_eq!(ranges.len(), 2);
        for range in ranges {
            assert_eq!(&text[range], "Łódź");
        }
    }

    #[test]
    fn expanding_fold_widens_to_char_boundary() {
        // 'ß' lowercases to "ss"; both folded matches land in the same source
        // character and must collapse into one well-formed range.
        let text = "straße";
        assert_eq!(match_ranges(text, "s"), vec![0..1, 4..6]);
        for range in match_ranges(text, "s") {
            assert!(text.is_char_boundary(range.start));
            assert!(text.is_char_boundary(range.end));
            assert!(range.start < range.end);
        }
    }
}
