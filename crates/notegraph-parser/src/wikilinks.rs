//! Wikilink extraction
//!
//! A wikilink is `[[Target Title]]`. The captured target is everything between
//! the double brackets and may not contain `]`, so the match always ends at the
//! first `]]`. Half-open forms such as `[[A]`, a lone `[[`, or an empty `[[]]`
//! are not links.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::dedup_first_seen;

static WIKILINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("wikilink regex"));

/// Extract the unique link targets referenced by `content`.
///
/// Targets are returned verbatim (no trimming or case folding) in order of
/// first appearance.
///
/// ```
/// use notegraph_parser::extract_links;
///
/// let links = extract_links("See [[Project Plan]] and [[Project Plan]] again");
/// assert_eq!(links, vec!["Project Plan".to_string()]);
/// ```
pub fn extract_links(content: &str) -> Vec<String> {
    if !content.contains("[[") {
        return Vec::new();
    }

    dedup_first_seen(
        WIKILINK_REGEX
            .captures_iter(content)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str()),
    )
}

/// Remove every well-formed `[[...]]` span from `content`.
///
/// Used when looking for plain-prose mentions of a title, so that a title
/// written inside a link is not counted a second time.
pub fn strip_wikilinks(content: &str) -> Cow<'_, str> {
    if !content.contains("[[") {
        return Cow::Borrowed(content);
    }
    WIKILINK_REGEX.replace_all(content, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_wikilink() {
        let links = extract_links("See [[Other Note]] for details.");
        assert_eq!(links, vec!["Other Note"]);
    }

    #[test]
    fn test_duplicate_wikilinks_collapse() {
        let links = extract_links("See [[Project Plan]] and [[Project Plan]] again");
        assert_eq!(links, vec!["Project Plan"]);
    }

    #[test]
    fn test_multiple_wikilinks_keep_first_seen_order() {
        let links = extract_links("Links: [[first]] and [[second]] and [[first]] and [[third]]");
        assert_eq!(links, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_malformed_brackets_do_not_match() {
        assert!(extract_links("half [[A] open").is_empty());
        assert!(extract_links("unclosed [[ forever").is_empty());
        assert!(extract_links("empty [[]] link").is_empty());
        assert!(extract_links("single [A] brackets").is_empty());
    }

    #[test]
    fn test_capture_stops_at_first_closing_pair() {
        let links = extract_links("[[A]] text ]] [[B]]");
        assert_eq!(links, vec!["A", "B"]);
    }

    #[test]
    fn test_nested_open_brackets_stay_in_capture() {
        // `[^\]]+` may swallow a second `[[`, but never a `]`.
        let links = extract_links("[[outer [[inner]]");
        assert_eq!(links, vec!["outer [[inner"]);
    }

    #[test]
    fn test_targets_are_verbatim() {
        let links = extract_links("[[ spaced ]] [[Note|alias]] [[Note#Heading]]");
        assert_eq!(links, vec![" spaced ", "Note|alias", "Note#Heading"]);
    }

    #[test]
    fn test_strip_wikilinks() {
        assert_eq!(strip_wikilinks("a [[Alpha]] b"), "a  b");
        assert_eq!(strip_wikilinks("no links"), "no links");
        assert!(matches!(strip_wikilinks("no links"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_leaves_malformed_brackets() {
        assert_eq!(strip_wikilinks("keep [[A] and [[B]]"), "keep [[A] and ");
    }
}
