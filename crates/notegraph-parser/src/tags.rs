//! Hash tag extraction
//!
//! A tag is `#` followed by one or more ASCII letters, digits, `_` or `-`.
//! The token ends at the first character outside that set, so `#follow-up.`
//! yields `follow-up` and a bare `# ` yields nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::dedup_first_seen;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z0-9_-]+)").expect("tag regex"));

/// Extract the unique tags in `content`, without the leading `#`.
///
/// ```
/// use notegraph_parser::extract_tags;
///
/// let tags = extract_tags("Tagged #urgent and #follow-up but not # alone");
/// assert_eq!(tags, vec!["urgent".to_string(), "follow-up".to_string()]);
/// ```
pub fn extract_tags(content: &str) -> Vec<String> {
    if !content.contains('#') {
        return Vec::new();
    }

    dedup_first_seen(
        TAG_REGEX
            .captures_iter(content)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str()),
    )
}
