//! Continuation-line re-indent: position the cursor under the text of the
//! previous documentation line.

use regex::Regex;
use std::sync::LazyLock;

// Tag followed by two tokens (type and name): align after both
static RE_TWO_TOKEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*(?P<from_star>\s*@(?:param|property)\s+\S+\s+\S+\s+)\S").unwrap()
});

// Tag followed by one token (type): align after it
static RE_ONE_TOKEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*(?P<from_star>\s*@(?:returns?|define)\s+\S+\s+)\S").unwrap()
});

// Any other tag: align after the tag itself
static RE_ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*(?P<from_star>\s*@[a-z]+\s+)\S").unwrap());

// Plain comment line: align with its text
static RE_BARE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*(?P<from_star>\s*)").unwrap());

static RE_TO_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*\*)").unwrap());

/// Text to insert at `current_col` on a fresh line inside a doc block:
/// spaces up to the alignment column derived from the previous line, or a
/// literal tab when no pattern is recognized (or the cursor is already at
/// or past the target).
pub fn continuation_indent(prev_line: &str, current_col: usize) -> String {
    let Some(spaces) = indent_spaces(prev_line) else {
        return "\t".to_string();
    };
    let Some(to_star) = RE_TO_STAR
        .captures(prev_line)
        .map(|caps| caps[1].chars().count())
    else {
        return "\t".to_string();
    };

    let target = spaces + to_star;
    if target > current_col {
        " ".repeat(target - current_col)
    } else {
        "\t".to_string()
    }
}

/// Column count (after the `*`) where the previous line's payload starts.
fn indent_spaces(line: &str) -> Option<usize> {
    for re in [&*RE_TWO_TOKEN_TAG, &*RE_ONE_TOKEN_TAG, &*RE_ANY_TAG, &*RE_BARE_STAR] {
        if let Some(caps) = re.captures(line) {
            return Some(caps["from_star"].chars().count());
        }
    }
    None
}
