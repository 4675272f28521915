//! Join selected doc-block lines into one: each line break plus the next
//! line's gutter collapses into a single space.

use regex::Regex;
use std::sync::LazyLock;

static RE_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*(\*[ \t]*)?").unwrap());

/// Collapse trailing whitespace, the line break, leading whitespace, and an
/// optional leading `*` into one space, for every break in the input.
pub fn join_lines(input: &str) -> String {
    RE_LINE_BREAK.replace_all(input, " ").into_owned()
}
