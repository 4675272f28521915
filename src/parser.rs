//! Declaration extraction — matches one line of source text against the
//! active language's function and variable shapes.

use crate::lang::LanguageProfile;
use crate::model::{Argument, Declaration};
use regex::Regex;
use std::sync::LazyLock;

static RE_EXISTING_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*").unwrap());

static RE_BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").unwrap());

static RE_ARG_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

/// True when the line is already inside a doc block (leading `*`).
pub fn is_existing_comment(line: &str) -> bool {
    RE_EXISTING_COMMENT.is_match(line)
}

/// Try the function shape first, then the variable shape. A line matching
/// neither is a silent `None`, never an error.
pub fn extract(line: &str, profile: &dyn LanguageProfile) -> Option<Declaration> {
    if let Some((name, args)) = profile.parse_function(line) {
        return Some(Declaration::Function {
            name,
            raw_args: if args.is_empty() { None } else { Some(args) },
        });
    }
    if let Some((name, value)) = profile.parse_var(line) {
        return Some(Declaration::Variable {
            name,
            raw_value: value.filter(|v| !v.is_empty()),
        });
    }
    None
}

/// Split a raw argument-list string into ordered arguments.
///
/// Block comments inside the list are stripped first. The split is a naive
/// top-level comma split: a default value containing a comma inside nested
/// brackets (`fn(a = foo(1,2))`) splits incorrectly — known limitation.
pub fn parse_args(raw: &str, profile: &dyn LanguageProfile) -> Vec<Argument> {
    let cleaned = RE_BLOCK_COMMENT.replace_all(raw, "");
    let mut args = Vec::new();
    for piece in RE_ARG_SPLIT.split(&cleaned) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let Some(name) = profile.get_arg_name(piece) else {
            continue;
        };
        args.push(Argument {
            type_hint: profile.get_arg_type(piece),
            name,
        });
    }
    args
}
