//! JavaScript grammar — JSDoc-style blocks with curly-braced types.

use crate::lang::{is_numeric, LanguageProfile, ProfileSettings};
use regex::Regex;
use std::sync::LazyLock;

// Technically identifiers can contain all sorts of unicode; this matches
// the common charset.
const IDENT: &str = "[a-zA-Z_$][a-zA-Z_$0-9]*";

static SETTINGS: ProfileSettings = ProfileSettings {
    curly_types: true,
    bool_type: "Boolean",
    function_type: "Function",
};

// `fnName = function`, `fnName : function`, `function fnName`, then the
// argument list. The args capture is greedy to the last `)` — nested calls
// in default values over-capture (accepted limitation).
static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?P<name1>{IDENT})\s*[:=]\s*)?function(?:\s+(?P<name2>{IDENT}))?\s*\((?P<args>.*)\)",
    ))
    .unwrap()
});

// `var foo = bar;`, `foo = bar,`, `baz.foo = bar;`, `foo : bar` inside an
// object literal. Value runs lazily to the next `;`/`,` or end of line.
static RE_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?P<name>{IDENT})\s*[=:]\s*(?P<val>.*?)(?:[;,]|$)")).unwrap()
});

static RE_NEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"new ({IDENT})")).unwrap());

// Best-effort: misfires on division expressions (accepted limitation).
static RE_REGEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:RegExp\b|/[^/])").unwrap());

pub struct Javascript;

impl LanguageProfile for Javascript {
    fn settings(&self) -> &ProfileSettings {
        &SETTINGS
    }

    fn parse_function(&self, line: &str) -> Option<(String, String)> {
        let caps = RE_FUNCTION.captures(line)?;
        // Prefer the assignment target over the inline function name
        let name = caps
            .name("name1")
            .or_else(|| caps.name("name2"))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        Some((name, caps["args"].to_string()))
    }

    fn parse_var(&self, line: &str) -> Option<(String, Option<String>)> {
        let caps = RE_VAR.captures(line)?;
        Some((
            caps["name"].to_string(),
            Some(caps["val"].trim().to_string()),
        ))
    }

    fn guess_type_from_value(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        if is_numeric(value) {
            return Some("Number".to_string());
        }
        if value.starts_with('"') || value.starts_with('\'') {
            return Some("String".to_string());
        }
        if value.starts_with('[') {
            return Some("Array".to_string());
        }
        if value.starts_with('{') {
            return Some("Object".to_string());
        }
        if value == "true" || value == "false" {
            return Some("Boolean".to_string());
        }
        if RE_REGEX_LITERAL.is_match(value) {
            return Some("RegExp".to_string());
        }
        if value.starts_with("new ") {
            return RE_NEW.captures(value).map(|caps| caps[1].to_string());
        }
        None
    }
}
