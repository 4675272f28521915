//! Language profiles — per-language grammar and type vocabulary behind one
//! small trait, selected once per invocation from the editor scope string.

pub mod javascript;
pub mod php;

use crate::config::NotationRule;
use crate::model::ReturnDoc;
use regex::Regex;
use std::sync::LazyLock;

static RE_BOOL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:is|has)[A-Z_]").unwrap());

static RE_FUNC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:cb|callback|done|next|fn)$").unwrap());

static RE_MUTATOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:set|add)[A-Z_]").unwrap());

static RE_CAPITALIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]").unwrap());

/// Static vocabulary for one language: bracket style and canonical
/// type-name spellings.
pub struct ProfileSettings {
    /// Whether types are wrapped in curly braces (`@param {Type}` vs
    /// `@param Type`).
    pub curly_types: bool,
    pub bool_type: &'static str,
    pub function_type: &'static str,
}

/// The fixed set of pure functions each language supplies. Default bodies
/// carry the shared logic; a language overrides only what differs.
pub trait LanguageProfile {
    fn settings(&self) -> &ProfileSettings;

    /// Match the line against the function-declaration shape, yielding the
    /// name and the raw argument-list text.
    fn parse_function(&self, line: &str) -> Option<(String, String)>;

    /// Match the line against the variable/property-assignment shape,
    /// yielding the name and (if present) the raw value expression.
    fn parse_var(&self, line: &str) -> Option<(String, Option<String>)>;

    /// Infer a type name from a value expression's surface syntax.
    fn guess_type_from_value(&self, value: &str) -> Option<String>;

    /// Extract a declared/default-derived type from one argument piece.
    /// Languages without type syntax have none.
    fn get_arg_type(&self, _arg: &str) -> Option<String> {
        None
    }

    /// Extract the argument name from one argument piece.
    fn get_arg_name(&self, arg: &str) -> Option<String> {
        Some(arg.trim().to_string())
    }

    /// Decide whether the function gets an `@return` line, and with which
    /// type.
    fn return_doc(&self, name: &str) -> ReturnDoc {
        default_return_doc(name, self.settings())
    }
}

/// Base `@return` rule: capitalized names (constructors) and set/add
/// mutators get none; is/has predicates return the boolean type; everything
/// else gets an unknown-type line.
pub fn default_return_doc(name: &str, settings: &ProfileSettings) -> ReturnDoc {
    let name = strip_sigil(name);
    if RE_CAPITALIZED.is_match(name) || RE_MUTATOR_NAME.is_match(name) {
        return ReturnDoc::Omit;
    }
    if RE_BOOL_NAME.is_match(name) {
        return ReturnDoc::Known(settings.bool_type.to_string());
    }
    ReturnDoc::Unknown
}

/// Select the profile for an editor scope string. A PHP marker selects the
/// PHP profile; everything else defaults to JavaScript.
pub fn select_profile(scope: &str) -> Box<dyn LanguageProfile> {
    if scope.contains("source.php") {
        Box::new(php::Php)
    } else {
        Box::new(javascript::Javascript)
    }
}

/// Infer a type from a name's notation: user rules first (ordered, first
/// match wins), then the built-in is/has → boolean and callback-name →
/// function conventions.
pub fn guess_type_from_name(
    name: &str,
    settings: &ProfileSettings,
    rules: &[NotationRule],
) -> Option<String> {
    let name = strip_sigil(name);

    for rule in rules {
        let matched = if let Some(ref prefix) = rule.prefix {
            // The prefix is itself a pattern fragment, anchored at the
            // start and followed by a capital or underscore.
            Regex::new(&format!("^(?:{})[A-Z_]", prefix))
                .map(|re| re.is_match(name))
                .unwrap_or(false)
        } else if let Some(ref pattern) = rule.regex {
            Regex::new(pattern)
                .map(|re| re.is_match(name))
                .unwrap_or(false)
        } else {
            false
        };

        if matched {
            let resolved = match rule.type_name.as_str() {
                "bool" => settings.bool_type.to_string(),
                "function" => settings.function_type.to_string(),
                other => other.to_string(),
            };
            return Some(resolved);
        }
    }

    if RE_BOOL_NAME.is_match(name) {
        return Some(settings.bool_type.to_string());
    }
    if RE_FUNC_NAME.is_match(name) {
        return Some(settings.function_type.to_string());
    }
    None
}

/// Escape literal `$` so the template renderer does not read it as a
/// placeholder marker.
pub fn escape(text: &str) -> String {
    text.replace('$', "\\$")
}

/// Silent numeric-literal test — never an error.
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Strip one leading `$` or `_` sigil from a name.
fn strip_sigil(name: &str) -> &str {
    name.strip_prefix('$')
        .or_else(|| name.strip_prefix('_'))
        .unwrap_or(name)
}
