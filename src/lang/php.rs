//! PHP grammar — PHPDoc-style blocks, bare types, `$`-sigil variables.

use crate::lang::{default_return_doc, is_numeric, LanguageProfile, ProfileSettings};
use crate::model::ReturnDoc;
use regex::Regex;
use std::sync::LazyLock;

const NAME_TOKEN: &str = r"[a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*";

// `$name`, optionally a `->` property chain
const VAR_IDENT: &str = r"[$][a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*(?:->[a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*)*";

static SETTINGS: ProfileSettings = ProfileSettings {
    curly_types: false,
    bool_type: "bool",
    function_type: "function",
};

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"function\s+(?P<name>{NAME_TOKEN})\s*\((?P<args>.*)\)"
    ))
    .unwrap()
});

// `$foo = bar;`, `$baz->foo = bar;`, `'key' => value,` array entries
static RE_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?P<name>{VAR_IDENT})\s*=>?\s*(?P<val>.*?)(?:[;,]|$)")).unwrap()
});

// Bare property declaration: `private $foo;`
static RE_VAR_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:var|public|private|protected|static)\s+(?P<name>{VAR_IDENT})"
    ))
    .unwrap()
});

// `$x = default` inside an argument piece
static RE_ARG_DEFAULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?P<name>{VAR_IDENT})\s*=\s*(?P<val>.*)")).unwrap()
});

// Last token of the piece, ignoring a trailing `= default`
static RE_ARG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+)(?:\s*=.*)?$").unwrap());

static RE_NEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"new ({NAME_TOKEN})")).unwrap());

pub struct Php;

impl LanguageProfile for Php {
    fn settings(&self) -> &ProfileSettings {
        &SETTINGS
    }

    fn parse_function(&self, line: &str) -> Option<(String, String)> {
        let caps = RE_FUNCTION.captures(line)?;
        Some((caps["name"].to_string(), caps["args"].to_string()))
    }

    fn parse_var(&self, line: &str) -> Option<(String, Option<String>)> {
        if let Some(caps) = RE_VAR.captures(line) {
            return Some((
                caps["name"].to_string(),
                Some(caps["val"].trim().to_string()),
            ));
        }
        if let Some(caps) = RE_VAR_DECL.captures(line) {
            return Some((caps["name"].to_string(), None));
        }
        None
    }

    fn guess_type_from_value(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        if is_numeric(value) {
            let name = if value.contains('.') { "float" } else { "int" };
            return Some(name.to_string());
        }
        if value.starts_with('"') || value.starts_with('\'') {
            return Some("string".to_string());
        }
        if value.starts_with("array") {
            return Some("Array".to_string());
        }
        if matches!(
            value.to_lowercase().as_str(),
            "true" | "false" | "filenotfound"
        ) {
            return Some("bool".to_string());
        }
        if value.starts_with("new ") {
            return RE_NEW.captures(value).map(|caps| caps[1].to_string());
        }
        None
    }

    //  function add($x, $y = 1) — type from the default value
    //  function sum(Array $x)   — leading type hint used verbatim
    fn get_arg_type(&self, arg: &str) -> Option<String> {
        if let Some(caps) = RE_ARG_DEFAULT.captures(arg) {
            return self.guess_type_from_value(&caps["val"]);
        }
        if arg.split_whitespace().nth(1).is_some() {
            return arg.split_whitespace().next().map(str::to_string);
        }
        None
    }

    fn get_arg_name(&self, arg: &str) -> Option<String> {
        RE_ARG_NAME
            .captures(arg)
            .map(|caps| caps[1].to_string())
    }

    fn return_doc(&self, name: &str) -> ReturnDoc {
        if name.starts_with("__") {
            match name {
                "__construct" | "__set" | "__unset" | "__wakeup" => return ReturnDoc::Omit,
                "__sleep" => return ReturnDoc::Known("Array".to_string()),
                "__toString" => return ReturnDoc::Known("string".to_string()),
                "__isset" => return ReturnDoc::Known("bool".to_string()),
                _ => {}
            }
        }
        default_return_doc(name, self.settings())
    }
}
