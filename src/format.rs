//! Doc block formatting — turns a parsed declaration into an ordered list of
//! template lines carrying `${N:default}` placeholder spans.
//!
//! The formatting stage reuses placeholder number 1 for every editable field;
//! the renumbering pass in `align` makes them sequential at emission.

use crate::config::Config;
use crate::lang::{escape, guess_type_from_name, LanguageProfile};
use crate::model::{Declaration, ReturnDoc};
use crate::parser;

/// Format a declaration into doc-block template lines. The first line is
/// always the free-text description line (absorbed into the tag line in
/// inline variable mode).
pub fn format(
    decl: &Declaration,
    profile: &dyn LanguageProfile,
    config: &Config,
    inline: bool,
) -> Vec<String> {
    match decl {
        Declaration::Function { name, raw_args } => {
            format_function(name, raw_args.as_deref(), profile, config)
        }
        Declaration::Variable { name, raw_value } => {
            format_var(name, raw_value.as_deref(), profile, config, inline)
        }
    }
}

fn format_var(
    name: &str,
    value: Option<&str>,
    profile: &dyn LanguageProfile,
    config: &Config,
    inline: bool,
) -> Vec<String> {
    let settings = profile.settings();
    let (open, close) = brackets(settings.curly_types);

    let val_type = value
        .and_then(|v| profile.guess_type_from_value(v))
        .or_else(|| guess_type_from_name(name, settings, &config.notation_map))
        .unwrap_or_else(|| "[type]".to_string());

    if inline {
        vec![format!(
            "@type {open}${{1:{val_type}}}{close} ${{1:[description]}}"
        )]
    } else {
        vec![
            format!("${{1:[{} description]}}", escape(name)),
            format!("@type {open}${{1:{val_type}}}{close}"),
        ]
    }
}

fn format_function(
    name: &str,
    raw_args: Option<&str>,
    profile: &dyn LanguageProfile,
    config: &Config,
) -> Vec<String> {
    let settings = profile.settings();
    let (open, close) = brackets(settings.curly_types);

    let mut out = vec![format!("${{1:[{} description]}}", escape(name))];
    out.extend(config.extra_tags.iter().cloned());

    if let Some(raw) = raw_args {
        for arg in parser::parse_args(raw, profile) {
            let arg_type = arg
                .type_hint
                .or_else(|| guess_type_from_name(&arg.name, settings, &config.notation_map))
                .unwrap_or_else(|| "[type]".to_string());
            out.push(format!(
                "@param {open}${{1:{}}}{close} {} ${{1:[description]}}",
                escape(&arg_type),
                escape(&arg.name)
            ));
        }
    }

    match profile.return_doc(name) {
        ReturnDoc::Omit => {}
        ReturnDoc::Unknown => out.push(format!("@return {open}${{1:[type]}}{close}")),
        ReturnDoc::Known(ret) => out.push(format!("@return {open}${{1:{ret}}}{close}")),
    }

    out
}

fn brackets(curly: bool) -> (&'static str, &'static str) {
    if curly {
        ("{", "}")
    } else {
        ("", "")
    }
}
