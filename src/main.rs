//! docstub — generate documentation-comment skeletons from a single
//! declaration line.
//!
//! The engine looks at exactly one line of source (the line following the
//! editor's cursor), decides whether it declares a function or a variable,
//! and prints a snippet template with numbered `${N:default}` tab stops for
//! the host editor to insert. Two auxiliary commands re-indent a
//! continuation line inside an existing block and join selected block lines.
//!
//! Input arrives on stdin; the rendered template goes to stdout.

mod align;
mod config;
mod format;
mod indent;
mod join;
mod lang;
mod model;
mod parser;
mod snippet;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use model::AlignMode;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docstub",
    about = "Generate documentation-comment skeletons from a declaration line"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Editor syntax scope; a `source.php` marker selects the PHP grammar,
    /// anything else gets JavaScript
    #[arg(long, default_value = "source.js")]
    scope: String,

    /// Render a single-line `/** ... */` block
    #[arg(long)]
    inline: bool,

    /// Spaces after the leading `*` on each block line
    #[arg(long)]
    indent_spaces: Option<usize>,

    /// Tag alignment: none, shallow, or deep (unknown values mean deep)
    #[arg(long)]
    align: Option<String>,

    /// JSON configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Extra literal tag line for function blocks (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the indentation that continues the doc-block line given on stdin
    Indent {
        /// Column the cursor already occupies on the new line
        #[arg(long, default_value_t = 0)]
        col: usize,
    },
    /// Join the doc-block lines given on stdin into one line
    Join,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    match cli.command {
        Some(Command::Indent { col }) => {
            let prev = input.lines().next().unwrap_or("");
            print!("{}", indent::continuation_indent(prev, col));
        }
        Some(Command::Join) => {
            print!("{}", join::join_lines(&input));
        }
        None => {
            let config = resolve_config(&cli)?;
            let line = input.lines().next().filter(|l| !l.is_empty());
            print!("{}", generate(line, &cli.scope, &config, cli.inline));
        }
    }

    Ok(())
}

/// Load the config file (or defaults) and apply flag overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(n) = cli.indent_spaces {
        config.indent_spaces = n;
    }
    if let Some(ref mode) = cli.align {
        config.align_tags = AlignMode::parse(mode);
    }
    if !cli.tags.is_empty() {
        config.extra_tags = cli.tags.clone();
    }
    Ok(config)
}

/// Core pipeline: extract → format → align → renumber → render.
///
/// `None` input (end of buffer) and unrecognizable lines both produce the
/// minimal empty skeleton; a line already inside a comment produces only the
/// continuation prefix.
fn generate(line: Option<&str>, scope: &str, config: &Config, inline: bool) -> String {
    let profile = lang::select_profile(scope);

    if let Some(line) = line {
        if parser::is_existing_comment(line) {
            return snippet::continuation(config.indent_spaces);
        }
    }

    let block = line
        .and_then(|l| parser::extract(l, profile.as_ref()))
        .map(|decl| format::format(&decl, profile.as_ref(), config, inline))
        .map(|lines| {
            let lines = if inline {
                lines
            } else {
                align::align_tags(lines, config.align_tags)
            };
            align::renumber(lines)
        });

    snippet::render_block(block.as_deref(), config.indent_spaces, inline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(line: &str) -> String {
        generate(Some(line), "source.js", &Config::default(), false)
    }

    #[test]
    fn js_function_block() {
        assert_eq!(
            gen("function add(a, b) {"),
            "\n * ${1:[add description]}\
             \n* @param  {${2:[type]}} a ${3:[description]}\
             \n* @param  {${4:[type]}} b ${5:[description]}\
             \n* @return {${6:[type]}}\
             \n*/"
        );
    }

    #[test]
    fn js_var_block() {
        assert_eq!(
            gen("var isReady = true;"),
            "\n * ${1:[isReady description]}\n* @type {${2:Boolean}}\n*/"
        );
    }

    #[test]
    fn unrecognized_line_minimal_skeleton() {
        assert_eq!(gen("return 42;"), "\n * $0\n*/");
    }

    #[test]
    fn missing_line_minimal_skeleton() {
        assert_eq!(
            generate(None, "source.js", &Config::default(), false),
            "\n * $0\n*/"
        );
    }

    #[test]
    fn existing_comment_continues() {
        assert_eq!(gen(" * already documented"), "\n * ");
    }

    #[test]
    fn inline_variable() {
        assert_eq!(
            generate(
                Some("var count = 42;"),
                "source.js",
                &Config::default(),
                true
            ),
            " @type {${1:Number}} ${2:[description]} */"
        );
    }

    #[test]
    fn inline_no_declaration() {
        assert_eq!(
            generate(None, "source.js", &Config::default(), true),
            " $0 */"
        );
    }

    #[test]
    fn php_scope_selected() {
        assert_eq!(
            generate(
                Some("function __toString()"),
                "source.php",
                &Config::default(),
                false
            ),
            "\n * ${1:[__toString description]}\n* @return ${2:string}\n*/"
        );
    }

    #[test]
    fn php_typed_argument() {
        assert_eq!(
            generate(
                Some("function sum(Array $x) {"),
                "source.php",
                &Config::default(),
                false
            ),
            "\n * ${1:[sum description]}\
             \n* @param  ${2:Array}  \\$x ${3:[description]}\
             \n* @return ${4:[type]}\
             \n*/"
        );
    }

    #[test]
    fn align_none_keeps_single_spaces() {
        let config = Config {
            align_tags: AlignMode::None,
            ..Config::default()
        };
        assert_eq!(
            generate(Some("function add(a, b) {"), "source.js", &config, false),
            "\n * ${1:[add description]}\
             \n* @param {${2:[type]}} a ${3:[description]}\
             \n* @param {${4:[type]}} b ${5:[description]}\
             \n* @return {${6:[type]}}\
             \n*/"
        );
    }

    #[test]
    fn extra_tags_rendered() {
        let config = Config {
            extra_tags: vec!["@author me".to_string()],
            align_tags: AlignMode::None,
            ..Config::default()
        };
        assert_eq!(
            generate(Some("function go() {"), "source.js", &config, false),
            "\n * ${1:[go description]}\n* @author me\n* @return {${2:[type]}}\n*/"
        );
    }

    #[test]
    fn indent_spaces_zero() {
        let config = Config {
            indent_spaces: 0,
            ..Config::default()
        };
        assert_eq!(
            generate(Some("var x = 1;"), "source.js", &config, false),
            "\n *${1:[x description]}\n*@type {${2:Number}}\n*/"
        );
    }
}
