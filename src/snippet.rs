//! Final snippet rendering — the string handed to the host's template
//! insertion, with the block's `*` gutter and the `$0` exit stop.

/// Render the finished block. `None` means nothing was parsed: the output
/// is the minimal empty skeleton, never an error.
pub fn render_block(lines: Option<&[String]>, indent_spaces: usize, inline: bool) -> String {
    let indent = " ".repeat(indent_spaces);

    if inline {
        // Inline mode renders only the first line of the block
        return match lines.and_then(|l| l.first()) {
            Some(first) => format!(" {} */", first),
            None => " $0 */".to_string(),
        };
    }

    match lines {
        Some(lines) if !lines.is_empty() => {
            let body = lines.join(&format!("\n*{indent}"));
            format!("\n *{indent}{body}\n*/")
        }
        _ => format!("\n *{indent}$0\n*/"),
    }
}

/// Continuation prefix for extending an existing doc block by one line.
pub fn continuation(indent_spaces: usize) -> String {
    format!("\n *{}", " ".repeat(indent_spaces))
}
