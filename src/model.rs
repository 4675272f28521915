//! Data model for parsed declarations — language-agnostic.

/// What the signature extractor found on the inspected line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// A function declaration. `raw_args` is the unparsed text between the
    /// outermost parentheses, or `None` when the list is empty.
    Function {
        name: String,
        raw_args: Option<String>,
    },
    /// A variable or property assignment. `raw_value` is the text of the
    /// assigned expression, or `None` when only a bare declaration matched.
    Variable {
        name: String,
        raw_value: Option<String>,
    },
}

/// One parsed argument from a function's argument list, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Declared or default-derived type, when the syntax carries one.
    pub type_hint: Option<String>,
    pub name: String,
}

/// Whether (and how) a function's doc block gets an `@return` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnDoc {
    /// No `@return` line at all (constructors, setters, magic mutators).
    Omit,
    /// An `@return` line with the generic `[type]` placeholder.
    Unknown,
    /// An `@return` line with a known type name.
    Known(String),
}

/// Tag column alignment mode for the formatted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignMode {
    None,
    /// Align only the first token after each tag.
    Shallow,
    /// Align every column independently.
    #[default]
    Deep,
}

impl AlignMode {
    /// Parse a mode name, degrading to the default (`deep`) on anything
    /// unrecognized.
    pub fn parse(s: &str) -> AlignMode {
        match s {
            "none" => AlignMode::None,
            "shallow" => AlignMode::Shallow,
            _ => AlignMode::Deep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_mode_known_names() {
        assert_eq!(AlignMode::parse("none"), AlignMode::None);
        assert_eq!(AlignMode::parse("shallow"), AlignMode::Shallow);
        assert_eq!(AlignMode::parse("deep"), AlignMode::Deep);
    }

    #[test]
    fn align_mode_unknown_degrades_to_deep() {
        assert_eq!(AlignMode::parse("sideways"), AlignMode::Deep);
        assert_eq!(AlignMode::parse(""), AlignMode::Deep);
    }
}
