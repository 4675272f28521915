//! Flat key-value configuration, loaded from a JSON file.
//!
//! Every field has a documented default; unknown alignment-mode strings
//! degrade to the default instead of failing. CLI flags override file values
//! in `main.rs`.

use crate::model::AlignMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Generator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of spaces after the leading `*` on each block line.
    pub indent_spaces: usize,

    /// Tag column alignment: `none`, `shallow`, or `deep`.
    #[serde(deserialize_with = "de_align_mode")]
    pub align_tags: AlignMode,

    /// Extra literal tag lines injected into every function block,
    /// after the description and before the `@param` lines.
    pub extra_tags: Vec<String>,

    /// Ordered name-to-type notation rules; first match wins.
    pub notation_map: Vec<NotationRule>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent_spaces: 1,
            align_tags: AlignMode::default(),
            extra_tags: Vec::new(),
            notation_map: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

/// One user-supplied notation rule: a name prefix or a regex mapped to a
/// type name. A `type` of `bool` or `function` resolves through the active
/// language's vocabulary; anything else is used verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct NotationRule {
    /// Prefix match: the name must start with this, followed by a capital
    /// letter or underscore.
    pub prefix: Option<String>,
    /// Regex match, searched anywhere in the name.
    pub regex: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
}

// Accepts the legacy boolean form as well: `true` means shallow.
fn de_align_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AlignMode, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Bool(bool),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => AlignMode::parse(&s),
        Raw::Bool(true) => AlignMode::Shallow,
        Raw::Bool(false) => AlignMode::None,
    })
}
