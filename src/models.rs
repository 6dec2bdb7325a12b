use serde::{Deserialize, Serialize};

/// A single snippet definition.
///
/// All four fields default to the empty string when absent in storage so
/// matching logic never has to deal with missing values. The `trigger` is
/// matched case-sensitively against the word before the cursor; a trigger
/// containing whitespace (or an empty one) is accepted but can never be
/// produced by word extraction, so it simply never fires.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetRecord {
    /// Comma/space-delimited file-type patterns, e.g. `".java, .py"`.
    #[serde(default)]
    pub file_types: String,
    /// Display label, not an identity key.
    #[serde(default)]
    pub name: String,
    /// The exact word that expands.
    #[serde(default)]
    pub trigger: String,
    /// Verbatim replacement body, newlines and all.
    #[serde(default)]
    pub text: String,
}

impl SnippetRecord {
    pub fn new(file_types: String, name: String, trigger: String, text: String) -> Self {
        Self {
            file_types,
            name,
            trigger,
            text,
        }
    }

    /// Parse the stored `file_types` string into individual patterns.
    ///
    /// Patterns are separated by commas and/or whitespace; empty entries are
    /// dropped, so `".py,,  .java"` yields two patterns. A record whose list
    /// parses to nothing matches no document.
    pub fn file_type_patterns(&self) -> Vec<&str> {
        split_file_types(&self.file_types).collect()
    }
}

/// Split a comma/space-delimited pattern string into non-empty patterns.
pub(crate) fn split_file_types(file_types: &str) -> impl Iterator<Item = &str> {
    file_types
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
}
