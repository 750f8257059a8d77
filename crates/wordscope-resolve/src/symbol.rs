//! Declared names.

use std::fmt;

/// Where a symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Provided by the language, lives in the root scope.
    BuiltIn,
    /// Declared by the program being parsed.
    Variable,
}

/// An immutable declared name.
///
/// `name` is the text exactly as written at the declaration site and may
/// contain internal whitespace. `key` is the same name with every whitespace
/// run collapsed to a single space; multi-token matching compares keys, since
/// a candidate assembled from tokens is always single-space joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: String,
    key: String,
    kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        let name = name.into();
        let key = normalize_name(&name);
        Self { name, key, kind }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Variable)
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::BuiltIn)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Number of whitespace-separated words in the name.
    pub fn word_count(&self) -> usize {
        self.key.split(' ').filter(|w| !w.is_empty()).count()
    }

    /// True if `candidate` (a normalized key) names exactly this symbol.
    pub fn matches(&self, candidate: &str) -> bool {
        self.key == candidate
    }

    /// True if `candidate` (a normalized key) is a strict prefix of this
    /// symbol ending on a word boundary, i.e. more tokens could complete it.
    pub fn extends(&self, candidate: &str) -> bool {
        !candidate.is_empty()
            && self.key.len() > candidate.len()
            && self.key.starts_with(candidate)
            && self.key[candidate.len()..].starts_with(' ')
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Collapses whitespace runs to one space and trims both ends.
pub fn normalize_name(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(word);
    }
    key
}
