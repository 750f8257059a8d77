use std::fmt;
use std::sync::Arc;

use crate::error::SyntaxError;
use crate::span::Span;
use crate::token::SourceToken;

/// The original character stream of one parse.
///
/// Cloning is cheap; every [`SourceToken`] keeps a clone so that span text
/// can always be sliced from the exact buffer the tokens were cut from.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceText {
    text: Arc<str>,
}

impl SourceText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cuts a token covering `start..end`.
    pub fn token(&self, start: usize, end: usize) -> Result<SourceToken, SyntaxError> {
        if end < start {
            return Err(SyntaxError::InvertedSpan { start, end });
        }
        if self.text.get(start..end).is_none() {
            return Err(SyntaxError::OutOfBounds {
                start,
                end,
                len: self.text.len(),
            });
        }
        Ok(SourceToken::new(self.clone(), Span::new(start, end)))
    }

    /// Splits the source on whitespace into tokens.
    ///
    /// This is not a lexer for any particular language; it is the minimal
    /// tokenization needed to drive the resolver from plain text.
    pub fn split_words(&self) -> Vec<SourceToken> {
        let mut tokens = Vec::new();
        let mut start = None;
        for (offset, ch) in self.text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(s)) => {
                    tokens.push(SourceToken::new(self.clone(), Span::new(s, offset)));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(SourceToken::new(self.clone(), Span::new(s, self.text.len())));
        }
        tokens
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SourceText").field(&self.text.len()).finish()
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
