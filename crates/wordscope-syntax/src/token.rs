use std::fmt;

use crate::source::SourceText;
use crate::span::Span;

/// A lexed token as seen by the resolver.
///
/// Offsets are byte offsets into [`Token::source`], `end` exclusive.
/// Implement this for the token type of whatever parser runtime drives the
/// resolver.
pub trait Token {
    /// Text of the token itself.
    fn text(&self) -> &str;

    fn start(&self) -> usize;

    fn end(&self) -> usize;

    /// The complete source the token was cut from.
    ///
    /// Two tokens belong to the same source when this returns the same
    /// buffer (same address and length).
    fn source(&self) -> &str;

    fn span(&self) -> Span {
        Span::new(self.start(), self.end())
    }
}

impl<T: Token + ?Sized> Token for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn start(&self) -> usize {
        (**self).start()
    }

    fn end(&self) -> usize {
        (**self).end()
    }

    fn source(&self) -> &str {
        (**self).source()
    }
}

/// A token backed by a shared [`SourceText`].
#[derive(Clone, PartialEq, Eq)]
pub struct SourceToken {
    source: SourceText,
    span: Span,
}

impl SourceToken {
    /// `span` must be a valid range of `source`; use [`SourceText::token`]
    /// for a checked constructor.
    pub(crate) fn new(source: SourceText, span: Span) -> Self {
        debug_assert!(source.as_str().get(span.start..span.end).is_some());
        Self { source, span }
    }

    pub fn source_text(&self) -> &SourceText {
        &self.source
    }
}

impl Token for SourceToken {
    fn text(&self) -> &str {
        &self.source.as_str()[self.span.start..self.span.end]
    }

    fn start(&self) -> usize {
        self.span.start
    }

    fn end(&self) -> usize {
        self.span.end
    }

    fn source(&self) -> &str {
        self.source.as_str()
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Debug for SourceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.text(), self.span.start, self.span.end)
    }
}
