//! Byte spans and verbatim text recovery.
//!
//! Declared names are looked up again later by exact text, so the text of a
//! node is always sliced out of the original source. Re-joining token texts
//! would lose the author's spacing (`foo   bar` must stay `foo   bar`).

use miette::SourceSpan;

use crate::error::SyntaxError;
use crate::token::Token;
use crate::tree::ParseNode;

/// A half-open byte range `start..end` into a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Creates a `SourceSpan` covering a token, for diagnostics.
pub fn create_span<T: Token + ?Sized>(token: &T) -> SourceSpan {
    token.span().into()
}

/// Returns the source text from the start of `first` to the end of `last`.
///
/// Both tokens must share the same source buffer (compared by address), and
/// `last` must not end before `first` starts. The returned slice borrows the
/// original source, so any whitespace between the tokens is preserved.
pub fn span_text<'a, T: Token + ?Sized>(first: &'a T, last: &T) -> Result<&'a str, SyntaxError> {
    let source = first.source();
    if !std::ptr::eq(source, last.source()) {
        return Err(SyntaxError::ForeignSource {
            first: create_span(first),
            last: create_span(last),
        });
    }

    let (start, end) = (first.start(), last.end());
    if end < start {
        return Err(SyntaxError::InvertedSpan { start, end });
    }

    source.get(start..end).ok_or(SyntaxError::OutOfBounds {
        start,
        end,
        len: source.len(),
    })
}

/// Returns the verbatim source text underneath a parse node.
pub fn node_text<N: ParseNode>(node: &N) -> Result<&str, SyntaxError> {
    match (node.first_token(), node.last_token()) {
        (Some(first), Some(last)) => span_text(first, last),
        _ => Err(SyntaxError::EmptyNode {
            kind: node.kind().to_string(),
        }),
    }
}

/// Returns the span underneath a parse node, if it has any tokens.
pub fn node_span<N: ParseNode>(node: &N) -> Option<Span> {
    let first = node.first_token()?;
    let last = node.last_token()?;
    Some(first.span().to(last.span()))
}
