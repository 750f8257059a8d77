use thiserror::Error;
use miette::{Diagnostic, SourceSpan};

/// Errors raised while recovering source text from tokens and parse nodes.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum SyntaxError {
    /// The two tokens delimiting a span were cut from different sources.
    #[error("Span endpoints come from different sources")]
    #[diagnostic(
        code(wordscope_syntax::foreign_source),
        help("both tokens of a span must belong to the same parse")
    )]
    ForeignSource {
        #[label("first token")]
        first: SourceSpan,
        #[label("last token")]
        last: SourceSpan,
    },

    /// The last token of a span starts before the first one ends.
    #[error("Inverted span: last token ends at {end}, before first token starts at {start}")]
    #[diagnostic(code(wordscope_syntax::inverted_span))]
    InvertedSpan {
        start: usize,
        end: usize,
    },

    /// Offsets fall outside the source or split a UTF-8 character.
    #[error("Span {start}..{end} is not a valid range of a {len}-byte source")]
    #[diagnostic(code(wordscope_syntax::out_of_bounds))]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A non-terminal without any token underneath it has no text.
    #[error("Node `{kind}` contains no tokens")]
    #[diagnostic(code(wordscope_syntax::empty_node))]
    EmptyNode {
        kind: String,
    },
}
