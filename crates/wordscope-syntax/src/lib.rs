//! Parse-tree primitives for the wordscope name resolver.
//!
//! The resolver is driven by an external parser runtime. This crate defines
//! what it needs from that runtime:
//! - [`Token`]: token text, byte offsets and the source it was cut from
//! - [`ParseNode`]: ordered children and a terminal/non-terminal discriminant
//!
//! plus two utilities built on them, [`span_text`] (verbatim source text of a
//! token range) and [`flatten`] (leaf tokens of a subtree). [`SourceText`],
//! [`SourceToken`] and [`SyntaxNode`] are a small owned implementation for
//! callers without a parse tree of their own.

pub mod error;
pub mod flatten;
pub mod source;
pub mod span;
pub mod token;
pub mod tree;

pub use error::SyntaxError;
pub use flatten::{flatten, flatten_into};
pub use source::SourceText;
pub use span::{create_span, node_span, node_text, span_text, Span};
pub use token::{SourceToken, Token};
pub use tree::{ParseNode, SyntaxNode};

pub type Result<T> = std::result::Result<T, SyntaxError>;
