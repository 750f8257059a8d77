//! Scope chain and multi-token name matching for grammar-driven parsers.
//!
//! In a language where `total amount due` is a single identifier, the parser
//! cannot tell from the tokens alone where a name ends. This crate keeps the
//! names declared so far in a chain of lexical scopes and answers, token by
//! token, whether the identifier being read should keep growing.
//!
//! ## Layout
//!
//! - [`symbol`]: declared names and their match keys
//! - [`scope`], [`table`]: scope records and the arena that owns them
//! - [`chain`]: the current-scope cursor, definition and lookup
//! - [`names`]: labels for scopes about to be opened
//! - [`matcher`]: incremental and full-lookahead identifier recognition
//! - [`trace`]: optional sinks for matcher decisions
//! - [`config`]: resolver settings, loadable from TOML
//! - [`resolver`]: [`NameResolver`], the per-parse context grammar actions call
//!
//! ## Example
//!
//! ```
//! use wordscope_resolve::NameResolver;
//! use wordscope_syntax::SourceText;
//!
//! let mut resolver = NameResolver::new();
//! resolver.define_name("total amount due");
//!
//! let source = SourceText::new("total amount due - 10");
//! let tokens = source.split_words();
//! let found = resolver.recognize(&tokens).unwrap();
//! assert_eq!(found.len, 3);
//! assert!(found.is_declared());
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod matcher;
pub mod names;
pub mod resolver;
pub mod scope;
pub mod symbol;
pub mod table;
pub mod trace;

pub use chain::{CandidateQuery, Resolution, ScopeChain};
pub use config::{MatchStrategy, ResolverConfig, DEFAULT_BUILTINS};
pub use error::{ConfigError, ResolveError, Stack};
pub use matcher::{longest_match, MatchState, NameMatch};
pub use names::NameStack;
pub use resolver::NameResolver;
pub use scope::{Scope, ScopeId};
pub use symbol::{normalize_name, Symbol, SymbolKind};
pub use table::{Definition, SymbolTable};
pub use trace::{LogSink, RecordingSink, TraceEvent, TraceSink};

/// Re-exported so grammar code needs a single dependency.
pub use wordscope_syntax::{
    flatten, flatten_into, node_text, span_text, ParseNode, SourceText, SourceToken, SyntaxNode,
    Token,
};

pub type Result<T> = std::result::Result<T, ResolveError>;
