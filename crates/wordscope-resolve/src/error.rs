use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use miette::Diagnostic;
use wordscope_syntax::SyntaxError;

/// Which of the resolver's stacks an operation was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stack {
    Scope,
    Name,
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stack::Scope => f.write_str("scope"),
            Stack::Name => f.write_str("name"),
        }
    }
}

/// Errors raised by the resolver.
///
/// Unresolved names and redefinitions are not errors: lookups return
/// `None` and redefinitions overwrite.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum ResolveError {
    /// A pop without a matching push. This is a bug in the grammar actions,
    /// not malformed input, and the parse must be aborted.
    #[error("Stack discipline violation: pop below the bottom of the {stack} stack (`{bottom}`)")]
    #[diagnostic(
        code(wordscope_resolve::stack_discipline),
        help("every pop must be paired with an earlier push of the same kind")
    )]
    StackDiscipline {
        stack: Stack,
        /// Label of the entry that would have been removed.
        bottom: String,
    },

    /// Source text for a scope label or declared name could not be recovered.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Span(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Errors loading a [`ResolverConfig`](crate::config::ResolverConfig).
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Error reading resolver configuration {}: {message}", .path.display())]
    #[diagnostic(
        code(wordscope_resolve::config_read),
        help("check that the file exists and is readable")
    )]
    Read {
        path: PathBuf,
        message: String,
    },

    #[error("Invalid resolver configuration: {0}")]
    #[diagnostic(
        code(wordscope_resolve::config_parse),
        help("see ResolverConfig for the accepted keys")
    )]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl ResolveError {
    pub(crate) fn stack_discipline(stack: Stack, bottom: impl Into<String>) -> Self {
        ResolveError::StackDiscipline {
            stack,
            bottom: bottom.into(),
        }
    }

    /// True for errors that signal a broken grammar rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, ResolveError::StackDiscipline { .. })
    }
}
