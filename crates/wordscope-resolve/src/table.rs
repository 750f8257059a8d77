//! Scope arena and definition registry.

use std::fmt;

use crate::scope::{Scope, ScopeId};
use crate::symbol::Symbol;

/// One `define` made during the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub symbol: Symbol,
    /// Scope the definition was made in. It may have been popped since.
    pub scope: ScopeId,
    /// Scope labels from the root down to `scope`.
    pub path: Vec<String>,
    /// True if the definition overwrote an earlier one in the same scope.
    pub shadows: bool,
}

/// Owns every live scope of one parse plus the built-in root scope.
///
/// Scopes live in an arena indexed by [`ScopeId`]. Because scopes are opened
/// and closed in strict LIFO order the live scopes always form a single
/// chain, so the arena is a stack and a scope's slot is its depth.
///
/// Popped scopes are gone, but every definition ever made is kept in the
/// registry ([`SymbolTable::definitions`]) for passes that run after parsing.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    next_serial: usize,
    definitions: Vec<Definition>,
}

impl SymbolTable {
    /// Create a table whose root scope holds no names.
    pub fn new(root_label: impl Into<String>) -> Self {
        let root = Scope::new(ScopeId { slot: 0, serial: 0 }, root_label.into(), None);
        SymbolTable {
            scopes: vec![root],
            next_serial: 1,
            definitions: Vec::new(),
        }
    }

    /// Create a table whose root scope is pre-populated with `builtins`.
    pub fn with_builtins<I, S>(root_label: impl Into<String>, builtins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(root_label);
        for name in builtins {
            table.scopes[0].define(Symbol::builtin(name));
        }
        table
    }

    /// The root (built-in) scope ID.
    pub fn root(&self) -> ScopeId {
        self.scopes[0].id()
    }

    pub fn root_scope(&self) -> &Scope {
        &self.scopes[0]
    }

    /// True if `name` is provided by the language.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.root_scope().contains(name)
    }

    /// Get a live scope. Handles of popped scopes return `None`.
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.slot).filter(|scope| scope.id() == id)
    }

    pub(crate) fn scope_mut(&mut self, id: ScopeId) -> Option<&mut Scope> {
        self.scopes.get_mut(id.slot).filter(|scope| scope.id() == id)
    }

    /// Live scopes from the root outward.
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    /// Number of live scopes, root included.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Every definition made so far, in order.
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Definitions whose scope label path ends with `label`.
    pub fn definitions_in<'a>(
        &'a self,
        label: &'a str,
    ) -> impl Iterator<Item = &'a Definition> + 'a {
        self.definitions
            .iter()
            .filter(move |def| def.path.last().map(String::as_str) == Some(label))
    }

    /// Scope labels from the root down to `id`.
    pub fn path_of(&self, id: ScopeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self.scope(id);
        while let Some(scope) = current {
            path.push(scope.label().to_string());
            current = scope.parent().and_then(|parent| self.scope(parent));
        }
        path.reverse();
        path
    }

    /// Opens a child of `parent`, which must be the innermost live scope.
    pub(crate) fn open(&mut self, parent: ScopeId, label: String) -> ScopeId {
        debug_assert_eq!(self.scopes.last().map(Scope::id), Some(parent));
        let id = ScopeId {
            slot: self.scopes.len(),
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.scopes.push(Scope::new(id, label, Some(parent)));
        id
    }

    /// Removes the innermost scope. The root is never removed.
    pub(crate) fn close(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    pub(crate) fn record(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new("<builtin>")
    }
}

/// Renders the live scopes and the registry, one entry per line.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scope in &self.scopes {
            let indent = "  ".repeat(scope.id().depth());
            writeln!(f, "{indent}{} {:?} ({} symbols)", scope.id(), scope.label(), scope.len())?;
        }
        for def in &self.definitions {
            let shadow = if def.shadows { " (shadows)" } else { "" };
            writeln!(f, "def {:?} in {}{shadow}", def.symbol.name(), def.path.join(" > "))?;
        }
        Ok(())
    }
}
