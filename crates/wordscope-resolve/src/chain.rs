//! The scope chain: a cursor over the symbol table's live scopes.

use log::debug;

use crate::error::{ResolveError, Stack};
use crate::scope::{Scope, ScopeId};
use crate::symbol::{normalize_name, Symbol};
use crate::table::{Definition, SymbolTable};

/// A symbol found by a lookup, with the scope that provided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub symbol: Symbol,
    pub scope: ScopeId,
}

/// Answer to "could this candidate be (the start of) a declared name?".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateQuery {
    /// The nearest symbol whose key equals the candidate.
    pub exact: Option<Resolution>,
    /// Some visible symbol strictly extends the candidate by whole words.
    pub extensible: bool,
}

impl CandidateQuery {
    /// The candidate may keep absorbing tokens.
    pub fn keeps_going(&self) -> bool {
        self.exact.is_some() || self.extensible
    }
}

/// Nested scopes with a current-scope cursor.
///
/// `push_scope` opens a child of the current scope and makes it current;
/// `pop_scope` makes the parent current and discards the popped scope.
/// Lookups search the current scope, then each ancestor up to the root.
#[derive(Debug, Clone)]
pub struct ScopeChain {
    table: SymbolTable,
    current: ScopeId,
}

impl ScopeChain {
    /// Start a chain at the table's root scope.
    pub fn new(table: SymbolTable) -> Self {
        let current = table.root();
        Self { table, current }
    }

    pub fn current(&self) -> ScopeId {
        self.current
    }

    pub fn current_scope(&self) -> &Scope {
        self.scope(self.current)
    }

    /// Number of scopes above the root.
    pub fn depth(&self) -> usize {
        self.current.depth()
    }

    /// Push a new scope and make it the current scope.
    pub fn push_scope(&mut self, label: impl Into<String>) -> ScopeId {
        let label = label.into();
        let id = self.table.open(self.current, label);
        debug!("push {} {:?} (depth {})", id, self.scope(id).label(), id.depth());
        self.current = id;
        id
    }

    /// Pop the current scope and return to the parent scope.
    ///
    /// Fails without changing anything when the current scope is the root.
    pub fn pop_scope(&mut self) -> Result<Scope, ResolveError> {
        let parent = match self.current_scope().parent() {
            Some(parent) => parent,
            None => {
                let bottom = self.current_scope().label().to_string();
                return Err(ResolveError::stack_discipline(Stack::Scope, bottom));
            }
        };
        let popped = self.table.close().ok_or_else(|| {
            ResolveError::stack_discipline(Stack::Scope, self.table.root_scope().label())
        })?;
        debug!("pop {} {:?} ({} symbols)", popped.id(), popped.label(), popped.len());
        self.current = parent;
        Ok(popped)
    }

    /// Define `symbol` in the current scope.
    ///
    /// Redefining a name already present in the current scope overwrites it;
    /// the shadowed symbol is returned.
    pub fn define(&mut self, symbol: Symbol) -> Option<Symbol> {
        let current = self.current;
        let path = self.table.path_of(current);
        let shadowed = self
            .table
            .scope_mut(current)
            .and_then(|scope| scope.define(symbol.clone()));
        if shadowed.is_some() {
            debug!("redefine {:?} in {}", symbol.name(), current);
        } else {
            debug!("define {:?} in {}", symbol.name(), current);
        }
        self.table.record(Definition {
            symbol,
            scope: current,
            path,
            shadows: shadowed.is_some(),
        });
        shadowed
    }

    /// Lookup a symbol by verbatim name in the current scope and its ancestors.
    pub fn lookup(&self, name: &str) -> Option<Resolution> {
        self.ancestors().find_map(|scope| {
            scope.get(name).map(|symbol| Resolution {
                symbol: symbol.clone(),
                scope: scope.id(),
            })
        })
    }

    /// Match a token-assembled candidate against every visible symbol.
    ///
    /// The candidate is compared by key, so `a b` finds a symbol declared as
    /// `a   b`. The exact hit comes from the nearest scope that has one.
    pub fn query(&self, candidate: &str) -> CandidateQuery {
        let key = normalize_name(candidate);
        let mut query = CandidateQuery::default();
        for scope in self.ancestors() {
            if query.exact.is_none() {
                query.exact = scope.find_key(&key).map(|symbol| Resolution {
                    symbol: symbol.clone(),
                    scope: scope.id(),
                });
            }
            query.extensible = query.extensible || scope.has_extension(&key);
            if query.exact.is_some() && query.extensible {
                break;
            }
        }
        query
    }

    /// The current scope followed by each ancestor up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Scope> + '_ {
        std::iter::successors(self.table.scope(self.current), move |scope| {
            scope.parent().and_then(|parent| self.table.scope(parent))
        })
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn into_symbol_table(self) -> SymbolTable {
        self.table
    }

    fn scope(&self, id: ScopeId) -> &Scope {
        // The cursor and the scopes it was pushed over are always live.
        self.table
            .scope(id)
            .unwrap_or_else(|| self.table.root_scope())
    }
}
