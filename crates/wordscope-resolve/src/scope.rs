use std::fmt;

use fxhash::FxHashMap;

use crate::symbol::{normalize_name, Symbol};

/// Handle of a scope in a [`SymbolTable`](crate::table::SymbolTable) arena.
///
/// `slot` is the arena position, which is reused once the scope is popped;
/// `serial` is never reused, so a handle to a popped scope stops resolving
/// instead of aliasing whatever scope later takes its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId {
    pub(crate) slot: usize,
    pub(crate) serial: usize,
}

impl ScopeId {
    /// Nesting depth of the scope, 0 for the root.
    pub fn depth(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.serial)
    }
}

/// One lexical scope: a label, its local symbols and a parent link.
#[derive(Debug, Clone)]
pub struct Scope {
    id: ScopeId,
    label: String,
    parent: Option<ScopeId>,
    /// Keyed by [`Symbol::key`], so names differing only in spacing collide.
    symbols: FxHashMap<String, Symbol>,
}

impl Scope {
    pub(crate) fn new(id: ScopeId, label: String, parent: Option<ScopeId>) -> Self {
        Self {
            id,
            label,
            parent,
            symbols: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Inserts `symbol`, returning the symbol it shadows if a name with the
    /// same key (any spelling) was already defined here.
    pub(crate) fn define(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(symbol.key().to_string(), symbol)
    }

    /// Local lookup by verbatim name.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols
            .get(&normalize_name(name))
            .filter(|symbol| symbol.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Local symbols sorted by name.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<_> = self.symbols.values().collect();
        symbols.sort_by(|a, b| a.name().cmp(b.name()));
        symbols
    }

    /// Local symbol whose key equals `key`.
    pub(crate) fn find_key(&self, key: &str) -> Option<&Symbol> {
        self.symbols.get(key)
    }

    /// True if some local symbol could be completed from `key`.
    pub(crate) fn has_extension(&self, key: &str) -> bool {
        self.symbols.values().any(|s| s.extends(key))
    }
}
