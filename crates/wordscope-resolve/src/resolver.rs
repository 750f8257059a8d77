//! The per-parse resolver context called from grammar actions.

use std::fmt;

use log::debug;
use wordscope_syntax::{node_text, ParseNode, Token};

use crate::chain::{Resolution, ScopeChain};
use crate::config::{MatchStrategy, ResolverConfig};
use crate::error::ResolveError;
use crate::matcher::{longest_match, MatchState, NameMatch};
use crate::names::NameStack;
use crate::scope::{Scope, ScopeId};
use crate::symbol::Symbol;
use crate::table::SymbolTable;
use crate::trace::{LogSink, TraceEvent, TraceSink};

/// Name-resolution state for exactly one parse.
///
/// The grammar calls these methods as embedded actions and predicates:
///
/// - `push_name` / `pop_name` around a construct whose header labels it
/// - `push_scope` / `pop_scope` around a construct with local bindings
/// - `define_variable` at declaration points
/// - `start_variable` / `follow_up` (or `recognize`) at identifier positions
///
/// On creation the chain holds the built-in root scope and a global scope on
/// top of it; definitions made before any `push_scope` land in the global
/// scope. Create a new resolver for every parse.
pub struct NameResolver {
    config: ResolverConfig,
    chain: ScopeChain,
    names: NameStack,
    matcher: MatchState,
    trace: Option<Box<dyn TraceSink>>,
}

impl NameResolver {
    /// Create a resolver with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        let table = SymbolTable::with_builtins(
            config.root_label.clone(),
            config.builtins.iter().cloned(),
        );
        let mut chain = ScopeChain::new(table);
        chain.push_scope(config.global_label.clone());
        let names = NameStack::new(config.seed_label.clone());
        let trace: Option<Box<dyn TraceSink>> = if config.trace {
            Some(Box::new(LogSink))
        } else {
            None
        };
        Self {
            config,
            chain,
            names,
            matcher: MatchState::new(),
            trace,
        }
    }

    /// Install `sink`, replacing any sink set up by the configuration.
    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    pub fn set_trace_sink(&mut self, sink: Option<Box<dyn TraceSink>>) {
        self.trace = sink;
    }

    /// True if matcher decisions are reported to a sink.
    pub fn is_tracing(&self) -> bool {
        self.trace.is_some()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    // Scopes

    /// Open a child of the current scope, labelled with the top of the name
    /// stack, and make it current.
    pub fn push_scope(&mut self) -> ScopeId {
        let label = self.names.top().to_string();
        self.chain.push_scope(label)
    }

    /// Close the current scope and return it.
    pub fn pop_scope(&mut self) -> Result<Scope, ResolveError> {
        self.chain.pop_scope()
    }

    pub fn current_scope(&self) -> &Scope {
        self.chain.current_scope()
    }

    pub fn scope_chain(&self) -> &ScopeChain {
        &self.chain
    }

    // Names

    /// Push the verbatim source text of `node` as the next scope label.
    pub fn push_name<N: ParseNode>(&mut self, node: &N) -> Result<(), ResolveError> {
        let label = node_text(node)?;
        self.names.push(label);
        Ok(())
    }

    /// Push an already-known label.
    pub fn push_label(&mut self, label: impl Into<String>) {
        self.names.push(label);
    }

    pub fn pop_name(&mut self) -> Result<String, ResolveError> {
        self.names.pop()
    }

    pub fn name_stack(&self) -> &NameStack {
        &self.names
    }

    // Definitions

    /// Define the verbatim source text of `node` in the current scope.
    ///
    /// Returns the symbol it shadows, if the name was already defined in the
    /// current scope. Redefinition is not an error.
    pub fn define_variable<N: ParseNode>(
        &mut self,
        node: &N,
    ) -> Result<Option<Symbol>, ResolveError> {
        let name = node_text(node)?;
        Ok(self.define_name(name))
    }

    /// Define `name` in the current scope. See [`define_variable`](Self::define_variable).
    pub fn define_name(&mut self, name: impl Into<String>) -> Option<Symbol> {
        self.chain.define(Symbol::variable(name))
    }

    /// Exact lookup through the current scope and its ancestors.
    pub fn lookup(&self, name: &str) -> Option<Resolution> {
        self.chain.lookup(name)
    }

    // Identifier recognition

    /// Begin recognizing an identifier at `token`.
    pub fn start_variable<T: Token + ?Sized>(&mut self, token: &T) {
        self.matcher.start(&self.chain, token.text());
        self.emit(|| TraceEvent::Start {
            text: token.text().to_string(),
        });
    }

    /// Offer `token` to the identifier being recognized.
    ///
    /// `true` means the token belongs to the identifier. `false` means it
    /// does not and the grammar should stop extending; the candidate is
    /// unchanged and [`confirmed`](Self::confirmed) holds the longest
    /// declared name seen, if any.
    pub fn follow_up<T: Token + ?Sized>(&mut self, token: &T) -> bool {
        let accepted = self.matcher.follow_up(&self.chain, token.text());
        self.emit(|| TraceEvent::FollowUp {
            text: token.text().to_string(),
            accepted,
        });
        accepted
    }

    /// The candidate assembled by `start_variable` / `follow_up`.
    pub fn candidate(&self) -> &str {
        self.matcher.buffer()
    }

    /// Checkpoint of the current attempt: the longest declared name so far.
    pub fn confirmed(&self) -> Option<&NameMatch> {
        self.matcher.confirmed()
    }

    /// Final decision of the current incremental attempt.
    pub fn outcome(&self) -> Option<NameMatch> {
        self.matcher.outcome()
    }

    pub fn match_state(&self) -> &MatchState {
        &self.matcher
    }

    /// Resolve the identifier at the start of `tokens` by full lookahead.
    ///
    /// Does not disturb the incremental `start_variable` / `follow_up` state.
    pub fn longest_match<T: Token>(&mut self, tokens: &[T]) -> Option<NameMatch> {
        let found = longest_match(&self.chain, tokens)?;
        self.emit_matched(&found);
        Some(found)
    }

    /// Resolve the identifier at the start of `tokens` with the configured
    /// [`MatchStrategy`]. Both strategies reach the same decision, and
    /// neither disturbs the incremental `start_variable` / `follow_up` state.
    pub fn recognize<T: Token>(&mut self, tokens: &[T]) -> Option<NameMatch> {
        match self.config.strategy {
            MatchStrategy::Lookahead => self.longest_match(tokens),
            MatchStrategy::Checkpoint => {
                let (first, rest) = tokens.split_first()?;
                let mut state = MatchState::new();
                state.start(&self.chain, first.text());
                if state.token_count() == 0 {
                    return None;
                }
                self.emit(|| TraceEvent::Start {
                    text: first.text().to_string(),
                });
                for token in rest {
                    let accepted = state.follow_up(&self.chain, token.text());
                    self.emit(|| TraceEvent::FollowUp {
                        text: token.text().to_string(),
                        accepted,
                    });
                    if !accepted {
                        break;
                    }
                }
                let found = state.outcome()?;
                self.emit_matched(&found);
                Some(found)
            }
        }
    }

    // Results

    pub fn symbol_table(&self) -> &SymbolTable {
        self.chain.symbol_table()
    }

    /// Finish the parse and keep only the symbol table.
    pub fn into_symbol_table(self) -> SymbolTable {
        if self.names.depth() > 0 {
            debug!("finishing with {} unpopped names", self.names.depth());
        }
        self.chain.into_symbol_table()
    }

    fn emit_matched(&mut self, found: &NameMatch) {
        self.emit(|| TraceEvent::Matched {
            text: found.text.clone(),
            len: found.len,
            declared: found.is_declared(),
        });
    }

    fn emit(&mut self, event: impl FnOnce() -> TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.record(event());
        }
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameResolver")
            .field("current", &self.chain.current())
            .field("names", &self.names.labels())
            .field("candidate", &self.matcher.buffer())
            .field("tracing", &self.is_tracing())
            .finish()
    }
}
