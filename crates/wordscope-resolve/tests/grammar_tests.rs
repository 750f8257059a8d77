//! Drives the resolver from a small recursive-descent parser for context
//! literals, the way generated grammar actions would:
//!
//! ```text
//! context := "{" entry ("," entry)* "}"
//! entry   := key ":" expr
//! expr    := term (("+" | "-" | "*") term)*
//! term    := number | context | name
//! ```
//!
//! Entries become visible to the entries after them, and a nested context
//! opens a scope labelled with its key.

mod common;

use common::{init_logging, words};
use wordscope_resolve::{
    NameResolver, ResolveError, ResolverConfig, SourceToken, SymbolTable, SyntaxNode, Token,
};

const PUNCTUATION: &[&str] = &["{", "}", ",", ":", "+", "-", "*"];

#[derive(Debug, PartialEq, Eq)]
struct Reference {
    text: String,
    declared: bool,
}

struct ContextParser {
    tokens: Vec<SourceToken>,
    pos: usize,
    resolver: NameResolver,
    references: Vec<Reference>,
}

impl ContextParser {
    fn new(source: &str, resolver: NameResolver) -> Self {
        init_logging();
        Self {
            tokens: words(source),
            pos: 0,
            resolver,
            references: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<(Vec<Reference>, SymbolTable), ResolveError> {
        self.context()?;
        assert_eq!(self.pos, self.tokens.len(), "trailing input");
        Ok((self.references, self.resolver.into_symbol_table()))
    }

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(|token| token.text())
    }

    fn expect(&mut self, text: &str) {
        assert_eq!(self.peek(), Some(text), "at token {}", self.pos);
        self.pos += 1;
    }

    fn context(&mut self) -> Result<(), ResolveError> {
        self.expect("{");
        self.resolver.push_scope();
        loop {
            self.entry()?;
            if self.peek() == Some(",") {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.expect("}");
        self.resolver.pop_scope()?;
        Ok(())
    }

    fn entry(&mut self) -> Result<(), ResolveError> {
        let start = self.pos;
        while self.peek().is_some_and(|text| text != ":") {
            self.pos += 1;
        }
        let key = SyntaxNode::from_tokens("key", self.tokens[start..self.pos].to_vec());
        self.expect(":");

        self.resolver.push_name(&key)?;
        self.expr()?;
        self.resolver.pop_name()?;
        self.resolver.define_variable(&key)?;
        Ok(())
    }

    fn expr(&mut self) -> Result<(), ResolveError> {
        self.term()?;
        while matches!(self.peek(), Some("+" | "-" | "*")) {
            self.pos += 1;
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), ResolveError> {
        match self.peek() {
            Some("{") => self.context(),
            Some(text) if text.parse::<f64>().is_ok() => {
                self.pos += 1;
                Ok(())
            }
            _ => {
                let end = self.tokens[self.pos..]
                    .iter()
                    .position(|token| PUNCTUATION.contains(&token.text()))
                    .map_or(self.tokens.len(), |offset| self.pos + offset);
                let found = self
                    .resolver
                    .recognize(&self.tokens[self.pos..end])
                    .expect("a name at term position");
                self.pos += found.len;
                self.references.push(Reference {
                    declared: found.is_declared(),
                    text: found.text,
                });
                Ok(())
            }
        }
    }
}

fn parse(source: &str) -> (Vec<Reference>, SymbolTable) {
    let resolver = NameResolver::with_config(ResolverConfig::default().without_builtins());
    ContextParser::new(source, resolver).parse().unwrap()
}

fn reference(text: &str, declared: bool) -> Reference {
    Reference {
        text: text.to_string(),
        declared,
    }
}

#[test]
fn test_entries_are_visible_only_after_declaration() {
    let (references, _) = parse("{ x : total , total cost : 1 , y : total cost }");
    assert_eq!(
        references,
        vec![reference("total", false), reference("total cost", true)]
    );
}

#[test]
fn test_nested_context_scope() {
    let (references, table) =
        parse("{ outer : { depth : 1 , inner : depth * 2 } , after : depth }");
    assert_eq!(
        references,
        vec![reference("depth", true), reference("depth", false)]
    );

    let depth = table
        .definitions()
        .iter()
        .find(|def| def.symbol.name() == "depth")
        .unwrap();
    assert_eq!(depth.path, vec!["<builtin>", "<global>", "<local>", "outer"]);

    let outer = table
        .definitions()
        .iter()
        .find(|def| def.symbol.name() == "outer")
        .unwrap();
    assert_eq!(outer.path, vec!["<builtin>", "<global>", "<local>"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_longest_declared_name_wins_in_expression() {
    let (references, _) = parse("{ a : 1 , a b : 2 , r : a b + a - c }");
    assert_eq!(
        references,
        vec![
            reference("a b", true),
            reference("a", true),
            reference("c", false),
        ]
    );
}

#[test]
fn test_outer_entries_visible_in_nested_context() {
    let (references, _) =
        parse("{ rate : 2 , order : { net amount : 10 , gross : net amount * rate } }");
    assert_eq!(
        references,
        vec![reference("net amount", true), reference("rate", true)]
    );
}

#[test]
fn test_builtin_call_inside_context() {
    let resolver = NameResolver::new();
    let (_, table) = ContextParser::new("{ today : date and time + 1 }", resolver)
        .parse()
        .unwrap();
    assert!(table.is_builtin("date and time"));

    let mut resolver = NameResolver::new();
    let found = resolver.recognize(&words("date and time + 1")).unwrap();
    assert_eq!(found.len, 3);
}
