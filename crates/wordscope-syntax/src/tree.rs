use crate::token::{SourceToken, Token};

/// A node of a concrete parse tree.
///
/// A node is either a terminal wrapping one token (`leaf` returns it) or a
/// non-terminal with ordered children.
pub trait ParseNode: Sized {
    type Token: Token;

    /// Grammar rule or token kind, used in diagnostics.
    fn kind(&self) -> &str;

    /// The token of a terminal node, `None` for non-terminals.
    fn leaf(&self) -> Option<&Self::Token>;

    /// Children in document order. Terminals have none.
    fn children(&self) -> &[Self];

    fn is_terminal(&self) -> bool {
        self.leaf().is_some()
    }

    /// Leftmost token underneath this node.
    fn first_token(&self) -> Option<&Self::Token> {
        match self.leaf() {
            Some(token) => Some(token),
            None => self.children().iter().find_map(ParseNode::first_token),
        }
    }

    /// Rightmost token underneath this node.
    fn last_token(&self) -> Option<&Self::Token> {
        match self.leaf() {
            Some(token) => Some(token),
            None => self.children().iter().rev().find_map(ParseNode::last_token),
        }
    }
}

/// An owned parse tree over [`SourceToken`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Leaf(SourceToken),
    Branch {
        kind: String,
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub fn terminal(token: SourceToken) -> Self {
        SyntaxNode::Leaf(token)
    }

    pub fn branch(kind: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Branch {
            kind: kind.into(),
            children,
        }
    }

    /// A branch whose children are one leaf per token.
    pub fn from_tokens(
        kind: impl Into<String>,
        tokens: impl IntoIterator<Item = SourceToken>,
    ) -> Self {
        Self::branch(kind, tokens.into_iter().map(SyntaxNode::Leaf).collect())
    }
}

impl ParseNode for SyntaxNode {
    type Token = SourceToken;

    fn kind(&self) -> &str {
        match self {
            SyntaxNode::Leaf(_) => "token",
            SyntaxNode::Branch { kind, .. } => kind,
        }
    }

    fn leaf(&self) -> Option<&SourceToken> {
        match self {
            SyntaxNode::Leaf(token) => Some(token),
            SyntaxNode::Branch { .. } => None,
        }
    }

    fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Leaf(_) => &[],
            SyntaxNode::Branch { children, .. } => children,
        }
    }
}
