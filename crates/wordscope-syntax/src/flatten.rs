//! Leaf-token traversal of parse subtrees.

use crate::tree::ParseNode;

/// Returns the leaf tokens underneath `node` in document order.
///
/// A terminal passed as `node` yields its own token.
pub fn flatten<N: ParseNode>(node: &N) -> Vec<&N::Token> {
    let mut tokens = Vec::new();
    flatten_into(node, &mut tokens);
    tokens
}

/// Appends the leaf tokens underneath `node` to `tokens`.
pub fn flatten_into<'a, N: ParseNode>(node: &'a N, tokens: &mut Vec<&'a N::Token>) {
    if let Some(token) = node.leaf() {
        tokens.push(token);
        return;
    }
    for child in node.children() {
        flatten_into(child, tokens);
    }
}
