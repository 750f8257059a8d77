use wordscope_syntax::{flatten, ParseNode, SourceText, SyntaxNode, Token};

/// `(sum (term a) (op +) (term (group ( b ))))` over the source `a + ( b )`.
fn nested_tree() -> SyntaxNode {
    let source = SourceText::new("a + ( b )");
    let mut words = source.split_words().into_iter().map(SyntaxNode::terminal);
    let mut next = || words.next().expect("five words");

    let a = SyntaxNode::branch("term", vec![next()]);
    let plus = SyntaxNode::branch("op", vec![next()]);
    let group = SyntaxNode::branch("group", vec![next(), next(), next()]);
    SyntaxNode::branch("sum", vec![a, plus, SyntaxNode::branch("term", vec![group])])
}

#[test]
fn test_flatten_nested_subtree_in_document_order() {
    let tree = nested_tree();
    let tokens = flatten(&tree);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["a", "+", "(", "b", ")"]);

    let starts: Vec<usize> = tokens.iter().map(|t| t.start()).collect();
    assert_eq!(starts, vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_flatten_inner_subtree_only() {
    let tree = nested_tree();
    let group = &tree.children()[2];
    let texts: Vec<&str> = flatten(group).into_iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["(", "b", ")"]);
}

#[test]
fn test_flatten_is_stateless() {
    let tree = nested_tree();
    assert_eq!(flatten(&tree).len(), 5);
    assert_eq!(flatten(&tree).len(), 5);
}

#[test]
fn test_flatten_empty_branch() {
    let tree = SyntaxNode::branch("nothing", vec![]);
    assert!(flatten(&tree).is_empty());
}
