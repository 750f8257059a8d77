use expect_test::expect;
use wordscope_syntax::{node_span, node_text, span_text, SourceText, Span, SyntaxError, SyntaxNode};

#[test]
fn test_span_text_is_verbatim() {
    let source = SourceText::new("foo   bar");
    let words = source.split_words();
    assert_eq!(span_text(&words[0], &words[1]).unwrap(), "foo   bar");
}

#[test]
fn test_node_text_keeps_tabs_and_newlines() {
    let source = SourceText::new("let  monthly\tpayment\n amount = 3");
    let words = source.split_words();
    let name = SyntaxNode::from_tokens("name", words[1..4].to_vec());
    assert_eq!(node_text(&name).unwrap(), "monthly\tpayment\n amount");
    assert_eq!(node_span(&name), Some(Span::new(5, 28)));
}

#[test]
fn test_node_text_through_nested_branches() {
    let source = SourceText::new("{ date  of birth : x }");
    let words = source.split_words();
    let key = SyntaxNode::branch(
        "key",
        vec![
            SyntaxNode::from_tokens("word", vec![words[1].clone()]),
            SyntaxNode::from_tokens("rest", words[2..4].to_vec()),
        ],
    );
    let entry = SyntaxNode::branch("entry", vec![key, SyntaxNode::terminal(words[4].clone())]);
    assert_eq!(node_text(&entry).unwrap(), "date  of birth :");
}

#[test]
fn test_node_text_of_empty_node() {
    let err = node_text(&SyntaxNode::branch("params", vec![])).unwrap_err();
    assert_eq!(err, SyntaxError::EmptyNode { kind: "params".to_string() });
    expect![[r#"Node `params` contains no tokens"#]].assert_eq(&err.to_string());
}

#[test]
fn test_foreign_source_message() {
    let a = SourceText::new("x");
    let b = SourceText::new("x");
    let err = span_text(&a.split_words()[0], &b.split_words()[0]).unwrap_err();
    expect![[r#"Span endpoints come from different sources"#]].assert_eq(&err.to_string());
}

#[test]
fn test_out_of_bounds_message() {
    let err = SourceText::new("short").token(2, 40).unwrap_err();
    expect![[r#"Span 2..40 is not a valid range of a 5-byte source"#]].assert_eq(&err.to_string());
}
