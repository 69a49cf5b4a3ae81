#![allow(clippy::unwrap_used, clippy::expect_used)]

use markup5ever_rcdom::NodeData;
use pretty_assertions::assert_eq;

use marq_diagnostic::{Error, ErrorKind};
use marq_ir::{ArrayElement, BinaryOp, Program, Stmt};

use crate::dom::Document;

use super::*;

fn parse_ok(source: &str) -> Program {
    parse(source).expect("parsing should succeed")
}

fn parse_err(source: &str) -> Error {
    parse(source).expect_err("parsing should fail")
}

// Literals

#[test]
fn test_parse_number_literal() {
    let program = parse_ok(r#"<data value="3.5"></data>"#);
    assert_eq!(program, Program::new(vec![Stmt::Number(3.5)]));
}

#[test]
fn test_parse_number_scientific_notation() {
    let program = parse_ok(r#"<data value="2.5e3"></data>"#);
    assert_eq!(program, Program::new(vec![Stmt::Number(2500.0)]));
}

#[test]
fn test_parse_negative_number() {
    let program = parse_ok(r#"<data value="-7"></data>"#);
    assert_eq!(program, Program::new(vec![Stmt::Number(-7.0)]));
}

#[test]
fn test_parse_string_literal() {
    let program = parse_ok("<s>hello world</s>");
    assert_eq!(
        program,
        Program::new(vec![Stmt::Str("hello world".to_string())])
    );
}

#[test]
fn test_extra_attributes_are_ignored() {
    let program = parse_ok(r#"<data value="1" id="first"></data>"#);
    assert_eq!(program, Program::new(vec![Stmt::Number(1.0)]));
}

// Operators and stack instructions

#[test]
fn test_parse_binary_operators() {
    let program = parse_ok("<dd></dd><sub></sub><ul></ul><div></div>");
    assert_eq!(
        program,
        Program::new(vec![
            Stmt::Binary(BinaryOp::Add),
            Stmt::Binary(BinaryOp::Sub),
            Stmt::Binary(BinaryOp::Mul),
            Stmt::Binary(BinaryOp::Div),
        ])
    );
}

#[test]
fn test_parse_stack_and_print_instructions() {
    let program = parse_ok("<dt></dt><del></del><output></output>");
    assert_eq!(
        program,
        Program::new(vec![Stmt::Duplicate, Stmt::Delete, Stmt::Print])
    );
}

// Variables

#[test]
fn test_parse_variable_instructions() {
    let program = parse_ok(r#"<var title="x"></var><cite>x</cite>"#);
    assert_eq!(
        program,
        Program::new(vec![
            Stmt::SetVariable("x".to_string()),
            Stmt::GetVariable("x".to_string()),
        ])
    );
}

// Arrays

#[test]
fn test_parse_array_literal() {
    let program = parse_ok(
        r#"<ol><li><data value="1"></data></li><li><data value="2"></data></li></ol>"#,
    );
    assert_eq!(
        program,
        Program::new(vec![Stmt::Array(vec![
            ArrayElement::new(vec![Stmt::Number(1.0)]),
            ArrayElement::new(vec![Stmt::Number(2.0)]),
        ])])
    );
}

#[test]
fn test_parse_empty_array_literal() {
    let program = parse_ok("<ol></ol>");
    assert_eq!(program, Program::new(vec![Stmt::Array(vec![])]));
}

#[test]
fn test_parse_nested_array_literal() {
    let program = parse_ok(r#"<ol><li><ol><li><data value="1"></data></li></ol></li></ol>"#);
    assert_eq!(
        program,
        Program::new(vec![Stmt::Array(vec![ArrayElement::new(vec![
            Stmt::Array(vec![ArrayElement::new(vec![Stmt::Number(1.0)])]),
        ])])])
    );
}

#[test]
fn test_list_item_runs_a_full_sequence() {
    let program = parse_ok(
        r#"<ol><li><data value="1"></data><data value="2"></data><dd></dd></li></ol>"#,
    );
    assert_eq!(
        program,
        Program::new(vec![Stmt::Array(vec![ArrayElement::new(vec![
            Stmt::Number(1.0),
            Stmt::Number(2.0),
            Stmt::Binary(BinaryOp::Add),
        ])])])
    );
}

// Document shape

#[test]
fn test_full_document_and_fragment_parse_alike() {
    let fragment = parse_ok("<dt></dt>");
    let document =
        parse_ok("<!DOCTYPE html><html><head></head><body><dt></dt></body></html>");
    assert_eq!(fragment, document);
}

#[test]
fn test_tag_names_are_normalized_to_lowercase() {
    let program = parse_ok("<DT></DT>");
    assert_eq!(program, Program::new(vec![Stmt::Duplicate]));
}

#[test]
fn test_text_between_instructions_is_skipped() {
    let program = parse_ok("hello <dt></dt> world");
    assert_eq!(program, Program::new(vec![Stmt::Duplicate]));
}

#[test]
fn test_comments_are_skipped() {
    let program = parse_ok("<!-- duplicate the top --><dt></dt>");
    assert_eq!(program, Program::new(vec![Stmt::Duplicate]));
}

#[test]
fn test_empty_source_is_an_empty_program() {
    assert_eq!(parse_ok(""), Program::default());
}

#[test]
fn test_unclosed_element_is_repaired() {
    // Stage 1 recovers; the element still validates
    let program = parse_ok("<s>unclosed");
    assert_eq!(
        program,
        Program::new(vec![Stmt::Str("unclosed".to_string())])
    );
}

// Document ownership

#[test]
fn test_nodes_stay_attached_while_the_document_is_held() {
    // rcdom detaches every descendant's child list when the root drops,
    // so handles are only usable while their Document is alive
    let document = Document::parse("<s>abc</s>");
    let nodes = document.body_nodes();
    let element = nodes
        .iter()
        .find(|node| matches!(&node.data, NodeData::Element { .. }))
        .expect("body should hold the <s> element");
    assert_eq!(element.children.borrow().len(), 1);
}

// Parse errors

#[test]
fn test_unknown_tag_is_a_parse_error() {
    let err = parse_err("<p></p>");
    assert_eq!(err.kind, ErrorKind::Parse);
    assert_eq!(err.message, "unknown tag 'p'");
}

#[test]
fn test_unknown_tags_accumulate_across_siblings() {
    let err = parse_err("<p></p><dt></dt><em></em>");
    assert_eq!(err.kind, ErrorKind::Parse);
    // Both bad tags reported, in document order; the valid <dt> between
    // them is not mentioned
    assert_eq!(err.message, "unknown tag 'p'\nunknown tag 'em'");
}

#[test]
fn test_missing_value_attribute() {
    let err = parse_err("<data></data>");
    assert_eq!(err.message, "attribute 'value' not found");
}

#[test]
fn test_invalid_number_value() {
    let err = parse_err(r#"<data value="abc"></data>"#);
    assert_eq!(err.message, "value 'abc' is not a valid number");
}

#[test]
fn test_string_without_text_child() {
    let err = parse_err("<s></s>");
    assert_eq!(err.message, "<s> element has no text child");
}

#[test]
fn test_cite_without_text_child() {
    let err = parse_err("<cite></cite>");
    assert_eq!(err.message, "<cite> element has no text child");
}

#[test]
fn test_var_without_title_attribute() {
    let err = parse_err("<var></var>");
    assert_eq!(err.message, "attribute 'title' not found");
}

#[test]
fn test_list_item_outside_array_literal() {
    let err = parse_err("<li></li>");
    assert_eq!(err.message, "<li> element outside of <ol>");
}

#[test]
fn test_array_child_must_be_list_item() {
    let err = parse_err(r#"<ol><div></div><li><data value="1"></data></li></ol>"#);
    assert_eq!(err.message, "expected <li> inside <ol>, found <div>");
}

#[test]
fn test_errors_inside_list_items_bubble_up() {
    let err = parse_err("<ol><li><p></p></li><li><em></em></li></ol>");
    assert_eq!(err.message, "unknown tag 'p'\nunknown tag 'em'");
}

// Round trip

#[test]
fn test_rendered_metacharacters_reparse_identically() {
    let program = parse_ok("<s>a&lt;b&amp;c</s>");
    assert_eq!(program, Program::new(vec![Stmt::Str("a<b&c".to_string())]));
    assert_eq!(parse_ok(&program.to_string()), program);
}

#[test]
fn test_rendered_program_reparses_identically() {
    let source = r#"<data value="10"></data><data value="3"></data><sub></sub><var title="result"></var><cite>result</cite><output></output><ol><li><s>a</s></li><li><cite>result</cite></li></ol>"#;
    let program = parse_ok(source);
    let rendered = program.to_string();
    assert_eq!(parse_ok(&rendered), program);
}
