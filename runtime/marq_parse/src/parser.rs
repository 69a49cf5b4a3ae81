//! Stage 2: vocabulary validation and lowering.

use std::cell::RefCell;

use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData};
use tracing::{debug, trace};

use marq_diagnostic::{
    expected_list_item, invalid_number, list_item_outside_list, missing_attribute,
    missing_text_child, unknown_tag, Error, ErrorList,
};
use marq_ir::{ArrayElement, BinaryOp, Program, Stmt};

use crate::dom::Document;

/// Parse source markup into a program.
///
/// On failure the result is a single combined parse error listing every
/// invalid element in document order, one message per line.
pub fn parse(source: &str) -> Result<Program, Error> {
    // The document owns the tree; it must outlive the stage 2 walk
    let document = Document::parse(source);
    let nodes = document.body_nodes();
    debug!(nodes = nodes.len(), "validating document nodes");
    parse_nodes(&nodes).map(Program::new).map_err(ErrorList::join)
}

/// Walk sibling nodes in document order, validating every one.
///
/// Failures accumulate instead of short-circuiting; non-element nodes
/// (text between instructions, comments) are skipped.
fn parse_nodes(nodes: &[Handle]) -> Result<Vec<Stmt>, ErrorList> {
    let mut statements = Vec::new();
    let mut errors = ErrorList::new();
    for node in nodes {
        if let NodeData::Element { name, attrs, .. } = &node.data {
            match parse_element(&name.local, attrs, node) {
                Ok(stmt) => statements.push(stmt),
                Err(list) => errors.merge(list),
            }
        }
    }
    errors.into_result(statements)
}

/// Dispatch one element on its tag name.
///
/// The tree builder has already lowercased names in the HTML namespace, so
/// the match here is effectively case-insensitive to the source.
fn parse_element(
    tag: &str,
    attrs: &RefCell<Vec<Attribute>>,
    node: &Handle,
) -> Result<Stmt, ErrorList> {
    trace!(%tag, "element");
    match tag {
        // Literals
        "s" => Ok(Stmt::Str(required_text(node, "s")?)),
        "data" => parse_number(attrs),
        "ol" => parse_array(node),
        // Arithmetic
        "dd" => Ok(Stmt::Binary(BinaryOp::Add)),
        "sub" => Ok(Stmt::Binary(BinaryOp::Sub)),
        "ul" => Ok(Stmt::Binary(BinaryOp::Mul)),
        "div" => Ok(Stmt::Binary(BinaryOp::Div)),
        // Stack manipulation
        "dt" => Ok(Stmt::Duplicate),
        "del" => Ok(Stmt::Delete),
        // Variables
        "var" => parse_set_variable(attrs),
        "cite" => Ok(Stmt::GetVariable(required_text(node, "cite")?)),
        // I/O
        "output" => Ok(Stmt::Print),
        // A list item only means something inside an array literal
        "li" => Err(list_item_outside_list().into()),
        _ => Err(unknown_tag(tag).into()),
    }
}

fn parse_number(attrs: &RefCell<Vec<Attribute>>) -> Result<Stmt, ErrorList> {
    let value = required_attribute(attrs, "value")?;
    let number: f64 = value.parse().map_err(|_| invalid_number(&value))?;
    Ok(Stmt::Number(number))
}

fn parse_set_variable(attrs: &RefCell<Vec<Attribute>>) -> Result<Stmt, ErrorList> {
    let identifier = required_attribute(attrs, "title")?;
    Ok(Stmt::SetVariable(identifier))
}

/// Parse an `<ol>` array literal.
///
/// Children must all be `<li>` elements; anything else is reported, and the
/// remaining items are still validated.
fn parse_array(node: &Handle) -> Result<Stmt, ErrorList> {
    let mut elements = Vec::new();
    let mut errors = ErrorList::new();
    for child in node.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            let tag: &str = &name.local;
            if tag == "li" {
                match parse_list_item(child) {
                    Ok(element) => elements.push(element),
                    Err(list) => errors.merge(list),
                }
            } else {
                errors.push(expected_list_item(tag));
            }
        }
    }
    errors.into_result(Stmt::Array(elements))
}

fn parse_list_item(node: &Handle) -> Result<ArrayElement, ErrorList> {
    let children = node.children.borrow().clone();
    parse_nodes(&children).map(ArrayElement::new)
}

/// The element's first text child.
///
/// `<s>` reads its string payload and `<cite>` its identifier from here.
fn required_text(node: &Handle, tag: &str) -> Result<String, Error> {
    for child in node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            return Ok(contents.borrow().to_string());
        }
    }
    Err(missing_text_child(tag))
}

fn required_attribute(attrs: &RefCell<Vec<Attribute>>, name: &str) -> Result<String, Error> {
    attrs
        .borrow()
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| attr.value.to_string())
        .ok_or_else(|| missing_attribute(name))
}
