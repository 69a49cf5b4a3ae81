//! Stage 1: generic markup parsing.
//!
//! Thin wrapper over `html5ever`'s document parser. The tree builder always
//! produces a well-formed `html` element with a `body`, whatever the input
//! looked like, and program instructions are the elements under `body`.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// A parsed document tree, rooted at the document node.
///
/// Handles into the tree are only usable while this value is alive: rcdom's
/// `Drop` for the root detaches the child list of every descendant,
/// outstanding handles or not. Stage 2 must finish its walk before the
/// `Document` goes away.
pub(crate) struct Document {
    root: Handle,
}

impl Document {
    /// Parse source text. Error-recovering per the HTML specification, so
    /// this never fails on string input.
    pub(crate) fn parse(source: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
        Document { root: dom.document }
    }

    /// The nodes under `body`, in document order.
    ///
    /// Non-element nodes (text, comments, doctype) are included; stage 2
    /// skips them during validation.
    pub(crate) fn body_nodes(&self) -> Vec<Handle> {
        let html = find_child_element(&self.root, "html");
        let body = html
            .as_ref()
            .and_then(|html| find_child_element(html, "body"));
        match body {
            Some(body) => body.children.borrow().clone(),
            // Unreachable with a spec-compliant tree builder; an empty
            // program is the harmless reading.
            None => Vec::new(),
        }
    }
}

fn find_child_element(node: &Handle, tag: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { name, .. } if &*name.local == tag))
        .cloned()
}
