//! XML navigation helpers shared by the payload parsers.
//!
//! Every step returns an `Option`; parsers turn a `None` into [`MnbError::Format`] carrying the
//! raw payload, so a missing element is always a checked branch.

use crate::core::MnbError;
use roxmltree::{Document, Node};

/// Parses `xml`, mapping empty input and malformed markup to a format error.
pub(crate) fn parse<'input>(xml: &'input str, what: &str) -> Result<Document<'input>, MnbError> {
    if xml.trim().is_empty() {
        return Err(MnbError::format(format!("{what}: empty payload"), xml));
    }
    Document::parse(xml).map_err(|e| MnbError::format(format!("{what}: {e}"), xml))
}

/// First direct child element with the given local name.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// All direct child elements with the given local name, in document order.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// First element below `node` (depth-first) with the given local name.
pub(crate) fn descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// The data element `name`: either the document element itself or a direct child of it.
///
/// The service wraps its data in an `MNB*` envelope element (`<MNBCurrencies><Currencies>`),
/// but bare documents are accepted too.
pub(crate) fn container<'a, 'input>(doc: &'a Document<'input>, name: &str) -> Option<Node<'a, 'input>> {
    let root = doc.root_element();
    if root.tag_name().name() == name {
        return Some(root);
    }
    child(root, name)
}

/// Concatenated text of `node` and its descendants.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

/// Trimmed text of `node`, or `None` when it has none.
pub(crate) fn non_empty_text(node: Node<'_, '_>) -> Option<String> {
    let text = text_content(node);
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed, non-empty attribute value.
pub(crate) fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
