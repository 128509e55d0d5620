//! Comprehensive tests for lattice-dom
//!
//! Structure links, attribute handling, and selector queries on the
//! reference arena document.

use lattice_dom::{ArenaDocument, DocumentTree, ElementInterface, NodeId};

#[test]
fn test_document_sentinel() {
    let doc = ArenaDocument::new();
    assert_eq!(doc.document(), NodeId::DOCUMENT);
    assert!(doc.is_document(doc.document()));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_tree_structure_links() {
    let mut doc = ArenaDocument::new();

    let div = doc.create_element("div").unwrap();
    let span = doc.create_element("span").unwrap();
    let text = doc.create_text("Hello, World!");

    doc.append_child(doc.document(), div);
    doc.append_child(div, span);
    doc.append_child(span, text);

    assert_eq!(doc.len(), 4); // sentinel + div + span + text
    assert_eq!(doc.parent_node(div), Some(doc.document()));
    assert_eq!(doc.parent_node(span), Some(div));
    assert_eq!(doc.children(div), vec![span]);
    assert_eq!(doc.children(span), vec![text]);
}

#[test]
fn test_sibling_order() {
    let mut doc = ArenaDocument::new();

    let div = doc.create_element("div").unwrap();
    let p1 = doc.create_element("p").unwrap();
    let p2 = doc.create_element("p").unwrap();
    let p3 = doc.create_element("p").unwrap();

    doc.append_child(doc.document(), div);
    doc.append_child(div, p1);
    doc.append_child(div, p3);
    doc.insert_before(div, p2, Some(p3));

    assert_eq!(doc.children(div), vec![p1, p2, p3]);
}

#[test]
fn test_remove_child() {
    let mut doc = ArenaDocument::new();

    let div = doc.create_element("div").unwrap();
    let span = doc.create_element("span").unwrap();
    doc.append_child(doc.document(), div);
    doc.append_child(div, span);

    doc.remove_child(div, span);
    assert!(doc.children(div).is_empty());
    assert_eq!(doc.parent_node(span), None);

    // Removing a non-child is ignored
    doc.remove_child(div, span);
    assert_eq!(doc.parent_node(span), None);
}

#[test]
fn test_attribute_roundtrip() {
    let mut doc = ArenaDocument::new();
    let el = doc.create_element("input").unwrap();

    assert_eq!(doc.get_attribute(el, "type"), None);
    doc.set_attribute(el, "type", "text");
    assert!(doc.has_attribute(el, "type"));
    assert_eq!(doc.get_attribute(el, "type"), Some("text".to_owned()));

    doc.remove_attribute(el, "type");
    assert!(!doc.has_attribute(el, "type"));
}

#[test]
fn test_query_selector_all_document_order() {
    let mut doc = ArenaDocument::new();

    let root = doc.create_element("div").unwrap();
    let first = doc.create_element("x-item").unwrap();
    let wrapper = doc.create_element("section").unwrap();
    let nested = doc.create_element("x-item").unwrap();
    let extension = doc.create_element("button").unwrap();
    doc.set_attribute(extension, "is", "x-button");

    doc.append_child(doc.document(), root);
    doc.append_child(root, first);
    doc.append_child(root, wrapper);
    doc.append_child(wrapper, nested);
    doc.append_child(wrapper, extension);

    let matches = doc.query_selector_all(root, "x-item,[is=\"x-button\"]");
    assert_eq!(matches, vec![first, nested, extension]);
}

#[test]
fn test_query_excludes_root() {
    let mut doc = ArenaDocument::new();
    let root = doc.create_element("x-item").unwrap();
    doc.append_child(doc.document(), root);

    assert!(doc.query_selector_all(root, "x-item").is_empty());
}

#[test]
fn test_prototype_classification() {
    let mut doc = ArenaDocument::new();
    let button = doc.create_element("button").unwrap();
    let bogus = doc.create_element("frobnicator").unwrap();

    assert_eq!(
        doc.prototype_of(button),
        ElementInterface::Html("HTMLButtonElement")
    );
    assert_eq!(doc.prototype_of(bogus), doc.unknown_prototype());
}
