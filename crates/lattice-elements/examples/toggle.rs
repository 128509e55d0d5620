//! Example: Driving the lifecycle shim against the reference tree

use lattice_dom::{ArenaDocument, DocumentTree};
use lattice_elements::{CustomElements, DefineOptions};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut doc = ArenaDocument::new();
    let registry = CustomElements::new();

    registry
        .define(
            &mut doc,
            "x-toggle",
            DefineOptions {
                observed_attributes: vec!["state".to_owned()],
                attribute_changed: Some(Box::new(|_tree, element, name, old, new| {
                    println!("{element:?}: {name} changed {old:?} -> {new:?}");
                })),
                connected: Some(Box::new(|tree, element| {
                    println!("{element:?} connected as <{}>", tree.tag_name(element));
                })),
                disconnected: Some(Box::new(|_tree, element| {
                    println!("{element:?} disconnected");
                })),
                ..DefineOptions::default()
            },
        )
        .expect("x-toggle should be definable");

    let body = doc.create_element("body").expect("body is a valid tag");
    let document = doc.document();
    doc.append_child(document, body);

    // Bulk-created attributes fire no notifications; the initial value is
    // observed when the element connects.
    let toggle = registry
        .create_with_attributes(&mut doc, "x-toggle", &[("state", "off")])
        .expect("x-toggle is creatable");
    registry.append_child(&mut doc, body, toggle);

    registry.set_attribute(&mut doc, toggle, "state", "on");
    registry.remove_attribute(&mut doc, toggle, "state");
    registry.remove(&mut doc, toggle);
}
