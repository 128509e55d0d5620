//! Lifecycle Registry and Dispatcher
//!
//! Owns the tag descriptor table, validates definitions, and fires the
//! right callbacks in the right order when elements are created, attached,
//! detached, or have attributes mutated.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lattice_dom::DocumentTree;

use crate::error::DefineError;
use crate::name;
use crate::prototypes::PrototypeCache;

/// Connected/disconnected lifecycle callback: `(tree, element)`.
pub type LifecycleFn<D> = Box<dyn Fn(&mut D, <D as DocumentTree>::Handle)>;

/// Attribute-changed callback: `(tree, element, name, old_value, new_value)`.
/// `old_value` is `None` when the attribute was previously absent,
/// `new_value` is `None` on removal.
pub type AttributeChangedFn<D> =
    Box<dyn Fn(&mut D, <D as DocumentTree>::Handle, &str, Option<&str>, Option<&str>)>;

/// Registered configuration of one custom element kind.
///
/// Immutable once registered. Handed out behind [`Rc`] so lookups stay
/// valid while callbacks reentrantly extend the registry.
pub struct TagDescriptor<D: DocumentTree> {
    extends: Option<String>,
    observed_attributes: Vec<String>,
    attribute_changed: Option<AttributeChangedFn<D>>,
    connected: Option<LifecycleFn<D>>,
    disconnected: Option<LifecycleFn<D>>,
}

impl<D: DocumentTree> TagDescriptor<D> {
    /// Native tag this kind extends, if it is a type extension.
    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    /// Observed attribute names, in registration order.
    pub fn observed_attributes(&self) -> &[String] {
        &self.observed_attributes
    }

    /// Whether mutations of `name` trigger notifications.
    pub fn observes(&self, name: &str) -> bool {
        self.observed_attributes.iter().any(|a| a == name)
    }

    /// Manually notify about an attribute change applied through a channel
    /// the dispatcher does not intercept (frameworks that mutate the tree
    /// on their own). Never touches attribute storage; the caller is
    /// responsible for the mutation already having happened. No-op unless
    /// `name` is observed.
    pub fn notify_attribute_change(
        &self,
        tree: &mut D,
        element: D::Handle,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) {
        if !self.observes(name) {
            return;
        }
        if let Some(callback) = &self.attribute_changed {
            callback(tree, element, name, old_value, new_value);
        }
    }
}

/// Configuration accepted by [`CustomElements::define`].
pub struct DefineOptions<D: DocumentTree> {
    /// Native tag to extend; `None` defines an autonomous element.
    pub extends: Option<String>,
    /// Attributes to observe. Ignored unless `attribute_changed` is also
    /// set: there is no value in tracking attributes nobody consumes.
    pub observed_attributes: Vec<String>,
    pub attribute_changed: Option<AttributeChangedFn<D>>,
    pub connected: Option<LifecycleFn<D>>,
    pub disconnected: Option<LifecycleFn<D>>,
}

impl<D: DocumentTree> Default for DefineOptions<D> {
    fn default() -> Self {
        Self {
            extends: None,
            observed_attributes: Vec::new(),
            attribute_changed: None,
            connected: None,
            disconnected: None,
        }
    }
}

/// The tag registry and lifecycle dispatcher.
///
/// One instance per document universe, constructed once and passed by
/// reference to all callers. Dispatch takes `&self`: the descriptor table
/// sits behind a [`RefCell`] and no borrow is held across a callback
/// invocation, so callbacks may reenter the registry (define new kinds,
/// create elements, mutate attributes) and observe a consistent table.
pub struct CustomElements<D: DocumentTree> {
    prototypes: PrototypeCache<D>,
    descriptors: RefCell<HashMap<String, Rc<TagDescriptor<D>>>>,
    selector: RefCell<String>,
}

impl<D: DocumentTree> CustomElements<D> {
    pub fn new() -> Self {
        Self {
            prototypes: PrototypeCache::new(),
            descriptors: RefCell::new(HashMap::new()),
            selector: RefCell::new(String::new()),
        }
    }

    /// The prototype resolver, exposed for manual seeding.
    pub fn prototypes(&self) -> &PrototypeCache<D> {
        &self.prototypes
    }

    /// The combined query expression matching every registered kind:
    /// bare tag names for autonomous elements, `[is="tag"]` selectors for
    /// extensions, comma-joined in registration order.
    pub fn selector(&self) -> String {
        self.selector.borrow().clone()
    }

    /// Whether a tag name is registered.
    pub fn is_defined(&self, tag_name: &str) -> bool {
        self.descriptors
            .borrow()
            .contains_key(&tag_name.to_uppercase())
    }

    /// Define a new custom element kind.
    ///
    /// Fails on a malformed name, a duplicate registration, or an extension
    /// target that is hyphenated or resolves to the unknown-element
    /// fallback (such elements have no fixed behavioral contract to
    /// extend). Tree failures while probing the target propagate verbatim.
    pub fn define(
        &self,
        tree: &mut D,
        tag_name: &str,
        options: DefineOptions<D>,
    ) -> Result<(), DefineError<D::Error>> {
        if !name::is_valid_custom_name(tag_name) {
            return Err(DefineError::InvalidName(tag_name.to_owned()));
        }
        let key = tag_name.to_uppercase();
        if self.descriptors.borrow().contains_key(&key) {
            return Err(DefineError::AlreadyDefined(tag_name.to_owned()));
        }

        if let Some(extends) = options.extends.as_deref() {
            if !name::is_probably_native_tag(extends) {
                return Err(DefineError::ExtensionNotNative(extends.to_owned()));
            }
            let prototype = self
                .prototypes
                .resolve(tree, extends)
                .map_err(DefineError::Tree)?;
            if prototype == tree.unknown_prototype() {
                return Err(DefineError::ExtensionUnknown(extends.to_owned()));
            }
        }

        let mut observed_attributes = Vec::new();
        if options.attribute_changed.is_some() {
            for attribute in options.observed_attributes {
                if !observed_attributes.contains(&attribute) {
                    observed_attributes.push(attribute);
                }
            }
        }

        let descriptor = TagDescriptor {
            extends: options.extends,
            observed_attributes,
            attribute_changed: options.attribute_changed,
            connected: options.connected,
            disconnected: options.disconnected,
        };

        let part = match descriptor.extends.as_deref() {
            Some(_) => format!("[is=\"{tag_name}\"]"),
            None => tag_name.to_owned(),
        };
        {
            let mut selector = self.selector.borrow_mut();
            if !selector.is_empty() {
                selector.push(',');
            }
            selector.push_str(&part);
        }
        self.descriptors.borrow_mut().insert(key, Rc::new(descriptor));
        tracing::debug!("defined custom element {}", tag_name);
        Ok(())
    }

    /// Create an element. Registration is not required; the call delegates
    /// to the tree unconditionally and its failures propagate verbatim.
    pub fn create(&self, tree: &mut D, tag_name: &str) -> Result<D::Handle, D::Error> {
        tree.create_element(tag_name)
    }

    /// Create an element and apply initial attributes in slice order
    /// through the raw setter. Bulk initialization is exempt from
    /// notification, matching native parsing semantics where initial
    /// attributes don't fire synthetic change events before connection.
    pub fn create_with_attributes(
        &self,
        tree: &mut D,
        tag_name: &str,
        attributes: &[(&str, &str)],
    ) -> Result<D::Handle, D::Error> {
        let element = tree.create_element(tag_name)?;
        for (attribute, value) in attributes {
            tree.set_attribute(element, attribute, value);
        }
        Ok(element)
    }

    /// Descriptor for an element, by uppercased tag name or, failing that,
    /// by the uppercased value of its `is` attribute (type-extension
    /// dispatch). Pure lookup: repeated calls return the identical
    /// descriptor.
    pub fn descriptor_for(&self, tree: &D, element: D::Handle) -> Option<Rc<TagDescriptor<D>>> {
        let descriptors = self.descriptors.borrow();
        if let Some(descriptor) = descriptors.get(&tree.tag_name(element)) {
            return Some(Rc::clone(descriptor));
        }
        let is = tree.get_attribute(element, "is")?;
        descriptors.get(&is.to_uppercase()).map(Rc::clone)
    }

    /// Proxy for the raw attribute setter that fires observed-attribute
    /// notifications. The write is skipped entirely when the element is
    /// detached from the document.
    pub fn set_attribute(&self, tree: &mut D, element: D::Handle, name: &str, value: &str) {
        if is_detached(tree, element) {
            return;
        }
        if let Some(descriptor) = self.descriptor_for(tree, element) {
            if descriptor.observes(name) {
                if let Some(callback) = &descriptor.attribute_changed {
                    let old_value = tree.get_attribute(element, name);
                    tree.set_attribute(element, name, value);
                    callback(tree, element, name, old_value.as_deref(), Some(value));
                    return;
                }
            }
        }
        tree.set_attribute(element, name, value);
    }

    /// Proxy for the raw attribute removal that fires observed-attribute
    /// notifications with a `None` new value. Skipped entirely when the
    /// element is detached.
    pub fn remove_attribute(&self, tree: &mut D, element: D::Handle, name: &str) {
        if is_detached(tree, element) {
            return;
        }
        if let Some(descriptor) = self.descriptor_for(tree, element) {
            if descriptor.observes(name) {
                if let Some(callback) = &descriptor.attribute_changed {
                    let old_value = tree.get_attribute(element, name);
                    tree.remove_attribute(element, name);
                    callback(tree, element, name, old_value.as_deref(), None);
                    return;
                }
            }
        }
        tree.remove_attribute(element, name);
    }

    /// Raw attribute read, present for interface completeness.
    pub fn get_attribute(&self, tree: &D, element: D::Handle, name: &str) -> Option<String> {
        tree.get_attribute(element, name)
    }

    /// Raw attribute presence check, present for interface completeness.
    pub fn has_attribute(&self, tree: &D, element: D::Handle, name: &str) -> bool {
        tree.has_attribute(element, name)
    }

    /// Simulate "this subtree just became part of the document": notify
    /// `root` itself, then every matching descendant in document order.
    /// No-op when `root` is detached.
    ///
    /// There is no guard against connecting the same subtree twice; the
    /// callbacks fire again.
    pub fn connect(&self, tree: &mut D, root: D::Handle) {
        if is_detached(tree, root) {
            return;
        }
        tracing::trace!("connecting subtree at {:?}", root);
        self.force_connect_node(tree, root);
        self.force_connect_children(tree, root);
    }

    /// Proxy for the raw append that notifies about nodes connected to the
    /// document.
    pub fn append_child(&self, tree: &mut D, parent: D::Handle, child: D::Handle) {
        tree.append_child(parent, child);
        self.connect(tree, child);
    }

    /// Proxy for the raw insertion that notifies about nodes connected to
    /// the document.
    pub fn insert_before(
        &self,
        tree: &mut D,
        parent: D::Handle,
        child: D::Handle,
        reference: Option<D::Handle>,
    ) {
        tree.insert_before(parent, child, reference);
        self.connect(tree, child);
    }

    /// Remove the element from its parent, if any, and notify the element
    /// and its matching descendants. A subtree that was already detached
    /// before removal was never connected from the registry's perspective,
    /// so no callbacks fire for it.
    pub fn remove(&self, tree: &mut D, element: D::Handle) {
        let Some(parent) = tree.parent_node(element) else {
            return;
        };
        let was_detached = is_detached(tree, element);
        tree.remove_child(parent, element);
        if was_detached {
            return;
        }
        tracing::trace!("disconnecting subtree at {:?}", element);
        self.force_disconnect_node(tree, element);
        self.force_disconnect_children(tree, element);
    }

    /// Manually notify one element it was inserted into the document: for
    /// each observed attribute currently present, fire the
    /// attribute-changed callback with a `None` old value (the "initial
    /// value observed" notification of a fresh upgrade), in observed
    /// registration order, then the connected callback.
    pub fn force_connect_node(&self, tree: &mut D, element: D::Handle) {
        let Some(descriptor) = self.descriptor_for(tree, element) else {
            return;
        };
        if let Some(callback) = &descriptor.attribute_changed {
            for attribute in &descriptor.observed_attributes {
                if let Some(value) = tree.get_attribute(element, attribute) {
                    callback(tree, element, attribute, None, Some(value.as_str()));
                }
            }
        }
        if let Some(callback) = &descriptor.connected {
            callback(tree, element);
        }
    }

    /// Manually notify every matching descendant of `root` it was inserted
    /// into the document, in document order.
    pub fn force_connect_children(&self, tree: &mut D, root: D::Handle) {
        for element in self.query_registered(tree, root) {
            self.force_connect_node(tree, element);
        }
    }

    /// Manually notify one element it was removed from the document. No
    /// attribute-changed synthesis happens on disconnect.
    pub fn force_disconnect_node(&self, tree: &mut D, element: D::Handle) {
        let Some(descriptor) = self.descriptor_for(tree, element) else {
            return;
        };
        if let Some(callback) = &descriptor.disconnected {
            callback(tree, element);
        }
    }

    /// Manually notify every matching descendant of `root` it was removed
    /// from the document, in document order.
    pub fn force_disconnect_children(&self, tree: &mut D, root: D::Handle) {
        for element in self.query_registered(tree, root) {
            self.force_disconnect_node(tree, element);
        }
    }

    /// Snapshot of the matching descendants. The selector is cloned and
    /// the result collected up front so reentrant definitions cannot
    /// extend an in-flight traversal.
    fn query_registered(&self, tree: &D, root: D::Handle) -> Vec<D::Handle> {
        let selector = self.selector.borrow().clone();
        if selector.is_empty() {
            return Vec::new();
        }
        tree.query_selector_all(root, &selector)
    }
}

impl<D: DocumentTree> Default for CustomElements<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure attachment query: walk the parent chain toward the document
/// sentinel. Recomputed on every call and never cached, since tree
/// mutations can change the answer at any time.
fn is_detached<D: DocumentTree>(tree: &D, node: D::Handle) -> bool {
    let mut current = tree.parent_node(node);
    while let Some(ancestor) = current {
        if tree.is_document(ancestor) {
            return false;
        }
        current = tree.parent_node(ancestor);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_dom::{ArenaDocument, DocumentTree};

    #[test]
    fn test_selector_accretion() {
        let mut doc = ArenaDocument::new();
        let registry = CustomElements::new();

        registry.define(&mut doc, "a-a", DefineOptions::default()).unwrap();
        assert_eq!(registry.selector(), "a-a");

        registry
            .define(
                &mut doc,
                "b-b",
                DefineOptions {
                    extends: Some("button".to_owned()),
                    ..DefineOptions::default()
                },
            )
            .unwrap();
        assert_eq!(registry.selector(), "a-a,[is=\"b-b\"]");

        registry.define(&mut doc, "c-c", DefineOptions::default()).unwrap();
        assert_eq!(registry.selector(), "a-a,[is=\"b-b\"],c-c");
    }

    #[test]
    fn test_is_defined_ignores_case() {
        let mut doc = ArenaDocument::new();
        let registry = CustomElements::new();

        registry.define(&mut doc, "x-item", DefineOptions::default()).unwrap();
        assert!(registry.is_defined("x-item"));
        assert!(registry.is_defined("X-ITEM"));
        assert!(!registry.is_defined("x-other"));
    }

    #[test]
    fn test_detachment_walks_to_sentinel() {
        let mut doc = ArenaDocument::new();
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("span").unwrap();
        doc.append_child(outer, inner);

        assert!(is_detached(&doc, inner));
        doc.append_child(doc.document(), outer);
        assert!(!is_detached(&doc, inner));
    }
}
