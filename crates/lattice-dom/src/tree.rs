//! Tree Collaborator Contract
//!
//! The operations the lifecycle shim requires from an underlying tree
//! engine. Elements are identified by cheap copyable handles owned by the
//! tree; the shim only borrows them for the duration of each call.

use std::fmt::Debug;

/// A DOM-like tree the lifecycle shim can dispatch against.
///
/// The selector strings passed to [`query_selector_all`] are comma-separated
/// lists of bare tag names and `[is="value"]` attribute selectors; matching
/// descendants must be returned in document order. This grammar is part of
/// the observable contract, see [`SelectorList`](crate::SelectorList).
///
/// [`query_selector_all`]: DocumentTree::query_selector_all
pub trait DocumentTree {
    /// Element identity. Copyable so callbacks can receive it by value.
    type Handle: Copy + Eq + Debug;

    /// Interface identity reported for native elements. Only equality is
    /// required: the shim compares resolved prototypes against
    /// [`unknown_prototype`](DocumentTree::unknown_prototype).
    type Prototype: Clone + PartialEq;

    /// The tree's own failure type. The shim propagates it verbatim.
    type Error: std::error::Error;

    /// Create a detached element for the given tag name.
    fn create_element(&mut self, tag_name: &str) -> Result<Self::Handle, Self::Error>;

    /// Uppercased tag name of an element.
    fn tag_name(&self, element: Self::Handle) -> String;

    /// Parent of a node, if any.
    fn parent_node(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Whether the node is the document sentinel.
    fn is_document(&self, node: Self::Handle) -> bool;

    /// Attribute value, or `None` when absent.
    fn get_attribute(&self, element: Self::Handle, name: &str) -> Option<String>;

    /// Raw attribute write. Fires no notifications.
    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str);

    fn has_attribute(&self, element: Self::Handle, name: &str) -> bool;

    /// Raw attribute removal. Fires no notifications.
    fn remove_attribute(&mut self, element: Self::Handle, name: &str);

    /// Append `child` as the last child of `parent`, detaching it from its
    /// previous parent first.
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);

    /// Insert `child` into `parent` before `reference`; appends when
    /// `reference` is `None`.
    fn insert_before(
        &mut self,
        parent: Self::Handle,
        child: Self::Handle,
        reference: Option<Self::Handle>,
    );

    /// Detach `child` from `parent`. Ignored when `child` is not a child of
    /// `parent`.
    fn remove_child(&mut self, parent: Self::Handle, child: Self::Handle);

    /// Descendants of `root` (excluding `root` itself) matching `selector`,
    /// in document order.
    fn query_selector_all(&self, root: Self::Handle, selector: &str) -> Vec<Self::Handle>;

    /// Interface prototype of an element.
    fn prototype_of(&self, element: Self::Handle) -> Self::Prototype;

    /// The fallback prototype assigned to unrecognized tag names.
    fn unknown_prototype(&self) -> Self::Prototype;
}
