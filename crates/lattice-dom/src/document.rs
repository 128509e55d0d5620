//! Reference Document Tree
//!
//! Arena-backed document used to exercise the lifecycle shim in tests and
//! demos. Node 0 is the document sentinel; elements created through
//! [`create_element`](DocumentTree::create_element) start out detached and
//! become part of the document once linked under the sentinel.

use crate::node::{Node, NodeData};
use crate::selector::SelectorList;
use crate::tree::DocumentTree;
use crate::{interfaces, ElementInterface, NodeId};

/// Errors raised by the reference tree itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The tag name is not creatable
    #[error("cannot create an element with tag name {0:?}")]
    InvalidTagName(String),
}

/// Arena-based document tree.
#[derive(Debug)]
pub struct ArenaDocument {
    nodes: Vec<Node>,
}

impl ArenaDocument {
    /// Create a document containing only the sentinel node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document sentinel.
    pub fn document(&self) -> NodeId {
        NodeId::DOCUMENT
    }

    /// Number of nodes in the arena, including the sentinel.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_owned()))
    }

    /// Child IDs of a node, in order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut next = self.get(id).and_then(|node| node.first_child);
        while let Some(child) = next {
            out.push(child);
            next = self.get(child).and_then(|node| node.next_sibling);
        }
        out
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    /// Unlink a node from its parent and siblings.
    fn detach(&mut self, child: NodeId) {
        let (parent, prev, next) = {
            let node = self.node(child);
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        let Some(parent) = parent else { return };

        match prev {
            Some(prev_id) => self.node_mut(prev_id).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(next_id) => self.node_mut(next_id).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }

        let node = self.node_mut(child);
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    fn link_last(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        match self.node(parent).last_child {
            Some(last) => {
                self.node_mut(last).next_sibling = Some(child);
                self.node_mut(child).prev_sibling = Some(last);
            }
            None => self.node_mut(parent).first_child = Some(child),
        }
        self.node_mut(parent).last_child = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    fn link_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        // A reference that is not a child of `parent` degrades to an append
        if child == reference || self.node(reference).parent != Some(parent) {
            self.link_last(parent, child);
            return;
        }
        self.detach(child);
        match self.node(reference).prev_sibling {
            Some(prev) => {
                self.node_mut(prev).next_sibling = Some(child);
                self.node_mut(child).prev_sibling = Some(prev);
            }
            None => self.node_mut(parent).first_child = Some(child),
        }
        self.node_mut(child).next_sibling = Some(reference);
        self.node_mut(reference).prev_sibling = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Pre-order descendant collection, excluding `root`.
    fn collect_descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        let mut next = self.get(root).and_then(|node| node.first_child);
        while let Some(child) = next {
            out.push(child);
            self.collect_descendants(child, out);
            next = self.get(child).and_then(|node| node.next_sibling);
        }
    }
}

impl Default for ArenaDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_tag_name(tag_name: &str) -> bool {
    let mut chars = tag_name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    chars.all(|c| {
        !c.is_whitespace() && !c.is_control() && !matches!(c, '<' | '>' | '/' | '=' | '"' | '\'')
    })
}

impl DocumentTree for ArenaDocument {
    type Handle = NodeId;
    type Prototype = ElementInterface;
    type Error = TreeError;

    fn create_element(&mut self, tag_name: &str) -> Result<NodeId, TreeError> {
        if !is_valid_tag_name(tag_name) {
            return Err(TreeError::InvalidTagName(tag_name.to_owned()));
        }
        Ok(self.alloc(Node::element(tag_name.to_lowercase())))
    }

    fn tag_name(&self, element: NodeId) -> String {
        self.get(element)
            .and_then(Node::as_element)
            .map(|data| data.tag_name.to_uppercase())
            .unwrap_or_default()
    }

    fn parent_node(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    fn is_document(&self, node: NodeId) -> bool {
        node == NodeId::DOCUMENT
    }

    fn get_attribute(&self, element: NodeId, name: &str) -> Option<String> {
        self.get(element)
            .and_then(Node::as_element)
            .and_then(|data| data.get_attribute(name))
            .map(str::to_owned)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let Some(data) = self
            .nodes
            .get_mut(element.0 as usize)
            .and_then(Node::as_element_mut)
        {
            data.set_attribute(name, value);
        }
    }

    fn has_attribute(&self, element: NodeId, name: &str) -> bool {
        self.get(element)
            .and_then(Node::as_element)
            .is_some_and(|data| data.has_attribute(name))
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) {
        if let Some(data) = self
            .nodes
            .get_mut(element.0 as usize)
            .and_then(Node::as_element_mut)
        {
            data.remove_attribute(name);
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.link_last(parent, child);
    }

    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        match reference {
            Some(reference) if self.get(reference).is_some() => {
                self.link_before(parent, child, reference)
            }
            _ => self.link_last(parent, child),
        }
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.parent_node(child) == Some(parent) {
            self.detach(child);
        }
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let list = SelectorList::parse(selector);
        if list.is_empty() {
            return Vec::new();
        }
        let mut descendants = Vec::new();
        self.collect_descendants(root, &mut descendants);
        descendants
            .into_iter()
            .filter(|&id| match self.get(id).map(|node| &node.data) {
                Some(NodeData::Element(data)) => {
                    list.matches(&data.tag_name, data.get_attribute("is"))
                }
                _ => false,
            })
            .collect()
    }

    fn prototype_of(&self, element: NodeId) -> ElementInterface {
        self.get(element)
            .and_then(Node::as_element)
            .map(|data| interfaces::interface_for_tag(&data.tag_name))
            .unwrap_or(ElementInterface::Unknown)
    }

    fn unknown_prototype(&self) -> ElementInterface {
        ElementInterface::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element_validates_tag() {
        let mut doc = ArenaDocument::new();
        assert!(doc.create_element("div").is_ok());
        assert!(doc.create_element("x-widget").is_ok());
        assert!(matches!(
            doc.create_element(""),
            Err(TreeError::InvalidTagName(_))
        ));
        assert!(matches!(
            doc.create_element("1bad"),
            Err(TreeError::InvalidTagName(_))
        ));
        assert!(matches!(
            doc.create_element("no spaces"),
            Err(TreeError::InvalidTagName(_))
        ));
    }

    #[test]
    fn test_tag_name_is_uppercased() {
        let mut doc = ArenaDocument::new();
        let el = doc.create_element("Button").unwrap();
        assert_eq!(doc.tag_name(el), "BUTTON");
    }

    #[test]
    fn test_insert_before_reference() {
        let mut doc = ArenaDocument::new();
        let parent = doc.create_element("div").unwrap();
        let a = doc.create_element("a").unwrap();
        let b = doc.create_element("b").unwrap();
        doc.append_child(parent, b);
        doc.insert_before(parent, a, Some(b));

        assert_eq!(doc.children(parent), vec![a, b]);
    }

    #[test]
    fn test_append_moves_between_parents() {
        let mut doc = ArenaDocument::new();
        let first = doc.create_element("div").unwrap();
        let second = doc.create_element("div").unwrap();
        let child = doc.create_element("span").unwrap();

        doc.append_child(first, child);
        doc.append_child(second, child);

        assert!(doc.children(first).is_empty());
        assert_eq!(doc.children(second), vec![child]);
        assert_eq!(doc.parent_node(child), Some(second));
    }

    #[test]
    fn test_query_over_detached_subtree() {
        let mut doc = ArenaDocument::new();
        let root = doc.create_element("div").unwrap();
        let custom = doc.create_element("x-item").unwrap();
        doc.append_child(root, custom);

        assert_eq!(doc.query_selector_all(root, "x-item"), vec![custom]);
    }
}
