//! Arena Nodes
//!
//! Link-field node storage for the reference tree: parent, child, and
//! sibling links by [`NodeId`] instead of pointers.

use crate::NodeId;

/// A single node in the arena.
#[derive(Debug)]
pub struct Node {
    /// Parent node (`None` for the document and detached roots)
    pub parent: Option<NodeId>,
    /// First child
    pub first_child: Option<NodeId>,
    /// Last child (for O(1) append)
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: String) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag_name)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create the document sentinel node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    fn with_data(data: NodeData) -> Self {
        Self {
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(content) => Some(content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document sentinel
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name, stored lowercase
    pub tag_name: String,
    /// Attributes in insertion order
    pub attributes: Vec<Attribute>,
}

impl ElementData {
    pub fn new(tag_name: String) -> Self {
        Self {
            tag_name,
            attributes: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Set an attribute, overwriting in place when it already exists
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        for attribute in &mut self.attributes {
            if attribute.name == name {
                attribute.value = value.to_owned();
                return;
            }
        }
        self.attributes.push(Attribute {
            name: name.to_owned(),
            value: value.to_owned(),
        });
    }

    /// Check if an attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|attribute| attribute.name == name)
    }

    /// Remove an attribute, returning whether it was present
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|attribute| attribute.name != name);
        self.attributes.len() != before
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut element = ElementData::new("div".to_owned());
        element.set_attribute("class", "btn");
        element.set_attribute("id", "submit");

        assert_eq!(element.get_attribute("class"), Some("btn"));
        assert_eq!(element.get_attribute("id"), Some("submit"));
        assert_eq!(element.attributes.len(), 2);
    }

    #[test]
    fn test_set_attribute_overwrites_in_place() {
        let mut element = ElementData::new("div".to_owned());
        element.set_attribute("class", "a");
        element.set_attribute("title", "t");
        element.set_attribute("class", "b");

        assert_eq!(element.get_attribute("class"), Some("b"));
        // Overwrite keeps the insertion position
        assert_eq!(element.attributes[0].name, "class");
    }

    #[test]
    fn test_remove_attribute() {
        let mut element = ElementData::new("div".to_owned());
        element.set_attribute("foo", "bar");

        assert!(element.has_attribute("foo"));
        assert!(element.remove_attribute("foo"));
        assert!(!element.has_attribute("foo"));
        assert!(!element.remove_attribute("foo"));
    }
}
