//! lattice DOM - Tree collaborator contract
//!
//! The [`DocumentTree`] trait describes the operations the lifecycle shim
//! needs from an underlying tree engine, and [`ArenaDocument`] is a small
//! arena-backed reference implementation used by tests and demos.

mod document;
mod interfaces;
mod node;
mod selector;
mod tree;

pub use document::{ArenaDocument, TreeError};
pub use interfaces::{interface_for_tag, ElementInterface};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::SelectorList;
pub use tree::DocumentTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document sentinel node
    pub const DOCUMENT: NodeId = NodeId(0);
}
