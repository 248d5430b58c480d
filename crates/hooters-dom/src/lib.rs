//! Hooters DOM - host tree surface
//!
//! Arena-backed DOM tree with the small query, style, geometry and event
//! surface a scroll-driven widget needs.

mod classlist;
mod document;
mod element;
mod geometry;
mod node;
mod operations;
mod style;
mod tree;
mod window;

pub use classlist::DOMTokenList;
pub use document::Document;
pub use element::{CompoundSelector, SimpleSelector};
pub use geometry::DOMRect;
pub use node::{ElementData, Node, NodeData};
pub use operations::{swap_nodes, DomError, DomResult, NodeOperations};
pub use style::InlineStyle;
pub use tree::DomTree;
pub use window::{DomEvent, EventType, ListenerId, Window};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert the sentinel into an `Option`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }
}
