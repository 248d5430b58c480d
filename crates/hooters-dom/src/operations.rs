//! DOM Node Operations
//!
//! The minimal parent/sibling/insert surface and the two-node exchange built
//! on top of it.

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("Node not found")]
    NotFound,
    /// Hierarchy error (e.g., inserting ancestor)
    #[error("Hierarchy request error")]
    HierarchyRequest,
    /// Invalid node type
    #[error("Invalid node type")]
    InvalidNodeType,
    /// Node is not a child
    #[error("Node is not a child")]
    NotAChild,
    /// Node has no parent to be positioned in
    #[error("Node is detached")]
    Detached,
}

/// Node operations trait
///
/// Any tree that can report a node's parent and next sibling and can move a
/// node in front of a reference child supports `swap_nodes`.
pub trait NodeOperations {
    type Handle: Copy + Eq;

    /// Parent of `node`, if attached
    fn parent_node(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Following sibling of `node`
    fn next_sibling(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Move `new_child` under `parent`, before `ref_child` (or last when `None`)
    fn insert_before(
        &mut self,
        parent: Self::Handle,
        new_child: Self::Handle,
        ref_child: Option<Self::Handle>,
    ) -> DomResult<Self::Handle>;
}

/// Exchange the tree positions of `a` and `b`.
///
/// Works for siblings in either order and for nodes under different parents.
/// Applying it twice restores the original positions.
pub fn swap_nodes<T>(tree: &mut T, a: T::Handle, b: T::Handle) -> DomResult<()>
where
    T: NodeOperations + ?Sized,
{
    if a == b {
        return Ok(());
    }

    let a_parent = tree.parent_node(a).ok_or(DomError::Detached)?;
    let b_parent = tree.parent_node(b).ok_or(DomError::Detached)?;

    // When b directly follows a, a itself marks the slot b must take.
    let a_slot = match tree.next_sibling(a) {
        Some(next) if next == b => Some(a),
        next => next,
    };

    tree.insert_before(b_parent, a, Some(b))?;
    tree.insert_before(a_parent, b, a_slot)?;
    Ok(())
}
