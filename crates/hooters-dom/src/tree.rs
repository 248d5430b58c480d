//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed; detached subtrees simply stop being reachable from
//! the root.

use crate::element::CompoundSelector;
use crate::{
    DOMRect, DOMTokenList, DomError, DomResult, InlineStyle, Node, NodeData, NodeId,
    NodeOperations,
};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound)
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound)
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling.to_option())
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling.to_option())
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.first_child.to_option())
    }

    /// Direct children in order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.first_child(id), move |&c| self.next_sibling(c))
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Descendants in document order, excluding `scope`
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).collect();
        stack.reverse();

        while let Some(id) = stack.pop() {
            out.push(id);
            let start = stack.len();
            stack.extend(self.children(id));
            stack[start..].reverse();
        }
        out
    }

    /// Check whether `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Unlink a node from its parent (no-op when already detached)
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let node = self.node(id)?;
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = next;
        } else {
            self.node_mut(parent)?.first_child = next;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = prev;
        } else {
            self.node_mut(parent)?.last_child = prev;
        }

        let node = self.node_mut(id)?;
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_child(parent, child, None)
    }

    /// Insert `new_node` directly after `node` in `node`'s parent
    pub fn insert_after(&mut self, node: NodeId, new_node: NodeId) -> DomResult<NodeId> {
        let parent = self.parent(node).ok_or(DomError::Detached)?;
        let next = self.next_sibling(node);
        if next == Some(new_node) {
            return Ok(new_node);
        }
        self.insert_child(parent, new_node, next)
    }

    /// Insert `new_node` directly before `node` in `node`'s parent
    pub fn insert_adjacent_before(&mut self, node: NodeId, new_node: NodeId) -> DomResult<NodeId> {
        let parent = self.parent(node).ok_or(DomError::Detached)?;
        self.insert_child(parent, new_node, Some(node))
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.node(child)?;
        if !matches!(self.node(parent)?.data, NodeData::Document | NodeData::Element(_)) {
            return Err(DomError::InvalidNodeType);
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }

        // Inserting a node before itself means "keep its slot".
        let reference = match reference {
            Some(r) if r == child => self.next_sibling(child),
            other => other,
        };
        if let Some(r) = reference {
            if self.parent(r) != Some(parent) {
                return Err(DomError::NotAChild);
            }
        }

        self.detach(child)?;

        let (prev, next) = match reference {
            Some(r) => (self.node(r)?.prev_sibling, r),
            None => (self.node(parent)?.last_child, NodeId::NONE),
        };

        {
            let node = self.node_mut(child)?;
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = child;
        } else {
            self.node_mut(parent)?.first_child = child;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = child;
        } else {
            self.node_mut(parent)?.last_child = child;
        }

        Ok(child)
    }

    /// Put `wrapper` in `node`'s slot and move `node` inside it
    pub fn wrap(&mut self, node: NodeId, wrapper: NodeId) -> DomResult<NodeId> {
        if self.parent(node).is_some() {
            self.insert_adjacent_before(node, wrapper)?;
        }
        self.append_child(wrapper, node)?;
        Ok(wrapper)
    }

    /// Clone a node. Tag, attributes, inline style and layout box are copied;
    /// with `deep` the whole subtree is copied as well. The copy is detached.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> DomResult<NodeId> {
        let copy = self.node(id)?.detached_copy();
        let clone = self.push(copy);

        if deep {
            let children: Vec<NodeId> = self.children(id).collect();
            for child in children {
                let child_clone = self.clone_node(child, true)?;
                self.append_child(clone, child_clone)?;
            }
        }
        Ok(clone)
    }

    // ------------------------------------------------------------------
    // Element data
    // ------------------------------------------------------------------

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .set_attr(name, value);
        Ok(())
    }

    /// Parsed `class` attribute
    pub fn class_list(&self, id: NodeId) -> DOMTokenList {
        DOMTokenList::from_string(self.get_attribute(id, "class").unwrap_or(""))
    }

    /// Add class tokens, keeping existing ones
    pub fn add_class(&mut self, id: NodeId, classes: &[&str]) -> DomResult<()> {
        let mut list = self.class_list(id);
        list.add(classes);
        self.set_attribute(id, "class", &list.to_string())
    }

    pub fn style(&self, id: NodeId) -> Option<&InlineStyle> {
        self.get(id)?.as_element().map(|e| &e.style)
    }

    pub fn style_mut(&mut self, id: NodeId) -> DomResult<&mut InlineStyle> {
        self.node_mut(id)?
            .as_element_mut()
            .map(|e| &mut e.style)
            .ok_or(DomError::InvalidNodeType)
    }

    /// Set one inline style property
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) -> DomResult<()> {
        self.style_mut(id)?.set(property, value);
        Ok(())
    }

    /// Concatenated text of the subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            out.push_str(text);
        }
        for d in self.descendants(id) {
            if let Some(text) = self.get(d).and_then(Node::as_text) {
                out.push_str(text);
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Check if element matches selector
    pub fn matches(&self, id: NodeId, selector: &str) -> bool {
        let Some(elem) = self.get(id).and_then(Node::as_element) else {
            return false;
        };
        CompoundSelector::parse(selector).is_some_and(|s| s.matches(elem))
    }

    /// First descendant of `scope` matching `selector`, in document order
    pub fn query_selector(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        let selector = CompoundSelector::parse(selector)?;
        self.descendants(scope).into_iter().find(|&id| {
            self.get(id)
                .and_then(Node::as_element)
                .is_some_and(|e| selector.matches(e))
        })
    }

    /// Nearest inclusive ancestor matching `selector`
    pub fn closest(&self, id: NodeId, selector: &str) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|&n| self.matches(n, selector))
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Assign a document-space layout box
    pub fn set_layout(&mut self, id: NodeId, rect: DOMRect) -> DomResult<()> {
        self.node_mut(id)?.layout = Some(rect);
        Ok(())
    }

    /// Whether the node or an ancestor is `display: none`
    pub fn is_hidden(&self, id: NodeId) -> bool {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .any(|n| self.style(n).is_some_and(InlineStyle::is_hidden))
    }

    /// Whether the node or an ancestor is `position: fixed`
    pub fn is_fixed(&self, id: NodeId) -> bool {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .any(|n| self.style(n).is_some_and(InlineStyle::is_fixed))
    }

    /// Document-space box: the node's own layout, otherwise the union of its
    /// children's boxes.
    pub fn layout_box(&self, id: NodeId) -> Option<DOMRect> {
        let node = self.get(id)?;
        if let Some(rect) = node.layout {
            return Some(rect);
        }
        self.children(id)
            .filter(|&c| !self.style(c).is_some_and(InlineStyle::is_hidden))
            .filter_map(|c| self.layout_box(c))
            .reduce(|acc, r| acc.union(&r))
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// HTML-ish serialization of a subtree, used for structural comparison
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        match &node.data {
            NodeData::Document => {}
            NodeData::Text(text) => {
                out.push_str(text);
                return;
            }
            NodeData::Element(elem) => {
                out.push('<');
                out.push_str(&elem.tag);
                for (name, value) in &elem.attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, value));
                }
                if !elem.style.is_empty() {
                    out.push_str(&format!(" style=\"{}\"", elem.style));
                }
                out.push('>');
            }
        }

        for child in self.children(id) {
            self.write_html(child, out);
        }

        if let Some(elem) = node.as_element() {
            out.push_str("</");
            out.push_str(&elem.tag);
            out.push('>');
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeOperations for DomTree {
    type Handle = NodeId;

    fn parent_node(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        DomTree::next_sibling(self, node)
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        ref_child: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.insert_child(parent, new_child, ref_child)
    }
}
