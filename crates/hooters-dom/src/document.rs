//! Document - tree plus window

use crate::{DOMRect, DomTree, NodeId, Window};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// The browsing window
    pub window: Window,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with `<html><body>` and the given viewport size
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let body = tree.create_element("body");

        // Fresh detached nodes under the document root cannot fail to attach.
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            window: Window::new(viewport_width, viewport_height),
            html_element: html,
            body_element: body,
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Viewport-relative box of a node (`getBoundingClientRect`).
    ///
    /// Hidden nodes report an empty rect at the origin. Fixed-position nodes
    /// keep their layout box; everything else moves with the scroll offset.
    pub fn bounding_client_rect(&self, id: NodeId) -> Option<DOMRect> {
        self.tree.get(id)?;
        if self.tree.is_hidden(id) {
            return Some(DOMRect::new());
        }

        let rect = self.tree.layout_box(id).unwrap_or_default();
        if self.tree.is_fixed(id) {
            Some(rect)
        } else {
            Some(rect.translated(0.0, -self.window.scroll_y))
        }
    }

    /// Rendered width of a node (jQuery `.width()`); 0 when unknown
    pub fn width(&self, id: NodeId) -> f64 {
        self.bounding_client_rect(id).map_or(0.0, |r| r.width)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}
