//! Geometry APIs
//!
//! DOMRect as returned by `getBoundingClientRect`.

/// DOMRect - rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    /// Create empty rect
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Check for zero area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Same rect moved by an offset
    pub fn translated(&self, dx: f64, dy: f64) -> DOMRect {
        DOMRect::from_xywh(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest rect covering both
    pub fn union(&self, other: &DOMRect) -> DOMRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        DOMRect::from_xywh(x, y, right - x, bottom - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_rect() {
        let rect = DOMRect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.left(), 10.0);
    }

    #[test]
    fn test_union() {
        let head = DOMRect::from_xywh(0.0, 0.0, 800.0, 40.0);
        let body = DOMRect::from_xywh(0.0, 40.0, 800.0, 1920.0);

        let table = head.union(&body);
        assert_eq!(table, DOMRect::from_xywh(0.0, 0.0, 800.0, 1960.0));
    }

    #[test]
    fn test_translated() {
        let rect = DOMRect::from_xywh(0.0, 100.0, 50.0, 50.0).translated(0.0, -300.0);
        assert_eq!(rect.top(), -200.0);
        assert_eq!(rect.bottom(), -150.0);
        assert!(!rect.is_empty());
        assert!(DOMRect::new().is_empty());
    }
}
