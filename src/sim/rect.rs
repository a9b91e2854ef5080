//! Axis-aligned rectangles in screen space (y grows downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test: rectangles that only touch along an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let b = Rect::new(Vec2::new(10.0, 15.0), Vec2::new(100.0, 20.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let below = Rect::new(Vec2::new(0.0, 20.0), Vec2::new(20.0, 20.0));
        let beside = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(20.0, 20.0));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&beside));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(Vec2::new(150.0, 500.0), Vec2::new(500.0, 50.0));
        assert_eq!(r.left(), 150.0);
        assert_eq!(r.right(), 650.0);
        assert_eq!(r.top(), 500.0);
        assert_eq!(r.bottom(), 550.0);
    }
}
