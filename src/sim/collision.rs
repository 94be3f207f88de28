//! Collision detection
//!
//! Everything on the road is an axis-aligned box; the drift tilt is cosmetic
//! and never enlarges the car's hitbox.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left corner plus size (canvas space, y down)
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
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Same rectangle with x and y swapped
    pub fn transposed(&self) -> Self {
        Self {
            pos: Vec2::new(self.pos.y, self.pos.x),
            size: Vec2::new(self.size.y, self.size.x),
        }
    }
}

/// Strict overlap test. Rectangles that only share an edge don't collide.
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// Index of the first rectangle in `others` that overlaps `subject`
pub fn first_overlap<I>(subject: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    others
        .into_iter()
        .position(|other| aabb_overlap(subject, &other))
}
