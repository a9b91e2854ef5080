//! Common capability interface for simulated objects
//!
//! Every entity variant implements [`Entity`]. The world keeps each variant in
//! its own typed field or collection, so callers never need to downcast.

use glam::Vec2;

use super::rect::Rect;
use crate::renderer::Drawable;

/// Behavior shared by the avatar, platforms, rifts and the exit
pub trait Entity {
    /// Advance autonomous behavior by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Geometry an external renderer needs to draw this entity
    fn descriptor(&self) -> Drawable;

    fn position(&self) -> Vec2;

    fn set_position(&mut self, pos: Vec2);

    /// Inactive entities are still simulated but never drawn
    fn is_active(&self) -> bool;

    /// React to a lateral displacement. Variant-defined; most ignore it.
    fn shift_by(&mut self, delta: Vec2);
}

/// Entities with an axis-aligned bounding box
pub trait Collidable: Entity {
    fn bounds(&self) -> Rect;
}
