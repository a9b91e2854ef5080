//! Drawable descriptors for the current world state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_CELL, WIN_TEXT, WIN_TEXT_POSITION};
use crate::sim::{Entity, World};

/// What a drawable represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    Avatar,
    Platform,
    Rift,
    Exit,
    /// Placement cursor overlay (not an entity)
    Cursor,
}

/// Geometry of a drawable, anchored at its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Filled rectangle, position is the top-left corner
    Rect { size: Vec2 },
    /// Filled circle. Position is the top-left of its bounding square, the
    /// same anchor the simulation uses for distances.
    Circle { radius: f32 },
    /// Unfilled rectangle
    Outline { size: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub kind: DrawKind,
    pub position: Vec2,
    pub shape: Shape,
}

/// Text overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    pub position: Vec2,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Back to front
    pub drawables: Vec<Drawable>,
    pub banner: Option<Banner>,
}

impl Snapshot {
    pub fn count(&self, kind: DrawKind) -> usize {
        self.drawables.iter().filter(|d| d.kind == kind).count()
    }
}

/// Build the frame snapshot: platforms, rifts, exit, cursor, then avatar on top
pub fn snapshot(world: &World) -> Snapshot {
    let mut drawables: Vec<Drawable> = world
        .scenery()
        .filter(|e| e.is_active())
        .map(|e| e.descriptor())
        .collect();

    drawables.push(Drawable {
        kind: DrawKind::Cursor,
        position: world.cursor_position(),
        shape: Shape::Outline {
            size: Vec2::splat(GRID_CELL),
        },
    });

    if world.avatar.is_active() {
        drawables.push(world.avatar.descriptor());
    }

    let banner = world.exit_reached.then(|| Banner {
        text: WIN_TEXT.to_string(),
        position: WIN_TEXT_POSITION,
    });

    Snapshot { drawables, banner }
}
