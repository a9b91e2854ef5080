//! World state and entity variants
//!
//! Everything the simulation mutates lives in [`World`]. Resetting the level
//! means building a fresh `World`, so construction is the only place the
//! initial layout is described.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, Entity};
use super::rect::Rect;
use crate::consts::*;
use crate::renderer::{DrawKind, Drawable, Shape};

/// Vertical motion state of the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Footing {
    Airborne,
    Grounded,
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
    active: bool,
}

impl Avatar {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            grounded: false,
            active: true,
        }
    }

    pub fn footing(&self) -> Footing {
        if self.grounded {
            Footing::Grounded
        } else {
            Footing::Airborne
        }
    }

    /// Start a jump. Ignored while airborne. Returns whether it took effect.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel.y = JUMP_VELOCITY;
        self.grounded = false;
        true
    }

    /// Set horizontal speed directly (no acceleration or friction)
    pub fn move_x(&mut self, vx: f32) {
        self.vel.x = vx;
    }

    /// Rest the avatar on a surface whose top edge is at `top`
    pub fn land(&mut self, top: f32) {
        self.pos.y = top - AVATAR_SIZE;
        self.vel.y = 0.0;
        self.grounded = true;
    }

    /// Bounding box at the current position
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(AVATAR_SIZE))
    }
}

impl Entity for Avatar {
    fn update(&mut self, dt: f32) {
        self.vel.y += GRAVITY * dt;
        self.pos += self.vel * dt;
        // Safety floor, independent of platforms
        if self.pos.y > FLOOR_Y {
            self.pos.y = FLOOR_Y;
            self.vel.y = 0.0;
            self.grounded = true;
        }
    }

    fn descriptor(&self) -> Drawable {
        Drawable {
            kind: DrawKind::Avatar,
            position: self.pos,
            shape: Shape::Rect {
                size: Vec2::splat(AVATAR_SIZE),
            },
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn shift_by(&mut self, _delta: Vec2) {}
}

/// A solid rectangle the avatar can stand on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    active: bool,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            active: true,
        }
    }
}

impl Entity for Platform {
    fn update(&mut self, _dt: f32) {}

    fn descriptor(&self) -> Drawable {
        Drawable {
            kind: DrawKind::Platform,
            position: self.pos,
            shape: Shape::Rect { size: self.size },
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn shift_by(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}

impl Collidable for Platform {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A placed point effect that pushes nearby platforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rift {
    pub pos: Vec2,
    pub radius: f32,
    active: bool,
}

impl Rift {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: RIFT_RADIUS,
            active: true,
        }
    }

    /// Whether a platform anchored at `anchor` is pushed by this rift.
    /// Measured to the platform's top-left corner, not its center.
    pub fn reaches(&self, anchor: Vec2) -> bool {
        self.pos.distance(anchor) < RIFT_RANGE
    }
}

impl Entity for Rift {
    fn update(&mut self, _dt: f32) {}

    fn descriptor(&self) -> Drawable {
        Drawable {
            kind: DrawKind::Rift,
            position: self.pos,
            shape: Shape::Circle {
                radius: self.radius,
            },
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn shift_by(&mut self, _delta: Vec2) {}
}

/// The level goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    pub pos: Vec2,
    pub radius: f32,
    active: bool,
}

impl Exit {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: EXIT_RADIUS,
            active: true,
        }
    }

    /// Strict: a point exactly `EXIT_REACH` away does not count
    pub fn is_reached_by(&self, point: Vec2) -> bool {
        self.pos.distance(point) < EXIT_REACH
    }
}

impl Entity for Exit {
    fn update(&mut self, _dt: f32) {}

    fn descriptor(&self) -> Drawable {
        Drawable {
            kind: DrawKind::Exit,
            position: self.pos,
            shape: Shape::Circle {
                radius: self.radius,
            },
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn shift_by(&mut self, _delta: Vec2) {}
}

/// Cursor step on the placement grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorStep {
    Up,
    Down,
    Left,
    Right,
}

impl CursorStep {
    pub fn offset(self) -> IVec2 {
        match self {
            CursorStep::Up => IVec2::NEG_Y,
            CursorStep::Down => IVec2::Y,
            CursorStep::Left => IVec2::NEG_X,
            CursorStep::Right => IVec2::X,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub avatar: Avatar,
    /// Iteration order is collision order
    pub platforms: Vec<Platform>,
    /// Append-only; cleared only by a reset
    pub rifts: Vec<Rift>,
    pub exit: Exit,
    /// Placement cursor, always inside the grid
    pub cursor: IVec2,
    /// Set once the avatar touches the exit, cleared only by a reset
    pub exit_reached: bool,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Build the level in its starting layout
    pub fn new() -> Self {
        Self {
            avatar: Avatar::new(AVATAR_START),
            platforms: PLATFORM_LAYOUT
                .iter()
                .map(|&(x, y, w, h)| Platform::new(x, y, w, h))
                .collect(),
            rifts: Vec::new(),
            exit: Exit::new(EXIT_POSITION),
            cursor: IVec2::ZERO,
            exit_reached: false,
        }
    }

    /// Return to the starting layout. The old state is replaced in one
    /// assignment, never edited piecemeal.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move the cursor one cell, clamped to the grid
    pub fn step_cursor(&mut self, step: CursorStep) {
        self.cursor = crate::clamp_cell(self.cursor + step.offset());
    }

    /// World position of the cursor cell's top-left corner
    pub fn cursor_position(&self) -> Vec2 {
        crate::cell_to_world(self.cursor)
    }

    /// Drop a rift on the cursor cell and return its position.
    /// Coincident rifts are allowed and stack.
    pub fn place_rift(&mut self) -> Vec2 {
        let pos = self.cursor_position();
        self.rifts.push(Rift::new(pos));
        pos
    }

    /// Everything except the avatar, in draw order: platforms, rifts, exit
    pub fn scenery(&self) -> impl Iterator<Item = &dyn Entity> {
        self.platforms
            .iter()
            .map(|p| p as &dyn Entity)
            .chain(self.rifts.iter().map(|r| r as &dyn Entity))
            .chain(std::iter::once(&self.exit as &dyn Entity))
    }
}
