//! Rift Runner - a tiny platformer where placed rifts push the level around
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, rift effects)
//! - `input`: Raw key state to per-frame intents
//! - `renderer`: Drawable snapshot for an external renderer
//! - `session`: Fixed timestep frame driver
//! - `settings`: Runtime configuration

pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{Settings, SettingsError};

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will simulate (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 500.0;
    /// Vertical velocity applied by a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -300.0;
    /// Horizontal speed while a movement key is held
    pub const MOVE_SPEED: f32 = 100.0;
    /// Hard floor for the avatar's top edge
    pub const FLOOR_Y: f32 = 500.0;

    /// Avatar is a square of this side
    pub const AVATAR_SIZE: f32 = 20.0;
    pub const AVATAR_START: Vec2 = Vec2::new(200.0, 400.0);

    pub const RIFT_RADIUS: f32 = 10.0;
    /// Rifts push platforms whose anchor is closer than this
    pub const RIFT_RANGE: f32 = 100.0;
    /// Rightward platform speed per rift in range (units/s)
    pub const RIFT_PUSH_SPEED: f32 = 50.0;

    pub const EXIT_RADIUS: f32 = 10.0;
    pub const EXIT_POSITION: Vec2 = Vec2::new(450.0, 280.0);
    /// Avatar must be strictly closer than this to the exit
    pub const EXIT_REACH: f32 = 20.0;

    /// Allowed overlap between avatar bottom and platform top for a landing
    pub const LANDING_TOLERANCE: f32 = 5.0;

    /// Placement grid
    pub const GRID_ORIGIN: Vec2 = Vec2::new(150.0, 100.0);
    pub const GRID_CELL: f32 = 40.0;
    pub const GRID_COLUMNS: i32 = 16;
    pub const GRID_ROWS: i32 = 10;

    /// Initial platforms as (x, y, width, height)
    pub const PLATFORM_LAYOUT: [(f32, f32, f32, f32); 3] = [
        (150.0, 500.0, 500.0, 50.0), // Ground
        (400.0, 400.0, 100.0, 20.0),
        (300.0, 300.0, 100.0, 20.0),
    ];

    pub const WIN_TEXT: &str = "Level Complete!";
    pub const WIN_TEXT_POSITION: Vec2 = Vec2::new(300.0, 400.0);
}

/// Convert a placement grid cell to its world-space top-left corner
#[inline]
pub fn cell_to_world(cell: IVec2) -> Vec2 {
    consts::GRID_ORIGIN + cell.as_vec2() * consts::GRID_CELL
}

/// Clamp a grid cell into the placement grid
#[inline]
pub fn clamp_cell(cell: IVec2) -> IVec2 {
    cell.clamp(
        IVec2::ZERO,
        IVec2::new(consts::GRID_COLUMNS - 1, consts::GRID_ROWS - 1),
    )
}
