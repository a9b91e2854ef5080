//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is always passed in, never read from a clock
//! - Fixed phase order every tick
//! - Stable iteration order (collection order)
//! - No window, GPU or platform dependencies; entities only describe
//!   their shapes through `renderer::Drawable`

pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{apply_rift_effects, is_top_landing, resolve_landings};
pub use entity::{Collidable, Entity};
pub use rect::Rect;
pub use state::{Avatar, CursorStep, Exit, Footing, Platform, Rift, World};
pub use tick::{Action, GameEvent, TickInput, tick};
