//! Render snapshot module
//!
//! The simulation never draws. Each frame it hands an external renderer a
//! flat list of shapes in draw order.

pub mod snapshot;

pub use snapshot::{Banner, DrawKind, Drawable, Shape, Snapshot, snapshot};
