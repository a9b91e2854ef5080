//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically. Phase order is
//! fixed: intents, entity updates, landings, rift effects, exit check.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::{apply_rift_effects, resolve_landings};
use super::entity::Entity;
use super::state::{CursorStep, World};

/// A discrete command, applied once on the tick it arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Rebuild the level from its starting layout
    Reset,
    /// Jump if grounded
    Jump,
    /// Move the placement cursor one cell
    Cursor(CursorStep),
    /// Drop a rift on the cursor cell
    PlaceRift,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Discrete commands, in the order they were issued
    pub actions: Vec<Action>,
    /// Horizontal speed from held movement keys (-100, 0 or 100)
    pub move_x: f32,
}

impl TickInput {
    pub fn with_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Reset,
    Jumped,
    RiftPlaced { cell: IVec2, position: Vec2 },
    /// Airborne avatar came down on a platform (index into `World::platforms`)
    Landed { platform: usize },
    /// Emitted once, on the tick the exit is first reached
    ExitReached,
}

/// Advance the world by one timestep of `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for action in &input.actions {
        match *action {
            Action::Reset => {
                world.reset();
                log::debug!("World reset to starting layout");
                events.push(GameEvent::Reset);
            }
            Action::Jump => {
                if world.avatar.jump() {
                    events.push(GameEvent::Jumped);
                }
            }
            Action::Cursor(step) => world.step_cursor(step),
            Action::PlaceRift => {
                let position = world.place_rift();
                log::debug!(
                    "Rift placed at cell {} ({} total)",
                    world.cursor,
                    world.rifts.len()
                );
                events.push(GameEvent::RiftPlaced {
                    cell: world.cursor,
                    position,
                });
            }
        }
    }
    world.avatar.move_x(input.move_x);

    // Sampled before the update so a floor clamp this tick still counts as a fall
    let was_airborne = !world.avatar.grounded;

    // Avatar first: collision works on this tick's tentative position
    world.avatar.update(dt);
    for platform in &mut world.platforms {
        platform.update(dt);
    }
    for rift in &mut world.rifts {
        rift.update(dt);
    }
    world.exit.update(dt);

    if let Some(platform) = resolve_landings(&mut world.avatar, &world.platforms) {
        if was_airborne {
            log::debug!("Landed on platform {} at y={}", platform, world.avatar.pos.y);
            events.push(GameEvent::Landed { platform });
        }
    }

    apply_rift_effects(&world.rifts, &mut world.platforms, dt);

    if !world.exit_reached && world.exit.is_reached_by(world.avatar.pos) {
        world.exit_reached = true;
        log::info!("Exit reached with {} rifts placed", world.rifts.len());
        events.push(GameEvent::ExitReached);
    }

    events
}
