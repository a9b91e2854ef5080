//! Fixed timestep frame driver
//!
//! Wraps a [`World`] with an accumulator so callers can feed it variable
//! frame times while the simulation always steps by the configured timestep.

use crate::renderer::{Snapshot, snapshot};
use crate::settings::Settings;
use crate::sim::{GameEvent, TickInput, World, tick};

/// A running game session
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    settings: Settings,
    accumulator: f32,
    /// Input waiting for the next tick
    input: TickInput,
    ticks: u64,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            world: World::new(),
            settings,
            accumulator: 0.0,
            input: TickInput::default(),
            ticks: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Total ticks simulated since the session started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed one rendered frame of `elapsed` seconds.
    ///
    /// Discrete actions run on the first tick only; the held movement speed
    /// applies to every tick. If the frame is too short to tick at all, its
    /// actions wait for the next frame.
    pub fn advance(&mut self, elapsed: f32, input: TickInput) -> Vec<GameEvent> {
        let dt = self.settings.timestep;
        // `max` maps NaN to 0, so a bad frame time cannot poison the accumulator
        self.accumulator += elapsed.max(0.0).min(self.settings.max_frame_time);
        self.input.actions.extend(input.actions);
        self.input.move_x = input.move_x;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= dt && substeps < self.settings.max_substeps {
            events.extend(tick(&mut self.world, &self.input, dt));
            self.accumulator -= dt;
            substeps += 1;
            self.ticks += 1;

            // Clear one-shot inputs after processing
            self.input.actions.clear();
        }

        if substeps == self.settings.max_substeps && self.accumulator >= dt {
            log::debug!(
                "Dropping {:.4}s of simulation after {} substeps",
                self.accumulator,
                substeps
            );
            self.accumulator %= dt;
        }

        events
    }

    /// Drawables for the current state
    pub fn snapshot(&self) -> Snapshot {
        snapshot(&self.world)
    }

    /// Start over from the initial layout, discarding pending input
    pub fn restart(&mut self) {
        self.world.reset();
        self.accumulator = 0.0;
        self.input = TickInput::default();
        log::info!("Session restarted after {} ticks", self.ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawKind;
    use crate::sim::{Action, CursorStep};

    fn settings() -> Settings {
        Settings {
            timestep: 0.01,
            max_substeps: 4,
            max_frame_time: 0.1,
            verbose: false,
        }
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut session = Session::new(settings());
        session.advance(0.004, TickInput::default());
        assert_eq!(session.ticks(), 0);
        session.advance(0.007, TickInput::default());
        assert_eq!(session.ticks(), 1);
    }

    #[test]
    fn test_invalid_frame_time_is_ignored() {
        let mut session = Session::new(settings());
        session.advance(f32::NAN, TickInput::default());
        session.advance(-1.0, TickInput::default());
        assert_eq!(session.ticks(), 0);

        for _ in 0..10 {
            session.advance(0.01, TickInput::with_actions([Action::PlaceRift]));
        }
        assert_eq!(session.ticks(), 10);
        assert_eq!(session.world().rifts.len(), 10);
    }

    #[test]
    fn test_substep_cap() {
        let mut session = Session::new(settings());
        session.advance(0.1, TickInput::default());
        assert_eq!(session.ticks(), 4);
        // Leftover time beyond the cap is dropped
        session.advance(0.0, TickInput::default());
        assert_eq!(session.ticks(), 4);
    }

    #[test]
    fn test_actions_apply_once_per_frame() {
        let mut session = Session::new(settings());
        let events = session.advance(0.035, TickInput::with_actions([Action::PlaceRift]));
        assert_eq!(session.ticks(), 3);
        assert_eq!(session.world().rifts.len(), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_actions_wait_for_a_tick() {
        let mut session = Session::new(settings());
        session.advance(
            0.001,
            TickInput::with_actions([Action::Cursor(CursorStep::Down), Action::PlaceRift]),
        );
        assert!(session.world().rifts.is_empty());

        session.advance(0.01, TickInput::default());
        assert_eq!(session.world().rifts.len(), 1);
        assert_eq!(session.world().rifts[0].pos.y, 140.0);
    }

    #[test]
    fn test_held_movement_every_substep() {
        let mut session = Session::new(settings());
        let input = TickInput {
            move_x: 100.0,
            ..Default::default()
        };
        session.advance(0.035, input);
        assert_eq!(session.ticks(), 3);
        assert!((session.world().avatar.pos.x - 203.0).abs() < 1e-3);
    }

    #[test]
    fn test_restart() {
        let mut session = Session::new(settings());
        session.advance(0.045, TickInput::with_actions([Action::PlaceRift]));
        session.advance(0.001, TickInput::with_actions([Action::PlaceRift]));
        session.restart();

        assert_eq!(session.world(), &World::new());
        // The pending placement was discarded
        session.advance(0.01, TickInput::default());
        assert_eq!(session.snapshot().count(DrawKind::Rift), 0);
    }
}
