//! GameSession: one engine plus the two timers that drive it.

use std::time::Duration;

use tracing::debug;

use crate::core::{GameEngine, TickOutcome};
use crate::scheduler::{Scheduler, TaskHandle};
use crate::types::GameAction;

/// What a timer asks the game loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Tick,
    SpawnApple,
}

/// Owns the engine and keeps the tick timer in step with its speed
///
/// The tick timer is not fixed-period: after every tick or action the
/// session compares the engine's tick interval with the timer's and
/// reschedules when they differ (speed-up after an apple, reset on restart).
#[derive(Debug)]
pub struct GameSession {
    engine: GameEngine,
    tick_task: TaskHandle,
    _apple_task: TaskHandle,
}

impl GameSession {
    /// Start both timers for `engine`. Must run inside a tokio runtime.
    pub fn new(engine: GameEngine, scheduler: &Scheduler<Trigger>) -> Self {
        let tick_task = scheduler.schedule_repeating(Trigger::Tick, engine.tick_interval());
        let apple_task =
            scheduler.schedule_repeating(Trigger::SpawnApple, engine.apple_interval());
        Self {
            engine,
            tick_task,
            _apple_task: apple_task,
        }
    }

    /// Run the engine operation for `trigger`. Returns true if the board changed.
    pub fn handle(&mut self, trigger: Trigger) -> bool {
        let changed = match trigger {
            Trigger::Tick => self.engine.tick() != TickOutcome::Idle,
            Trigger::SpawnApple => self.engine.spawn_apple().is_some(),
        };
        self.sync_tick_interval();
        changed
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = self.engine.apply_action(action);
        self.sync_tick_interval();
        changed
    }

    fn sync_tick_interval(&self) {
        let interval = self.engine.tick_interval();
        if self.tick_task.reschedule(interval) {
            debug!(?interval, "tick timer rescheduled");
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Period the tick timer is currently running at
    pub fn tick_interval(&self) -> Duration {
        self.tick_task.interval()
    }
}
