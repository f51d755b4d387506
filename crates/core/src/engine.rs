//! Game engine - board, snake, phase and speed for one game
//!
//! The engine is driven from outside: something calls [`GameEngine::tick`] at
//! the current [`GameEngine::tick_interval`] and [`GameEngine::spawn_apple`]
//! at the apple interval. Everything it changes is visible through the board,
//! snake and phase queries; it never touches the terminal.

use std::time::Duration;

use anyhow::{bail, Result};
use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::types::{CellState, Collision, Direction, GameAction, GamePhase, Pos, START_DIRECTION};
use crate::{Board, SimpleRng, Snake};

/// Cells changed by one tick: the vacated tail and the new head
pub type ChangedCells = ArrayVec<Pos, 2>;

/// Result of a single [`GameEngine::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing happened
    Idle,
    /// The snake advanced one cell
    Moved {
        ate_apple: bool,
        changed: ChangedCells,
    },
    /// The snake hit something; the game is over
    Crashed(Collision),
}

impl TickOutcome {
    pub fn ate_apple(&self) -> bool {
        matches!(self, TickOutcome::Moved { ate_apple: true, .. })
    }

    pub fn crashed(&self) -> bool {
        matches!(self, TickOutcome::Crashed(_))
    }
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    snake: Snake,
    direction: Direction,
    phase: GamePhase,
    /// Current tick interval in milliseconds
    tick_ms: f64,
    /// Set once a direction change was accepted during the current tick
    dir_latched: bool,
    apples_eaten: u32,
    ticks: u64,
    last_collision: Option<Collision>,
    rng: SimpleRng,
}

impl GameEngine {
    /// Create an idle engine from a config
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Idle engine on the default board with a fixed apple seed
    pub fn seeded(seed: u32) -> Self {
        Self::build(GameConfig::seeded(seed))
    }

    /// A playing engine with a custom body (tail first) and heading
    ///
    /// Used to set up positions that are tedious to reach by playing.
    pub fn with_snake(
        config: GameConfig,
        segments: impl IntoIterator<Item = Pos>,
        direction: Direction,
    ) -> Result<Self> {
        let mut engine = Self::new(config)?;
        let Some(snake) = Snake::from_segments(segments) else {
            bail!("snake needs at least one segment");
        };

        engine.board.clear();
        for pos in snake.segments() {
            if !engine.board.contains(pos) {
                bail!("segment {pos:?} is off the board");
            }
            if engine.board.get(pos) == Some(CellState::Snake) {
                bail!("segment {pos:?} appears twice");
            }
            engine.board.set(pos, CellState::Snake);
        }

        engine.snake = snake;
        engine.direction = direction;
        engine.phase = GamePhase::Playing;
        Ok(engine)
    }

    fn build(config: GameConfig) -> Self {
        let board = Board::new(config.grid_width, config.grid_height);
        let start = Self::center(&board);
        let seed = config.seed.unwrap_or_else(SimpleRng::seed_from_time);

        let mut engine = Self {
            tick_ms: config.start_tick_ms,
            config,
            board,
            snake: Snake::new(start),
            direction: START_DIRECTION,
            phase: GamePhase::Idle,
            dir_latched: false,
            apples_eaten: 0,
            ticks: 0,
            last_collision: None,
            rng: SimpleRng::new(seed),
        };
        engine.board.set(start, CellState::Snake);
        engine
    }

    fn center(board: &Board) -> Pos {
        Pos::new((board.width() / 2) as i16, (board.height() / 2) as i16)
    }

    /// Idle -> Playing. Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Playing;
        info!(
            width = self.board.width(),
            height = self.board.height(),
            "game started"
        );
        true
    }

    /// Crashed -> Playing with a fresh snake, speed and board.
    /// Returns false in any other phase.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::Crashed {
            return false;
        }

        let start = Self::center(&self.board);
        self.board.clear();
        self.snake.reset(start);
        self.board.set(start, CellState::Snake);
        self.direction = START_DIRECTION;
        self.tick_ms = self.config.start_tick_ms;
        self.dir_latched = false;
        self.apples_eaten = 0;
        self.last_collision = None;
        self.phase = GamePhase::Playing;

        info!("game restarted");
        true
    }

    /// Request a heading change for the next tick
    ///
    /// Rejected when not playing, when a change was already accepted this
    /// tick, or when `dir` would reverse the snake onto itself.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.phase != GamePhase::Playing || self.dir_latched {
            return false;
        }
        if dir == self.direction.opposite() {
            return false;
        }
        self.direction = dir;
        self.dir_latched = true;
        true
    }

    /// Apply a player intent
    ///
    /// `Start` starts an idle game or restarts a crashed one; direction
    /// actions steer.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => match self.phase {
                GamePhase::Idle => self.start(),
                GamePhase::Crashed => self.restart(),
                GamePhase::Playing => false,
            },
            _ => match action.direction() {
                Some(dir) => self.set_direction(dir),
                None => false,
            },
        }
    }

    /// Advance the snake one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Playing {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        let new_head = self.snake.head().step(self.direction);
        let Some(target) = self.board.get(new_head) else {
            return self.crash(Collision::Wall);
        };

        let grows = target == CellState::Apple;
        let tail = self.snake.tail();

        // Moving into the tail cell is legal: the tail leaves on this same tick.
        if target == CellState::Snake && new_head != tail {
            return self.crash(Collision::SelfHit);
        }

        if grows {
            self.eat_apple();
        }

        let mut changed = ChangedCells::new();
        self.snake.push_head(new_head);
        self.board.set(new_head, CellState::Snake);
        if !grows {
            if let Some(old_tail) = self.snake.pop_tail() {
                if old_tail != new_head {
                    self.board.set(old_tail, CellState::Empty);
                    changed.push(old_tail);
                }
            }
        }
        changed.push(new_head);

        self.dir_latched = false;

        TickOutcome::Moved {
            ate_apple: grows,
            changed,
        }
    }

    fn eat_apple(&mut self) {
        self.apples_eaten += 1;
        let before = self.tick_ms;
        self.tick_ms = (self.tick_ms * self.config.eating_multiplier).max(self.config.min_tick_ms);
        debug!(
            apples = self.apples_eaten,
            from_ms = before,
            to_ms = self.tick_ms,
            "apple eaten"
        );
    }

    fn crash(&mut self, collision: Collision) -> TickOutcome {
        self.phase = GamePhase::Crashed;
        self.dir_latched = false;
        self.last_collision = Some(collision);
        info!(
            ?collision,
            length = self.snake.len(),
            apples = self.apples_eaten,
            "game over"
        );
        TickOutcome::Crashed(collision)
    }

    /// Put an apple on a random empty cell
    ///
    /// Returns the cell used, or `None` when not playing or the board is full.
    pub fn spawn_apple(&mut self) -> Option<Pos> {
        if self.phase != GamePhase::Playing {
            return None;
        }

        let w = self.board.width() as u32;
        let h = self.board.height() as u32;

        for _ in 0..self.board.len() {
            let pos = Pos::new(
                self.rng.next_range(w) as i16,
                self.rng.next_range(h) as i16,
            );
            if self.board.is_empty_cell(pos) {
                return Some(self.put_apple(pos));
            }
        }

        // Crowded board: pick directly among what is left.
        let free = self.board.count(CellState::Empty);
        if free == 0 {
            return None;
        }
        let pos = self.board.nth_empty(self.rng.next_range(free as u32) as usize)?;
        Some(self.put_apple(pos))
    }

    fn put_apple(&mut self, pos: Pos) -> Pos {
        self.board.set(pos, CellState::Apple);
        debug!(x = pos.x, y = pos.y, "apple spawned");
        pos
    }

    /// Mark a specific empty cell as an apple
    pub fn place_apple(&mut self, pos: Pos) -> bool {
        if !self.board.is_empty_cell(pos) {
            return false;
        }
        self.board.set(pos, CellState::Apple);
        true
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, pos: Pos) -> Option<CellState> {
        self.board.get(pos)
    }

    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.tick_ms / 1000.0)
    }

    pub fn apple_interval(&self) -> Duration {
        self.config.apple_interval()
    }

    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    /// Ticks processed while playing, across restarts
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_collision(&self) -> Option<Collision> {
        self.last_collision
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}
