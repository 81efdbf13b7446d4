use super::{Direction, Segment};
use crate::config::SnakeConfig;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::{collections::VecDeque, time::Duration};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Not started yet.
    Idle,
    Running,
    /// Terminal until the next `start`.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    /// The snake covers every cell, no room left for food.
    BoardFull,
}

/// What the caller gets to show and persist once a game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverReport {
    pub cause: GameOverCause,
    pub score: u32,
    /// Best score including this game.
    pub high_score: u32,
    pub new_high_score: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick requested while the game is not running; nothing changed.
    NotRunning,
    Moved,
    /// Food eaten; `speed_up` is set when the tick interval was shortened.
    Ate { speed_up: bool },
    GameOver(GameOverReport),
}

/// Grid Snake: the segments (head first), the direction buffer, food, score and speed.
pub struct SnakeGame<R = ChaCha8Rng> {
    config: SnakeConfig,
    rng: R,
    state: GameState,
    segments: VecDeque<Segment>,
    direction: Direction,
    next_direction: Direction,
    food: Option<Segment>,
    score: u32,
    speed_level: u32,
    interval_ms: u64,
    high_score: u32,
}

impl<R: Rng> SnakeGame<R> {
    pub const INITIAL_LENGTH: i32 = 3;

    /// Creates an idle game; `high_score` is the best score read from persistence.
    ///
    /// Out-of-range settings are raised to their smallest valid value
    /// (see [`SnakeConfig::clamped`]).
    pub fn new(config: SnakeConfig, high_score: u32, rng: R) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("snake: {e}, using the nearest valid settings");
        }
        let mut game = Self {
            config: config.clamped(),
            rng,
            state: GameState::Idle,
            segments: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: None,
            score: 0,
            speed_level: 1,
            interval_ms: 0,
            high_score,
        };
        game.reset();
        game
    }

    fn reset(&mut self) {
        let mid = self.size() / 2;
        self.segments.clear();
        self.segments
            .extend((0..Self::INITIAL_LENGTH).map(|i| Segment::new(mid - i, mid)));
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.speed_level = 1;
        self.interval_ms = self.config.initial_interval_ms;
        self.food = None;
        self.place_food();
    }

    /// Starts a new game, or restarts a finished one, from the spawn state.
    pub fn start(&mut self) {
        self.reset();
        self.state = GameState::Running;
        log::info!("snake: new game on a {0}x{0} board", self.size());
    }

    /// Buffers a direction change for the next tick.
    ///
    /// Rejected when the game is not running or when `direction` is the reverse of
    /// the current (not the buffered) direction. Returns whether it was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Running || direction == self.direction.opposite() {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Advances the game by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Running {
            return TickOutcome::NotRunning;
        }

        self.direction = self.next_direction;
        let head = self.head().moved(self.direction);

        if !head.in_bounds(self.size()) {
            return self.game_over(GameOverCause::Wall);
        }
        // the tail has not moved yet, so running into it counts
        if self.is_occupied(head) {
            return self.game_over(GameOverCause::SelfCollision);
        }

        self.segments.push_front(head);

        if self.food != Some(head) {
            self.segments.pop_back();
            return TickOutcome::Moved;
        }

        self.score += 1;
        let speed_up = self.score % self.config.food_per_level == 0
            && self.interval_ms > self.config.min_interval_ms;
        if speed_up {
            self.interval_ms = self
                .interval_ms
                .saturating_sub(self.config.interval_step_ms)
                .max(1);
            self.speed_level += 1;
            log::debug!(
                "snake: speed level {} ({} ms per tick)",
                self.speed_level,
                self.interval_ms
            );
        }

        if !self.place_food() {
            return self.game_over(GameOverCause::BoardFull);
        }
        TickOutcome::Ate { speed_up }
    }

    fn game_over(&mut self, cause: GameOverCause) -> TickOutcome {
        self.state = GameState::GameOver;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        log::info!(
            "snake: game over ({:?}), score {}, best {}",
            cause,
            self.score,
            self.high_score
        );
        TickOutcome::GameOver(GameOverReport {
            cause,
            score: self.score,
            high_score: self.high_score,
            new_high_score,
        })
    }

    /// Moves the food to a uniformly random free cell, resampling occupied ones.
    ///
    /// Returns `false` and removes the food if no free cell is left.
    fn place_food(&mut self) -> bool {
        let cells = (self.size() as usize).pow(2);
        if self.segments.len() >= cells {
            self.food = None;
            return false;
        }
        let size = self.size();
        let food = loop {
            let candidate =
                Segment::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            if !self.is_occupied(candidate) {
                break candidate;
            }
        };
        self.food = Some(food);
        true
    }

    /// Puts the food at `cell` if it is on the board and not under the snake.
    pub fn place_food_at(&mut self, cell: Segment) -> bool {
        if !cell.in_bounds(self.size()) || self.is_occupied(cell) {
            return false;
        }
        self.food = Some(cell);
        true
    }

    fn is_occupied(&self, cell: Segment) -> bool {
        self.segments.contains(&cell)
    }

    fn size(&self) -> i32 {
        self.config.grid_size as i32
    }
}

impl<R> SnakeGame<R> {
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn grid_size(&self) -> u16 {
        self.config.grid_size
    }

    /// Segments from head to tail.
    pub fn segments(
        &self,
    ) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator + '_ {
        self.segments.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn buffered_direction(&self) -> Direction {
        self.next_direction
    }

    /// `None` only once the board is full.
    pub fn food(&self) -> Option<Segment> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_level(&self) -> u32 {
        self.speed_level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
