mod direction;
mod game;
mod high_score;
#[cfg(test)]
mod tests;

pub use direction::{Direction, Segment};
pub use game::{GameOverCause, GameOverReport, GameState, SnakeGame, TickOutcome};
pub use high_score::{
    load_high_score, record_high_score, HighScoreStore, JsonFileStore, MemoryStore,
};
