mod config;
mod driver;
mod error;
mod gui;
pub mod life;
pub mod snake;
mod utils;

pub use config::{Config, LifeConfig, SnakeConfig, WindowConfig};
pub use driver::{DriverState, LoopDriver};
pub use error::{Error, Result};
pub use gui::App;
pub use life::{Grid, LifeEngine, Pattern};
pub use snake::{
    Direction, GameOverCause, GameOverReport, GameState, Segment, SnakeGame, TickOutcome,
};
pub use utils::{parse_rle, seeded_rng, with_delimiters, MAX_PATTERN_AREA};
