use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Runtime settings; every field has a default, so a config file may list only
/// the values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub life: LifeConfig,
    pub snake: SnakeConfig,
    pub window: WindowConfig,
    /// Where the Snake high score is kept between sessions.
    pub high_score_path: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability of a cell being alive after "Random".
    pub density: f64,
    pub generations_per_sec: f64,
    /// `None` means a fresh seed on every start.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            density: 0.25,
            generations_per_sec: 10.,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Number of cells per axis.
    pub grid_size: u16,
    pub initial_interval_ms: u64,
    /// Interval reduction per speed level.
    pub interval_step_ms: u64,
    /// The interval is only reduced while it is above this value.
    pub min_interval_ms: u64,
    /// Food eaten before the speed increases.
    pub food_per_level: u32,
    pub seed: Option<u64>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_interval_ms: 150,
            interval_step_ms: 10,
            min_interval_ms: 50,
            food_per_level: 5,
            seed: None,
        }
    }
}

impl SnakeConfig {
    /// The snake spawns three cells long, centred, so smaller boards cannot hold it.
    pub const MIN_GRID_SIZE: u16 = 4;

    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if self.grid_size < Self::MIN_GRID_SIZE {
            return invalid("snake grid must be at least 4 cells wide");
        }
        if self.food_per_level == 0 {
            return invalid("food_per_level must be positive");
        }
        if self.min_interval_ms == 0 || self.initial_interval_ms == 0 {
            return invalid("snake tick intervals must be positive");
        }
        Ok(())
    }

    /// Copy with every out-of-range value raised to its smallest valid one.
    pub fn clamped(&self) -> Self {
        Self {
            grid_size: self.grid_size.max(Self::MIN_GRID_SIZE),
            initial_interval_ms: self.initial_interval_ms.max(1),
            min_interval_ms: self.min_interval_ms.max(1),
            food_per_level: self.food_per_level.max(1),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub max_fps: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.,
            height: 760.,
            max_fps: 60.,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            life: LifeConfig::default(),
            snake: SnakeConfig::default(),
            window: WindowConfig::default(),
            high_score_path: PathBuf::from(Self::DEFAULT_HIGH_SCORE_FILE),
        }
    }
}

impl Config {
    pub const DEFAULT_HIGH_SCORE_FILE: &'static str = "snake-high-score.json";

    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let mut config: Self = serde_json::from_slice(&data)?;
        if config.high_score_path.as_os_str().is_empty() {
            config.high_score_path = PathBuf::from(Self::DEFAULT_HIGH_SCORE_FILE);
        }
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if self.life.rows == 0 || self.life.cols == 0 {
            return invalid("life grid must have at least one row and one column");
        }
        if !(0.0..=1.0).contains(&self.life.density) {
            return invalid("life density must be within [0, 1]");
        }
        if !(self.life.generations_per_sec > 0.) {
            return invalid("life speed must be positive");
        }
        self.snake.validate()?;
        if self.window.max_fps <= 0. {
            return invalid("max_fps must be positive");
        }
        Ok(())
    }
}
