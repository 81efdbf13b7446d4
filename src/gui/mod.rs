mod app;
mod config;
mod fps_limit;
mod life_view;
mod palette;
mod snake_view;

pub use app::App;
use config::Theme;
use fps_limit::FpsLimiter;
use life_view::LifeView;
use snake_view::SnakeView;
