#![warn(clippy::all)]

use arcade::{App, Config, Error};
use std::path::Path;

fn main() -> arcade::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // optional path to a JSON config as the only argument
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::default(),
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(config.window.width, config.window.height))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Neon Arcade",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, config)))),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}
