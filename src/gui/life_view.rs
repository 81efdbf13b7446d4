use super::Theme;
use crate::{seeded_rng, with_delimiters, LifeConfig, LifeEngine, LoopDriver, Pattern, Result};
use eframe::egui::{pos2, vec2, Button, Context, Pos2, Rect, Response, RichText, Sense, Slider, Ui};
use egui_file::FileDialog;
use rand_chacha::ChaCha8Rng;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

/// Life tab: the engine, its driver and the pointer editing state.
pub struct LifeView {
    engine: LifeEngine,
    driver: LoopDriver,
    rng: ChaCha8Rng,
    density: f64,
    generations_per_sec: f64,
    draw_value: Option<bool>, // Value painted by the current drag.
    file_dialog: Option<FileDialog>,
    opened_file: Option<PathBuf>,
    status: String,
}

fn interval(generations_per_sec: f64) -> Duration {
    Duration::from_secs_f64(1. / generations_per_sec.max(f64::EPSILON))
}

impl LifeView {
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            engine: LifeEngine::blank(config.rows, config.cols),
            driver: LoopDriver::new(interval(config.generations_per_sec)),
            rng: seeded_rng(config.seed),
            density: config.density,
            generations_per_sec: config.generations_per_sec,
            draw_value: None,
            file_dialog: None,
            opened_file: None,
            status: String::new(),
        }
    }

    pub fn pause(&mut self) {
        self.driver.pause();
    }

    fn stop(&mut self) {
        self.driver.stop();
    }

    /// Runs the generations that became due since the last frame.
    fn update_engine(&mut self, now: Instant) {
        let steps = self.driver.poll(now);
        self.engine.step_n(steps as u64);
    }

    fn load_rle_file(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pattern = Pattern::from_rle(name, &data)?;

        // centred; whatever does not fit is dropped
        let (h, w) = pattern.bounding_size();
        let (rows, cols) = self.engine.grid().size();
        self.stop();
        self.engine.load_pattern(
            &pattern,
            rows.saturating_sub(h) / 2,
            cols.saturating_sub(w) / 2,
        );
        Ok(())
    }

    fn poll_file_dialog(&mut self, ctx: &Context) {
        let selected = self.file_dialog.as_mut().and_then(|dialog| {
            if dialog.show(ctx).selected() {
                dialog.path().map(Path::to_path_buf)
            } else {
                None
            }
        });
        if let Some(path) = selected {
            self.file_dialog = None;
            self.status = match self.load_rle_file(&path) {
                Ok(()) => format!("Loaded {}", path.display()),
                Err(e) => {
                    log::warn!("failed to load {}: {e}", path.display());
                    format!("Failed to load pattern: {e}")
                }
            };
            self.opened_file = Some(path);
        }
    }

    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Theme::TEXT_COLOR)
            .size(Theme::TEXT_SIZE)
    }

    fn draw_controls(&mut self, ui: &mut Ui, now: Instant) {
        let running = self.driver.is_running();
        let text = if running { "⏸ Pause" } else { "▶ Play" };
        if ui.add(Button::new(Self::new_text(text))).clicked() {
            self.driver.toggle(now);
        }

        if ui
            .add_enabled(!running, Button::new(Self::new_text("Step")))
            .clicked()
        {
            self.engine.step();
        }

        ui.horizontal(|ui| {
            if ui.button(Self::new_text("Clear")).clicked() {
                self.stop();
                self.engine.clear();
            }
            if ui.button(Self::new_text("Random")).clicked() {
                self.engine.randomize(&mut self.rng, self.density);
            }
        });

        ui.horizontal(|ui| {
            if ui.button(Self::new_text("Glider gun")).clicked() {
                self.engine.load_pattern(&Pattern::gosper_glider_gun(), 0, 0);
            }
            if ui.button(Self::new_text("Load RLE…")).clicked() {
                let mut dialog = FileDialog::open_file(self.opened_file.clone());
                dialog.open();
                self.file_dialog = Some(dialog);
            }
        });

        ui.add_space(Theme::WIDGET_GAP);

        ui.label(Self::new_text("Speed (generations/s)"));
        let speed = Slider::new(&mut self.generations_per_sec, 1.0..=60.0).logarithmic(true);
        if ui.add(speed).changed() {
            self.driver.set_interval(interval(self.generations_per_sec));
        }

        ui.label(Self::new_text("Random density"));
        ui.add(Slider::new(&mut self.density, 0.0..=1.0));

        ui.add_space(Theme::WIDGET_GAP);

        ui.label(Self::new_text(&format!(
            "Gen: {}",
            with_delimiters(self.engine.generation())
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            with_delimiters(self.engine.grid().population() as u64)
        )));
        if !self.status.is_empty() {
            ui.label(Self::new_text(&self.status));
        }
    }

    fn cell_at(&self, rect: Rect, pos: Pos2) -> (usize, usize) {
        let (rows, cols) = self.engine.grid().size();
        let cell = vec2(rect.width() / cols as f32, rect.height() / rows as f32);
        let p = pos - rect.left_top();
        let col = (p.x / cell.x).floor().clamp(0., (cols - 1) as f32) as usize;
        let row = (p.y / cell.y).floor().clamp(0., (rows - 1) as f32) as usize;
        (row, col)
    }

    /// Click toggles a cell; a drag paints the opposite of the first cell it touched.
    fn handle_pointer(&mut self, ui: &Ui, response: &Response, rect: Rect) {
        let Some(pos) = response.interact_pointer_pos() else {
            if !response.dragged() {
                self.draw_value = None;
            }
            return;
        };
        if response.clicked() {
            let (row, col) = self.cell_at(rect, pos);
            self.engine.toggle_cell(row, col);
            self.draw_value = None;
        } else if response.dragged() {
            if self.draw_value.is_none() {
                let origin = ui.input(|i| i.pointer.press_origin()).unwrap_or(pos);
                let (row, col) = self.cell_at(rect, origin);
                let value = !self.engine.grid().get(row, col);
                self.engine.set_cell(row, col, value);
                self.draw_value = Some(value);
            }
            let (row, col) = self.cell_at(rect, pos);
            self.engine.set_cell(row, col, self.draw_value.unwrap_or(true));
        } else {
            self.draw_value = None;
        }
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let (rows, cols) = self.engine.grid().size();
        let cell_side = size_px / rows.max(cols) as f32;
        let field_size = vec2(cols as f32 * cell_side, rows as f32 * cell_side);

        let (response, painter) = ui.allocate_painter(field_size, Sense::click_and_drag());
        let rect = response.rect;
        self.handle_pointer(ui, &response, rect);

        painter.rect_filled(rect, 0., Theme::BACKGROUND);
        let side = (cell_side - Theme::LIFE_CELL_GAP).max(1.);
        for (row, col) in self.engine.grid().alive_cells() {
            let min = pos2(
                rect.left() + col as f32 * cell_side,
                rect.top() + row as f32 * cell_side,
            );
            painter.rect_filled(
                Rect::from_min_size(min, vec2(side, side)),
                0.,
                Theme::LIFE_CELL,
            );
        }
    }

    pub fn show(&mut self, ui: &mut Ui, now: Instant) {
        self.poll_file_dialog(ui.ctx());
        self.update_engine(now);

        let area = ui.available_size();
        let size_px = area
            .y
            .min(area.x - Theme::CONTROL_PANEL_WIDTH - Theme::FRAME_MARGIN)
            .max(100.);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_width(Theme::CONTROL_PANEL_WIDTH);
                self.draw_controls(ui, now);
            });
            ui.add_space(Theme::FRAME_MARGIN);
            self.draw_field(ui, size_px);
        });
    }
}
