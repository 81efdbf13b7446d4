use super::{palette::segment_color, Theme};
use crate::{
    seeded_rng,
    snake::{load_high_score, record_high_score, JsonFileStore},
    Config, Direction, GameOverCause, GameOverReport, GameState, LoopDriver, Segment, SnakeGame,
    TickOutcome,
};
use eframe::egui::{
    pos2, vec2, Align2, Button, Context, FontId, Key, Painter, Rect, RichText, Sense, Stroke, Ui,
};
use std::time::Instant;

const KEYMAP: [(Key, Direction); 8] = [
    (Key::ArrowUp, Direction::Up),
    (Key::W, Direction::Up),
    (Key::ArrowDown, Direction::Down),
    (Key::S, Direction::Down),
    (Key::ArrowLeft, Direction::Left),
    (Key::A, Direction::Left),
    (Key::ArrowRight, Direction::Right),
    (Key::D, Direction::Right),
];

/// Snake tab: the game, the tick driver and the high-score slot.
pub struct SnakeView {
    game: SnakeGame,
    driver: LoopDriver,
    store: JsonFileStore,
    last_report: Option<GameOverReport>,
}

impl SnakeView {
    pub fn new(config: &Config) -> Self {
        let store = JsonFileStore::new(config.high_score_path.clone());
        let high_score = load_high_score(&store);
        log::info!(
            "snake: best score {} from {}",
            high_score,
            store.path().display()
        );
        let rng = seeded_rng(config.snake.seed);
        let game = SnakeGame::new(config.snake.clone(), high_score, rng);
        Self {
            driver: LoopDriver::new(game.tick_interval()),
            game,
            store,
            last_report: None,
        }
    }

    pub fn pause(&mut self) {
        self.driver.pause();
    }

    fn start(&mut self, now: Instant) {
        self.game.start();
        self.last_report = None;
        self.driver.set_interval(self.game.tick_interval());
        self.driver.start(now);
    }

    fn handle_input(&mut self, ctx: &Context, now: Instant) {
        let (directions, space, pause) = ctx.input(|i| {
            let directions = KEYMAP
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|&(_, direction)| direction)
                .collect::<Vec<_>>();
            (directions, i.key_pressed(Key::Space), i.key_pressed(Key::P))
        });

        if space && !self.game.is_running() {
            self.start(now);
        }
        if pause && self.game.is_running() {
            self.driver.toggle(now);
        }
        if self.driver.is_running() {
            for direction in directions {
                self.game.request_direction(direction);
            }
        }
    }

    fn update_game(&mut self, now: Instant) {
        for _ in 0..self.driver.poll(now) {
            match self.game.tick() {
                TickOutcome::Ate { speed_up: true } => {
                    self.driver.set_interval(self.game.tick_interval());
                }
                TickOutcome::GameOver(report) => {
                    self.driver.stop();
                    record_high_score(&mut self.store, &report);
                    self.last_report = Some(report);
                    break;
                }
                TickOutcome::NotRunning => break,
                _ => {}
            }
        }
    }

    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Theme::TEXT_COLOR)
            .size(Theme::TEXT_SIZE)
    }

    fn draw_controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.label(Self::new_text(&format!("Score: {}", self.game.score())));
        ui.label(Self::new_text(&format!("Best: {}", self.game.high_score())));
        ui.label(Self::new_text(&format!("Speed: {}", self.game.speed_level())));

        ui.add_space(Theme::WIDGET_GAP);

        let text = match self.game.state() {
            GameState::Idle => "Play",
            GameState::Running => "Restart",
            GameState::GameOver => "Play Again",
        };
        if ui.button(Self::new_text(text)).clicked() {
            self.start(now);
        }

        ui.add_space(Theme::WIDGET_GAP);
        ui.label(Self::new_text("Arrows / WASD to steer"));
        ui.label(Self::new_text("Space to start, P to pause"));

        ui.add_space(Theme::WIDGET_GAP);
        ui.horizontal(|ui| {
            ui.add_space(Theme::CONTROL_PANEL_WIDTH / 2. - 60.);
            ui.vertical(|ui| {
                self.draw_dpad_row(ui, &[Direction::Up]);
                self.draw_dpad_row(ui, &[Direction::Left, Direction::Down, Direction::Right]);
            });
        });
    }

    fn draw_dpad_row(&mut self, ui: &mut Ui, directions: &[Direction]) {
        ui.horizontal(|ui| {
            if directions.len() == 1 {
                ui.add_space(40.);
            }
            for &direction in directions {
                let label = match direction {
                    Direction::Up => "▲",
                    Direction::Down => "▼",
                    Direction::Left => "◀",
                    Direction::Right => "▶",
                };
                let button = ui.add_sized([36., 36.], Button::new(label));
                if button.clicked() && self.driver.is_running() {
                    self.game.request_direction(direction);
                }
            }
        });
    }

    fn overlay_text(&self) -> Option<String> {
        match self.game.state() {
            GameState::Idle => Some("Press Space to play".to_string()),
            GameState::Running if !self.driver.is_running() => Some("Paused".to_string()),
            GameState::Running => None,
            GameState::GameOver => {
                let report = self.last_report?;
                let title = match report.cause {
                    GameOverCause::BoardFull => "🏆 Board cleared",
                    GameOverCause::Wall | GameOverCause::SelfCollision => "💀 Game Over",
                };
                let best = if report.new_high_score {
                    format!("New best: {}", report.high_score)
                } else {
                    format!("Best: {}", report.high_score)
                };
                Some(format!("{title}\nScore: {} · {best}", report.score))
            }
        }
    }

    fn draw_board(&self, ui: &mut Ui, size_px: f32) {
        let (response, painter) = ui.allocate_painter(vec2(size_px, size_px), Sense::hover());
        let rect = response.rect;
        let n = self.game.grid_size() as f32;
        let cell = size_px / n;

        painter.rect_filled(rect, 0., Theme::BACKGROUND);
        let stroke = Stroke::new(1., Theme::GRID_LINE);
        for i in 0..=self.game.grid_size() {
            let (x, y) = (rect.left() + i as f32 * cell, rect.top() + i as f32 * cell);
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        }

        let cell_rect = |s: Segment| {
            Rect::from_min_size(
                pos2(rect.left() + s.x as f32 * cell, rect.top() + s.y as f32 * cell),
                vec2(cell, cell),
            )
        };

        if let Some(food) = self.game.food() {
            let center = cell_rect(food).center();
            painter.circle_filled(center, cell * 0.6, Theme::FOOD_GLOW);
            painter.circle_filled(center, cell / 2.5, Theme::FOOD);
        }

        self.draw_snake(&painter, cell_rect);

        if let Some(text) = self.overlay_text() {
            painter.rect_filled(rect, 0., Theme::OVERLAY);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(Theme::TITLE_SIZE),
                Theme::ACCENT_COLOR,
            );
        }
    }

    fn draw_snake(&self, painter: &Painter, cell_rect: impl Fn(Segment) -> Rect) {
        let len = self.game.len();
        // tail first so the head ends up on top
        for (i, segment) in self.game.segments().enumerate().rev() {
            let color = segment_color(Theme::SNAKE_HEAD, Theme::SNAKE_TAIL, i, len);
            let r = cell_rect(segment).shrink(Theme::SNAKE_PADDING);
            if i == 0 {
                painter.rect_filled(r.expand(1.5), Theme::SNAKE_ROUNDING, Theme::HEAD_GLOW);
            }
            painter.rect_filled(r, Theme::SNAKE_ROUNDING, color);
        }
    }

    pub fn show(&mut self, ui: &mut Ui, now: Instant) {
        self.handle_input(ui.ctx(), now);
        self.update_game(now);

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
            self.draw_board(ui, size_px);
        });
    }
}
