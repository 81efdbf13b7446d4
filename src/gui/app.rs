use super::{FpsLimiter, LifeView, SnakeView, Theme};
use crate::Config;
use eframe::egui::{CentralPanel, Context, Frame, Margin, RichText, TopBottomPanel, Ui, Visuals};
use std::time::Instant;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Life,
    Snake,
}

pub struct App {
    tab: Tab,                // Game currently shown.
    life: LifeView,          // Conway's GoL with its own loop driver.
    snake: SnakeView,        // Snake with its own loop driver.
    fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(ctx: &Context, config: Config) -> Self {
        ctx.set_visuals(Visuals::dark());
        Self {
            tab: Tab::Life,
            life: LifeView::new(&config.life),
            snake: SnakeView::new(&config),
            fps_limiter: FpsLimiter::new(config.window.max_fps),
        }
    }

    /// Hidden games are paused; they do not catch up when shown again.
    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        match self.tab {
            Tab::Life => self.life.pause(),
            Tab::Snake => self.snake.pause(),
        }
        self.tab = tab;
    }

    fn draw_tabs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let mut tab = self.tab;
            for (value, title) in [(Tab::Life, "Game of Life"), (Tab::Snake, "Snake")] {
                ui.selectable_value(&mut tab, value, RichText::new(title).size(Theme::TEXT_SIZE));
            }
            self.switch_tab(tab);

            ui.add_space(Theme::WIDGET_GAP);
            ui.label(format!("FPS: {:3}", self.fps_limiter.fps().round() as u32));
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        TopBottomPanel::top("tabs").show(ctx, |ui| self.draw_tabs(ui));

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Theme::FRAME_MARGIN))
                    .fill(Theme::BACKGROUND),
            )
            .show(ctx, |ui| match self.tab {
                Tab::Life => self.life.show(ui, now),
                Tab::Snake => self.snake.show(ui, now),
            });

        ctx.request_repaint();
        self.fps_limiter.end_frame();
    }
}
