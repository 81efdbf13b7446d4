use eframe::egui::Color32;

/// Look of the arcade window.
pub struct Theme;

impl Theme {
    pub const FRAME_MARGIN: f32 = 16.;
    pub const CONTROL_PANEL_WIDTH: f32 = 240.;
    pub const WIDGET_GAP: f32 = 12.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TITLE_SIZE: f32 = 28.;
    pub const TEXT_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe6, 0xff);
    pub const ACCENT_COLOR: Color32 = Color32::from_rgb(0x00, 0xff, 0xf7);

    pub const BACKGROUND: Color32 = Color32::from_rgb(0x0f, 0x12, 0x25);
    pub const LIFE_CELL: Color32 = Color32::from_rgb(0x00, 0xff, 0xf7);
    /// Gap between neighbouring Life cells, in pixels.
    pub const LIFE_CELL_GAP: f32 = 0.5;

    pub const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(0x00, 0x08, 0x07, 0x08);
    pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x00, 0xff, 0xf7);
    pub const HEAD_GLOW: Color32 = Color32::from_rgba_premultiplied(0x00, 0x4d, 0x4a, 0x4d);
    pub const SNAKE_TAIL: Color32 = Color32::from_rgb(0x7c, 0x3a, 0xed);
    pub const SNAKE_PADDING: f32 = 1.;
    pub const SNAKE_ROUNDING: f32 = 4.;
    pub const FOOD: Color32 = Color32::from_rgb(0xff, 0x00, 0xaa);
    pub const FOOD_GLOW: Color32 = Color32::from_rgba_premultiplied(0x4d, 0x00, 0x33, 0x4d);
    pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0x00, 0x00, 0x00, 0x99);
}
