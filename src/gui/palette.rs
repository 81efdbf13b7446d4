use eframe::egui::Color32;

/// Linear interpolation between two opaque colours, `t` in `[0, 1]`.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0., 1.);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Colour of segment `i` of a snake with `len` segments, fading from head to tail.
pub fn segment_color(head: Color32, tail: Color32, i: usize, len: usize) -> Color32 {
    let t = i as f32 / len.saturating_sub(1).max(1) as f32;
    lerp_color(head, tail, t)
}
