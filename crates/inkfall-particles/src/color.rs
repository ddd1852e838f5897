//! Color helpers for particle rendering.

use inkfall_core::ColorTheme;
use ratatui::style::Color;

/// Displacement (in pixels) at which a particle is drawn fully hot.
const HEAT_SCALE: f32 = 150.0;

/// Map a heat value (0.0-1.0) to a color from cool blue to warm red.
pub fn heat_color(value: f32) -> Color {
    let value = value.clamp(0.0, 1.0);

    // Hue: 240 (blue) -> 60 (yellow) -> 0 (red)
    let hue = 240.0 - (value * 240.0);
    let saturation = 0.6 + (value * 0.4);
    let lightness = 0.35 + (value * 0.2);

    hsl_to_rgb(hue, saturation, lightness)
}

/// Color of a particle that is `displacement` pixels away from its target.
pub fn particle_color(theme: ColorTheme, displacement: f32) -> Color {
    if theme.is_dynamic() {
        heat_color(displacement / HEAT_SCALE)
    } else {
        theme.color()
    }
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    let channel = |t: f32| (hue_to_channel(p, q, t) * 255.0) as u8;
    Color::Rgb(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
