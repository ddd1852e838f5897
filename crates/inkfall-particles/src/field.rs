//! Particle field generation.
//!
//! The target text is rasterized offscreen at device resolution, sampled on a
//! regular grid, and every opaque sample becomes one particle. Sampling is
//! deterministic; only the particles' start positions, glyphs and motion
//! parameters are random.

use std::f32::consts::TAU;

use inkfall_core::{Anchor, Tuning};
use inkfall_fonts::{Align, Font, Raster, fit_font_size};
use rand::Rng;

use crate::chars::GlyphPool;
use crate::particle::{Motion, Particle};

/// Inputs describing the surface the field is generated for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec<'a> {
    /// Text to rasterize.
    pub text: &'a str,
    /// Container width in logical pixels.
    pub width: f32,
    /// Container height in logical pixels.
    pub height: f32,
    /// Device pixels per logical pixel (at least 1).
    pub device_pixel_ratio: f32,
    /// Sampling grid step in logical pixels.
    pub gap: f32,
    pub anchor: Anchor,
}

impl FieldSpec<'_> {
    /// Whether the container and text can produce any particles at all.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0) || self.text.trim().is_empty()
    }
}

/// Rasterize the target text for `spec` at device resolution.
///
/// Returns `None` for degenerate specs, in which case nothing is drawn.
pub fn rasterize(spec: &FieldSpec<'_>, font: &Font, tuning: &Tuning) -> Option<Raster> {
    if spec.is_degenerate() {
        return None;
    }
    let dpr = spec.device_pixel_ratio.max(1.0);
    let font_size = fit_font_size(
        font,
        spec.text,
        spec.width * tuning.width_fraction,
        tuning.reference_font_size,
        tuning.min_font_size,
    );

    let mut raster = Raster::new(
        (spec.width * dpr).ceil() as u32,
        (spec.height * dpr).ceil() as u32,
    );
    let (x, y, align) = match spec.anchor {
        Anchor::Center => (spec.width / 2.0, spec.height / 2.0, Align::Middle),
        Anchor::Bottom => (
            spec.width / 2.0,
            (spec.height - tuning.bottom_margin).max(0.0),
            Align::Bottom,
        ),
    };
    font.fill_text(&mut raster, spec.text, font_size * dpr, x * dpr, y * dpr, align);

    tracing::debug!(
        font = font.name(),
        font_size,
        width = raster.width(),
        height = raster.height(),
        "rasterized target text"
    );
    Some(raster)
}

/// Sample the logical-pixel origins of every particle for `spec`.
pub fn sample_origins(spec: &FieldSpec<'_>, font: &Font, tuning: &Tuning) -> Vec<(f32, f32)> {
    let Some(raster) = rasterize(spec, font, tuning) else {
        return Vec::new();
    };
    let dpr = spec.device_pixel_ratio.max(1.0);
    let step = if spec.gap.is_finite() {
        (spec.gap * dpr).round().max(1.0) as usize
    } else {
        1
    };

    let mut origins = Vec::new();
    for y in (0..raster.height()).step_by(step) {
        for x in (0..raster.width()).step_by(step) {
            if raster.alpha(x, y) > tuning.alpha_threshold {
                origins.push((x as f32 / dpr, y as f32 / dpr));
            }
        }
    }
    origins
}

/// Generate a fresh particle set for `spec`.
///
/// Every particle starts above the visible area at a random column with a
/// random glyph from `pool` and randomized sway and fall speed.
pub fn generate<R: Rng + ?Sized>(
    spec: &FieldSpec<'_>,
    font: &Font,
    tuning: &Tuning,
    pool: &GlyphPool,
    rng: &mut R,
) -> Vec<Particle> {
    sample_origins(spec, font, tuning)
        .into_iter()
        .map(|origin| {
            let start = (
                rng.random::<f32>() * spec.width,
                -(rng.random::<f32>() * tuning.spawn_height) - tuning.spawn_margin,
            );
            let motion = Motion {
                sway_phase: rng.random::<f32>() * TAU,
                sway_speed: lerp(tuning.sway_speed_min, tuning.sway_speed_max, rng.random()),
                fall_speed: lerp(tuning.fall_speed_min, tuning.fall_speed_max, rng.random()),
            };
            Particle::new(origin, start, pool.pick(rng), motion)
        })
        .collect()
}

/// Vertical offset that stages the text against the bottom edge.
///
/// This is the shift that puts the lowest particle origin `bottom_margin`
/// pixels above the bottom of the container, never negative.
pub fn stage_offset(particles: &[Particle], height: f32, tuning: &Tuning) -> f32 {
    particles
        .iter()
        .map(|p| p.origin().1)
        .reduce(f32::max)
        .map_or(0.0, |lowest| (height - tuning.bottom_margin - lowest).max(0.0))
}

fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}
