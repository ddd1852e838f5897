//! Numeric knobs for the particle animation.
//!
//! None of these values are load-bearing; they are the defaults that make the
//! effect look right on a typical terminal and can be overridden in the
//! `[tuning]` table of the config file.

use serde::{Deserialize, Serialize};

/// Tunable constants for field generation and per-frame physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fraction of the container width the rendered text should span.
    pub width_fraction: f32,
    /// Font size used for the first measuring pass.
    pub reference_font_size: f32,
    /// Smallest font size the fitter will return.
    pub min_font_size: f32,
    /// Samples with alpha strictly above this become particles.
    pub alpha_threshold: u8,
    /// Particles spawn up to this far above `-spawn_margin`.
    pub spawn_height: f32,
    /// Minimum distance above the top edge at spawn.
    pub spawn_margin: f32,
    /// Horizontal sway per frame while falling, in pixels.
    pub sway_amplitude: f32,
    pub sway_speed_min: f32,
    pub sway_speed_max: f32,
    pub fall_speed_min: f32,
    pub fall_speed_max: f32,
    /// Fraction of remaining x distance covered per frame by landed particles.
    pub land_pull: f32,
    /// Fraction of remaining distance covered per frame while waiting/centering.
    pub settle_pull: f32,
    /// Landed share of particles that ends the falling phase.
    pub landed_fraction: f32,
    /// Real-time pause between landing and rising.
    pub waiting_delay_ms: u64,
    /// Centering progress added per frame.
    pub centering_step: f32,
    /// Gap kept below the text while it is staged low.
    pub bottom_margin: f32,
    /// Pointer influence radius in pixels.
    pub repulsion_radius: f32,
    /// Maximum target displacement at zero distance.
    pub repulsion_strength: f32,
    /// Spring constant pulling velocity toward the target.
    pub spring: f32,
    /// Per-frame velocity multiplier (< 1).
    pub damping: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width_fraction: 0.95,
            reference_font_size: 200.0,
            min_font_size: 8.0,
            alpha_threshold: 128,
            spawn_height: 800.0,
            spawn_margin: 100.0,
            sway_amplitude: 1.5,
            sway_speed_min: 0.02,
            sway_speed_max: 0.05,
            fall_speed_min: 2.0,
            fall_speed_max: 4.0,
            land_pull: 0.2,
            settle_pull: 0.05,
            landed_fraction: 0.9,
            waiting_delay_ms: 1000,
            centering_step: 0.005,
            bottom_margin: 40.0,
            repulsion_radius: 100.0,
            repulsion_strength: 150.0,
            spring: 0.1,
            damping: 0.85,
        }
    }
}
