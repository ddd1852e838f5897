//! A single animated glyph.

/// One glyph of the particle field.
///
/// The origin and glyph are fixed at creation. Velocity stays zero until the
/// interactive phase, and `landed` only ever goes from false to true.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(crate) x: f32,
    pub(crate) y: f32,
    origin_x: f32,
    origin_y: f32,
    glyph: char,
    pub(crate) vx: f32,
    pub(crate) vy: f32,
    sway_phase: f32,
    sway_speed: f32,
    fall_speed: f32,
    landed: bool,
}

/// Randomized per-particle motion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Motion {
    pub sway_phase: f32,
    pub sway_speed: f32,
    pub fall_speed: f32,
}

impl Particle {
    pub(crate) fn new(origin: (f32, f32), start: (f32, f32), glyph: char, motion: Motion) -> Self {
        Self {
            x: start.0,
            y: start.1,
            origin_x: origin.0,
            origin_y: origin.1,
            glyph,
            vx: 0.0,
            vy: 0.0,
            sway_phase: motion.sway_phase,
            sway_speed: motion.sway_speed,
            fall_speed: motion.fall_speed,
            landed: false,
        }
    }

    /// Current position in logical pixels.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Sampled pixel of the target text this particle settles on.
    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn landed(&self) -> bool {
        self.landed
    }

    pub fn sway_phase(&self) -> f32 {
        self.sway_phase
    }

    pub fn sway_speed(&self) -> f32 {
        self.sway_speed
    }

    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// Distance between the current position and the origin shifted by `offset`.
    pub fn displacement(&self, offset: f32) -> f32 {
        let dx = self.origin_x - self.x;
        let dy = self.origin_y + offset - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub(crate) fn land(&mut self) {
        self.landed = true;
    }
}
