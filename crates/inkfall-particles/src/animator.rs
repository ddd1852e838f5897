//! The particle text animator.

use inkfall_core::{Anchor, Easing, Phase, Tuning};
use inkfall_fonts::Font;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chars::{DEFAULT_TARGET_TEXT, GlyphPool};
use crate::field::{self, FieldSpec};
use crate::particle::Particle;
use crate::phase::PhaseMachine;
use crate::physics;

/// Static inputs of an [`Animator`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorSettings {
    /// Text the particles assemble into.
    pub text: String,
    /// Characters particles are drawn with.
    pub glyphs: GlyphPool,
    /// Sampling gap in logical pixels.
    pub gap: f32,
    pub device_pixel_ratio: f32,
    pub anchor: Anchor,
    pub easing: Easing,
    pub tuning: Tuning,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            text: DEFAULT_TARGET_TEXT.to_string(),
            glyphs: GlyphPool::default(),
            gap: 8.0,
            device_pixel_ratio: 1.0,
            anchor: Anchor::default(),
            easing: Easing::default(),
            tuning: Tuning::default(),
        }
    }
}

/// Owns the particle field and advances it one frame at a time.
///
/// The animator is driven from outside: `resize` on surface changes, the
/// pointer methods on mouse activity, and `update` once per frame.
#[derive(Debug)]
pub struct Animator {
    settings: AnimatorSettings,
    font: Font,
    particles: Vec<Particle>,
    machine: PhaseMachine,
    pointer: Option<(f32, f32)>,
    width: f32,
    height: f32,
    /// Shift applied to every target while the text is staged low.
    layout_offset: f32,
    /// Offset the field starts from in Falling and Waiting.
    stage_offset: f32,
    /// Frames advanced so far; drives the falling sway.
    frame: u64,
    /// Bumped every time the field is regenerated.
    generation: u64,
    rng: StdRng,
}

impl Animator {
    /// Create an animator seeded from the operating system.
    pub fn new(settings: AnimatorSettings, font: Font) -> Self {
        Self::with_rng(settings, font, StdRng::from_os_rng())
    }

    /// Create an animator with a fixed seed, for reproducible runs.
    pub fn with_seed(settings: AnimatorSettings, font: Font, seed: u64) -> Self {
        Self::with_rng(settings, font, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: AnimatorSettings, font: Font, rng: StdRng) -> Self {
        Self {
            settings,
            font,
            particles: Vec::new(),
            machine: PhaseMachine::new(),
            pointer: None,
            width: 0.0,
            height: 0.0,
            layout_offset: 0.0,
            stage_offset: 0.0,
            frame: 0,
            generation: 0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn layout_offset(&self) -> f32 {
        self.layout_offset
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn settings(&self) -> &AnimatorSettings {
        &self.settings
    }

    /// Regenerate the particle field for a `width x height` surface.
    ///
    /// The previous particles are dropped wholesale; the new set is built
    /// completely before it replaces the old one.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let spec = FieldSpec {
            text: &self.settings.text,
            width: self.width,
            height: self.height,
            device_pixel_ratio: self.settings.device_pixel_ratio,
            gap: self.settings.gap,
            anchor: self.settings.anchor,
        };
        let particles = field::generate(
            &spec,
            &self.font,
            &self.settings.tuning,
            &self.settings.glyphs,
            &mut self.rng,
        );
        self.stage_offset = field::stage_offset(&particles, self.height, &self.settings.tuning);
        self.particles = particles;
        self.generation += 1;

        tracing::info!(
            width = self.width,
            height = self.height,
            particles = self.particles.len(),
            generation = self.generation,
            "regenerated particle field"
        );
    }

    /// Begin the sequence. Ignored once started or while the field is empty.
    pub fn start(&mut self) -> bool {
        if self.particles.is_empty() {
            return false;
        }
        self.machine.start()
    }

    /// The pointer entered the surface: start the sequence and track it.
    pub fn pointer_enter(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
        self.start();
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// The pointer left the surface. Repulsion stops; the phase is unaffected.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
    }

    /// Advance one frame. `elapsed_ms` is wall time since the animator began
    /// and only feeds the waiting timer.
    pub fn update(&mut self, elapsed_ms: u64) {
        self.frame = self.frame.wrapping_add(1);
        let tuning = &self.settings.tuning;

        self.machine.poll_timer(elapsed_ms, tuning.waiting_delay_ms);
        match self.machine.phase() {
            Phase::Idle => {}
            Phase::Falling | Phase::Waiting => self.layout_offset = self.stage_offset,
            Phase::Centering => {
                let t = self.machine.step_centering(tuning.centering_step);
                self.layout_offset = if self.machine.phase() == Phase::Interactive {
                    0.0
                } else {
                    self.stage_offset * (1.0 - self.settings.easing.apply(t))
                };
            }
            Phase::Interactive => self.layout_offset = 0.0,
        }

        match self.machine.phase() {
            Phase::Idle => {}
            Phase::Falling => {
                let landed = physics::fall(&mut self.particles, self.frame, self.layout_offset, tuning);
                let total = self.particles.len();
                if total > 0 && landed as f32 >= total as f32 * tuning.landed_fraction {
                    self.machine.finish_falling(elapsed_ms);
                }
            }
            Phase::Waiting | Phase::Centering => {
                physics::settle(&mut self.particles, self.layout_offset, tuning)
            }
            Phase::Interactive => physics::spring(&mut self.particles, self.pointer, tuning),
        }
    }
}
