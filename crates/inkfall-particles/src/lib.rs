//! Particle text animation.
//!
//! A target string is rasterized into a point cloud; every point becomes a
//! [`Particle`] carrying a glyph from a source phrase. The [`Animator`] walks
//! the whole field through a shared phase sequence (fall in, settle, rise to
//! the centre, then repel from the pointer and spring back) and
//! [`ParticleCanvas`] draws it into a terminal buffer.

mod animator;
mod canvas;
mod chars;
mod color;
mod field;
mod particle;
mod phase;
mod physics;

pub use animator::{Animator, AnimatorSettings};
pub use canvas::ParticleCanvas;
pub use chars::{DEFAULT_SOURCE_PHRASE, DEFAULT_TARGET_TEXT, GlyphPool};
pub use color::{heat_color, hsl_to_rgb, particle_color};
pub use field::{FieldSpec, generate, rasterize, sample_origins, stage_offset};
pub use particle::Particle;
pub use phase::PhaseMachine;
pub use physics::{deflect, repulsion_force};
