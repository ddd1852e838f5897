//! Core types shared by the inkfall crates.
//!
//! Everything here is plain data: the animation [`Phase`] enumeration, the
//! easing curves used while the text rises, layout anchors, color themes and
//! the numeric [`Tuning`] knobs that drive the particle physics.

mod easing;
mod phase;
mod theme;
mod tuning;

pub use easing::{Anchor, Easing};
pub use phase::Phase;
pub use theme::ColorTheme;
pub use tuning::Tuning;
