//! Text rasterization for the inkfall particle animator.
//!
//! Text is drawn into an alpha [`Raster`] which the particle field generator
//! samples. Two font sources are available: the built-in block font, which is
//! always present, and outline fonts loaded from disk. A font that cannot be
//! loaded falls back to the block font.

mod block;
mod error;
mod outline;
mod raster;

use std::path::Path;

pub use block::is_wide;
pub use error::{FontError, Result};
pub use outline::OutlineFont;
pub use raster::Raster;

/// Vertical placement of text relative to the anchor y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// The middle of the em box sits on `y`.
    #[default]
    Middle,
    /// The bottom of the em box sits on `y`.
    Bottom,
}

/// A font used to measure and rasterize the target text.
#[derive(Debug, Clone, Default)]
pub enum Font {
    /// Built-in 7-row block font.
    #[default]
    Block,
    /// Font file rasterized with swash.
    Outline(OutlineFont),
}

impl Font {
    /// Load an outline font from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        OutlineFont::from_file(path).map(Font::Outline)
    }

    /// Load `path` if given, falling back to the block font on any failure.
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Font::Block;
        };
        match Self::load(path) {
            Ok(font) => {
                tracing::info!(path = %path.display(), "loaded outline font");
                font
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "font unavailable, using block font");
                Font::Block
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Font::Block => "block",
            Font::Outline(font) => font.name(),
        }
    }

    /// Characters of `text` this font has no glyph for, whitespace excluded.
    pub fn missing_glyphs(&self, text: &str) -> Vec<char> {
        let mut missing = Vec::new();
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            let known = match self {
                Font::Block => block::has_glyph(c),
                Font::Outline(font) => font.has_glyph(c),
            };
            if !known && !missing.contains(&c) {
                missing.push(c);
            }
        }
        missing
    }

    /// Advance width of `text` at `size` pixels.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        match self {
            Font::Block => block::measure(text, size),
            Font::Outline(font) => font.measure(text, size),
        }
    }

    /// Draw `text` into `raster`, centred horizontally on `x`.
    pub fn fill_text(&self, raster: &mut Raster, text: &str, size: f32, x: f32, y: f32, align: Align) {
        match self {
            Font::Block => block::fill_text(raster, text, size, x, y, align),
            Font::Outline(font) => font.fill_text(raster, text, size, x, y, align),
        }
    }
}

/// Font size at which `text` spans `target_width` pixels.
///
/// The text is measured once at `reference_size` and the size is rescaled
/// proportionally, floored, and clamped to at least `min_size`.
pub fn fit_font_size(
    font: &Font,
    text: &str,
    target_width: f32,
    reference_size: f32,
    min_size: f32,
) -> f32 {
    let min_size = min_size.max(1.0);
    let measured = font.measure(text, reference_size);
    if !measured.is_finite() || measured <= 0.0 || target_width <= 0.0 {
        return min_size;
    }
    (reference_size * target_width / measured).floor().max(min_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_font_size_fills_target_width() {
        let font = Font::Block;
        let size = fit_font_size(&font, "AB", 180.0, 200.0, 1.0);
        let width = font.measure("AB", size);
        assert!(width <= 180.0 && width > 170.0, "width {width}");
    }

    #[test]
    fn test_fit_font_size_with_outline_font() {
        let data = include_bytes!("../tests/data/DejaVuSans.ttf").to_vec();
        let font = Font::Outline(OutlineFont::from_data(data).unwrap());
        for target in [190.0, 380.0, 35.15] {
            let size = fit_font_size(&font, "AB", target, 200.0, 1.0);
            let width = font.measure("AB", size);
            assert!(width <= target + 1e-3, "{width} > {target}");
            assert!(width > target * 0.9, "{width} too narrow for {target}");
        }
    }

    #[test]
    fn test_fit_font_size_clamps() {
        let font = Font::Block;
        assert_eq!(fit_font_size(&font, "AB", 0.0, 200.0, 8.0), 8.0);
        assert_eq!(fit_font_size(&font, "", 500.0, 200.0, 8.0), 8.0);
        // Never non-positive even with a bogus minimum
        assert_eq!(fit_font_size(&font, "AB", 1.0, 200.0, -4.0), 1.0);
    }

    #[test]
    fn test_block_font_reports_missing_glyphs() {
        assert!(Font::Block.missing_glyphs("Hello, World!").is_empty());
        assert_eq!(Font::Block.missing_glyphs("A글글 B"), vec!['글']);
    }

    #[test]
    fn test_missing_glyphs_lists_each_char_once() {
        assert_eq!(Font::Block.missing_glyphs("글A자글"), vec!['글', '자']);
        assert_eq!(
            Font::Block.missing_glyphs("글자와기록사이 기록"),
            vec!['글', '자', '와', '기', '록', '사', '이']
        );
    }

    #[test]
    fn test_missing_font_falls_back_to_block() {
        let dir = tempfile::tempdir().unwrap();
        let font = Font::load_or_fallback(Some(&dir.path().join("nope.otf")));
        assert!(matches!(font, Font::Block));
        assert!(matches!(Font::load_or_fallback(None), Font::Block));
    }

    #[test]
    fn test_unreadable_font_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"garbage").unwrap();
        assert!(matches!(Font::load(&path), Err(FontError::InvalidFontData)));
        assert_eq!(Font::load_or_fallback(Some(&path)).name(), "block");
    }
}
