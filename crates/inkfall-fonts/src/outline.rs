//! TrueType/OpenType fonts rasterized with swash.

use std::fmt;
use std::path::Path;

use swash::FontRef;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

use crate::raster::Raster;
use crate::{Align, FontError, Result};

/// An outline font face loaded into memory.
#[derive(Clone)]
pub struct OutlineFont {
    data: Vec<u8>,
    index: usize,
    name: String,
}

impl OutlineFont {
    /// Load the first face of a font file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let mut font = Self::from_data(data)?;
        if let Some(stem) = path.file_stem() {
            font.name = stem.to_string_lossy().into_owned();
        }
        Ok(font)
    }

    /// Parse font bytes, validating that swash can read them.
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        let font = FontRef::from_index(&data, 0).ok_or(FontError::InvalidFontData)?;
        if font.metrics(&[]).units_per_em == 0 {
            return Err(FontError::InvalidFontData);
        }
        Ok(Self {
            data,
            index: 0,
            name: String::from("outline"),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index)
    }

    /// Whether the face maps `ch` to a real glyph.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.font_ref().is_some_and(|font| font.charmap().map(ch) != 0)
    }

    /// Advance width of `text` at `size` pixels.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let Some(font) = self.font_ref() else {
            return 0.0;
        };
        let scale = size / font.metrics(&[]).units_per_em as f32;
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(&[]);
        text.chars()
            .map(|ch| glyph_metrics.advance_width(charmap.map(ch)) * scale)
            .sum()
    }

    /// Draw `text` centred horizontally on `x`, vertically placed per `align`.
    pub fn fill_text(&self, raster: &mut Raster, text: &str, size: f32, x: f32, y: f32, align: Align) {
        let Some(font) = self.font_ref() else {
            return;
        };
        let metrics = font.metrics(&[]);
        let scale = size / metrics.units_per_em as f32;
        let ascent = metrics.ascent * scale;
        let descent = metrics.descent.abs() * scale;
        let baseline = match align {
            Align::Middle => y + (ascent - descent) / 2.0,
            Align::Bottom => y - descent,
        };

        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(&[]);
        let mut context = ScaleContext::new();
        let mut scaler = context.builder(font).size(size).build();

        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        let mut pen = x - self.measure(text, size) / 2.0;
        for ch in text.chars() {
            let glyph_id = charmap.map(ch);
            if let Some(image) = render.render(&mut scaler, glyph_id) {
                let placement = image.placement;
                raster.blit_mask(
                    pen.round() as i64 + placement.left as i64,
                    baseline.round() as i64 - placement.top as i64,
                    placement.width,
                    placement.height,
                    &image.data,
                );
            }
            pen += glyph_metrics.advance_width(glyph_id) * scale;
        }
    }
}

impl fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("name", &self.name)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_rejected() {
        let result = OutlineFont::from_data(b"definitely not a font file".to_vec());
        assert!(matches!(result, Err(FontError::InvalidFontData)));
    }

    const DEJAVU_SANS: &[u8] = include_bytes!("../tests/data/DejaVuSans.ttf");

    fn dejavu() -> OutlineFont {
        OutlineFont::from_data(DEJAVU_SANS.to_vec()).unwrap()
    }

    #[test]
    fn test_loads_real_face() {
        let font = dejavu();
        assert!(font.has_glyph('A'));
        assert!(font.has_glyph('!'));
        assert!(!font.has_glyph('글'));
    }

    #[test]
    fn test_measure_scales_linearly() {
        let font = dejavu();
        let small = font.measure("AB", 50.0);
        let large = font.measure("AB", 200.0);
        assert!(small > 0.0);
        assert!((large - 4.0 * small).abs() < 1e-2, "{small} vs {large}");
        assert_eq!(font.measure("", 200.0), 0.0);
    }

    #[test]
    fn test_fill_text_centres_on_x() {
        let font = dejavu();
        let mut raster = Raster::new(400, 200);
        font.fill_text(&mut raster, "AB", 100.0, 200.0, 100.0, Align::Middle);
        let (x0, y0, x1, y1) = raster.ink_bounds(128).unwrap();
        let centre_x = (x0 + x1) as f32 / 2.0;
        let centre_y = (y0 + y1) as f32 / 2.0;
        assert!((centre_x - 200.0).abs() < 10.0, "centre x {centre_x}");
        assert!((centre_y - 100.0).abs() < 10.0, "centre y {centre_y}");
    }

    #[test]
    fn test_bottom_align_keeps_ink_above_y() {
        let font = dejavu();
        let mut raster = Raster::new(400, 300);
        font.fill_text(&mut raster, "AB", 100.0, 200.0, 250.0, Align::Bottom);
        let (_, y0, _, y1) = raster.ink_bounds(0).unwrap();
        assert!(y1 < 250, "ink ends at {y1}");
        assert!(y0 > 100, "ink starts at {y0}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = OutlineFont::from_file(&dir.path().join("missing.ttf"));
        assert!(matches!(result, Err(FontError::Io(_))));
    }
}
