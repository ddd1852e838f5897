//! Built-in block font.
//!
//! Glyphs are 7 rows tall. A row character is half as wide as it is tall,
//! matching a terminal cell, so at font size `s` a row is `s / 7` pixels and
//! a column `s / 14` pixels. Characters without a glyph render as a solid
//! box ("tofu"), twice as wide for East Asian wide characters.

use crate::raster::Raster;
use crate::Align;

/// Rows per glyph.
pub const GLYPH_ROWS: usize = 7;

/// Blank columns between adjacent glyphs.
const LETTER_SPACING: usize = 1;

type Glyph = [&'static str; GLYPH_ROWS];

static DIGITS: [Glyph; 10] = [
    [" ████ ", "██  ██", "██  ██", "██  ██", "██  ██", "██  ██", " ████ "],
    ["  ██  ", " ███  ", "  ██  ", "  ██  ", "  ██  ", "  ██  ", " ████ "],
    [" ████ ", "██  ██", "    ██", "  ██  ", " ██   ", "██    ", "██████"],
    [" ████ ", "██  ██", "    ██", "  ███ ", "    ██", "██  ██", " ████ "],
    ["██  ██", "██  ██", "██  ██", "██████", "    ██", "    ██", "    ██"],
    ["██████", "██    ", "██    ", "█████ ", "    ██", "██  ██", " ████ "],
    [" ████ ", "██    ", "██    ", "█████ ", "██  ██", "██  ██", " ████ "],
    ["██████", "    ██", "   ██ ", "  ██  ", "  ██  ", "  ██  ", "  ██  "],
    [" ████ ", "██  ██", "██  ██", " ████ ", "██  ██", "██  ██", " ████ "],
    [" ████ ", "██  ██", "██  ██", " █████", "    ██", "    ██", " ████ "],
];

static LETTERS: [Glyph; 26] = [
    // A
    [" ████ ", "██  ██", "██  ██", "██████", "██  ██", "██  ██", "██  ██"],
    // B
    ["█████ ", "██  ██", "██  ██", "█████ ", "██  ██", "██  ██", "█████ "],
    // C
    [" ████ ", "██  ██", "██    ", "██    ", "██    ", "██  ██", " ████ "],
    // D
    ["█████ ", "██  ██", "██  ██", "██  ██", "██  ██", "██  ██", "█████ "],
    // E
    ["██████", "██    ", "██    ", "█████ ", "██    ", "██    ", "██████"],
    // F
    ["██████", "██    ", "██    ", "█████ ", "██    ", "██    ", "██    "],
    // G
    [" ████ ", "██  ██", "██    ", "██ ███", "██  ██", "██  ██", " █████"],
    // H
    ["██  ██", "██  ██", "██  ██", "██████", "██  ██", "██  ██", "██  ██"],
    // I
    ["██████", "  ██  ", "  ██  ", "  ██  ", "  ██  ", "  ██  ", "██████"],
    // J
    ["  ████", "    ██", "    ██", "    ██", "██  ██", "██  ██", " ████ "],
    // K
    ["██  ██", "██ ██ ", "████  ", "███   ", "████  ", "██ ██ ", "██  ██"],
    // L
    ["██    ", "██    ", "██    ", "██    ", "██    ", "██    ", "██████"],
    // M
    ["██   ██", "███ ███", "███████", "██ █ ██", "██   ██", "██   ██", "██   ██"],
    // N
    ["██   ██", "███  ██", "████ ██", "██ ████", "██  ███", "██   ██", "██   ██"],
    // O
    [" ████ ", "██  ██", "██  ██", "██  ██", "██  ██", "██  ██", " ████ "],
    // P
    ["█████ ", "██  ██", "██  ██", "█████ ", "██    ", "██    ", "██    "],
    // Q
    [" ████ ", "██  ██", "██  ██", "██  ██", "██ ███", " ████ ", "    ██"],
    // R
    ["█████ ", "██  ██", "██  ██", "█████ ", "████  ", "██ ██ ", "██  ██"],
    // S
    [" ████ ", "██  ██", "██    ", " ████ ", "    ██", "██  ██", " ████ "],
    // T
    ["██████", "  ██  ", "  ██  ", "  ██  ", "  ██  ", "  ██  ", "  ██  "],
    // U
    ["██  ██", "██  ██", "██  ██", "██  ██", "██  ██", "██  ██", " ████ "],
    // V
    ["██  ██", "██  ██", "██  ██", "██  ██", "██  ██", " ████ ", "  ██  "],
    // W
    ["██   ██", "██   ██", "██   ██", "██ █ ██", "███████", "███ ███", "██   ██"],
    // X
    ["██  ██", "██  ██", " ████ ", "  ██  ", " ████ ", "██  ██", "██  ██"],
    // Y
    ["██  ██", "██  ██", " ████ ", "  ██  ", "  ██  ", "  ██  ", "  ██  "],
    // Z
    ["██████", "    ██", "   ██ ", "  ██  ", " ██   ", "██    ", "██████"],
];

static SPACE: Glyph = ["   ", "   ", "   ", "   ", "   ", "   ", "   "];
static PERIOD: Glyph = ["  ", "  ", "  ", "  ", "  ", "██", "██"];
static COMMA: Glyph = ["  ", "  ", "  ", "  ", "██", "██", " █"];
static COLON: Glyph = ["  ", "██", "  ", "  ", "  ", "██", "  "];
static APOSTROPHE: Glyph = ["██", "██", " █", "  ", "  ", "  ", "  "];
static EXCLAMATION: Glyph = ["██", "██", "██", "██", "██", "  ", "██"];
static QUESTION: Glyph = [" ████ ", "██  ██", "    ██", "  ███ ", "  ██  ", "      ", "  ██  "];
static HYPHEN: Glyph = ["      ", "      ", "      ", "██████", "      ", "      ", "      "];
static SLASH: Glyph = ["    ██", "    ██", "   ██ ", "  ██  ", " ██   ", "██    ", "██    "];
static AMPERSAND: Glyph = [" ███  ", "██ ██ ", " ███  ", "████ █", "██ ███", "██  ██", " ███ █"];

static TOFU: Glyph = [
    "██████", "██████", "██████", "██████", "██████", "██████", "██████",
];
static TOFU_WIDE: Glyph = [
    "████████████",
    "████████████",
    "████████████",
    "████████████",
    "████████████",
    "████████████",
    "████████████",
];

/// Whether `ch` occupies two columns in a terminal (Hangul, CJK, fullwidth forms).
pub fn is_wide(ch: char) -> bool {
    matches!(
        ch as u32,
        0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFF00..=0xFF60
    )
}

fn lookup(ch: char) -> Option<&'static Glyph> {
    let g = match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        'A'..='Z' => &LETTERS[ch as usize - 'A' as usize],
        'a'..='z' => &LETTERS[ch as usize - 'a' as usize],
        ' ' => &SPACE,
        '.' => &PERIOD,
        ',' => &COMMA,
        ':' => &COLON,
        '\'' => &APOSTROPHE,
        '!' => &EXCLAMATION,
        '?' => &QUESTION,
        '-' => &HYPHEN,
        '/' => &SLASH,
        '&' => &AMPERSAND,
        _ => return None,
    };
    Some(g)
}

fn glyph(ch: char) -> &'static Glyph {
    lookup(ch).unwrap_or(if is_wide(ch) { &TOFU_WIDE } else { &TOFU })
}

/// Whether the block font has a real glyph for `ch` (rather than tofu).
pub fn has_glyph(ch: char) -> bool {
    lookup(ch).is_some()
}

fn glyph_columns(g: &Glyph) -> usize {
    g[0].chars().count()
}

fn text_columns(text: &str) -> usize {
    let glyphs: usize = text.chars().map(|c| glyph_columns(glyph(c))).sum();
    let gaps = text.chars().count().saturating_sub(1) * LETTER_SPACING;
    glyphs + gaps
}

/// Advance width of `text` at `size` pixels.
pub fn measure(text: &str, size: f32) -> f32 {
    text_columns(text) as f32 * size / (GLYPH_ROWS as f32 * 2.0)
}

/// Draw `text` centred horizontally on `x`, vertically placed per `align`.
pub fn fill_text(raster: &mut Raster, text: &str, size: f32, x: f32, y: f32, align: Align) {
    let row_h = size / GLYPH_ROWS as f32;
    let col_w = row_h / 2.0;
    let top = match align {
        Align::Middle => y - size / 2.0,
        Align::Bottom => y - size,
    };
    let mut pen = x - measure(text, size) / 2.0;

    for ch in text.chars() {
        let g = glyph(ch);
        for (row, line) in g.iter().enumerate() {
            for (col, cell) in line.chars().enumerate() {
                if cell == '█' {
                    raster.fill_rect(
                        pen + col as f32 * col_w,
                        top + row as f32 * row_h,
                        col_w,
                        row_h,
                        255,
                    );
                }
            }
        }
        pen += (glyph_columns(g) + LETTER_SPACING) as f32 * col_w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_have_equal_width() {
        let all = DIGITS.iter().chain(LETTERS.iter()).chain(
            [
                &SPACE, &PERIOD, &COMMA, &COLON, &APOSTROPHE, &EXCLAMATION, &QUESTION, &HYPHEN,
                &SLASH, &AMPERSAND, &TOFU, &TOFU_WIDE,
            ]
            .into_iter(),
        );
        for g in all {
            let width = glyph_columns(g);
            assert!(g.iter().all(|row| row.chars().count() == width), "{g:?}");
        }
    }

    #[test]
    fn test_measure_scales_linearly() {
        let small = measure("AB", 70.0);
        let large = measure("AB", 140.0);
        assert!((large - 2.0 * small).abs() < 1e-4);
        // A (6) + gap (1) + B (6) columns, each size/14 wide
        assert!((small - 13.0 * 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_wide_characters_use_wide_tofu() {
        assert!(is_wide('글'));
        assert!(!is_wide('A'));
        assert!(!has_glyph('글'));
        assert!(has_glyph('q'));
        assert!(measure("글", 14.0) > measure("A", 14.0));
    }

    #[test]
    fn test_fill_text_is_centred() {
        let mut raster = Raster::new(200, 100);
        fill_text(&mut raster, "H", 70.0, 100.0, 50.0, Align::Middle);
        let (x0, y0, x1, y1) = raster.ink_bounds(128).unwrap();
        // H is 6 columns of 5px and 7 rows of 10px
        assert_eq!((x0, x1), (85, 114));
        assert_eq!((y0, y1), (15, 84));
    }

    #[test]
    fn test_fill_text_bottom_align() {
        let mut raster = Raster::new(100, 100);
        fill_text(&mut raster, "L", 70.0, 50.0, 90.0, Align::Bottom);
        let (_, y0, _, y1) = raster.ink_bounds(0).unwrap();
        assert_eq!((y0, y1), (20, 89));
    }
}
