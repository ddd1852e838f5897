//! Default strings and the glyph pool particles draw their characters from.

use rand::Rng;

/// Text rendered by default.
pub const DEFAULT_TARGET_TEXT: &str = "글자와기록사이";

/// Phrase whose characters are scattered as particle glyphs by default.
pub const DEFAULT_SOURCE_PHRASE: &str = "디자인세상을기록하다의미를담다";

/// The set of characters particles are drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPool {
    chars: Vec<char>,
}

impl GlyphPool {
    /// Build a pool from every non-whitespace character of `phrase`.
    ///
    /// An empty or all-whitespace phrase falls back to [`DEFAULT_SOURCE_PHRASE`].
    pub fn new(phrase: &str) -> Self {
        let chars: Vec<char> = phrase.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() {
            tracing::warn!("empty source phrase, using default glyphs");
            return Self::default();
        }
        Self { chars }
    }

    /// Pick a character uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.random_range(0..self.chars.len())]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for GlyphPool {
    fn default() -> Self {
        Self {
            chars: DEFAULT_SOURCE_PHRASE.chars().collect(),
        }
    }
}
