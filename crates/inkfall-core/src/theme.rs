//! Color themes for the particle glyphs.

use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme used to draw particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    /// The terminal's own foreground color.
    #[default]
    Ink,
    Cyan,
    Green,
    Magenta,
    Amber,
    /// Color follows distance from the target, cool at rest and hot when flung away.
    Heat,
}

impl ColorTheme {
    /// Fixed color for this theme. `Heat` resolves per particle instead.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Ink => Color::Reset,
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Amber => Color::Rgb(255, 176, 0),
            ColorTheme::Heat => Color::Rgb(70, 100, 160),
        }
    }

    /// Whether the color depends on particle motion.
    pub fn is_dynamic(self) -> bool {
        self == ColorTheme::Heat
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Ink => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::Heat,
            ColorTheme::Heat => ColorTheme::Ink,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Ink => "ink",
            ColorTheme::Cyan => "cyan",
            ColorTheme::Green => "green",
            ColorTheme::Magenta => "magenta",
            ColorTheme::Amber => "amber",
            ColorTheme::Heat => "heat",
        }
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let mut theme = ColorTheme::Ink;
        // Walk the cycle once looking for a matching name
        for _ in 0..6 {
            if theme.name() == lower {
                return Ok(theme);
            }
            theme = theme.next();
        }
        Err(format!("unknown color theme '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut theme = ColorTheme::Ink;
        for _ in 0..6 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Ink);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("heat".parse::<ColorTheme>(), Ok(ColorTheme::Heat));
        assert_eq!("AMBER".parse::<ColorTheme>(), Ok(ColorTheme::Amber));
        assert!("plaid".parse::<ColorTheme>().is_err());
    }
}
