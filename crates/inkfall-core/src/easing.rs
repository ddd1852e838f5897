//! Easing curves and layout anchors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Easing curve used while the field rises from its staging offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Quadratic ease-in-out.
    #[default]
    EaseInOutQuad,
    /// Cubic ease-out: fast start, gentle landing.
    CubicOut,
}

impl Easing {
    /// Map linear progress `t` (clamped to 0.0-1.0) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ease-in-out-quad" | "ease-in-out" => Ok(Easing::EaseInOutQuad),
            "cubic-out" => Ok(Easing::CubicOut),
            other => Err(format!("unknown easing '{other}'")),
        }
    }
}

/// Where the target text is rasterized inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Text is centred; it lands low and then rises into place.
    #[default]
    Center,
    /// Text sits on the bottom edge and stays there.
    Bottom,
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center" | "centre" => Ok(Anchor::Center),
            "bottom" => Ok(Anchor::Bottom),
            other => Err(format!("unknown anchor '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::EaseInOutQuad, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
            // Out of range input is clamped
            assert_eq!(easing.apply(-3.0), 0.0);
            assert!((easing.apply(7.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_in_out_quad_is_symmetric() {
        let e = Easing::EaseInOutQuad;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in [Easing::EaseInOutQuad, Easing::CubicOut] {
            let samples: Vec<f32> = (0..=100).map(|i| easing.apply(i as f32 / 100.0)).collect();
            assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("cubic-out".parse::<Easing>(), Ok(Easing::CubicOut));
        assert_eq!("Bottom".parse::<Anchor>(), Ok(Anchor::Bottom));
        assert!("sideways".parse::<Anchor>().is_err());
    }
}
