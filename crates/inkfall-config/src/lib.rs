//! Configuration for the inkfall animator.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/inkfall/config.toml` on Linux). Every key is
//! optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use inkfall_core::{Anchor, ColorTheme, Easing, Tuning};
use inkfall_particles::{AnimatorSettings, DEFAULT_SOURCE_PHRASE, DEFAULT_TARGET_TEXT, GlyphPool};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text the particles assemble into.
    pub text: String,
    /// Characters particles are drawn with.
    pub source_phrase: String,
    /// Optional TrueType/OpenType font file; the block font is used otherwise.
    pub font: Option<PathBuf>,
    /// Sampling gap in logical pixels; smaller means more particles.
    pub sampling_gap: f32,
    pub device_pixel_ratio: f32,
    /// Logical pixels covered by one terminal cell.
    pub cell_width: u16,
    pub cell_height: u16,
    /// Target time between frames.
    pub frame_interval_ms: u64,
    pub color_theme: ColorTheme,
    pub anchor: Anchor,
    pub easing: Easing,
    pub tuning: Tuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: DEFAULT_TARGET_TEXT.to_string(),
            source_phrase: DEFAULT_SOURCE_PHRASE.to_string(),
            font: None,
            sampling_gap: 8.0,
            device_pixel_ratio: 1.0,
            cell_width: 8,
            cell_height: 16,
            frame_interval_ms: 16,
            color_theme: ColorTheme::default(),
            anchor: Anchor::default(),
            easing: Easing::default(),
            tuning: Tuning::default(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "inkfall").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Directory for logs and other runtime data.
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "inkfall").map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Reject settings the animator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.trim().is_empty() {
            return Err(ConfigError::Invalid("text must not be empty".into()));
        }
        if self.source_phrase.trim().is_empty() {
            return Err(ConfigError::Invalid("source_phrase must not be empty".into()));
        }
        if !(self.sampling_gap > 0.0 && self.sampling_gap.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "sampling_gap must be positive, got {}",
                self.sampling_gap
            )));
        }
        if !(self.device_pixel_ratio >= 1.0 && self.device_pixel_ratio.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "device_pixel_ratio must be at least 1, got {}",
                self.device_pixel_ratio
            )));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::Invalid("cell dimensions must be non-zero".into()));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("frame_interval_ms must be non-zero".into()));
        }
        self.validate_tuning()
    }

    /// Every knob the phase sequence depends on to make progress.
    fn validate_tuning(&self) -> Result<(), ConfigError> {
        let tuning = &self.tuning;
        if !(0.0..1.0).contains(&tuning.damping) {
            return Err(ConfigError::Invalid(format!(
                "tuning.damping must be in [0, 1), got {}",
                tuning.damping
            )));
        }
        for (name, value) in [
            ("width_fraction", tuning.width_fraction),
            ("landed_fraction", tuning.landed_fraction),
            ("land_pull", tuning.land_pull),
            ("settle_pull", tuning.settle_pull),
            ("centering_step", tuning.centering_step),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "tuning.{name} must be in (0, 1], got {value}"
                )));
            }
        }
        for (name, value) in [
            ("fall_speed_min", tuning.fall_speed_min),
            ("spring", tuning.spring),
            ("repulsion_radius", tuning.repulsion_radius),
            ("reference_font_size", tuning.reference_font_size),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "tuning.{name} must be positive, got {value}"
                )));
            }
        }
        if !(tuning.fall_speed_max >= tuning.fall_speed_min && tuning.fall_speed_max.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "tuning.fall_speed_max must be at least fall_speed_min ({}), got {}",
                tuning.fall_speed_min, tuning.fall_speed_max
            )));
        }
        if !(tuning.sway_speed_min >= 0.0 && tuning.sway_speed_max >= tuning.sway_speed_min) {
            return Err(ConfigError::Invalid(format!(
                "tuning.sway_speed_max must be at least sway_speed_min ({}) and non-negative, got {}",
                tuning.sway_speed_min, tuning.sway_speed_max
            )));
        }
        Ok(())
    }

    /// Animator settings derived from this config.
    pub fn animator_settings(&self) -> AnimatorSettings {
        AnimatorSettings {
            text: self.text.clone(),
            glyphs: GlyphPool::new(&self.source_phrase),
            gap: self.sampling_gap,
            device_pixel_ratio: self.device_pixel_ratio,
            anchor: self.anchor,
            easing: self.easing,
            tuning: self.tuning.clone(),
        }
    }
}
