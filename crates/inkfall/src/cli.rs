//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use inkfall_config::{Config, ConfigError};
use inkfall_core::{Anchor, ColorTheme, Easing};

#[derive(Debug, Parser)]
#[command(name = "inkfall")]
#[command(about = "Glyph particles that fall into words and scatter from your mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Text the particles assemble into
    #[arg(short, long, global = true)]
    pub text: Option<String>,

    /// Characters the particles are drawn with
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// TrueType/OpenType font used to shape the text
    #[arg(short, long, global = true)]
    pub font: Option<PathBuf>,

    /// Sampling gap in pixels; smaller means more particles
    #[arg(short, long, global = true)]
    pub gap: Option<f32>,

    /// Color theme: ink, cyan, green, magenta, amber or heat
    #[arg(long, global = true)]
    pub theme: Option<ColorTheme>,

    /// Where the text sits: center or bottom
    #[arg(long, global = true)]
    pub anchor: Option<Anchor>,

    /// Rise easing: ease-in-out-quad or cubic-out
    #[arg(long, global = true)]
    pub easing: Option<Easing>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the animation headlessly and print the final frame
    Snapshot(SnapshotArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs {
    /// Width in terminal cells
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Height in terminal cells
    #[arg(long, default_value_t = 24)]
    pub height: u16,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    pub frames: u32,

    /// Pointer cell as COL,ROW
    #[arg(long, value_parser = parse_cell)]
    pub pointer: Option<(u16, u16)>,

    /// Random seed for reproducible output
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

fn parse_cell(s: &str) -> Result<(u16, u16), String> {
    let (col, row) = s
        .split_once(',')
        .ok_or_else(|| format!("expected COL,ROW, got '{s}'"))?;
    let parse = |v: &str| v.trim().parse::<u16>().map_err(|e| format!("'{v}': {e}"));
    Ok((parse(col)?, parse(row)?))
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(text) = &self.text {
            config.text = text.clone();
        }
        if let Some(source) = &self.source {
            config.source_phrase = source.clone();
        }
        if let Some(font) = &self.font {
            config.font = Some(font.clone());
        }
        if let Some(gap) = self.gap {
            config.sampling_gap = gap;
        }
        if let Some(theme) = self.theme {
            config.color_theme = theme;
        }
        if let Some(anchor) = self.anchor {
            config.anchor = anchor;
        }
        if let Some(easing) = self.easing {
            config.easing = easing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let cli = Cli::parse_from(["inkfall", "-t", "HELLO", "--gap", "4", "--theme", "heat"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.text, "HELLO");
        assert_eq!(config.sampling_gap, 4.0);
        assert_eq!(config.color_theme, ColorTheme::Heat);
        assert_eq!(config.anchor, Anchor::Center);
    }

    #[test]
    fn test_snapshot_args() {
        let cli = Cli::parse_from(["inkfall", "snapshot", "--width", "40", "--pointer", "10,5"]);
        let Some(Command::Snapshot(args)) = cli.command else {
            panic!("expected snapshot command");
        };
        assert_eq!(args.width, 40);
        assert_eq!(args.height, 24);
        assert_eq!(args.pointer, Some((10, 5)));
    }

    #[test]
    fn test_parse_cell_rejects_garbage() {
        assert_eq!(parse_cell("3, 4"), Ok((3, 4)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,b").is_err());
    }

    #[test]
    fn test_bad_theme_is_rejected() {
        assert!(Cli::try_parse_from(["inkfall", "--theme", "plaid"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
