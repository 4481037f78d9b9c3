//! Command-line flags and config-file loading.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional JSON file (`--config`), then individual flags. The result is
//! validated once and handed to the session as an immutable [`GameConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;

use crate::core::{GameConfig, ShapePack};
use crate::types::MAX_BOARD_EDGE;

#[derive(Debug, Parser)]
#[command(name = "tui-polyomino", version, about = "Falling-block puzzle in the terminal")]
pub struct Args {
    /// JSON file with any subset of the game settings
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Board width in cells
    #[arg(long)]
    pub width: Option<u16>,
    /// Board height in cells
    #[arg(long)]
    pub height: Option<u16>,
    /// Shape pack: tetromino or pentomino
    #[arg(long, value_parser = parse_pack)]
    pub pack: Option<ShapePack>,
    /// Render-space cell size
    #[arg(long)]
    pub cell_size: Option<f32>,
    /// Held-key repeat interval
    #[arg(long)]
    pub move_interval_ms: Option<u32>,
    /// Gravity interval
    #[arg(long)]
    pub drop_interval_ms: Option<u32>,
    /// Grounded time before a piece locks by itself
    #[arg(long)]
    pub lock_delay_ms: Option<u32>,
}

fn parse_pack(s: &str) -> Result<ShapePack, String> {
    ShapePack::from_str(s).ok_or_else(|| {
        let known: Vec<_> = ShapePack::ALL.iter().map(|p| p.as_str()).collect();
        format!("unknown pack `{s}` (expected one of: {})", known.join(", "))
    })
}

impl Args {
    /// Resolve defaults, file and flags into a validated config.
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };
        self.apply_overrides(&mut config);
        validate(&config)?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(pack) = self.pack {
            config.pack = pack;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(ms) = self.move_interval_ms {
            config.move_interval_ms = ms;
        }
        if let Some(ms) = self.drop_interval_ms {
            config.drop_interval_ms = ms;
        }
        if let Some(ms) = self.lock_delay_ms {
            config.lock_delay_ms = ms;
        }
    }
}

pub fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Reject settings the core would panic on or that make the game unplayable.
pub fn validate(config: &GameConfig) -> Result<()> {
    ensure!(
        (1..=MAX_BOARD_EDGE).contains(&config.width),
        "board width must be between 1 and {MAX_BOARD_EDGE}, got {}",
        config.width
    );
    ensure!(
        (1..=MAX_BOARD_EDGE).contains(&config.height),
        "board height must be between 1 and {MAX_BOARD_EDGE}, got {}",
        config.height
    );
    ensure!(
        config.cell_size.is_finite() && config.cell_size > 0.0,
        "cell size must be a positive number"
    );
    ensure!(config.move_interval_ms > 0, "move interval must be positive");
    ensure!(config.drop_interval_ms > 0, "drop interval must be positive");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["tui-polyomino"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_without_flags() {
        let config = args(&[]).resolve().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = args(&["--width", "12", "--pack", "pentomino", "--lock-delay-ms", "500"])
            .resolve()
            .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.pack, ShapePack::Pentomino);
        assert_eq!(config.lock_delay_ms, 500);
    }

    #[test]
    fn unknown_pack_is_a_parse_error() {
        let err = Args::try_parse_from(["tui-polyomino", "--pack", "hexomino"]).unwrap_err();
        assert!(err.to_string().contains("hexomino"));
    }

    #[test]
    fn oversized_board_is_rejected() {
        let err = args(&["--height", "101"]).resolve().unwrap_err();
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn zero_drop_interval_is_rejected() {
        let config = parse_config(r#"{"drop_interval_ms": 0}"#).unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_config("{ width: 10 }").is_err());
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let err = args(&["--config", "/nonexistent/polyomino.json"])
            .resolve()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/polyomino.json"));
    }
}
