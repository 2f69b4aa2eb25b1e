use crate::model::{
    DEFAULT_INCREMENT, DEFAULT_INTERVAL_MS, DEFAULT_MARGIN, DEFAULT_WIDTH, MAX_WIDTH,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::{
    f64::consts::TAU,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "orbitscroll")]
#[command(about = "Three lights orbiting on a scrolling line; tests terminal auto scroll")]
pub(crate) struct Cli {
    /// Row width in columns (0 to 65535); the row holds width + 1 cells
    #[arg(long)]
    pub(crate) width: Option<usize>,

    /// Spaces printed before each row
    #[arg(long)]
    pub(crate) margin: Option<usize>,

    /// Orbit advance per tick (radians, 0 <= x < 2π)
    #[arg(long)]
    pub(crate) increment: Option<f64>,

    /// Pause between ticks (milliseconds)
    #[arg(long)]
    pub(crate) interval_ms: Option<u64>,

    /// Stop after this many frames instead of waiting for Ctrl+C
    #[arg(long)]
    pub(crate) frames: Option<u64>,

    /// Print frames only (no banner or farewell)
    #[arg(long, default_value_t = false)]
    pub(crate) quiet: bool,

    /// JSON settings file; flags override its values
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) width: usize,
    pub(crate) margin: usize,
    pub(crate) increment: f64,
    pub(crate) interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            margin: DEFAULT_MARGIN,
            increment: DEFAULT_INCREMENT,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl Settings {
    pub(crate) fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width > MAX_WIDTH {
            bail!("width must be at most {MAX_WIDTH}, got {}", self.width);
        }
        if !self.increment.is_finite() || !(0.0..TAU).contains(&self.increment) {
            bail!(
                "increment must be a finite angle in [0, 2π), got {}",
                self.increment
            );
        }
        Ok(())
    }
}

pub(crate) fn load_settings(path: &Path) -> Result<Settings> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("could not read settings from {}", path.display()))?;
    serde_json::from_str(&s)
        .with_context(|| format!("invalid settings file {}", path.display()))
}

/// Defaults, then the settings file, then command-line flags.
pub(crate) fn resolve(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    if let Some(v) = cli.width {
        settings.width = v;
    }
    if let Some(v) = cli.margin {
        settings.margin = v;
    }
    if let Some(v) = cli.increment {
        settings.increment = v;
    }
    if let Some(v) = cli.interval_ms {
        settings.interval_ms = v;
    }
    settings.validate()?;
    Ok(settings)
}
