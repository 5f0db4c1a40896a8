//! Configuration for the indicator row and the demo application.
//!
//! Settings are read from a TOML file. A missing file means defaults; a file
//! that cannot be read or parsed (including an invalid cap) is an error, so
//! bad settings are caught before any indicator is built.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::indicator::{IndicatorCap, JumpPolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How one kind of indicator is drawn. Passed through to the renderer as is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DotVisual {
    pub symbol: String,
    /// Drawn instead of `symbol` for infinity dots
    pub shrunk_symbol: String,
    pub color: Color,
}

impl DotVisual {
    pub fn new(symbol: impl Into<String>, shrunk_symbol: impl Into<String>, color: Color) -> Self {
        Self {
            symbol: symbol.into(),
            shrunk_symbol: shrunk_symbol.into(),
            color,
        }
    }

    /// Intrinsic width in terminal columns
    pub fn width(&self) -> usize {
        self.symbol.width()
    }
}

fn default_visual() -> DotVisual {
    DotVisual::new("○", "·", Color::DarkGray)
}

fn selected_visual() -> DotVisual {
    DotVisual::new("●", "•", Color::Cyan)
}

/// Indicator row settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndicatorConfig {
    /// `-1` to show every indicator
    #[serde(default)]
    pub indicators_to_show: IndicatorCap,
    #[serde(default = "default_visual")]
    pub default_visual: DotVisual,
    #[serde(default = "selected_visual")]
    pub selected_visual: DotVisual,
    /// Space after each indicator; defaults to the narrower visual's width
    #[serde(default)]
    pub indicator_spacing: Option<f32>,
    #[serde(default)]
    pub jump_policy: JumpPolicy,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            indicators_to_show: IndicatorCap::default(),
            default_visual: default_visual(),
            selected_visual: selected_visual(),
            indicator_spacing: None,
            jump_policy: JumpPolicy::default(),
        }
    }
}

impl IndicatorConfig {
    pub fn with_cap(mut self, cap: IndicatorCap) -> Self {
        self.indicators_to_show = cap;
        self
    }

    pub fn spacing(&self) -> f32 {
        self.indicator_spacing.unwrap_or_else(|| {
            self.default_visual
                .width()
                .min(self.selected_visual.width()) as f32
        })
    }

    pub fn visual(&self, selected: bool) -> &DotVisual {
        if selected {
            &self.selected_visual
        } else {
            &self.default_visual
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

fn default_pages() -> usize {
    12
}

/// Top-level settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub indicator: IndicatorConfig,
    /// Number of cards the demo starts with
    #[serde(default = "default_pages")]
    pub pages: usize,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            indicator: IndicatorConfig::default(),
            pages: default_pages(),
            log_level: LogLevel::default(),
        }
    }
}

/// Default config location: `<config dir>/card-indicator/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("card-indicator").join("config.toml"))
}

pub fn parse_config(contents: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file; using defaults");
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let config = parse_config(&contents, path)?;
    info!(
        path = %path.display(),
        cap = %config.indicator.indicators_to_show,
        pages = config.pages,
        "Loaded config"
    );
    Ok(config)
}
