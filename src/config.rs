//! Widget configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::color::Color;
use crate::palette::DEFAULT_PALETTE_SIZE;

pub const TIMER_MIN_SECS: f32 = 10.0;
pub const TIMER_MAX_SECS: f32 = 300.0;
pub const DEFAULT_TIMER_SECS: f32 = TIMER_MIN_SECS;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidPaletteSize { var: &'static str, value: String },
    #[error("{var} must be 'true' or 'false', got '{value}'")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be a #RGB or #RRGGBB color, got '{value}'")]
    InvalidColor { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub palette_size: usize,
    /// When false the panel has no brush-size control and never emits size changes.
    pub brush_slider: bool,
    pub initial_color: Color,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { palette_size: DEFAULT_PALETTE_SIZE, brush_slider: true, initial_color: Color::BLACK }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Initial countdown, clamped to [`TIMER_MIN_SECS`, `TIMER_MAX_SECS`].
    pub timer_default_secs: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { timer_default_secs: DEFAULT_TIMER_SECS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetConfig {
    pub panel: PanelConfig,
    pub session: SessionConfig,
}

impl WidgetConfig {
    /// Build typed widget config from environment variables.
    ///
    /// Optional:
    /// - `WHITEBOARD_PALETTE_SIZE`: default 10, must be at least 1
    /// - `WHITEBOARD_BRUSH_SLIDER`: `true` (default) or `false`
    /// - `WHITEBOARD_INITIAL_COLOR`: `#RRGGBB`, default black
    /// - `WHITEBOARD_TIMER_DEFAULT_SECS`: default 10, clamped to [10, 300]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let palette_size = match env_value("WHITEBOARD_PALETTE_SIZE") {
            None => DEFAULT_PALETTE_SIZE,
            Some(raw) => parse_palette_size(&raw)?,
        };
        let brush_slider = match env_value("WHITEBOARD_BRUSH_SLIDER") {
            None => true,
            Some(raw) => parse_bool("WHITEBOARD_BRUSH_SLIDER", &raw)?,
        };
        let initial_color = match env_value("WHITEBOARD_INITIAL_COLOR") {
            None => Color::BLACK,
            Some(raw) => Color::from_hex(&raw)
                .ok_or(ConfigError::InvalidColor { var: "WHITEBOARD_INITIAL_COLOR", value: raw })?,
        };
        let timer_default_secs = match env_value("WHITEBOARD_TIMER_DEFAULT_SECS") {
            None => DEFAULT_TIMER_SECS,
            Some(raw) => parse_timer_secs(&raw)?,
        };

        Ok(Self {
            panel: PanelConfig { palette_size, brush_slider, initial_color },
            session: SessionConfig { timer_default_secs },
        })
    }
}

fn env_value(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_owned()),
        _ => None,
    }
}

fn parse_palette_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(ConfigError::InvalidPaletteSize { var: "WHITEBOARD_PALETTE_SIZE", value: raw.to_owned() }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value: raw.to_owned() }),
    }
}

fn parse_timer_secs(raw: &str) -> Result<f32, ConfigError> {
    match raw.parse::<f32>() {
        Ok(secs) if secs.is_finite() => Ok(secs.clamp(TIMER_MIN_SECS, TIMER_MAX_SECS)),
        _ => Err(ConfigError::InvalidNumber { var: "WHITEBOARD_TIMER_DEFAULT_SECS", value: raw.to_owned() }),
    }
}
