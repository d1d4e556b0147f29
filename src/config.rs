//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use crate::reducer::ReduceOptions;

/// Environment variable holding the maximum number of undo steps.
pub const HISTORY_LIMIT_VAR: &str = "TEXTCANVAS_HISTORY_LIMIT";
/// Environment variable toggling defensive clamping of drag frames.
pub const CLAMP_MOVES_VAR: &str = "TEXTCANVAS_CLAMP_MOVES";

/// Unlimited history.
pub const DEFAULT_HISTORY_LIMIT: usize = 0;
pub const DEFAULT_CLAMP_MOVES: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

impl ConfigError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "E_CONFIG_INVALID",
            Self::NotUnicode { .. } => "E_CONFIG_NOT_UNICODE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Maximum undo steps retained; `0` keeps everything.
    pub history_limit: usize,
    /// Clamp `MoveElement` positions against the canvas even though the
    /// gesture layer already does.
    pub clamp_moves: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { history_limit: DEFAULT_HISTORY_LIMIT, clamp_moves: DEFAULT_CLAMP_MOVES }
    }
}

impl EditorConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `TEXTCANVAS_HISTORY_LIMIT`: non-negative integer, default 0 (unlimited)
    /// - `TEXTCANVAS_CLAMP_MOVES`: `true|false|1|0`, default true
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let history_limit = match read(&lookup, HISTORY_LIMIT_VAR)? {
            Some(raw) => parse_limit(&raw)?,
            None => DEFAULT_HISTORY_LIMIT,
        };
        let clamp_moves = match read(&lookup, CLAMP_MOVES_VAR)? {
            Some(raw) => parse_bool(CLAMP_MOVES_VAR, &raw)?,
            None => DEFAULT_CLAMP_MOVES,
        };
        Ok(Self { history_limit, clamp_moves })
    }

    /// Reducer options derived from this config.
    #[must_use]
    pub fn reduce_options(&self) -> ReduceOptions {
        ReduceOptions { clamp_moves: self.clamp_moves }
    }
}

fn read<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

fn parse_limit(raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse::<usize>().map_err(|_| ConfigError::Invalid {
        var: HISTORY_LIMIT_VAR,
        value: raw.to_string(),
        reason: "expected a non-negative integer",
    })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw.to_string(), reason: "expected true, false, 1 or 0" }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
