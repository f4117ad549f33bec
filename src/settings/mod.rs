//! Length policy and output preferences.
//!
//! Built-in defaults can be overridden from the environment:
//! `STRONGPASS_DEFAULT_LENGTH`, `STRONGPASS_MIN_LENGTH`,
//! `STRONGPASS_MAX_LENGTH`, and `NO_COLOR`.

use std::env;

use thiserror::Error;

use crate::pass::{CharacterPool, MIN_LENGTH};

pub const DEFAULT_LENGTH_VAR: &str = "STRONGPASS_DEFAULT_LENGTH";
pub const MIN_LENGTH_VAR: &str = "STRONGPASS_MIN_LENGTH";
pub const MAX_LENGTH_VAR: &str = "STRONGPASS_MAX_LENGTH";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{key} must be a whole number, got '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error(
        "length bounds must satisfy {floor} <= min ({min}) <= default ({default}) <= max ({max}) <= {ceiling}"
    )]
    Inconsistent {
        min: usize,
        default: usize,
        max: usize,
        floor: usize,
        ceiling: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub color: bool,
}

impl Settings {
    /// Defaults overlaid with any overrides found in the environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(n) = read_length(&lookup, DEFAULT_LENGTH_VAR)? {
            settings.default_length = n;
        }
        if let Some(n) = read_length(&lookup, MIN_LENGTH_VAR)? {
            settings.min_length = n;
        }
        if let Some(n) = read_length(&lookup, MAX_LENGTH_VAR)? {
            settings.max_length = n;
        }
        if lookup(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()) {
            settings.color = false;
        }

        settings.validate()?;
        tracing::debug!(?settings, "settings resolved");
        Ok(settings)
    }

    /// Bounds must fit what the standard pool can build.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let floor = MIN_LENGTH;
        let ceiling = CharacterPool::standard().capacity();
        let ordered = floor <= self.min_length
            && self.min_length <= self.default_length
            && self.default_length <= self.max_length
            && self.max_length <= ceiling;

        if ordered {
            Ok(())
        } else {
            Err(SettingsError::Inconsistent {
                min: self.min_length,
                default: self.default_length,
                max: self.max_length,
                floor,
                ceiling,
            })
        }
    }

    pub fn allows(&self, length: i64) -> bool {
        usize::try_from(length)
            .map(|n| (self.min_length..=self.max_length).contains(&n))
            .unwrap_or(false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_length: 10,
            min_length: 8,
            max_length: 40,
            color: true,
        }
    }
}

fn read_length<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::InvalidValue { key, value: raw }),
    }
}
