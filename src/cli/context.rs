//! CLI context - bundles settings and arguments for one run.

use crossterm::style::Color;
use rand::rngs::OsRng;

use super::{LengthArg, check_range, parse, prompts};
use crate::exits;
use crate::pass::{self, BuildError, CharacterPool};
use crate::settings::{Settings, SettingsError};
use crate::terminal;

/// Early exit carrying the process exit code.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    settings_error: Option<SettingsError>,
    args: Vec<String>,
}

impl Context {
    /// Environment overrides that fail validation are dropped in favor of defaults.
    pub fn new(args: Vec<String>) -> Self {
        let (settings, settings_error) = match Settings::load() {
            Ok(settings) => (settings, None),
            Err(e) => {
                tracing::debug!(error = %e, "rejected settings overrides");
                (Settings::default(), Some(e))
            }
        };

        Self {
            settings,
            settings_error,
            args,
        }
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        terminal::set_color(self.settings.color && terminal::stdout_is_terminal());
        prompts::header();
        if let Some(e) = self.settings_error.take() {
            prompts::warn(&format!("Ignoring length overrides: {}", e));
        }

        let length = self.resolve_length()?;
        self.generate_output(length)
    }

    fn resolve_length(&self) -> Result<usize, Done> {
        let requested = parse(&self.args).map_err(|e| self.usage_error(&e.to_string()))?;

        match requested {
            LengthArg::Default => {
                let length = self.settings.default_length;
                prompts::warn(&format!("Using default length: {}", length));
                Ok(length)
            }
            LengthArg::Given(n) => {
                prompts::info(&format!("Using argument length: {}", n), Color::Yellow);
                check_range(n, &self.settings).map_err(|e| self.usage_error(&e.to_string()))
            }
        }
    }

    fn usage_error(&self, msg: &str) -> Done {
        tracing::debug!(args = self.args.len().saturating_sub(1), "rejected arguments");
        prompts::error(msg);
        prompts::usage(&self.settings);
        Done(exits::USAGE)
    }

    /// Build one password, rate it, and print both.
    fn generate_output(&self, length: usize) -> Result<(), Done> {
        let password = pass::build(CharacterPool::standard(), length, &mut OsRng).map_err(|e| {
            match &e {
                BuildError::EmptyCharacterClass(kind) => {
                    tracing::error!(%kind, "standard pool has an empty class")
                }
                _ => tracing::error!(error = %e, length, "password build failed"),
            }
            prompts::error(&e.to_string());
            Done(exits::FAILURE)
        })?;

        let strength = pass::evaluate(password.as_str());
        tracing::debug!(length, %strength, "password rated");
        prompts::generated(&password, strength);
        Ok(())
    }
}
