//! Centralized notices and result output for the CLI.
//!
//! Notices and errors go to stderr; the password and its rating go to stdout.

use crossterm::style::Color;

use crate::pass::{Password, StrengthLevel};
use crate::settings::Settings;
use crate::terminal::{banner, paint};

const TITLE: &str = "Strong Password Generator";

/// Print the banner to stderr (magenta).
pub fn header() {
    eprintln!("{}", paint(&banner(&[TITLE]), Color::Magenta));
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{}", paint(msg, Color::Yellow));
}

/// Print an informational notice to stderr.
pub fn info(msg: &str, color: Color) {
    eprintln!("{}", paint(msg, color));
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{}", paint(msg, Color::Red));
}

pub fn usage(settings: &Settings) {
    warn(&usage_text(settings));
}

fn usage_text(settings: &Settings) -> String {
    format!(
        "Usage: strongpass [length]\n \
         - [length] must be a number between {} and {}.\n \
         - If no argument is provided, default length of {} is used.",
        settings.min_length, settings.max_length, settings.default_length
    )
}

pub fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => Color::Red,
        StrengthLevel::Fair => Color::Yellow,
        StrengthLevel::Strong => Color::Blue,
        StrengthLevel::VeryStrong => Color::Green,
    }
}

/// Print the password (green) and its rating to stdout.
pub fn generated(password: &Password, strength: StrengthLevel) {
    println!(
        "{}",
        paint(&format!("Generated Password: {}", password), Color::Green)
    );
    println!(
        "{}",
        paint(
            &format!("Password Strength: {}", strength),
            strength_color(strength)
        )
    );
}
