//! Terminal output utilities.
//!
//! Banner box drawing and color-aware styling.

use crossterm::style::{Color, Stylize, style};

use super::color_enabled;

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Wrap `text` in `color` when color output is on.
pub fn paint(text: &str, color: Color) -> String {
    if color_enabled() {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Reset escape for cleanup paths, empty when color output is off.
pub fn reset_sequence() -> &'static str {
    if color_enabled() { "\x1b[0m" } else { "" }
}

// ============================================================================
// Box Drawing (41 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 41;

/// Box top: ┌──────────────┐
pub fn box_top() -> String {
    format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
}

/// Centered box content line: │     content     │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        )
    } else {
        format!("│ {} │", content)
    }
}

/// Box bottom: └──────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// A closed box around centered lines.
pub fn banner(lines: &[&str]) -> String {
    let mut out = box_top();
    for line in lines {
        out.push('\n');
        out.push_str(&box_line_center(line));
    }
    out.push('\n');
    out.push_str(&box_bottom());
    out
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
