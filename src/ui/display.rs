//! Calculator display rendering.
//!
//! Renders a frame as two lines: the running expression in a muted style
//! above the current operand in bold. Error operands use the theme's error
//! color.

use crate::session::Frame;
use crate::theme::Theme;
use owo_colors::OwoColorize;

/// Render `frame` for the terminal.
///
/// With `color` off the output is plain text, which is also what tests and
/// pipes see.
pub fn render(frame: &Frame, theme: Theme, color: bool) -> String {
    if !color {
        return format!("{}\n{}", frame.expression, frame.current);
    }

    let palette = theme.palette();
    let operand_style = if frame.is_error() {
        palette.error
    } else {
        palette.operand
    };

    format!(
        "{}\n{}",
        frame.expression.style(palette.expression),
        frame.current.style(operand_style)
    )
}

/// Render the history list, numbered from 1 as used by `:reuse`.
pub fn render_history<'a>(entries: impl Iterator<Item = &'a str>) -> String {
    let lines: Vec<String> = entries
        .enumerate()
        .map(|(i, entry)| format!("{:>2}. {}", i + 1, entry))
        .collect();

    if lines.is_empty() {
        "(no history)".to_string()
    } else {
        lines.join("\n")
    }
}
