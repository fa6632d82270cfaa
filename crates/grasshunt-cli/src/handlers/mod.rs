pub mod players;
pub mod report;
pub mod scenes;

use owo_colors::{AnsiColors, OwoColorize};

/// Color text only when stdout is a terminal; piped output stays clean.
pub(crate) fn paint(text: &str, color: AnsiColors, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}
