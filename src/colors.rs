//! Color utilities for request ID visualization.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// The 12 distinct ANSI colors used for request ID coloring
///
/// Standard and bright variants that stay readable on both light and dark
/// terminal backgrounds. Black/white variants are excluded since one of them
/// always disappears into the background.
const PALETTE: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Deterministically maps a request ID to one of the palette colors
///
/// FNV-1a over the ID bytes, so the same ID always gets the same color within
/// and across runs.
pub fn color_for_id(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(0x811c9dc5u32, |acc, b| (acc ^ b as u32).wrapping_mul(0x01000193));
    PALETTE[(hash % PALETTE.len() as u32) as usize]
}

/// Formats a request ID with consistent color coding
///
/// Returns a `String` with embedded ANSI color codes; owo-colors degrades to
/// plain text when output isn't a terminal.
pub fn colored_id(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(color_for_id(id)));
    format!("[{}]", id).style(style).to_string()
}
