//! Color theme constants for the taskdeck UI.
//!
//! Minimal dark palette in the same spirit as the rest of the chrome:
//! dark-gray structure, white accents, color reserved for state.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Accent color for highlights and focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Pending (still-to-do) titles
pub const COLOR_PENDING: Color = Color::Gray;

/// Completed titles (struck through)
pub const COLOR_DONE: Color = Color::DarkGray;

/// Inline-edit input text
pub const COLOR_EDIT: Color = Color::LightCyan;

/// Action buttons ([edit] / [del])
pub const COLOR_BUTTON: Color = Color::Gray;

/// Error dialog border and title
pub const COLOR_ERROR: Color = Color::LightRed;
