//! Color theme constants for the lectern UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Header text color - white for the app name
pub const COLOR_HEADER: Color = Color::White;

/// Accent color - white for highlights and the selection marker
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info (dates, hints, placeholders)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Active category pill
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Post body preview text
pub const COLOR_BODY: Color = Color::Gray;

/// Snackbar background
pub const COLOR_SNACKBAR_BG: Color = Color::Rgb(10, 15, 35);
