//! Color theme constants for the triagem UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Active input / selected tab
pub const COLOR_ACTIVE: Color = Color::Cyan;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Outcome Colors
// ============================================================================

/// Result panel border and category badge
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error panel border and message
pub const COLOR_ERROR: Color = Color::Red;

/// Copy confirmation label
pub const COLOR_CONFIRM: Color = Color::LightGreen;

/// Notice line in the footer
pub const COLOR_NOTICE: Color = Color::Yellow;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the alert and busy overlay
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
