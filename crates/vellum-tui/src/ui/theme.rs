// Centralized theme for consistent UI styling.
// All colors are defined here; edit this file to change the look.

use ratatui::style::Color;
use vellum_core::models::AccentColor;

// -----------------------------------------------------------------------------
// Backgrounds
// -----------------------------------------------------------------------------

/// App background
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Sidebar background, almost black
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Secondary surfaces (context strips, code blocks)
pub const BG_SECONDARY: Color = Color::Rgb(23, 23, 23);

/// Selected row highlight
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

// -----------------------------------------------------------------------------
// Text
// -----------------------------------------------------------------------------

/// Primary text, off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints and placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accents
// -----------------------------------------------------------------------------

/// Primary accent for interactive elements and focus
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Muted red (destructive menu rows)
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

// -----------------------------------------------------------------------------
// Borders
// -----------------------------------------------------------------------------

pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

/// Concrete color for a model-level accent.
pub fn accent(color: AccentColor) -> Color {
    match color {
        AccentColor::Cyan => Color::Rgb(34, 211, 238),
        AccentColor::Pink => Color::Rgb(244, 114, 182),
        AccentColor::Amber => Color::Rgb(251, 191, 36),
        AccentColor::Emerald => Color::Rgb(52, 211, 153),
        AccentColor::Violet => Color::Rgb(167, 139, 250),
        AccentColor::Slate => Color::Rgb(148, 163, 184),
    }
}
