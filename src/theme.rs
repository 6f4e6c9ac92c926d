//! Theme module for unbored
//!
//! Centralized color palette and border constants for the UI. The palette
//! leans warm: amber accents over a dark slate background, since this is
//! an app for deciding what to do with an evening.

use ratatui::style::Color;
use ratatui::symbols::border;

/// Rounded corners on every card and panel.
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors
// ============================================================================

/// Card and panel background (#151a21)
pub const BG_PANEL: Color = Color::Rgb(21, 26, 33);

/// Background for the highlighted row (#20262f)
pub const BG_HIGHLIGHT: Color = Color::Rgb(32, 38, 47);

/// Subtle border color (#2a3240)
pub const BORDER_SUBTLE: Color = Color::Rgb(42, 50, 64);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary amber accent (#f5b453)
pub const ACCENT: Color = Color::Rgb(245, 180, 83);

/// Dimmed accent for secondary chrome (#9a7436)
pub const ACCENT_DIM: Color = Color::Rgb(154, 116, 54);

// ============================================================================
// Status Colors
// ============================================================================

/// Done-entry indicator (#6fcf97)
pub const GREEN_DONE: Color = Color::Rgb(111, 207, 151);

/// Inline notice color (#e8c06f)
pub const AMBER_NOTICE: Color = Color::Rgb(232, 192, 111);

/// Error banner color (#ef7b7b)
pub const RED_ERROR: Color = Color::Rgb(239, 123, 123);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text (#e6e1d7)
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 225, 215);

/// Secondary text (#a3a096)
pub const TEXT_SECONDARY: Color = Color::Rgb(163, 160, 150);

/// Muted text for hints and labels (#6e6c64)
pub const TEXT_MUTED: Color = Color::Rgb(110, 108, 100);
