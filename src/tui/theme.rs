//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

/// Luma above which the terminal background counts as light
const LIGHT_LUMA: f32 = 0.6;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // General colors
    pub title_color: Color,
    pub muted: Color,

    // Progress and score bars
    pub bar_filled: Color,
    pub bar_empty: Color,

    // Option list
    pub option_selected: Style,

    // Results screen
    pub level_high: Color,
    pub level_low: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_color: Color,

    // Popup overlay colors
    pub popup_border: Color,
}

impl ThemeColors {
    /// Dark background palette
    pub fn dark() -> Self {
        Self {
            title_color: Color::Cyan,
            muted: Color::Gray,
            bar_filled: Color::Cyan,
            bar_empty: Color::DarkGray,
            option_selected: Style::new().reversed(),
            level_high: Color::Green,
            level_low: Color::Yellow,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_color: Color::Yellow,
            popup_border: Color::Cyan,
        }
    }

    /// Light background palette
    pub fn light() -> Self {
        Self {
            title_color: Color::Blue,
            muted: Color::DarkGray,
            bar_filled: Color::Blue,
            bar_empty: Color::Indexed(250),
            option_selected: Style::new().reversed(),
            level_high: Color::Indexed(28),
            level_low: Color::Indexed(130),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_color: Color::Indexed(130),
            popup_border: Color::Blue,
        }
    }
}

/// Pick a palette from the terminal background luma.
/// Must run before the terminal enters raw mode; falls back to dark when
/// detection fails.
pub fn resolve_theme() -> ThemeColors {
    match terminal_light::luma() {
        Ok(luma) if luma > LIGHT_LUMA => ThemeColors::light(),
        _ => ThemeColors::dark(),
    }
}
