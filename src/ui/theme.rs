//! Dark theme for mazetui
//!
//! Color palette and style helpers for the TUI.
//! Material-style dark surfaces with a violet primary.

use ratatui::style::{Color, Modifier, Style};

/// Dark color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #121212
    pub const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);

    /// Surface (cards, panels): #1e1e1e
    pub const SURFACE: Color = Color::Rgb(0x1e, 0x1e, 0x1e);

    /// Raised surface (inputs, keypad): #2c2c2c
    pub const SURFACE_RAISED: Color = Color::Rgb(0x2c, 0x2c, 0x2c);

    /// Primary: #6200ee (violet, used as a fill)
    pub const PRIMARY: Color = Color::Rgb(0x62, 0x00, 0xee);

    /// Primary variant for text on dark backgrounds: #bb86fc
    pub const PRIMARY_LIGHT: Color = Color::Rgb(0xbb, 0x86, 0xfc);

    /// Secondary: #03dac6 (teal)
    pub const SECONDARY: Color = Color::Rgb(0x03, 0xda, 0xc6);

    /// Favorite marker: #ffc107 (amber)
    pub const FAVORITE: Color = Color::Rgb(0xff, 0xc1, 0x07);

    /// Text: #e0e0e0
    pub const TEXT: Color = Color::Rgb(0xe0, 0xe0, 0xe0);

    /// On-primary text: #ffffff
    pub const ON_PRIMARY: Color = Color::Rgb(0xff, 0xff, 0xff);

    /// Dim: #8a8a8a
    pub const DIM: Color = Color::Rgb(0x8a, 0x8a, 0x8a);

    /// Error: #ff4d4d
    pub const ERROR: Color = Color::Rgb(0xff, 0x4d, 0x4d);

    /// Border color
    pub const BORDER: Color = Self::SURFACE_RAISED;

    /// Border color when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY_LIGHT;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Success / status message style
    pub fn success() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Section label (e.g. "Airs on:")
    pub fn label() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Style for list items (normal state)
    pub fn list_item() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Style for list items (selected/highlighted)
    pub fn list_item_selected() -> Style {
        Style::default()
            .fg(Self::ON_PRIMARY)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab in the header
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::ON_PRIMARY)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab in the header
    pub fn tab() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Style for input fields
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE_RAISED)
    }

    /// Style for input cursor
    pub fn input_cursor() -> Style {
        Style::default().fg(Self::ON_PRIMARY).bg(Self::PRIMARY_LIGHT)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    /// Keybinding description style
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    /// Loading indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Favorite star
    pub fn favorite() -> Style {
        Style::default()
            .fg(Self::FAVORITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Genre tags
    pub fn genre() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Filled PIN dot
    pub fn pin_filled() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Empty PIN dot
    pub fn pin_empty() -> Style {
        Style::default().fg(Self::SURFACE_RAISED)
    }

    /// Keypad button
    pub fn keypad() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE_RAISED)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance for a color
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, 1 (same color) to 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
