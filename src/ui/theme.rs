use crate::step::HighlightKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color, // Grey
    pub success: Color, // Green
    pub error: Color,   // Red
    pub primary: Color, // Blue
    pub accent: Color,  // Orange
    pub keyword: Color,
    pub number: Color,
    pub function: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub cell_border: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    primary: Color::Rgb(137, 180, 250),        // Blue
    accent: Color::Rgb(250, 179, 135),         // Orange
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    function: Color::Rgb(249, 226, 175),       // Yellow for operation calls
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current step
    cell_border: Color::Rgb(148, 226, 213),    // Cyan/teal for structure cells
};

/// Map a semantic highlight role to its display color.
pub fn highlight_color(kind: HighlightKind) -> Color {
    match kind {
        HighlightKind::Created => DEFAULT_THEME.success,
        HighlightKind::Inserted => DEFAULT_THEME.success,
        HighlightKind::Removed => DEFAULT_THEME.error,
        HighlightKind::Updated => DEFAULT_THEME.accent,
        HighlightKind::Compared => DEFAULT_THEME.primary,
        HighlightKind::Swapped => DEFAULT_THEME.accent,
        HighlightKind::Probed => DEFAULT_THEME.primary,
        HighlightKind::Found => DEFAULT_THEME.success,
        HighlightKind::Range => DEFAULT_THEME.comment,
        HighlightKind::Midpoint => DEFAULT_THEME.accent,
        HighlightKind::Reversed => DEFAULT_THEME.primary,
    }
}
