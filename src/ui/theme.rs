use crossterm::style::Color;

use crate::tree::SpanStyle;

/// Design tokens for the Craftree terminal UI.
///
/// All colors and icons used by the widgets come from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
    pub const LEAF: &str = "·";
    pub const VERTICAL: &str = "│";
}

pub mod icons_ascii {
    pub const EXPAND: &str = "v";
    pub const COLLAPSE: &str = ">";
    pub const LEAF: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Expansion marker for a row
pub fn expansion_icon(expandable: bool, expanded: bool, unicode: bool) -> &'static str {
    match (expandable, expanded, unicode) {
        (false, _, true) => icons::LEAF,
        (false, _, false) => icons_ascii::LEAF,
        (true, true, true) => icons::EXPAND,
        (true, true, false) => icons_ascii::EXPAND,
        (true, false, true) => icons::COLLAPSE,
        (true, false, false) => icons_ascii::COLLAPSE,
    }
}

pub fn vertical_rule(unicode: bool) -> &'static str {
    if unicode {
        icons::VERTICAL
    } else {
        icons_ascii::VERTICAL
    }
}

/// Foreground color for a title fragment; `None` keeps the terminal default
pub fn span_color(style: SpanStyle) -> Option<Color> {
    match style {
        SpanStyle::Plain => None,
        SpanStyle::Quantity => Some(colors::SUCCESS),
        SpanStyle::Tag => Some(colors::INFO),
        SpanStyle::Cyclable => Some(colors::WARNING),
        SpanStyle::Missing => Some(colors::ERROR),
        SpanStyle::Heading => None,
        SpanStyle::Dim => Some(colors::DIM),
    }
}
