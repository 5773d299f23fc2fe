use regex::Regex;
use std::sync::LazyLock;

/// Colors assigned to ingredients by position, shared by the list and the chart
pub const CHART_COLORS: [&str; 15] = [
    "#f4c2c2", "#90EE90", "#DEB887", "#FFD700", "#98D8C8", //
    "#ADD8E6", "#DDA0DD", "#F0E68C", "#E6E6FA", "#FFDAB9", //
    "#B0E0E6", "#FFB6C1", "#87CEEB", "#F5DEB3", "#D8BFD8",
];

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex"));

/// Color for the ingredient at `index`; wraps after 15 ingredients
pub fn color_for(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Whether `color` is a `#RRGGBB` hex triplet
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR_REGEX.is_match(color)
}

/// Every palette entry that isn't a `#RRGGBB` hex triplet
pub fn invalid_palette_entries() -> Vec<&'static str> {
    CHART_COLORS
        .iter()
        .copied()
        .filter(|color| !is_hex_color(color))
        .collect()
}

/// Split a `#RRGGBB` color into its channels
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    if !is_hex_color(color) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&color[range], 16).ok();
    Some((channel(1..3)?, channel(3..5)?, channel(5..7)?))
}
