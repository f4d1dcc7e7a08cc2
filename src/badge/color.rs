//! Badge color resolution.

/// Color used when the requested color cannot be resolved
pub const DEFAULT_COLOR: &str = "#0d9488";

/// Keyword colors, including Shields-style severity aliases.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("brightgreen", "#4c1"),
    ("green", "#97CA00"),
    ("yellowgreen", "#a4a61d"),
    ("yellow", "#dfb317"),
    ("orange", "#fe7d37"),
    ("red", "#e05d44"),
    ("blue", "#007ec6"),
    ("grey", "#555"),
    ("gray", "#555"),
    ("lightgrey", "#9f9f9f"),
    ("lightgray", "#9f9f9f"),
    ("success", "#4c1"),
    ("important", "#fe7d37"),
    ("critical", "#e05d44"),
    ("informational", "#007ec6"),
    ("inactive", "#9f9f9f"),
];

/// Resolves a caller-supplied color to a hex string safe to embed in SVG.
///
/// `#rgb` and `#rrggbb` are returned verbatim, keywords are looked up
/// case-insensitively, anything else yields [`DEFAULT_COLOR`].
pub fn resolve_color(raw: Option<&str>) -> &str {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_COLOR;
    };

    if is_hex_color(raw) {
        return raw;
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(raw))
        .map(|(_, hex)| *hex)
        .unwrap_or(DEFAULT_COLOR)
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
