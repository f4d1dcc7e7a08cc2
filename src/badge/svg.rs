//! SVG badge template.

/// Average glyph width in pixels at 11px Verdana
const CHAR_WIDTH: f64 = 6.5;
/// Horizontal padding on each side of a text box
const SIDE_PADDING: u32 = 10;
pub const BADGE_HEIGHT: u32 = 20;
const LABEL_BACKGROUND: &str = "#555";

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Width of a text box holding `text`, measured on the unescaped text.
pub fn box_width(text: &str) -> u32 {
    (text.chars().count() as f64 * CHAR_WIDTH).ceil() as u32 + 2 * SIDE_PADDING
}

/// Renders a two-tone badge.
///
/// `color` must already be resolved; it is embedded as-is.
pub fn render_badge(label: &str, value: &str, color: &str) -> String {
    let label_width = box_width(label);
    let value_width = box_width(value);
    let total_width = label_width + value_width;

    let label_x = f64::from(label_width) / 2.0;
    let value_x = f64::from(label_width) + f64::from(value_width) / 2.0;

    let label = escape_xml(label);
    let value = escape_xml(value);

    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{total}" height="{height}" role="img" aria-label="{label}: {value}">"##,
            r##"<title>{label}: {value}</title>"##,
            r##"<linearGradient id="s" x2="0" y2="100%"><stop offset="0" stop-color="#bbb" stop-opacity=".1"/><stop offset="1" stop-opacity=".1"/></linearGradient>"##,
            r##"<clipPath id="r"><rect width="{total}" height="{height}" rx="3" fill="#fff"/></clipPath>"##,
            r##"<g clip-path="url(#r)">"##,
            r##"<rect width="{lw}" height="{height}" fill="{label_bg}"/>"##,
            r##"<rect x="{lw}" width="{vw}" height="{height}" fill="{color}"/>"##,
            r##"<rect width="{total}" height="{height}" fill="url(#s)"/>"##,
            r##"</g>"##,
            r##"<g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="11">"##,
            r##"<text x="{lx}" y="14">{label}</text>"##,
            r##"<text x="{vx}" y="14">{value}</text>"##,
            r##"</g></svg>"##,
        ),
        total = total_width,
        height = BADGE_HEIGHT,
        lw = label_width,
        vw = value_width,
        lx = label_x,
        vx = value_x,
        label_bg = LABEL_BACKGROUND,
        color = color,
        label = label,
        value = value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"a<b & "c" 'd'>"#),
            "a&lt;b &amp; &quot;c&quot; &apos;d&apos;&gt;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_box_width() {
        assert_eq!(box_width(""), 20);
        assert_eq!(box_width("ab"), 33);
        assert_eq!(box_width("1.5K"), 46);
    }

    #[test]
    fn test_render_badge_structure() {
        let svg = render_badge("downloads", "1.5K", "#97CA00");

        let width = box_width("downloads") + box_width("1.5K");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(&format!(r#"width="{}""#, width)));
        assert!(svg.contains("<title>downloads: 1.5K</title>"));
        assert!(svg.contains(r##"fill="#555""##));
        assert!(svg.contains(r##"fill="#97CA00""##));
        assert!(svg.contains(">downloads</text>"));
        assert!(svg.contains(">1.5K</text>"));
    }

    #[test]
    fn test_render_badge_escapes_text() {
        let svg = render_badge(r#"<b>&"x""#, "1", "#123");
        assert!(svg.contains(">&lt;b&gt;&amp;&quot;x&quot;</text>"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn test_text_centered_in_boxes() {
        let svg = render_badge("ab", "c", "#123");
        // label box 33px, value box 27px
        assert!(svg.contains(r#"<text x="16.5" y="14">ab</text>"#));
        assert!(svg.contains(r#"<text x="46.5" y="14">c</text>"#));
    }
}
