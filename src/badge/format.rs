//! Compact number formatting for badge values.

const SUFFIXES: &[(f64, &str)] = &[(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Formats a count for display on a badge.
///
/// Values below 1000 are shown as plain integers. Larger values use at most
/// one fractional digit and a magnitude suffix (`1500` -> `1.5K`).
/// Non-finite input renders as `"0"`.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.abs() < 1000.0 {
        return format!("{}", value.round() as i64);
    }

    let mut index = SUFFIXES
        .iter()
        .rposition(|(threshold, _)| value.abs() >= *threshold)
        .unwrap_or(0);
    let mut scaled = round_one_decimal(value / SUFFIXES[index].0);

    // 999_950 rounds to 1000K; promote to the next magnitude.
    if scaled.abs() >= 1000.0 && index + 1 < SUFFIXES.len() {
        index += 1;
        scaled = round_one_decimal(value / SUFFIXES[index].0);
    }

    let suffix = SUFFIXES[index].1;
    if scaled.fract() == 0.0 {
        format!("{:.0}{}", scaled, suffix)
    } else {
        format!("{:.1}{}", scaled, suffix)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
