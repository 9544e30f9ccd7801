//! Formatting helpers for presenting wizard output.

/// Score label shown on the result screen, e.g. `42%`.
pub fn format_score(score: u8) -> String {
    format!("{score}%")
}

/// Color of the answer underline as the user types. Shifts from a muted
/// teal towards a bright green over the first 60 characters.
pub fn underline_color(len: usize) -> String {
    let ratio = (len as f64 / 60.0).min(1.0);
    let hue = 120.0 + (1.0 - ratio) * 60.0;
    let saturation = 30.0 + ratio * 40.0;
    let lightness = 40.0 + ratio * 30.0;
    format!("hsl({hue:.0}, {saturation:.0}%, {lightness:.0}%)")
}

/// Compact SVG number (two decimals, trailing zeros trimmed).
pub fn format_coord(value: f64) -> String {
    let mut out = format!("{value:.2}");
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
    if out == "-0" {
        out = "0".into();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_label_has_percent_suffix() {
        assert_eq!(format_score(0), "0%");
        assert_eq!(format_score(100), "100%");
    }

    #[test]
    fn underline_starts_muted_and_saturates() {
        assert_eq!(underline_color(0), "hsl(180, 30%, 40%)");
        assert_eq!(underline_color(60), "hsl(120, 70%, 70%)");
        assert_eq!(underline_color(500), underline_color(60));
    }

    #[test]
    fn coords_trim_trailing_zeros() {
        assert_eq!(format_coord(12.0), "12");
        assert_eq!(format_coord(12.5), "12.5");
        assert_eq!(format_coord(1.23456), "1.23");
        assert_eq!(format_coord(-0.001), "0");
    }
}
