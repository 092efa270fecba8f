/// Deterministic, backend-independent label width estimate in pixels.
///
/// Backends that can shape text override `Renderer::measure_text_width`;
/// this estimate is the fallback.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

#[cfg(test)]
mod tests {
    use super::estimate_text_width_px;

    #[test]
    fn estimate_grows_with_text_and_font_size() {
        let short = estimate_text_width_px("1.00", 10.0);
        let long = estimate_text_width_px("100.00", 10.0);
        assert!(long > short);
        assert!(estimate_text_width_px("100.00", 20.0) > long);
    }

    #[test]
    fn estimate_never_drops_below_one_em() {
        assert_eq!(estimate_text_width_px("", 12.0), 12.0);
    }
}
