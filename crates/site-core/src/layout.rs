//! Card layout metrics read back from computed styles.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("empty CSS length")]
    Empty,
    #[error("CSS length '{0}' does not start with a number")]
    NotANumber(String),
}

/// Read the leading integer of a CSS length such as `"20px"` or `"-4.5rem"`.
///
/// Follows `parseInt` leniency: surrounding whitespace and any trailing unit
/// are ignored and the fractional part is dropped.
pub fn parse_css_px(value: &str) -> Result<f64, LayoutError> {
    let s = value.trim();
    if s.is_empty() {
        return Err(LayoutError::Empty);
    }
    let (sign, digits) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(LayoutError::NotANumber(s.to_string()));
    }
    let n: f64 = digits[..end]
        .parse()
        .map_err(|_| LayoutError::NotANumber(s.to_string()))?;
    Ok(sign * n)
}

/// Width of one card slot and how many original cards there are.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardMetrics {
    pub card_width: f64,
    pub margin: f64,
    pub count: usize,
}

impl CardMetrics {
    pub fn new(card_width: f64, margin: f64, count: usize) -> Self {
        Self {
            card_width,
            margin,
            count,
        }
    }

    /// Build from an element's offset width and its computed `margin-right`.
    pub fn from_css(card_width: f64, margin_right: &str, count: usize) -> Result<Self, LayoutError> {
        Ok(Self::new(card_width, parse_css_px(margin_right)?, count))
    }

    #[inline]
    pub fn slot_width(&self) -> f64 {
        self.card_width + self.margin
    }

    /// Offset at which one full pass over the original cards has scrolled by.
    #[inline]
    pub fn reset_bound(&self) -> f64 {
        (self.slot_width() * self.count as f64).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_css_px("20px"), Ok(20.0));
        assert_eq!(parse_css_px("  16px "), Ok(16.0));
        assert_eq!(parse_css_px("12.75px"), Ok(12.0));
        assert_eq!(parse_css_px("-8px"), Ok(-8.0));
        assert_eq!(parse_css_px("0"), Ok(0.0));
    }

    #[test]
    fn rejects_non_numeric_lengths() {
        assert_eq!(parse_css_px(""), Err(LayoutError::Empty));
        assert_eq!(
            parse_css_px("auto"),
            Err(LayoutError::NotANumber("auto".into()))
        );
        assert!(parse_css_px("px").is_err());
        assert!(parse_css_px("-").is_err());
    }

    #[test]
    fn reset_bound_spans_original_cards() {
        let m = CardMetrics::from_css(200.0, "20px", 5).unwrap();
        assert_eq!(m.reset_bound(), 1100.0);
        assert_eq!(CardMetrics::new(200.0, 20.0, 0).reset_bound(), 0.0);
    }
}
