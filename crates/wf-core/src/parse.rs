//! Price and threshold text parsing
//!
//! The host page renders prices with currency symbols and, in some locales,
//! a comma decimal separator. Parsing here follows JS `parseFloat`
//! semantics: read the longest leading number and ignore trailing junk.

/// Parse the longest numeric prefix of `text` (optional sign, digits, one
/// decimal point). Trailing non-numeric text is ignored. Returns `None` when
/// no leading number is present.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'+' | b'-' if i == 0 => {}
            b'.' if !seen_dot => seen_dot = true,
            b'0'..=b'9' => seen_digit = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return None;
    }

    text[..end].parse::<f64>().ok()
}

/// Parse a price text such as "$19.99" or "7,49€", without a fallback.
///
/// A single leading non-digit character is stripped (currency symbol) and
/// the first comma is treated as a decimal separator. Returns `None` when no
/// number remains.
pub fn parse_price_strict(text: &str) -> Option<f64> {
    let mut text = text.trim();
    if !text.is_empty() && !text.starts_with(|c: char| c.is_ascii_digit()) {
        let mut chars = text.chars();
        chars.next();
        text = chars.as_str();
    }
    let normalized = text.replacen(',', ".", 1);
    parse_float_prefix(&normalized)
}

/// Parse a plain price text, falling back to `0.0` when no number is present
/// (most likely a free-to-play entry).
pub fn parse_price(text: &str) -> f64 {
    parse_price_strict(text).unwrap_or(0.0)
}

/// Parse a discount percentage text such as "-25%".
///
/// The page renders discounts as a negative delta; the result is normalized
/// to a positive magnitude. Returns `None` when the text carries no number.
pub fn parse_discount_percentage(text: &str) -> Option<f64> {
    parse_float_prefix(text.trim()).map(f64::abs)
}

/// Parse a threshold input field's text. Empty or unparsable input means
/// "unset", never an error.
pub fn parse_threshold(text: &str) -> Option<f64> {
    parse_float_prefix(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("19.99"), Some(19.99));
        assert_eq!(parse_float_prefix("19.99 USD"), Some(19.99));
        assert_eq!(parse_float_prefix("-25%"), Some(-25.0));
        assert_eq!(parse_float_prefix("7"), Some(7.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("free"), None);
        assert_eq!(parse_float_prefix("$5"), None);
    }

    #[test]
    fn test_parse_price_currency_symbol() {
        assert_eq!(parse_price("$19.99"), 19.99);
        assert_eq!(parse_price("€4.99"), 4.99);
        assert_eq!(parse_price("19.99"), 19.99);
        assert_eq!(parse_price("7,49€"), 7.49);
    }

    #[test]
    fn test_parse_price_comma_decimal() {
        assert_eq!(parse_price("1,99"), 1.99);
    }

    #[test]
    fn test_parse_price_strict_has_no_fallback() {
        assert_eq!(parse_price_strict("7,49€"), Some(7.49));
        assert_eq!(parse_price_strict("$0.99"), Some(0.99));
        assert_eq!(parse_price_strict("soon"), None);
        assert_eq!(parse_price_strict(""), None);
    }

    #[test]
    fn test_parse_price_free_to_play_fallback() {
        assert_eq!(parse_price("Free to Play"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn test_parse_discount_percentage() {
        assert_eq!(parse_discount_percentage("-25%"), Some(25.0));
        assert_eq!(parse_discount_percentage(" -80% "), Some(80.0));
        assert_eq!(parse_discount_percentage("-33.5%"), Some(33.5));
        assert_eq!(parse_discount_percentage("%"), None);
        assert_eq!(parse_discount_percentage(""), None);
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("10"), Some(10.0));
        assert_eq!(parse_threshold(" 12.5 "), Some(12.5));
        assert_eq!(parse_threshold("12abc"), Some(12.0));
        assert_eq!(parse_threshold(""), None);
        assert_eq!(parse_threshold("abc"), None);
    }
}
