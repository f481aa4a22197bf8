//! Display formatting for addresses and amounts.

/// Characters kept on each side of a shortened address by default
pub const DEFAULT_ADDRESS_CHARS: usize = 4;

/// Abbreviate an address to `0x1234...abcd` form.
///
/// Keeps the first `chars + 2` characters (the `0x` prefix plus `chars`
/// digits) and the last `chars`. Inputs shorter than `chars * 2 + 2`
/// characters are returned unchanged. Counts characters, not bytes.
///
/// ```rust
/// use bondfi_web::utils::shorten_address;
///
/// let addr = "0x1234567890abcdef1234567890abcdef12345678";
/// assert_eq!(shorten_address(addr, 4), "0x1234...5678");
/// assert_eq!(shorten_address("0x12", 4), "0x12");
/// ```
pub fn shorten_address(address: &str, chars: usize) -> String {
    let len = address.chars().count();
    if len < chars.saturating_mul(2).saturating_add(2) {
        return address.to_string();
    }

    let head: String = address.chars().take(chars.saturating_add(2)).collect();
    let tail: String = address.chars().skip(len - chars).collect();
    format!("{head}...{tail}")
}

/// [`shorten_address`] with [`DEFAULT_ADDRESS_CHARS`].
pub fn shorten_address_default(address: &str) -> String {
    shorten_address(address, DEFAULT_ADDRESS_CHARS)
}

/// Round to two decimal places, half toward positive infinity on the
/// scaled value (`Math.round(n * 100) / 100`).
///
/// Binary floating point decides the edge cases: `1.005 * 100` is
/// `100.49999999999999`, so `1.005` rounds to `1.0`.
pub fn round_to_two_decimal_places(n: f64) -> f64 {
    round_to_decimal_places(n, 2)
}

/// Round to `places` decimal places with the same half-up rule as
/// [`round_to_two_decimal_places`]. NaN and infinities pass through.
pub fn round_to_decimal_places(n: f64, places: u32) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = n * factor;
    if !scaled.is_finite() {
        return n;
    }
    // `scaled + 0.5` is inexact near 0.5 and above 2^52; the fractional
    // part from `scaled - floor` is exact.
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ADDR: &str = "0x1234567890abcdef1234567890abcdef12345678";

    #[test]
    fn shortens_long_address() {
        assert_eq!(shorten_address(ADDR, 4), "0x1234...5678");
        assert_eq!(shorten_address(ADDR, 6), "0x123456...345678");
        assert_eq!(shorten_address_default(ADDR), "0x1234...5678");
    }

    #[test]
    fn inputs_below_threshold_are_unchanged() {
        // exactly chars * 2 + 2 is long enough to shorten
        assert_eq!(shorten_address("0x12345678", 4), "0x1234...5678");
        assert_eq!(shorten_address("0x1234567", 4), "0x1234567");
        assert_eq!(shorten_address("", 4), "");
    }

    #[test]
    fn huge_char_counts_return_input() {
        assert_eq!(shorten_address("0x1234", usize::MAX / 2 + 1), "0x1234");
        assert_eq!(shorten_address(ADDR, usize::MAX), ADDR);
    }

    #[test]
    fn zero_chars_keeps_prefix_only() {
        assert_eq!(shorten_address("0xabc", 0), "0x...");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let input = "ééééééééééééé";
        assert_eq!(shorten_address(input, 4), "éééééé...éééé");
    }

    #[test]
    fn rounds_like_math_round() {
        assert_eq!(round_to_two_decimal_places(1.005), 1.0);
        assert_eq!(round_to_two_decimal_places(2.675), 2.68);
        assert_eq!(round_to_two_decimal_places(3.14159), 3.14);
        assert_eq!(round_to_two_decimal_places(0.125), 0.13);
        assert_eq!(round_to_two_decimal_places(-0.125), -0.12);
        assert_eq!(round_to_two_decimal_places(-1.5), -1.5);
        assert_eq!(round_to_two_decimal_places(42.0), 42.0);
    }

    #[test]
    fn values_just_below_half_round_down() {
        assert_eq!(round_to_decimal_places(0.49999999999999994, 0), 0.0);
        assert_eq!(round_to_decimal_places(-0.5, 0), 0.0);
    }

    #[test]
    fn large_values_keep_their_precision() {
        assert_eq!(round_to_decimal_places(4503599627370497.0, 0), 4503599627370497.0);
        assert_eq!(
            round_to_two_decimal_places(45035996273704.97),
            45035996273704.97
        );
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to_two_decimal_places(f64::NAN).is_nan());
        assert_eq!(round_to_two_decimal_places(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_to_two_decimal_places(f64::MAX), f64::MAX);
    }

    #[test]
    fn rounds_to_other_precisions() {
        assert_eq!(round_to_decimal_places(1.23456, 4), 1.2346);
        assert_eq!(round_to_decimal_places(7.5, 0), 8.0);
        assert_eq!(round_to_decimal_places(-7.5, 0), -7.0);
    }
}
