//! Magnitude formatting and digit grouping.
//!
//! `format_value` renders a scalar with the best-fitting SI prefix:
//!
//! ```text
//! [' '][-]<mantissa rounded to `decimals`><prefix><unit>
//! ```
//!
//! Zero always renders as `0.0<unit>`, magnitudes below `1e-18` collapse to
//! `ε<unit>` and non-finite values pass through as `NaN` / `inf`.

use core::fmt::Write;

use crate::Real;
use crate::prefix::SiPrefix;

pub const DEFAULT_DECIMALS: usize = 3;
pub const DEFAULT_SEPARATOR: char = ' ';
/// Emitted in place of a mantissa below the atto bucket.
pub const UNDERFLOW_MARKER: &str = "ε";

/// Rendering knobs shared by every wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct FormatOptions {
    pub decimals: usize,
    pub leading_space: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            leading_space: true,
        }
    }
}

impl FormatOptions {
    pub fn with_decimals(self, decimals: usize) -> Self {
        Self { decimals, ..self }
    }

    pub fn with_leading_space(self, leading_space: bool) -> Self {
        Self {
            leading_space,
            ..self
        }
    }
}

/// Format `value` with an SI prefix in front of `unit`.
///
/// Total over every input. Only the mantissa path allocates `decimals`
/// digits; zero, underflow and non-finite values ignore it.
pub fn format_value(value: Real, unit: &str, decimals: usize, leading_space: bool) -> String {
    let mut out = String::with_capacity(unit.len() + 8);
    if leading_space {
        out.push(' ');
    }
    if value < 0.0 {
        out.push('-');
    }

    let abs = value.abs();
    if abs == 0.0 {
        out.push_str("0.0");
    } else if !abs.is_finite() {
        let _ = write!(out, "{abs}");
    } else {
        match SiPrefix::for_magnitude(abs) {
            Some(prefix) => {
                let _ = write!(out, "{:.*}{}", decimals, prefix.scale(abs), prefix.symbol());
            }
            None => out.push_str(UNDERFLOW_MARKER),
        }
    }
    out.push_str(unit);
    out
}

pub fn format_with(value: Real, unit: &str, options: FormatOptions) -> String {
    format_value(value, unit, options.decimals, options.leading_space)
}

/// Render `value` with `decimals` fractional digits and `separator` between
/// every group of three integer digits.
///
/// The sign stays in front, the fractional part is left untouched.
pub fn group_thousands(value: Real, decimals: usize, separator: char) -> String {
    let plain = format!("{value:.decimals$}");
    if !value.is_finite() {
        return plain;
    }

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3 * separator.len_utf8());
    out.push_str(sign);
    // int_part is ASCII digits only
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out.push_str(frac_part);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ignores_decimals() {
        for d in [0, 1, 3, 9] {
            assert_eq!(format_value(0.0, "V", d, true), " 0.0V");
        }
        assert_eq!(format_value(-0.0, "V", 2, true), " 0.0V");
        assert_eq!(format_value(0.0, "V", 2, false), "0.0V");
    }

    #[test]
    fn kilo_ohms() {
        assert_eq!(format_value(1500.0, "Ω", 2, true), " 1.50kΩ");
        assert_eq!(format_value(1500.0, "Ω", 3, true), " 1.500kΩ");
        assert_eq!(format_value(4700.0, "Ω", 1, false), "4.7kΩ");
    }

    #[test]
    fn zero_decimals_drops_the_point() {
        assert_eq!(format_value(1000.0, "Ω", 0, true), " 1kΩ");
        assert_eq!(format_value(1500.0, "Ω", 0, true), " 2kΩ");
        assert_eq!(format_value(100.0, "Ω", 0, true), " 100Ω");
    }

    #[test]
    fn negative_values_keep_sign_after_space() {
        assert_eq!(format_value(-12.5, "V", 1, true), " -12.5V");
        assert_eq!(format_value(-0.0047, "A", 1, false), "-4.7mA");
    }

    #[test]
    fn large_magnitudes() {
        assert_eq!(format_value(2_400_000_000.0, "Hz", 3, true), " 2.400GHz");
        assert_eq!(format_value(15_000_000.0, "Hz", 1, true), " 15.0MHz");
        assert_eq!(format_value(3.2e12, "W", 1, true), " 3.2TW");
        assert_eq!(format_value(5.0e15, "W", 0, true), " 5000TW");
    }

    #[test]
    fn small_magnitudes() {
        assert_eq!(format_value(0.000000012, "A", 6, true), " 12.000000nA");
        assert_eq!(format_value(0.005, "A", 4, true), " 5.0000mA");
        assert_eq!(format_value(0.00015, "A", 3, true), " 150.000µA");
        assert_eq!(format_value(1e-12, "F", 6, true), " 1.000000pF");
        assert_eq!(format_value(4.7e-15, "F", 1, true), " 4.7fF");
        assert_eq!(format_value(2e-18, "C", 1, true), " 2.0aC");
    }

    #[test]
    fn huge_decimals_on_fixed_renderings() {
        assert_eq!(format_value(0.0, "V", usize::MAX, true), " 0.0V");
        assert_eq!(format_value(1e-20, "V", 1 << 40, true), " εV");
        assert_eq!(format_value(f64::NAN, "V", usize::MAX, false), "NaNV");
    }

    #[test]
    fn mantissa_uses_exact_power_of_ten() {
        assert_eq!(format_value(3.7499999999999997e-6, "A", 1, false), "3.7µA");
        assert_eq!(format_value(3.7499999999999997, "A", 1, false), "3.7A");
    }

    #[test]
    fn below_atto_is_epsilon() {
        assert_eq!(format_value(1e-19, "V", 3, true), " εV");
        assert_eq!(format_value(-1e-19, "V", 3, false), "-εV");
        assert_eq!(format_value(f64::MIN_POSITIVE / 4.0, "V", 3, false), "εV");
    }

    #[test]
    fn unprefixed_bucket() {
        assert_eq!(format_value(1.0, "V", 2, true), " 1.00V");
        assert_eq!(format_value(230.0, "V", 3, true), " 230.000V");
        assert_eq!(format_value(9.81, "N", 3, true), " 9.810N");
    }

    #[test]
    fn rounding_does_not_rebucket() {
        assert_eq!(format_value(999.9996, "V", 3, true), " 1000.000V");
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(format_value(f64::NAN, "V", 3, true), " NaNV");
        assert_eq!(format_value(f64::INFINITY, "Hz", 3, true), " infHz");
        assert_eq!(format_value(f64::NEG_INFINITY, "Hz", 3, false), "-infHz");
    }

    #[test]
    fn format_with_options() {
        let opts = FormatOptions::default();
        assert_eq!(format_with(101_325.0, "Pa", opts), " 101.325kPa");
        let opts = opts.with_decimals(1).with_leading_space(false);
        assert_eq!(format_with(101_325.0, "Pa", opts), "101.3kPa");
    }

    #[test]
    fn group_thousands_basic() {
        assert_eq!(group_thousands(1_234_567.89, 2, ','), "1,234,567.89");
        assert_eq!(group_thousands(1_234_567.0, 0, ' '), "1 234 567");
        assert_eq!(group_thousands(123_456.0, 0, ','), "123,456");
        assert_eq!(group_thousands(999.0, 0, ','), "999");
        assert_eq!(group_thousands(1000.0, 1, '.'), "1.000.0");
    }

    #[test]
    fn group_thousands_negative() {
        assert_eq!(group_thousands(-1234.0, 0, ' '), "-1 234");
        assert_eq!(group_thousands(-123_456.5, 1, ','), "-123,456.5");
        assert_eq!(group_thousands(-12.0, 0, ','), "-12");
    }

    #[test]
    fn group_thousands_multibyte_separator() {
        assert_eq!(group_thousands(1_000_000.0, 0, '\u{202f}'), "1\u{202f}000\u{202f}000");
    }

    #[test]
    fn group_thousands_non_finite() {
        assert_eq!(group_thousands(f64::NAN, 2, ','), "NaN");
        assert_eq!(group_thousands(f64::NEG_INFINITY, 0, ','), "-inf");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_yaml_fill_defaults() {
        let opts: FormatOptions = serde_yaml::from_str("decimals: 1\n").unwrap();
        assert_eq!(opts, FormatOptions::default().with_decimals(1));
    }
}
