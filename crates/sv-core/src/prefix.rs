//! SI magnitude buckets.
//!
//! Each prefix owns the half-open range `[factor, 1000 * factor)`; the
//! buckets are ordered from the largest down so the first match wins.

use core::fmt;

use crate::Real;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiPrefix {
    Tera,
    Giga,
    Mega,
    Kilo,
    /// No prefix (`1 <= |v| < 1000`).
    Base,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
}

impl SiPrefix {
    /// Every bucket, largest first.
    pub const ALL: [SiPrefix; 11] = [
        SiPrefix::Tera,
        SiPrefix::Giga,
        SiPrefix::Mega,
        SiPrefix::Kilo,
        SiPrefix::Base,
        SiPrefix::Milli,
        SiPrefix::Micro,
        SiPrefix::Nano,
        SiPrefix::Pico,
        SiPrefix::Femto,
        SiPrefix::Atto,
    ];

    /// Inclusive lower bound of the bucket, also the divisor of the mantissa.
    pub const fn factor(self) -> Real {
        match self {
            SiPrefix::Tera => 1e12,
            SiPrefix::Giga => 1e9,
            SiPrefix::Mega => 1e6,
            SiPrefix::Kilo => 1e3,
            SiPrefix::Base => 1.0,
            SiPrefix::Milli => 1e-3,
            SiPrefix::Micro => 1e-6,
            SiPrefix::Nano => 1e-9,
            SiPrefix::Pico => 1e-12,
            SiPrefix::Femto => 1e-15,
            SiPrefix::Atto => 1e-18,
        }
    }

    /// Exact power of ten that turns a magnitude into its mantissa.
    ///
    /// Sub-unit prefixes multiply by an integer power (`1e6` for micro), which
    /// is exact in `f64`; dividing by the inexact `1e-6` is not.
    pub const fn multiplier(self) -> Real {
        match self {
            SiPrefix::Tera => 1e-12,
            SiPrefix::Giga => 1e-9,
            SiPrefix::Mega => 1e-6,
            SiPrefix::Kilo => 1e-3,
            SiPrefix::Base => 1.0,
            SiPrefix::Milli => 1e3,
            SiPrefix::Micro => 1e6,
            SiPrefix::Nano => 1e9,
            SiPrefix::Pico => 1e12,
            SiPrefix::Femto => 1e15,
            SiPrefix::Atto => 1e18,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            SiPrefix::Tera => "T",
            SiPrefix::Giga => "G",
            SiPrefix::Mega => "M",
            SiPrefix::Kilo => "k",
            SiPrefix::Base => "",
            SiPrefix::Milli => "m",
            SiPrefix::Micro => "µ",
            SiPrefix::Nano => "n",
            SiPrefix::Pico => "p",
            SiPrefix::Femto => "f",
            SiPrefix::Atto => "a",
        }
    }

    /// Pick the bucket for a non-negative magnitude.
    ///
    /// Returns `None` below `1e-18`, and for NaN.
    pub fn for_magnitude(abs: Real) -> Option<SiPrefix> {
        Self::ALL.into_iter().find(|p| abs >= p.factor())
    }

    /// Mantissa of `abs` expressed in this prefix.
    #[inline]
    pub fn scale(self, abs: Real) -> Real {
        abs * self.multiplier()
    }
}

impl fmt::Display for SiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exactly_one_bucket_contains_each_positive_value(exp in -18.0_f64..15.0_f64) {
            let v = 10.0_f64.powf(exp);
            let hits = SiPrefix::ALL
                .iter()
                .enumerate()
                .filter(|(i, p)| {
                    let upper = if *i == 0 { Real::INFINITY } else { SiPrefix::ALL[i - 1].factor() };
                    v >= p.factor() && v < upper
                })
                .count();
            prop_assert_eq!(hits, 1);

            let p = SiPrefix::for_magnitude(v).unwrap();
            let mantissa = p.scale(v);
            prop_assert!(mantissa >= 1.0 - 1e-12);
            prop_assert!(mantissa < 1000.0 * (1.0 + 1e-12));
        }
    }
}
