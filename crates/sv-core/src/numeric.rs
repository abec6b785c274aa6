use crate::SvError;

/// Floating point type used for every measurement.
pub type Real = f64;

/// Absolute and relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SvError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SvError::NonFinite { what, value: v })
    }
}

/// Reject a divisor equal to zero (either sign).
pub fn ensure_nonzero(v: Real, what: &'static str) -> Result<Real, SvError> {
    if v == 0.0 {
        Err(SvError::DivisionByZero { what })
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_scales_with_magnitude() {
        let tol = Tolerances::default();
        assert!(nearly_equal(4.7e9, 4.7e9 + 1.0, tol));
        assert!(!nearly_equal(4.7e-9, 4.8e-9, Tolerances { abs: 0.0, rel: 1e-9 }));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_nonzero_rejects_both_zeros() {
        assert!(ensure_nonzero(0.0, "divisor").is_err());
        assert!(ensure_nonzero(-0.0, "divisor").is_err());
        assert_eq!(ensure_nonzero(1e-300, "divisor"), Ok(1e-300));
    }
}
