//! Series and parallel combination of passive components.
//!
//! Resistors and inductors add in series and combine harmonically in
//! parallel; capacitors are the dual. All functions work on raw scalars and
//! are total: a zero operand short-circuits the harmonic form to 0, and zero
//! entries are skipped by the N-ary harmonic fold.

use crate::Real;
use crate::units::{Capacitance, Inductance, Resistance};

/// How two component values combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combine {
    /// `a + b`
    Sum,
    /// `a * b / (a + b)`, evaluated as `a * (b / (a + b))` so equal operands
    /// give exactly `a / 2` and large operands do not overflow.
    Harmonic,
}

impl Combine {
    pub fn pair(self, a: Real, b: Real) -> Real {
        match self {
            Combine::Sum => a + b,
            Combine::Harmonic => {
                let denom = a + b;
                if a == 0.0 || b == 0.0 || denom == 0.0 {
                    0.0
                } else {
                    a * (b / denom)
                }
            }
        }
    }

    pub fn all(self, values: &[Real]) -> Real {
        match self {
            Combine::Sum => values.iter().sum(),
            Combine::Harmonic => {
                let inverse_total: Real = values
                    .iter()
                    .filter(|v| **v != 0.0)
                    .map(|v| 1.0 / v)
                    .sum();
                if inverse_total != 0.0 {
                    1.0 / inverse_total
                } else {
                    0.0
                }
            }
        }
    }
}

/// Generates the scalar helpers and wrapper shortcuts for one component kind.
macro_rules! impl_network {
    ($ty:ty, series: $series:expr, parallel: $parallel:expr) => {
        impl $ty {
            pub fn series(a: Real, b: Real) -> Real {
                $series.pair(a, b)
            }

            pub fn parallel(a: Real, b: Real) -> Real {
                $parallel.pair(a, b)
            }

            pub fn series_all(values: &[Real]) -> Real {
                $series.all(values)
            }

            pub fn parallel_all(values: &[Real]) -> Real {
                $parallel.all(values)
            }

            pub fn in_series(self, other: Self) -> Self {
                Self::new(Self::series(self.value(), other.value()))
            }

            pub fn in_parallel(self, other: Self) -> Self {
                Self::new(Self::parallel(self.value(), other.value()))
            }
        }
    };
}

impl_network!(Resistance, series: Combine::Sum, parallel: Combine::Harmonic);
impl_network!(Inductance, series: Combine::Sum, parallel: Combine::Harmonic);
impl_network!(Capacitance, series: Combine::Harmonic, parallel: Combine::Sum);
