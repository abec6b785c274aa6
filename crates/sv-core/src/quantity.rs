//! Scalar bound to a unit symbol at the type level.
//!
//! `Quantity<U>` stores a single [`Real`]; the symbol lives on the marker
//! type `U`, so every value of one unit shares it at no per-value cost.
//!
//! Division by zero (scalar or same-unit divisor, either sign of zero)
//! produces a NaN-valued quantity. Use [`Quantity::checked_div`] to get an
//! error instead.

use core::cmp::Ordering;
use core::fmt;
use core::fmt::Write as _;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::format::{DEFAULT_DECIMALS, FormatOptions, format_value, format_with, group_thousands};
use crate::numeric::{ensure_finite, ensure_nonzero};
use crate::{Real, SvResult};

/// Marker for a physical unit.
pub trait Unit: 'static {
    /// Symbol appended after the SI prefix, e.g. `"Ω"`.
    const SYMBOL: &'static str;
    /// Human-readable quantity name.
    const NAME: &'static str;
}

pub struct Quantity<U: Unit> {
    value: Real,
    unit: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    pub const fn new(value: Real) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Like [`Quantity::new`] but rejects NaN and infinities.
    pub fn try_new(value: Real) -> SvResult<Self> {
        ensure_finite(value, U::NAME).map(Self::new)
    }

    #[inline]
    pub const fn value(&self) -> Real {
        self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: Real) {
        self.value = value;
    }

    pub const fn symbol() -> &'static str {
        U::SYMBOL
    }

    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Stored value with SI prefix and a leading space.
    pub fn display(&self, decimals: usize) -> String {
        format_value(self.value, U::SYMBOL, decimals, true)
    }

    pub fn display_with(&self, options: FormatOptions) -> String {
        format_with(self.value, U::SYMBOL, options)
    }

    /// Format a raw scalar as this unit without wrapping it first.
    pub fn format(value: Real, decimals: usize) -> String {
        format_value(value, U::SYMBOL, decimals, true)
    }

    /// Stored value with digit grouping; no prefix, no symbol.
    pub fn format_grouped(&self, decimals: usize, separator: char) -> String {
        group_thousands(self.value, decimals, separator)
    }

    pub fn checked_div(self, divisor: Real) -> SvResult<Self> {
        let divisor = ensure_nonzero(divisor, U::NAME)?;
        Ok(Self::new(self.value / divisor))
    }
}

#[inline]
fn nan_guarded_div(num: Real, den: Real) -> Real {
    if den == 0.0 { Real::NAN } else { num / den }
}

impl<U: Unit> Clone for Quantity<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Quantity<U> {}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U: Unit> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} {})", U::NAME, self.value, U::SYMBOL)
    }
}

/// `{}` uses three decimals, `{:.N}` uses N. No leading space.
///
/// Width, fill and alignment apply to the whole rendering (left-aligned by
/// default). Precision is consumed as the decimal count, so `Formatter::pad`
/// cannot be used: it would truncate the text to N characters.
impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(DEFAULT_DECIMALS);
        let text = format_value(self.value, U::SYMBOL, decimals, false);

        let len = text.chars().count();
        let Some(width) = f.width().filter(|w| *w > len) else {
            return f.write_str(&text);
        };
        let padding = width - len;
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

impl<U: Unit> From<Real> for Quantity<U> {
    fn from(value: Real) -> Self {
        Self::new(value)
    }
}

impl<U: Unit> From<Quantity<U>> for Real {
    fn from(q: Quantity<U>) -> Self {
        q.value
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<U: Unit> Mul for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value)
    }
}

impl<U: Unit> Div for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(nan_guarded_div(self.value, rhs.value))
    }
}

impl<U: Unit> Add<Real> for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Real) -> Self {
        Self::new(self.value + rhs)
    }
}

impl<U: Unit> Sub<Real> for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Real) -> Self {
        Self::new(self.value - rhs)
    }
}

impl<U: Unit> Mul<Real> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: Unit> Div<Real> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: Real) -> Self {
        Self::new(nan_guarded_div(self.value, rhs))
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<U: Unit> MulAssign<Real> for Quantity<U> {
    fn mul_assign(&mut self, rhs: Real) {
        self.value *= rhs;
    }
}

impl<U: Unit> DivAssign<Real> for Quantity<U> {
    fn div_assign(&mut self, rhs: Real) {
        self.value = nan_guarded_div(self.value, rhs);
    }
}

impl<U: Unit> MulAssign for Quantity<U> {
    fn mul_assign(&mut self, rhs: Self) {
        self.value *= rhs.value;
    }
}

impl<U: Unit> DivAssign for Quantity<U> {
    fn div_assign(&mut self, rhs: Self) {
        self.value = nan_guarded_div(self.value, rhs.value);
    }
}

impl<U: Unit> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(|q| q.value).sum())
    }
}

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Quantity<U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Quantity<U> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Real as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}
