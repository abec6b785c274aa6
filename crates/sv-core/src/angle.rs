//! Plane angle tagged with the unit it was entered in; radians are canonical.

use crate::Real;
use crate::constants::PI;

pub const DEFAULT_ANGLE_DECIMALS: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    value: Real,
    unit: AngleUnit,
}

impl Angle {
    pub const fn new(value: Real, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    pub const fn from_radians(radians: Real) -> Self {
        Self::new(radians, AngleUnit::Radians)
    }

    pub const fn from_degrees(degrees: Real) -> Self {
        Self::new(degrees, AngleUnit::Degrees)
    }

    pub const fn raw(&self) -> Real {
        self.value
    }

    pub const fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn radians(&self) -> Real {
        match self.unit {
            AngleUnit::Radians => self.value,
            AngleUnit::Degrees => degrees_to_radians(self.value),
        }
    }

    pub fn degrees(&self) -> Real {
        match self.unit {
            AngleUnit::Radians => radians_to_degrees(self.value),
            AngleUnit::Degrees => self.value,
        }
    }

    pub fn display_radians(&self, decimals: usize) -> String {
        Self::format_radians(self.radians(), decimals)
    }

    pub fn display_degrees(&self, decimals: usize) -> String {
        Self::format_degrees(self.degrees(), decimals)
    }

    pub fn format_radians(radians: Real, decimals: usize) -> String {
        format!("{radians:.decimals$} rad")
    }

    pub fn format_degrees(degrees: Real, decimals: usize) -> String {
        format!("{degrees:.decimals$}°")
    }
}

impl From<Angle> for Real {
    fn from(a: Angle) -> Self {
        a.radians()
    }
}

pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: Real) -> Real {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn half_turn_both_ways() {
        let tol = Tolerances::default();
        let deg = Angle::from_degrees(180.0);
        assert!(nearly_equal(deg.radians(), PI, tol));
        assert_eq!(deg.display_radians(4), "3.1416 rad");
        assert_eq!(Real::from(deg), deg.radians());

        let rad = Angle::from_radians(3.14159);
        assert_eq!(rad.display_degrees(1), "180.0°");
        assert_eq!(rad.unit(), AngleUnit::Radians);
    }

    #[test]
    fn static_helpers() {
        let tol = Tolerances::default();
        assert!(nearly_equal(degrees_to_radians(90.0), PI / 2.0, tol));
        assert!(nearly_equal(radians_to_degrees(PI), 180.0, tol));
        assert_eq!(Angle::format_degrees(45.0, 3), "45.000°");
        assert_eq!(Angle::format_radians(1.0, 1), "1.0 rad");
    }

    #[test]
    fn default_is_zero_radians() {
        let a = Angle::default();
        assert_eq!(a.raw(), 0.0);
        assert_eq!(a.unit(), AngleUnit::Radians);
    }
}
