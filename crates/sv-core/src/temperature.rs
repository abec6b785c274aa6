//! Absolute temperature tagged with the scale it was entered in.
//!
//! Kelvin is the canonical scale: [`Temperature::kelvin`] and the
//! conversion into [`Real`] both convert on read.

use crate::Real;
use crate::constants::KELVIN_OFFSET;

pub const DEFAULT_TEMPERATURE_DECIMALS: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TemperatureScale {
    #[default]
    Kelvin,
    Celsius,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    value: Real,
    scale: TemperatureScale,
}

impl Temperature {
    pub const fn new(value: Real, scale: TemperatureScale) -> Self {
        Self { value, scale }
    }

    pub const fn from_kelvin(kelvin: Real) -> Self {
        Self::new(kelvin, TemperatureScale::Kelvin)
    }

    pub const fn from_celsius(celsius: Real) -> Self {
        Self::new(celsius, TemperatureScale::Celsius)
    }

    /// Value as entered, in [`Temperature::scale`].
    pub const fn raw(&self) -> Real {
        self.value
    }

    pub const fn scale(&self) -> TemperatureScale {
        self.scale
    }

    pub fn kelvin(&self) -> Real {
        match self.scale {
            TemperatureScale::Kelvin => self.value,
            TemperatureScale::Celsius => celsius_to_kelvin(self.value),
        }
    }

    pub fn celsius(&self) -> Real {
        match self.scale {
            TemperatureScale::Kelvin => kelvin_to_celsius(self.value),
            TemperatureScale::Celsius => self.value,
        }
    }

    pub fn fahrenheit(&self) -> Real {
        celsius_to_fahrenheit(self.celsius())
    }

    pub fn display_kelvin(&self, decimals: usize) -> String {
        Self::format_kelvin(self.kelvin(), decimals)
    }

    pub fn display_celsius(&self, decimals: usize) -> String {
        Self::format_celsius(self.celsius(), decimals)
    }

    pub fn display_fahrenheit(&self, decimals: usize) -> String {
        Self::format_fahrenheit(self.fahrenheit(), decimals)
    }

    pub fn format_kelvin(kelvin: Real, decimals: usize) -> String {
        format!("{kelvin:.decimals$}K")
    }

    pub fn format_celsius(celsius: Real, decimals: usize) -> String {
        format!("{celsius:.decimals$}°C")
    }

    pub fn format_fahrenheit(fahrenheit: Real, decimals: usize) -> String {
        format!("{fahrenheit:.decimals$}°F")
    }
}

impl From<Temperature> for Real {
    fn from(t: Temperature) -> Self {
        t.kelvin()
    }
}

pub fn celsius_to_kelvin(celsius: Real) -> Real {
    celsius + KELVIN_OFFSET
}

pub fn kelvin_to_celsius(kelvin: Real) -> Real {
    kelvin - KELVIN_OFFSET
}

pub fn celsius_to_fahrenheit(celsius: Real) -> Real {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: Real) -> Real {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn kelvin_to_fahrenheit(kelvin: Real) -> Real {
    celsius_to_fahrenheit(kelvin_to_celsius(kelvin))
}

pub fn fahrenheit_to_kelvin(fahrenheit: Real) -> Real {
    celsius_to_kelvin(fahrenheit_to_celsius(fahrenheit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn default_is_zero_kelvin() {
        let t = Temperature::default();
        assert_eq!(t.scale(), TemperatureScale::Kelvin);
        assert_eq!(t.kelvin(), 0.0);
    }

    #[test]
    fn celsius_reads_back_in_kelvin() {
        let tol = Tolerances::default();
        let t = Temperature::from_celsius(25.0);
        assert_eq!(t.raw(), 25.0);
        assert!(nearly_equal(t.kelvin(), 298.15, tol));
        assert_eq!(Real::from(t), t.kelvin());
        assert_eq!(t.display_kelvin(2), "298.15K");
        assert_eq!(t.display_celsius(2), "25.00°C");
    }

    #[test]
    fn kelvin_reads_back_in_celsius() {
        let t = Temperature::from_kelvin(300.0);
        assert_eq!(t.kelvin(), 300.0);
        assert_eq!(t.display_celsius(1), "26.9°C");
    }

    #[test]
    fn fahrenheit_conversions() {
        let tol = Tolerances::default();
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert!(nearly_equal(fahrenheit_to_kelvin(32.0), KELVIN_OFFSET, tol));
        assert!(nearly_equal(kelvin_to_fahrenheit(KELVIN_OFFSET), 32.0, tol));
        assert_eq!(Temperature::from_celsius(100.0).display_fahrenheit(1), "212.0°F");
    }

    #[test]
    fn scale_conversions() {
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
        assert_eq!(Temperature::format_celsius(20.0, 2), "20.00°C");
        assert_eq!(Temperature::format_kelvin(77.0, 0), "77K");
    }
}
