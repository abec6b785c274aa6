//! Conversions to and from `uom` quantities, always through the SI base unit.

use uom::si;
use uom::si::f64 as uom_f64;

use crate::angle::Angle;
use crate::temperature::Temperature;
use crate::units::{
    Capacitance, Charge, Conductance, Current, Energy, Force, Frequency, Inductance, Length,
    MagneticFlux, MagneticFluxDensity, Power, Pressure, Resistance, Time, Velocity, Voltage,
};

macro_rules! uom_interop {
    ($( $alias:ident <=> $uom:ident, $base:ty; )*) => {
        $(
            impl From<uom_f64::$uom> for $alias {
                fn from(q: uom_f64::$uom) -> Self {
                    Self::new(q.get::<$base>())
                }
            }

            impl From<$alias> for uom_f64::$uom {
                fn from(q: $alias) -> Self {
                    uom_f64::$uom::new::<$base>(q.value())
                }
            }
        )*
    };
}

uom_interop! {
    Voltage <=> ElectricPotential, si::electric_potential::volt;
    Current <=> ElectricCurrent, si::electric_current::ampere;
    Resistance <=> ElectricalResistance, si::electrical_resistance::ohm;
    Capacitance <=> Capacitance, si::capacitance::farad;
    Inductance <=> Inductance, si::inductance::henry;
    Conductance <=> ElectricalConductance, si::electrical_conductance::siemens;
    Charge <=> ElectricCharge, si::electric_charge::coulomb;
    MagneticFlux <=> MagneticFlux, si::magnetic_flux::weber;
    MagneticFluxDensity <=> MagneticFluxDensity, si::magnetic_flux_density::tesla;
    Energy <=> Energy, si::energy::joule;
    Power <=> Power, si::power::watt;
    Force <=> Force, si::force::newton;
    Length <=> Length, si::length::meter;
    Velocity <=> Velocity, si::velocity::meter_per_second;
    Pressure <=> Pressure, si::pressure::pascal;
    Frequency <=> Frequency, si::frequency::hertz;
    Time <=> Time, si::time::second;
}

impl From<uom_f64::ThermodynamicTemperature> for Temperature {
    fn from(t: uom_f64::ThermodynamicTemperature) -> Self {
        Temperature::from_kelvin(t.get::<si::thermodynamic_temperature::kelvin>())
    }
}

impl From<Temperature> for uom_f64::ThermodynamicTemperature {
    fn from(t: Temperature) -> Self {
        uom_f64::ThermodynamicTemperature::new::<si::thermodynamic_temperature::kelvin>(t.kelvin())
    }
}

impl From<uom_f64::Angle> for Angle {
    fn from(a: uom_f64::Angle) -> Self {
        Angle::from_radians(a.get::<si::angle::radian>())
    }
}

impl From<Angle> for uom_f64::Angle {
    fn from(a: Angle) -> Self {
        uom_f64::Angle::new::<si::angle::radian>(a.radians())
    }
}
