// sv-core/src/units.rs

use crate::quantity::{Quantity, Unit};

/// Declare a unit marker and its `Quantity` alias.
///
/// `Marker => Alias, "symbol";`
macro_rules! declare_units {
    ($( $(#[$meta:meta])* $marker:ident => $alias:ident, $symbol:literal; )*) => {
        $(
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl Unit for $marker {
                const SYMBOL: &'static str = $symbol;
                const NAME: &'static str = stringify!($alias);
            }

            $(#[$meta])*
            pub type $alias = Quantity<$marker>;
        )*
    };
}

// Electrical and magnetic
declare_units! {
    Volt => Voltage, "V";
    Ampere => Current, "A";
    Ohm => Resistance, "Ω";
    Farad => Capacitance, "F";
    Henry => Inductance, "H";
    Siemens => Conductance, "S";
    Tesla => MagneticFluxDensity, "T";
    Weber => MagneticFlux, "Wb";
    Coulomb => Charge, "C";
    SiemensPerMeter => Conductivity, "S/m";
    OhmMeter => Resistivity, "Ω·m";
    /// CGS flux density, 1 G = 1e-4 T.
    Gauss => FluxDensityCgs, "G";
    /// CGS magnetic flux, 1 Mx = 1e-8 Wb.
    Maxwell => MagneticFluxCgs, "Mx";
}

// Energy and power
declare_units! {
    Joule => Energy, "J";
    Watt => Power, "W";
    VoltAmpere => ApparentPower, "VA";
    VoltAmpereReactive => ReactivePower, "VAr";
    VoltAmpereDistortion => DistortionPower, "VAD";
    /// Meter reading. Prefixes stack on the built-in `k`.
    KilowattHour => MeteredEnergy, "kWh";
    /// 1 cal = 4.184 J.
    Calorie => ThermalEnergy, "cal";
    /// Metric horsepower, ≈ 735.5 W.
    MetricHorsepower => EnginePower, "ch";
    JoulePerCubicMeter => EnergyDensity, "J/m³";
    WattPerSquareMeter => PowerDensity, "W/m²";
}

/// Solar irradiance shares the power density unit.
pub type Irradiance = PowerDensity;

// Mechanical
declare_units! {
    Newton => Force, "N";
    Meter => Length, "m";
    MeterPerSecond => Velocity, "m/s";
    Pascal => Pressure, "Pa";
    /// Multiples of standard gravity.
    StandardGravity => Acceleration, "g";
    MeterPerSecondSquared => Vibration, "m/s²";
    DegreePerSecond => AngularVelocity, "°/s";
}

// Photometric
declare_units! {
    Lumen => LuminousFlux, "lm";
    Lux => Illuminance, "lx";
    Candela => LuminousIntensity, "cd";
    Nit => Luminance, "nt";
}

// Time and frequency
declare_units! {
    Hertz => Frequency, "Hz";
    Second => Time, "s";
}

// Ratios and dimensionless factors
declare_units! {
    Percent => Percentage, "%";
    PowerFactorUnit => PowerFactor, "cos φ";
    QualityFactorUnit => QualityFactor, "Q";
    EfficiencyUnit => Efficiency, "ρ";
}

// Environment and air quality
declare_units! {
    RelativeHumidityPercent => RelativeHumidity, "%RH";
    GramPerCubicMeter => AbsoluteHumidity, "g/m³";
    Hectopascal => AtmosphericPressure, "hPa";
    MillimeterOfMercury => BloodPressure, "mmHg";
    MillimeterPerHour => RainIntensity, "mm/h";
    PartsPerMillion => ConcentrationPpm, "ppm";
    PartsPerBillion => ConcentrationPpb, "ppb";
    MicrogramPerCubicMeter => ParticulateConcentration, "µg/m³";
    MilligramPerKilogram => NutrientLevel, "mg/kg";
}
