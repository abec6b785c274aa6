//! Physical constants (SI, CODATA 2018 exact values where defined).

use crate::Real;

pub const PI: Real = core::f64::consts::PI;
/// 0 °C in kelvin.
pub const KELVIN_OFFSET: Real = 273.15;
pub const ELEMENTARY_CHARGE_C: Real = 1.602_176_634e-19;
pub const BOLTZMANN_J_PER_K: Real = 1.380_649e-23;
pub const PLANCK_J_S: Real = 6.626_070_15e-34;
pub const SPEED_OF_LIGHT_MPS: Real = 299_792_458.0;
pub const VACUUM_PERMEABILITY_H_PER_M: Real = 4.0 * PI * 1e-7;
pub const VACUUM_PERMITTIVITY_F_PER_M: Real = 8.854_187_812_8e-12;
pub const G0_MPS2: Real = 9.806_65;
pub const GAS_CONSTANT_J_PER_MOL_K: Real = 8.314_462_618;
pub const FARADAY_C_PER_MOL: Real = 96_485.332_12;
pub const STEFAN_BOLTZMANN_W_PER_M2_K4: Real = 5.670_374_419e-8;
