//! sv-core: SI-prefixed display of engineering values.
//!
//! Contains:
//! - prefix (SI magnitude buckets)
//! - format (magnitude formatter + thousands grouping)
//! - quantity (scalar bound to a unit symbol, with arithmetic)
//! - units (unit markers and `Quantity` aliases)
//! - network (series/parallel combination of R, L, C)
//! - temperature, angle (two-scale values)
//! - constants (physical constants)
//! - interop (conversions with `uom`)
//! - numeric, error (shared float helpers and error types)

pub mod angle;
pub mod constants;
pub mod error;
pub mod format;
pub mod interop;
pub mod network;
pub mod numeric;
pub mod prefix;
pub mod quantity;
pub mod temperature;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use angle::{Angle, AngleUnit};
pub use error::{SvError, SvResult};
pub use format::{FormatOptions, format_value, format_with, group_thousands};
pub use network::Combine;
pub use numeric::*;
pub use prefix::SiPrefix;
pub use quantity::{Quantity, Unit};
pub use temperature::{Temperature, TemperatureScale};
pub use units::*;
