//! cc-units - Units for cluster monitoring metrics
//!
//! Parses unit literals like `"MByte/s"`, `"KHz"` or `"%"` into a
//! [`Unit`] made of a [`Prefix`], a [`Measure`] and an optional divisor
//! measure, renders them back, and computes conversions between them.
//!
//! Prefixes:
//! - Decimal: K, M, G, T, P, E, Z, Y and m, u, n
//! - Binary: Ki, Mi, Gi, Ti, Pi, Ei, Zi, Yi
//!
//! Measures:
//! - Counts: bytes, flops, packets, events, cycles, requests
//! - Physical: seconds, hertz, watts, joules, RPM
//! - Temperature: degC, degF (affine conversion between the two)
//! - Percentage (never prefixed)
//!
//! ```
//! use cc_units::{unit_to_unit_factor, Unit};
//!
//! let conv = unit_to_unit_factor(Unit::parse("GB/s"), Unit::parse("MB/s")).unwrap();
//! assert_eq!(conv.apply(2u64), 2000);
//! ```

mod prefix;
mod measure;
mod unit;
mod parse;
mod convert;

pub use prefix::Prefix;
pub use measure::Measure;
pub use unit::Unit;
pub use parse::parse_unit;
pub use convert::{
    Conversion,
    prefix_factor, prefix_str_factor,
    celsius_to_fahrenheit, fahrenheit_to_celsius,
    unit_to_unit_factor,
    unit_prefix_factor, unit_prefix_str_factor, unit_str_prefix_str_factor,
};
pub use cc_units_core::{Sample, Scalar, UnitsError};
