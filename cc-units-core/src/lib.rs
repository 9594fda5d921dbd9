//! cc-units Core - Shared types
//!
//! This crate provides the leaf types used throughout cc-units:
//! - `Sample`: a metric value in one of several numeric representations
//! - `Scalar`: primitive numeric types conversions can be applied to
//! - `UnitsError`: structured errors with machine-readable codes

mod error;
mod sample;

pub use error::{codes, ErrorReport, UnitsError};
pub use sample::{Sample, Scalar};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Sample, Scalar, UnitsError};
    pub use crate::error::codes;
}
