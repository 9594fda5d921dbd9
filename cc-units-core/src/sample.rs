//! Metric sample values
//!
//! A `Sample` is one of the numeric representations a metric value can
//! arrive in. Conversions are computed in `f64` and cast back to the
//! sample's own representation, truncating toward zero for integers.

use std::fmt;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

/// Primitive numeric types a conversion can be applied to.
///
/// Implemented for every primitive integer and float type. `from_f64`
/// follows `as` semantics: truncation toward zero, saturating at the
/// bounds of the target type, NaN becomes zero for integers.
pub trait Scalar: Copy + 'static {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl<T> Scalar for T
where
    T: AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    fn to_f64(self) -> f64 {
        <T as AsPrimitive<f64>>::as_(self)
    }

    fn from_f64(value: f64) -> Self {
        <f64 as AsPrimitive<T>>::as_(value)
    }
}

/// A metric sample in one of the supported numeric representations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Sample {
    F64(f64),
    F32(f32),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    ISize(isize),
    USize(usize),
}

impl Sample {
    /// Name of the representation, as used in serialized form
    pub fn type_name(&self) -> &'static str {
        match self {
            Sample::F64(_) => "f64",
            Sample::F32(_) => "f32",
            Sample::I32(_) => "i32",
            Sample::I64(_) => "i64",
            Sample::U32(_) => "u32",
            Sample::U64(_) => "u64",
            Sample::ISize(_) => "isize",
            Sample::USize(_) => "usize",
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Sample::F64(_) | Sample::F32(_))
    }

    /// Value widened to `f64` (lossy above 2^53 for 64-bit integers)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Sample::F64(v) => v,
            Sample::F32(v) => v.to_f64(),
            Sample::I32(v) => v.to_f64(),
            Sample::I64(v) => v.to_f64(),
            Sample::U32(v) => v.to_f64(),
            Sample::U64(v) => v.to_f64(),
            Sample::ISize(v) => v.to_f64(),
            Sample::USize(v) => v.to_f64(),
        }
    }

    /// Apply `f` in `f64` and cast the result back to this representation
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Sample {
        fn via<T: Scalar, F: Fn(f64) -> f64>(v: T, f: F) -> T {
            T::from_f64(f(v.to_f64()))
        }

        match self {
            Sample::F64(v) => Sample::F64(via(v, f)),
            Sample::F32(v) => Sample::F32(via(v, f)),
            Sample::I32(v) => Sample::I32(via(v, f)),
            Sample::I64(v) => Sample::I64(via(v, f)),
            Sample::U32(v) => Sample::U32(via(v, f)),
            Sample::U64(v) => Sample::U64(via(v, f)),
            Sample::ISize(v) => Sample::ISize(via(v, f)),
            Sample::USize(v) => Sample::USize(via(v, f)),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::F64(v) => write!(f, "{}", v),
            Sample::F32(v) => write!(f, "{}", v),
            Sample::I32(v) => write!(f, "{}", v),
            Sample::I64(v) => write!(f, "{}", v),
            Sample::U32(v) => write!(f, "{}", v),
            Sample::U64(v) => write!(f, "{}", v),
            Sample::ISize(v) => write!(f, "{}", v),
            Sample::USize(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Sample {
                fn from(value: $t) -> Self {
                    Sample::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive! {
    f64 => F64,
    f32 => F32,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    isize => ISize,
    usize => USize,
}
