//! Conversion factors between prefixes and units
//!
//! Conversions between prefixes of the same measure are plain scalings.
//! Celsius and Fahrenheit are the only affine conversions and are picked
//! by measure identity.

use cc_units_core::{Sample, Scalar, UnitsError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Measure, Prefix, Unit};

/// A numeric transform from one unit to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Conversion {
    Identity,
    /// Multiply by the factor
    Scale(f64),
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Conversion {
    /// True if applying this conversion leaves every value unchanged
    pub fn is_identity(&self) -> bool {
        match self {
            Conversion::Identity => true,
            Conversion::Scale(f) => *f == 1.0,
            _ => false,
        }
    }

    /// Multiplicative factor, `None` for the affine temperature conversions
    pub fn factor(&self) -> Option<f64> {
        match self {
            Conversion::Identity => Some(1.0),
            Conversion::Scale(f) => Some(*f),
            Conversion::CelsiusToFahrenheit | Conversion::FahrenheitToCelsius => None,
        }
    }

    pub fn apply_f64(&self, value: f64) -> f64 {
        match self {
            Conversion::Identity => value,
            Conversion::Scale(f) => value * f,
            Conversion::CelsiusToFahrenheit => value * 1.8 + 32.0,
            Conversion::FahrenheitToCelsius => (value - 32.0) / 1.8,
        }
    }

    /// Apply to any primitive number. The value is computed in `f64` and
    /// cast back, truncating toward zero for integer types.
    pub fn apply<T: Scalar>(&self, value: T) -> T {
        if self.is_identity() {
            return value;
        }
        T::from_f64(self.apply_f64(value.to_f64()))
    }

    /// Apply to a sample, keeping its representation
    pub fn apply_sample(&self, sample: Sample) -> Sample {
        if self.is_identity() {
            return sample;
        }
        sample.map(|v| self.apply_f64(v))
    }

    /// The conversion as a plain function over samples
    pub fn into_fn(self) -> impl Fn(Sample) -> Sample + Send + Sync + 'static {
        move |sample| self.apply_sample(sample)
    }
}

/// Conversion between two prefixes: `factor(input) / factor(output)`
pub fn prefix_factor(input: Prefix, output: Prefix) -> Conversion {
    if !input.is_valid() || !output.is_valid() {
        warn!(?input, ?output, "prefix conversion with invalid prefix, using identity");
        return Conversion::Identity;
    }
    if input == output {
        return Conversion::Identity;
    }
    Conversion::Scale(input.factor() / output.factor())
}

/// [`prefix_factor`] with both prefixes given as strings
pub fn prefix_str_factor(input: &str, output: &str) -> Conversion {
    prefix_factor(Prefix::lookup(input), Prefix::lookup(output))
}

pub fn celsius_to_fahrenheit<T: Scalar>(value: T) -> T {
    Conversion::CelsiusToFahrenheit.apply(value)
}

pub fn fahrenheit_to_celsius<T: Scalar>(value: T) -> T {
    Conversion::FahrenheitToCelsius.apply(value)
}

/// Conversion between two units.
///
/// Celsius and Fahrenheit convert into each other regardless of prefix.
/// Otherwise measure and divisor must match and only the prefix scales.
pub fn unit_to_unit_factor(input: Unit, output: Unit) -> Result<Conversion, UnitsError> {
    if !input.is_valid() {
        return Err(UnitsError::InvalidUnit(format!("{:?}", input)));
    }
    if !output.is_valid() {
        return Err(UnitsError::InvalidUnit(format!("{:?}", output)));
    }

    match (input.measure(), output.measure()) {
        (Measure::TemperatureC, Measure::TemperatureF) => return Ok(Conversion::CelsiusToFahrenheit),
        (Measure::TemperatureF, Measure::TemperatureC) => return Ok(Conversion::FahrenheitToCelsius),
        _ => {}
    }

    if input.measure() != output.measure() || input.divisor() != output.divisor() {
        debug!(from = %input.render_short(), to = %output.render_short(), "incompatible measures");
        return Err(UnitsError::IncompatibleMeasures {
            from: input.render_short(),
            to: output.render_short(),
        });
    }

    Ok(prefix_factor(input.prefix(), output.prefix()))
}

/// Conversion of a unit to the same unit with another prefix.
///
/// Returns the conversion and the unit the converted values are in. If the
/// input is invalid, cannot be re-read from its short form, or the prefix
/// is invalid, the result is [`Conversion::Identity`] paired with
/// [`Unit::INVALID`].
pub fn unit_prefix_factor(input: Unit, output: Prefix) -> (Conversion, Unit) {
    // An invalid prefix renders like Base and would re-parse as valid
    if !input.is_valid() {
        debug!(unit = ?input, ?output, "cannot rescale invalid unit");
        return (Conversion::Identity, Unit::INVALID);
    }
    let mut out_unit = Unit::parse(&input.render_short());
    if !out_unit.is_valid() || !output.is_valid() {
        debug!(unit = %input.render_short(), ?output, "cannot rescale unit");
        return (Conversion::Identity, Unit::INVALID);
    }
    out_unit.set_prefix(output);
    (prefix_factor(input.prefix(), output), out_unit)
}

/// [`unit_prefix_factor`] with the prefix given as a string
pub fn unit_prefix_str_factor(input: Unit, output: &str) -> (Conversion, Unit) {
    unit_prefix_factor(input, Prefix::lookup(output))
}

/// [`unit_prefix_factor`] with unit and prefix given as strings
pub fn unit_str_prefix_str_factor(input: &str, output: &str) -> (Conversion, Unit) {
    unit_prefix_str_factor(Unit::parse(input), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_prefix_identity() {
        for p in Prefix::ALL {
            let conv = prefix_factor(p, p);
            assert!(conv.is_identity(), "{:?}", p);
            assert_eq!(conv.apply(i64::MAX - 1), i64::MAX - 1);
            assert_eq!(conv.apply(123.456f64), 123.456);
        }
    }

    #[test]
    fn test_prefix_round_trip() {
        for a in Prefix::ALL {
            for b in Prefix::ALL {
                let there = prefix_factor(a, b);
                let back = prefix_factor(b, a);
                let value = 42.5;
                let result = back.apply(there.apply(value));
                assert!(approx(result, value), "{:?} <-> {:?}: {}", a, b, result);
            }
        }
    }

    #[test]
    fn test_prefix_scaling() {
        assert_eq!(prefix_factor(Prefix::Kilo, Prefix::Base).factor(), Some(1000.0));
        assert_eq!(prefix_factor(Prefix::Kilo, Prefix::Mega).apply(5000.0), 5.0);
        assert_eq!(prefix_factor(Prefix::Giga, Prefix::Mega).apply(3i32), 3000);
        assert_eq!(prefix_factor(Prefix::Kibi, Prefix::Base).apply(2u64), 2048);
    }

    #[test]
    fn test_prefix_scaling_truncates_integers() {
        assert_eq!(prefix_factor(Prefix::Base, Prefix::Kilo).apply(1999i64), 1);
        assert_eq!(prefix_factor(Prefix::Base, Prefix::Kilo).apply(-1999i32), -1);
        assert_eq!(prefix_factor(Prefix::Base, Prefix::Kilo).apply(999u32), 0);
    }

    #[test]
    fn test_prefix_str_factor() {
        assert_eq!(prefix_str_factor("M", "K").apply(2.0), 2000.0);
        assert_eq!(prefix_str_factor("Giga", "mega").apply(1.0), 1000.0);
        assert_eq!(prefix_str_factor("X", "K"), Conversion::Identity);
    }

    #[test]
    fn test_temperature_functions() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert!(approx(fahrenheit_to_celsius(32.0), 0.0));
        assert!(approx(fahrenheit_to_celsius(212.0), 100.0));

        assert_eq!(celsius_to_fahrenheit(100i64), 212);
        assert_eq!(fahrenheit_to_celsius(212u32), 100);
        assert_eq!(celsius_to_fahrenheit(37i32), 98);
    }

    #[test]
    fn test_unit_to_unit_temperature() {
        let c = Unit::parse("degC");
        let f = Unit::parse("degF");

        let conv = unit_to_unit_factor(c, f).unwrap();
        assert_eq!(conv, Conversion::CelsiusToFahrenheit);
        assert_eq!(conv.apply(100.0), 212.0);

        let conv = unit_to_unit_factor(f, c).unwrap();
        assert_eq!(conv, Conversion::FahrenheitToCelsius);
        assert!(approx(conv.apply(32.0), 0.0));
    }

    #[test]
    fn test_unit_to_unit_ignores_temperature_prefix() {
        let kc = Unit::parse("KdegC");
        assert!(kc.is_valid());
        let conv = unit_to_unit_factor(kc, Unit::parse("degF")).unwrap();
        assert_eq!(conv, Conversion::CelsiusToFahrenheit);
    }

    #[test]
    fn test_unit_to_unit_prefix() {
        let conv = unit_to_unit_factor(Unit::parse("GB/s"), Unit::parse("MB/s")).unwrap();
        assert_eq!(conv.apply(2.0), 2000.0);

        let conv = unit_to_unit_factor(Unit::parse("degC"), Unit::parse("degC")).unwrap();
        assert!(conv.is_identity());
    }

    #[test]
    fn test_unit_to_unit_incompatible() {
        let err = unit_to_unit_factor(Unit::parse("MB"), Unit::parse("MF")).unwrap_err();
        assert_eq!(
            err,
            UnitsError::IncompatibleMeasures {
                from: "MB".to_string(),
                to: "MF".to_string()
            }
        );

        // Same measure, different divisor
        let err = unit_to_unit_factor(Unit::parse("MB"), Unit::parse("MB/s")).unwrap_err();
        assert_eq!(err.code(), "INCOMPATIBLE_MEASURES");
    }

    #[test]
    fn test_unit_to_unit_invalid() {
        let err = unit_to_unit_factor(Unit::parse("foobar"), Unit::parse("MB")).unwrap_err();
        assert!(matches!(err, UnitsError::InvalidUnit(_)));
    }

    #[test]
    fn test_unit_to_unit_invalid_names_fields() {
        let mut unit = Unit::parse("MB");
        unit.set_prefix(Prefix::Invalid);

        let err = unit_to_unit_factor(unit, Unit::parse("KB")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("prefix: Invalid"), "{}", message);
        assert!(message.contains("measure: Bytes"), "{}", message);
    }

    #[test]
    fn test_unit_prefix_factor() {
        let (conv, out) = unit_prefix_factor(Unit::parse("MB/s"), Prefix::Kilo);
        assert_eq!(out, Unit::parse("KB/s"));
        assert_eq!(conv.apply(3.0), 3000.0);
        assert_eq!(conv.apply_sample(Sample::U64(3)), Sample::U64(3000));
    }

    #[test]
    fn test_unit_prefix_factor_invalid() {
        let (conv, out) = unit_prefix_factor(Unit::INVALID, Prefix::Kilo);
        assert_eq!(conv, Conversion::Identity);
        assert_eq!(out, Unit::INVALID);

        let (conv, out) = unit_prefix_factor(Unit::parse("MB"), Prefix::Invalid);
        assert_eq!(conv, Conversion::Identity);
        assert!(!out.is_valid());
    }

    #[test]
    fn test_unit_prefix_factor_invalid_prefix_on_input() {
        let mut unit = Unit::parse("MB");
        unit.set_prefix(Prefix::Invalid);
        assert!(!unit.is_valid());

        let (conv, out) = unit_prefix_factor(unit, Prefix::Kilo);
        assert_eq!(conv, Conversion::Identity);
        assert_eq!(out, Unit::INVALID);
    }

    #[test]
    fn test_unit_str_prefix_str_factor() {
        let (conv, out) = unit_str_prefix_str_factor("GHz", "M");
        assert_eq!(out.render_short(), "MHz");
        assert_eq!(conv.apply(1.5), 1500.0);

        let (conv, out) = unit_prefix_str_factor(Unit::parse("KiB"), "Mi");
        assert_eq!(out.render_short(), "MiB");
        assert_eq!(conv.apply(2048.0), 2.0);
    }

    #[test]
    fn test_apply_sample_kinds() {
        let conv = prefix_factor(Prefix::Kilo, Prefix::Base);
        assert_eq!(conv.apply_sample(Sample::F32(1.5)), Sample::F32(1500.0));
        assert_eq!(conv.apply_sample(Sample::I32(-2)), Sample::I32(-2000));
        assert_eq!(conv.apply_sample(Sample::U32(7)), Sample::U32(7000));

        let to_f = Conversion::CelsiusToFahrenheit;
        assert_eq!(to_f.apply_sample(Sample::I64(100)), Sample::I64(212));
    }

    #[test]
    fn test_into_fn() {
        let f = prefix_factor(Prefix::Mega, Prefix::Kilo).into_fn();
        assert_eq!(f(Sample::F64(1.0)), Sample::F64(1000.0));
    }
}
