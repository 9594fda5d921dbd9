//! Unit representation: prefix, measure and optional divisor measure

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::parse::parse_unit;
use crate::{Measure, Prefix};

/// A metric unit like `MB/s` or `KHz`.
///
/// A unit is valid if it has both a prefix and a measure. The divisor is
/// optional and turns the unit into a rate (`MB` → `MB/s`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    prefix: Prefix,
    measure: Measure,
    divisor: Option<Measure>,
}

impl Unit {
    /// The invalid unit, returned for anything that cannot be resolved
    pub const INVALID: Unit = Unit {
        prefix: Prefix::Invalid,
        measure: Measure::Invalid,
        divisor: None,
    };

    /// Create a unit without divisor
    pub const fn new(prefix: Prefix, measure: Measure) -> Self {
        Unit { prefix, measure, divisor: None }
    }

    /// Parse a literal like `"MByte/s"`. Never fails; check [`Unit::is_valid`].
    pub fn parse(literal: &str) -> Unit {
        parse_unit(literal)
    }

    pub fn is_valid(&self) -> bool {
        self.prefix.is_valid() && self.measure.is_valid()
    }

    /// Long form like `KiloHertz` or `MegaBytes/Seconds`
    pub fn render(&self) -> String {
        match self.divisor {
            Some(div) => format!("{}{}/{}", self.prefix.long_name(), self.measure.long_name(), div.long_name()),
            None => format!("{}{}", self.prefix.long_name(), self.measure.long_name()),
        }
    }

    /// Short form like `KHz` or `MB/s`. This is the canonical external form.
    pub fn render_short(&self) -> String {
        match self.divisor {
            Some(div) => format!("{}{}/{}", self.prefix.symbol(), self.measure.symbol(), div.symbol()),
            None => format!("{}{}", self.prefix.symbol(), self.measure.symbol()),
        }
    }

    /// Attach a divisor, e.g. turn a data volume `MB` into a bandwidth `MB/s`
    pub fn with_divisor(mut self, divisor: Measure) -> Self {
        self.add_divisor(divisor);
        self
    }

    /// Attach a divisor in place. `Measure::Invalid` removes it.
    pub fn add_divisor(&mut self, divisor: Measure) {
        self.divisor = if divisor.is_valid() { Some(divisor) } else { None };
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn set_prefix(&mut self, prefix: Prefix) {
        self.prefix = prefix;
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    pub fn divisor(&self) -> Option<Measure> {
        self.divisor
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_unit(s))
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        parse_unit(s)
    }
}
