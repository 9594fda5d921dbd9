//! Measures - the kinds of quantity a metric counts

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// A monitored quantity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    /// No recognized measure
    Invalid,
    Bytes,
    Flops,
    Percentage,
    TemperatureC,
    TemperatureF,
    Rotation,
    Frequency,
    Time,
    Watt,
    Joule,
    Cycles,
    Requests,
    Packets,
    Events,
}

impl Measure {
    /// Every real measure (the invalid sentinel excluded)
    pub const ALL: [Measure; 14] = [
        Measure::Bytes,
        Measure::Flops,
        Measure::Percentage,
        Measure::TemperatureC,
        Measure::TemperatureF,
        Measure::Rotation,
        Measure::Frequency,
        Measure::Time,
        Measure::Watt,
        Measure::Joule,
        Measure::Cycles,
        Measure::Requests,
        Measure::Packets,
        Measure::Events,
    ];

    /// Look up a measure by symbol, long name or common spelling (any case)
    pub fn lookup(token: &str) -> Measure {
        match token.to_lowercase().as_str() {
            "b" | "byte" | "bytes" => Measure::Bytes,
            "f" | "flop" | "flops" => Measure::Flops,
            "%" | "percent" => Measure::Percentage,
            "degc" | "°c" | "degreec" => Measure::TemperatureC,
            "degf" | "°f" | "degreef" => Measure::TemperatureF,
            "rpm" => Measure::Rotation,
            "hz" | "hertz" => Measure::Frequency,
            "s" | "sec" | "second" | "seconds" => Measure::Time,
            "w" | "watt" | "watts" => Measure::Watt,
            "j" | "joule" | "joules" => Measure::Joule,
            "cyc" | "cycle" | "cycles" => Measure::Cycles,
            "req" | "request" | "requests" => Measure::Requests,
            "pkt" | "packet" | "packets" => Measure::Packets,
            "ev" | "event" | "events" => Measure::Events,
            _ => Measure::Invalid,
        }
    }

    pub fn is_valid(self) -> bool {
        self != Measure::Invalid
    }

    /// Discrete counts, for which a milli scale makes no sense
    pub fn is_count_like(self) -> bool {
        matches!(
            self,
            Measure::Bytes
                | Measure::Flops
                | Measure::Packets
                | Measure::Events
                | Measure::Cycles
                | Measure::Requests
        )
    }

    pub fn is_temperature(self) -> bool {
        matches!(self, Measure::TemperatureC | Measure::TemperatureF)
    }

    pub const fn long_name(self) -> &'static str {
        match self {
            Measure::Invalid => "Invalid",
            Measure::Bytes => "Bytes",
            Measure::Flops => "Flops",
            Measure::Percentage => "Percent",
            Measure::TemperatureC => "DegreeC",
            Measure::TemperatureF => "DegreeF",
            Measure::Rotation => "RPM",
            Measure::Frequency => "Hertz",
            Measure::Time => "Seconds",
            Measure::Watt => "Watts",
            Measure::Joule => "Joules",
            Measure::Cycles => "Cycles",
            Measure::Requests => "Requests",
            Measure::Packets => "Packets",
            Measure::Events => "Events",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Measure::Invalid => "invalid",
            Measure::Bytes => "B",
            Measure::Flops => "F",
            Measure::Percentage => "%",
            Measure::TemperatureC => "degC",
            Measure::TemperatureF => "degF",
            Measure::Rotation => "RPM",
            Measure::Frequency => "Hz",
            Measure::Time => "s",
            Measure::Watt => "W",
            Measure::Joule => "J",
            Measure::Cycles => "cyc",
            Measure::Requests => "requests",
            Measure::Packets => "packets",
            Measure::Events => "events",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

impl FromStr for Measure {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Measure::lookup(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_symbols() {
        assert_eq!(Measure::lookup("B"), Measure::Bytes);
        assert_eq!(Measure::lookup("Hz"), Measure::Frequency);
        assert_eq!(Measure::lookup("%"), Measure::Percentage);
        assert_eq!(Measure::lookup("degC"), Measure::TemperatureC);
        assert_eq!(Measure::lookup("°F"), Measure::TemperatureF);
    }

    #[test]
    fn test_lookup_names_any_case() {
        assert_eq!(Measure::lookup("Byte"), Measure::Bytes);
        assert_eq!(Measure::lookup("PACKETS"), Measure::Packets);
        assert_eq!(Measure::lookup("events"), Measure::Events);
        assert_eq!(Measure::lookup("Seconds"), Measure::Time);
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(Measure::lookup("ackets"), Measure::Invalid);
        assert_eq!(Measure::lookup(""), Measure::Invalid);
        assert_eq!(Measure::lookup("foobar"), Measure::Invalid);
    }

    #[test]
    fn test_names_lookup_back() {
        for m in Measure::ALL {
            assert_eq!(Measure::lookup(m.symbol()), m, "symbol of {:?}", m);
            assert_eq!(Measure::lookup(m.long_name()), m, "long name of {:?}", m);
        }
    }

    #[test]
    fn test_count_like() {
        assert!(Measure::Bytes.is_count_like());
        assert!(Measure::Requests.is_count_like());
        assert!(!Measure::Time.is_count_like());
        assert!(!Measure::Percentage.is_count_like());
        assert!(Measure::TemperatureF.is_temperature());
    }
}
