//! Scale prefixes
//!
//! Decimal (SI) and binary (IEC) prefixes. Each prefix carries a factor
//! relative to [`Prefix::Base`], whose factor is 1.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// A metric scale prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prefix {
    /// No recognized prefix
    Invalid,
    Base,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Milli,
    Micro,
    Nano,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl Prefix {
    /// Every real prefix (the invalid sentinel excluded)
    pub const ALL: [Prefix; 20] = [
        Prefix::Base,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
        Prefix::Exa,
        Prefix::Zetta,
        Prefix::Yotta,
        Prefix::Milli,
        Prefix::Micro,
        Prefix::Nano,
        Prefix::Kibi,
        Prefix::Mebi,
        Prefix::Gibi,
        Prefix::Tebi,
        Prefix::Pebi,
        Prefix::Exbi,
        Prefix::Zebi,
        Prefix::Yobi,
    ];

    /// Look up a prefix by short symbol or long name.
    ///
    /// Short symbols are case-sensitive where case carries meaning
    /// (`m` is milli, `M` is mega). Long names match in any case.
    /// The empty string is [`Prefix::Base`].
    pub fn lookup(token: &str) -> Prefix {
        match token {
            "" => Prefix::Base,
            "K" | "k" => Prefix::Kilo,
            "M" => Prefix::Mega,
            "G" | "g" => Prefix::Giga,
            "T" | "t" => Prefix::Tera,
            "P" | "p" => Prefix::Peta,
            "E" | "e" => Prefix::Exa,
            "Z" | "z" => Prefix::Zetta,
            "Y" | "y" => Prefix::Yotta,
            "m" => Prefix::Milli,
            "u" => Prefix::Micro,
            "n" => Prefix::Nano,
            "Ki" | "ki" => Prefix::Kibi,
            "Mi" => Prefix::Mebi,
            "Gi" | "gi" => Prefix::Gibi,
            "Ti" | "ti" => Prefix::Tebi,
            "Pi" | "pi" => Prefix::Pebi,
            "Ei" | "ei" => Prefix::Exbi,
            "Zi" | "zi" => Prefix::Zebi,
            "Yi" | "yi" => Prefix::Yobi,
            _ => Self::lookup_long(token),
        }
    }

    fn lookup_long(token: &str) -> Prefix {
        Prefix::ALL
            .iter()
            .copied()
            .filter(|p| *p != Prefix::Base)
            .find(|p| p.long_name().eq_ignore_ascii_case(token))
            .unwrap_or(Prefix::Invalid)
    }

    pub fn is_valid(self) -> bool {
        self != Prefix::Invalid
    }

    /// Scale factor relative to `Base`. The invalid sentinel reports 0.
    pub fn factor(self) -> f64 {
        match self {
            Prefix::Invalid => 0.0,
            Prefix::Base => 1.0,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Tera => 1e12,
            Prefix::Peta => 1e15,
            Prefix::Exa => 1e18,
            Prefix::Zetta => 1e21,
            Prefix::Yotta => 1e24,
            Prefix::Milli => 1e-3,
            Prefix::Micro => 1e-6,
            Prefix::Nano => 1e-9,
            Prefix::Kibi => (1u128 << 10) as f64,
            Prefix::Mebi => (1u128 << 20) as f64,
            Prefix::Gibi => (1u128 << 30) as f64,
            Prefix::Tebi => (1u128 << 40) as f64,
            Prefix::Pebi => (1u128 << 50) as f64,
            Prefix::Exbi => (1u128 << 60) as f64,
            Prefix::Zebi => (1u128 << 70) as f64,
            Prefix::Yobi => (1u128 << 80) as f64,
        }
    }

    /// Long name like `Kilo` (empty for `Base`)
    pub const fn long_name(self) -> &'static str {
        match self {
            Prefix::Invalid | Prefix::Base => "",
            Prefix::Kilo => "Kilo",
            Prefix::Mega => "Mega",
            Prefix::Giga => "Giga",
            Prefix::Tera => "Tera",
            Prefix::Peta => "Peta",
            Prefix::Exa => "Exa",
            Prefix::Zetta => "Zetta",
            Prefix::Yotta => "Yotta",
            Prefix::Milli => "Milli",
            Prefix::Micro => "Micro",
            Prefix::Nano => "Nano",
            Prefix::Kibi => "Kibi",
            Prefix::Mebi => "Mebi",
            Prefix::Gibi => "Gibi",
            Prefix::Tebi => "Tebi",
            Prefix::Pebi => "Pebi",
            Prefix::Exbi => "Exbi",
            Prefix::Zebi => "Zebi",
            Prefix::Yobi => "Yobi",
        }
    }

    /// Short symbol like `K` (empty for `Base`)
    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Invalid | Prefix::Base => "",
            Prefix::Kilo => "K",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
            Prefix::Milli => "m",
            Prefix::Micro => "u",
            Prefix::Nano => "n",
            Prefix::Kibi => "Ki",
            Prefix::Mebi => "Mi",
            Prefix::Gibi => "Gi",
            Prefix::Tebi => "Ti",
            Prefix::Pebi => "Pi",
            Prefix::Exbi => "Ei",
            Prefix::Zebi => "Zi",
            Prefix::Yobi => "Yi",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

impl FromStr for Prefix {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Prefix::lookup(s))
    }
}
