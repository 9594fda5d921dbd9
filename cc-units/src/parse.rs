//! Unit literal parsing - "MByte/s", "KHz", "%", "Events"
//!
//! Parsing never fails: anything that cannot be resolved becomes
//! [`Unit::INVALID`]. The grammar lives in `unit.pest`; the rules below
//! resolve the ambiguities a single-letter prefix introduces.

use pest::Parser;
use pest_derive::Parser;
use tracing::{debug, trace};

use crate::{Measure, Prefix, Unit};

#[derive(Parser)]
#[grammar = "unit.pest"]
struct UnitLiteralParser;

/// Raw tokens of a literal, before any lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Tokens<'a> {
    prefix: &'a str,
    measure: &'a str,
    divisor: Option<&'a str>,
}

/// Parse a unit literal into a [`Unit`]
pub fn parse_unit(literal: &str) -> Unit {
    let tokens = match tokenize(literal) {
        Some(t) => t,
        None => {
            debug!(literal, "unit literal does not match grammar");
            return Unit::INVALID;
        }
    };

    let (prefix, measure) = resolve_prefix_measure(tokens.prefix, tokens.measure);
    let prefix = count_like_milli_as_mega(prefix, measure);
    let prefix = percentage_without_prefix(prefix, measure);

    if !prefix.is_valid() || !measure.is_valid() {
        debug!(literal, ?prefix, ?measure, "unresolved unit literal");
        return Unit::INVALID;
    }

    // An unknown divisor is dropped, it does not invalidate the unit
    let divisor = tokens.divisor.map(Measure::lookup).filter(|d| d.is_valid());
    if divisor.is_none() {
        if let Some(token) = tokens.divisor {
            debug!(literal, token, "dropping unknown divisor");
        }
    }

    let unit = Unit::new(prefix, measure);
    match divisor {
        Some(d) => unit.with_divisor(d),
        None => unit,
    }
}

fn tokenize(literal: &str) -> Option<Tokens<'_>> {
    let mut pairs = UnitLiteralParser::parse(Rule::unit, literal).ok()?;
    let unit = pairs.next()?;

    let mut tokens = Tokens::default();
    for pair in unit.into_inner() {
        match pair.as_rule() {
            Rule::long_prefix | Rule::short_prefix => tokens.prefix = pair.as_str(),
            Rule::measure => tokens.measure = pair.as_str(),
            Rule::divisor => tokens.divisor = Some(pair.as_str()),
            _ => {}
        }
    }
    Some(tokens)
}

/// Look up prefix and measure, retrying once when the prefix letter was
/// really the start of the measure name ("Packets", "Events", "percent").
fn resolve_prefix_measure(prefix_token: &str, measure_token: &str) -> (Prefix, Measure) {
    let prefix = Prefix::lookup(prefix_token);
    let measure = Measure::lookup(measure_token);
    if measure.is_valid() {
        return (prefix, measure);
    }

    match prefix {
        Prefix::Peta | Prefix::Exa => {
            let joined = format!("{}{}", prefix_token, measure_token);
            let retried = Measure::lookup(&joined);
            if retried.is_valid() {
                trace!(token = %joined, measure = ?retried, "prefix letter belongs to measure name");
                return (Prefix::Base, retried);
            }
            (prefix, measure)
        }
        _ => (prefix, measure),
    }
}

/// Count-like measures have no milli scale, so a lowercase `m` on them is
/// read as mega ("mB" is a megabyte). This is a lossy naming convention of
/// monitoring tools, not a numeric fact.
fn count_like_milli_as_mega(prefix: Prefix, measure: Measure) -> Prefix {
    if prefix == Prefix::Milli && measure.is_count_like() {
        trace!(?measure, "reading milli prefix as mega");
        Prefix::Mega
    } else {
        prefix
    }
}

/// Percentages are never scaled
fn percentage_without_prefix(prefix: Prefix, measure: Measure) -> Prefix {
    if measure == Measure::Percentage {
        Prefix::Base
    } else {
        prefix
    }
}
