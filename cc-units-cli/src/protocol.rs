//! Line protocol: one JSON request in, one JSON response out
//!
//! Methods:
//! - parse: Parse a unit literal and render it
//! - convert: Convert a value between two units
//! - convert_prefix: Rescale a value to another prefix of its unit
//! - list_prefixes: List known prefixes
//! - list_measures: List known measures

use cc_units::{unit_prefix_factor, unit_to_unit_factor, Measure, Prefix, Sample, Unit, UnitsError};
use cc_units_core::ErrorReport;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: JsonValue,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self { id, result: Some(result), error: None }
    }

    fn failure(id: Option<JsonValue>, err: &UnitsError) -> Self {
        Self { id, result: None, error: Some(err.report()) }
    }
}

#[derive(Debug, Deserialize)]
struct ParseParams {
    unit: String,
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    value: JsonSample,
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct ConvertPrefixParams {
    value: JsonSample,
    unit: String,
    prefix: String,
}

/// Handle one request line
pub fn handle_line(line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => return Response::failure(None, &UnitsError::ParseError(e.to_string())),
    };

    debug!(method = %request.method, "handling request");
    match dispatch(&request) {
        Ok(result) => Response::success(request.id, result),
        Err(e) => {
            debug!(method = %request.method, code = e.code(), "request failed");
            Response::failure(request.id, &e)
        }
    }
}

fn dispatch(request: &Request) -> Result<JsonValue, UnitsError> {
    match request.method.as_str() {
        "parse" => parse(params(&request.params)?),
        "convert" => convert(params(&request.params)?),
        "convert_prefix" => convert_prefix(params(&request.params)?),
        "list_prefixes" => Ok(list_prefixes()),
        "list_measures" => Ok(list_measures()),
        other => Err(UnitsError::UnknownMethod(other.to_string())),
    }
}

fn params<T: DeserializeOwned>(value: &JsonValue) -> Result<T, UnitsError> {
    serde_json::from_value(value.clone()).map_err(|e| UnitsError::InvalidRequest(e.to_string()))
}

fn parse(p: ParseParams) -> Result<JsonValue, UnitsError> {
    let unit = Unit::parse(&p.unit);
    Ok(json!({
        "valid": unit.is_valid(),
        "prefix": unit.prefix(),
        "measure": unit.measure(),
        "divisor": unit.divisor(),
        "long": unit.render(),
        "short": unit.render_short(),
    }))
}

fn convert(p: ConvertParams) -> Result<JsonValue, UnitsError> {
    let from = parse_valid_unit(&p.from)?;
    let to = parse_valid_unit(&p.to)?;
    let sample = Sample::from(p.value);

    let conversion = unit_to_unit_factor(from, to)?;
    Ok(json!({ "value": sample_to_json(conversion.apply_sample(sample)) }))
}

fn convert_prefix(p: ConvertPrefixParams) -> Result<JsonValue, UnitsError> {
    let unit = parse_valid_unit(&p.unit)?;
    let prefix = Prefix::lookup(&p.prefix);
    if !prefix.is_valid() {
        return Err(UnitsError::InvalidPrefix(p.prefix));
    }
    let sample = Sample::from(p.value);

    let (conversion, out_unit) = unit_prefix_factor(unit, prefix);
    if !out_unit.is_valid() {
        return Err(UnitsError::InvalidUnit(p.unit));
    }
    Ok(json!({
        "value": sample_to_json(conversion.apply_sample(sample)),
        "unit": out_unit.render_short(),
    }))
}

fn list_prefixes() -> JsonValue {
    let prefixes: Vec<JsonValue> = Prefix::ALL
        .iter()
        .map(|p| json!({ "name": p, "symbol": p.symbol(), "factor": p.factor() }))
        .collect();
    JsonValue::Array(prefixes)
}

fn list_measures() -> JsonValue {
    let measures: Vec<JsonValue> = Measure::ALL
        .iter()
        .map(|m| json!({ "name": m, "long": m.long_name(), "symbol": m.symbol() }))
        .collect();
    JsonValue::Array(measures)
}

fn parse_valid_unit(literal: &str) -> Result<Unit, UnitsError> {
    let unit = Unit::parse(literal);
    if unit.is_valid() {
        Ok(unit)
    } else {
        Err(UnitsError::InvalidUnit(literal.to_string()))
    }
}

/// A JSON number as a sample. Integers stay integers so conversions
/// truncate like the metric source would.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
enum JsonSample {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<JsonSample> for Sample {
    fn from(value: JsonSample) -> Self {
        match value {
            JsonSample::Signed(v) => Sample::I64(v),
            JsonSample::Unsigned(v) => Sample::U64(v),
            JsonSample::Float(v) => Sample::F64(v),
        }
    }
}

fn sample_to_json(sample: Sample) -> JsonValue {
    match sample {
        Sample::F64(v) => json!(v),
        Sample::F32(v) => json!(v),
        Sample::I32(v) => json!(v),
        Sample::I64(v) => json!(v),
        Sample::U32(v) => json!(v),
        Sample::U64(v) => json!(v),
        Sample::ISize(v) => json!(v),
        Sample::USize(v) => json!(v),
    }
}
