//! JSON to model converters.
//!
//! Turns the raw feed body into [`Mountain`] records. Decoding is
//! all-or-nothing: the first bad element fails the whole batch and no
//! records are returned.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{MountainError, Result};
use crate::models::{AuxData, Mountain};

/// Parse a feed body into records, preserving array order.
///
/// `None` stands for a fetch that produced no body.
pub fn parse_mountains(text: Option<&str>) -> Result<Vec<Mountain>> {
    let text = text.ok_or(MountainError::NoData)?;
    let json: Value = serde_json::from_str(text)?;

    let elements = match &json {
        Value::Array(elements) => elements,
        other => return Err(MountainError::NotAnArray(json_type(other))),
    };

    let mountains = elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} mountains", mountains.len());
    Ok(mountains)
}

/// Parse a single feed element.
pub fn parse_mountain(json: &Value) -> Result<Mountain> {
    parse_element(0, json)
}

fn parse_element(index: usize, json: &Value) -> Result<Mountain> {
    let object = json
        .as_object()
        .ok_or(MountainError::InvalidElement { index })?;

    let auxdata = field(index, object, "auxdata")?
        .as_object()
        .ok_or(MountainError::WrongType {
            index,
            field: "auxdata",
            expected: "an object",
        })?;

    Ok(Mountain {
        id: get_str(index, object, "ID")?,
        name: get_str(index, object, "name")?,
        kind: get_str(index, object, "type")?,
        company: get_str(index, object, "company")?,
        location: get_str(index, object, "location")?,
        category: get_str(index, object, "category")?,
        size: get_int(index, object, "size")?,
        cost: get_int(index, object, "cost")?,
        auxdata: AuxData {
            wiki: get_str(index, auxdata, "wiki")?,
            img: get_str(index, auxdata, "img")?,
        },
    })
}

fn field<'a>(index: usize, object: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or(MountainError::MissingField { index, field: key })
}

/// Get a required string field.
fn get_str(index: usize, object: &Map<String, Value>, key: &'static str) -> Result<String> {
    field(index, object, key)?
        .as_str()
        .map(str::to_string)
        .ok_or(MountainError::WrongType {
            index,
            field: key,
            expected: "a string",
        })
}

/// Get a required integer field.
fn get_int(index: usize, object: &Map<String, Value>, key: &'static str) -> Result<i64> {
    field(index, object, key)?
        .as_i64()
        .ok_or(MountainError::WrongType {
            index,
            field: key,
            expected: "an integer",
        })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
