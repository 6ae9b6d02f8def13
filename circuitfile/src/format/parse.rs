//! Deserializer: document text to circuit descriptors.
//!
//! Parsing is staged so failures surface in a defined order: JSON syntax
//! first (`MalformedDocument`), then the version gate before any circuit
//! content is decoded (`IncompatibleVersion`), then per-entry field checks
//! (`MissingField`). Property values are taken verbatim from the document and
//! validators are left unset; the host attaches them when it constructs the
//! typed components.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{check_version, FormatError};
use crate::descriptor::{CircuitDescriptor, ComponentDescriptor, PropertyDescriptor, WireDescriptor};
use crate::property::PropertyValue;

/// Parse a circuit document, gating on `expected_version`.
///
/// The returned sequence preserves the document's own circuit key order.
/// Fields present with the wrong JSON type are reported as
/// [`FormatError::MalformedDocument`]; absent required fields as
/// [`FormatError::MissingField`]. On any error the whole load is aborted.
pub fn parse(text: &str, expected_version: u32) -> Result<Vec<CircuitDescriptor>, FormatError> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| malformed(format!("invalid JSON: {}", e)))?;
    let root = root
        .as_object()
        .ok_or_else(|| malformed("top level is not an object"))?;

    let version = root
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| malformed("`version` is missing or not a number"))?;
    let version =
        u32::try_from(version).map_err(|_| malformed("`version` is out of range"))?;
    check_version(version, expected_version)?;

    let entries = root
        .get("circuits")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("`circuits` is missing or not an object"))?;

    let mut circuits = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        circuits.push(parse_circuit(name, value)?);
    }

    tracing::debug!(
        "parsed {} circuit(s) at format version {}",
        circuits.len(),
        version
    );
    Ok(circuits)
}

fn parse_circuit(name: &str, value: &Value) -> Result<CircuitDescriptor, FormatError> {
    let entry = format!("circuit `{}`", name);
    let obj = value
        .as_object()
        .ok_or_else(|| malformed(format!("{} is not an object", entry)))?;

    let components = require(obj, "components", &entry)?
        .as_array()
        .ok_or_else(|| malformed(format!("`components` of {} is not an array", entry)))?
        .iter()
        .enumerate()
        .map(|(i, c)| parse_component(name, i, c))
        .collect::<Result<Vec<_>, _>>()?;

    let wires = require(obj, "wires", &entry)?
        .as_array()
        .ok_or_else(|| malformed(format!("`wires` of {} is not an array", entry)))?
        .iter()
        .enumerate()
        .map(|(i, w)| parse_wire(name, i, w))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CircuitDescriptor {
        name: name.to_string(),
        components,
        wires,
    })
}

fn parse_component(circuit: &str, index: usize, value: &Value) -> Result<ComponentDescriptor, FormatError> {
    let entry = format!("component {} in circuit `{}`", index, circuit);
    let obj = value
        .as_object()
        .ok_or_else(|| malformed(format!("{} is not an object", entry)))?;

    let class_name = require_str(obj, "name", &entry)?;
    let x = require_i32(obj, "x", &entry)?;
    let y = require_i32(obj, "y", &entry)?;

    let raw_properties = require(obj, "properties", &entry)?
        .as_object()
        .ok_or_else(|| malformed(format!("`properties` of {} is not an object", entry)))?;

    let mut properties = IndexMap::with_capacity(raw_properties.len());
    for (prop_name, prop_value) in raw_properties {
        let value = PropertyValue::from_json(prop_value).ok_or_else(|| {
            malformed(format!(
                "property `{}` of {} is not a string, number, or boolean",
                prop_name, entry
            ))
        })?;
        properties.insert(prop_name.clone(), PropertyDescriptor::new(prop_name.clone(), value));
    }

    Ok(ComponentDescriptor {
        class_name,
        x,
        y,
        properties,
    })
}

fn parse_wire(circuit: &str, index: usize, value: &Value) -> Result<WireDescriptor, FormatError> {
    let entry = format!("wire {} in circuit `{}`", index, circuit);
    let obj = value
        .as_object()
        .ok_or_else(|| malformed(format!("{} is not an object", entry)))?;

    Ok(WireDescriptor {
        x: require_i32(obj, "x", &entry)?,
        y: require_i32(obj, "y", &entry)?,
        length: require_i32(obj, "length", &entry)?,
        is_horizontal: require_bool(obj, "isHorizontal", &entry)?,
    })
}

fn malformed(msg: impl Into<String>) -> FormatError {
    FormatError::MalformedDocument(msg.into())
}

fn require<'a>(obj: &'a Map<String, Value>, field: &str, entry: &str) -> Result<&'a Value, FormatError> {
    obj.get(field).ok_or_else(|| FormatError::MissingField {
        field: field.to_string(),
        entry: entry.to_string(),
    })
}

fn require_str(obj: &Map<String, Value>, field: &str, entry: &str) -> Result<String, FormatError> {
    require(obj, field, entry)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| malformed(format!("`{}` of {} is not a string", field, entry)))
}

fn require_i32(obj: &Map<String, Value>, field: &str, entry: &str) -> Result<i32, FormatError> {
    require(obj, field, entry)?
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| malformed(format!("`{}` of {} is not an integer", field, entry)))
}

fn require_bool(obj: &Map<String, Value>, field: &str, entry: &str) -> Result<bool, FormatError> {
    require(obj, field, entry)?
        .as_bool()
        .ok_or_else(|| malformed(format!("`{}` of {} is not a boolean", field, entry)))
}
