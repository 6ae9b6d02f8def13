//! Serializer: circuit descriptors to document text.
//!
//! The asymmetry with the load path is deliberate: load accepts raw document
//! values, but save always re-renders every property through its validator's
//! canonical string conversion. A property without a validator cannot be
//! saved.

use indexmap::IndexMap;

use super::{Document, DocumentCircuit, DocumentComponent, DocumentWire, FormatError};
use crate::descriptor::{CircuitDescriptor, ComponentDescriptor, WireDescriptor};

/// Serialize circuits to pretty-printed document text, stamped with
/// `version`.
///
/// Circuits are emitted in input order; components and wires in the order of
/// their collections (which carries no meaning to this layer). The only fatal
/// condition is [`FormatError::MissingValidator`] — this path never fails on
/// version, since it always writes the version it is given.
pub fn serialize(circuits: &[CircuitDescriptor], version: u32) -> Result<String, FormatError> {
    let mut document = Document {
        version,
        circuits: IndexMap::with_capacity(circuits.len()),
    };

    for circuit in circuits {
        let components = circuit
            .components
            .iter()
            .map(serialize_component)
            .collect::<Result<Vec<_>, _>>()?;
        let wires = circuit.wires.iter().map(serialize_wire).collect();

        document
            .circuits
            .insert(circuit.name.clone(), DocumentCircuit { components, wires });
    }

    tracing::debug!(
        "serialized {} circuit(s) at format version {}",
        circuits.len(),
        version
    );
    serde_json::to_string_pretty(&document)
        .map_err(|e| FormatError::MalformedDocument(e.to_string()))
}

fn serialize_component(component: &ComponentDescriptor) -> Result<DocumentComponent, FormatError> {
    let mut properties = IndexMap::with_capacity(component.properties.len());
    for (name, property) in &component.properties {
        let validator =
            property
                .validator
                .as_ref()
                .ok_or_else(|| FormatError::MissingValidator {
                    component: component.class_name.clone(),
                    property: name.clone(),
                })?;
        properties.insert(name.clone(), validator.format(&property.value));
    }

    Ok(DocumentComponent {
        name: component.class_name.clone(),
        x: component.x,
        y: component.y,
        properties,
    })
}

fn serialize_wire(wire: &WireDescriptor) -> DocumentWire {
    DocumentWire {
        x: wire.x,
        y: wire.y,
        length: wire.length,
        is_horizontal: wire.is_horizontal,
    }
}
