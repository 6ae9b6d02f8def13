//! CircuitFile - versioned load/save format for circuit design files
//!
//! This library is the persistence layer of a circuit-design tool: it maps
//! between the on-disk document format (a versioned, human-readable JSON
//! structure) and in-memory circuit descriptors (named circuits holding
//! placed components and wires).
//!
//! # Quick Start
//!
//! ```
//! use circuitfile::format;
//!
//! let text = r#"{
//!     "version": 1,
//!     "circuits": {
//!         "main": {
//!             "components": [
//!                 { "name": "wiring.Pin", "x": 3, "y": 4,
//!                   "properties": { "bits": 8, "label": "A" } }
//!             ],
//!             "wires": [
//!                 { "x": 1, "y": 2, "length": 3, "isHorizontal": true }
//!             ]
//!         }
//!     }
//! }"#;
//!
//! let circuits = format::parse(text, 1).unwrap();
//! assert_eq!(circuits[0].name, "main");
//! assert_eq!(circuits[0].components.len(), 1);
//! assert_eq!(circuits[0].wires.len(), 1);
//! ```
//!
//! # Design
//!
//! - **Version gate**: a document's `version` must exactly equal the version
//!   the caller expects; any mismatch fails the load with
//!   [`FormatError::IncompatibleVersion`]. No migration is attempted.
//! - **Validator asymmetry**: on load, property values pass through verbatim
//!   and no validator is attached. On save, every property value is rendered
//!   through its validator's canonical string conversion; a property without
//!   a validator cannot be saved.
//! - Both transformations are pure and stateless; failures abort the whole
//!   operation with no partial result.

pub mod core;
pub mod descriptor;
pub mod format;
pub mod property;

// Re-export main types
pub use crate::core::{load_circuits, save_circuits, CircuitFileError};
pub use crate::descriptor::{
    CircuitDescriptor, ComponentDescriptor, PropertyDescriptor, WireDescriptor,
};
pub use crate::format::FormatError;
pub use crate::property::{
    IntegerValidator, ListValidator, PropertyParseError, PropertyValidator, PropertyValue,
    SharedValidator, TextValidator, YesNoValidator,
};

/// Parse document text into circuit descriptors (convenience wrapper).
pub fn parse_circuits(
    text: &str,
    expected_version: u32,
) -> Result<Vec<CircuitDescriptor>, FormatError> {
    format::parse(text, expected_version)
}

/// Serialize circuit descriptors to document text (convenience wrapper).
pub fn serialize_circuits(
    circuits: &[CircuitDescriptor],
    version: u32,
) -> Result<String, FormatError> {
    format::serialize(circuits, version)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CircuitDescriptor, CircuitFileError, ComponentDescriptor, FormatError,
        PropertyDescriptor, PropertyValidator, PropertyValue, WireDescriptor,
    };
}
