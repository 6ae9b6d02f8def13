//! The on-disk circuit document format: schema, version gate, parse and
//! serialize.

pub mod document;
pub mod parse;
pub mod serialize;

// Re-export for convenience
pub use document::{check_version, Document, DocumentCircuit, DocumentComponent, DocumentWire};
pub use parse::parse;
pub use serialize::serialize;

use thiserror::Error;

/// Errors raised by the format layer. All of them abort the whole operation;
/// no partial result is ever returned.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input text is not a well-formed circuit document.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The document was written by a different format version. No migration
    /// is attempted.
    #[error("incompatible file version {found}, expected {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },

    /// A required field is absent from a component or wire entry. No default
    /// is ever substituted.
    #[error("missing required field `{field}` in {entry}")]
    MissingField { field: String, entry: String },

    /// A property had no validator at save time, so no canonical string form
    /// could be produced. This is a caller error.
    #[error("property `{property}` on component `{component}` has no validator")]
    MissingValidator { component: String, property: String },
}
