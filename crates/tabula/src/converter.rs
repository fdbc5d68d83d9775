//! Adapter declarations, the reader/writer traits, and conversion errors.

use crate::format::Format;
use crate::matrix::Matrix;
use crate::options::ConvertOptions;
use std::fmt;

/// Declaration of an adapter: what it is and which format it handles.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterDecl {
    /// Unique identifier, e.g. `csv.read`.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// The format read or written.
    pub format: Format,
}

impl AdapterDecl {
    /// Create a new adapter declaration.
    pub fn new(id: impl Into<String>, format: Format) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            format,
        }
    }

    /// Set the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// Parses text of one format into a [`Matrix`].
pub trait Reader: Send + Sync {
    /// Get the declaration for this reader.
    fn decl(&self) -> &AdapterDecl;

    /// Parse `input`. An empty matrix is a valid result; rejecting it is the
    /// orchestrator's job.
    fn read(&self, input: &str) -> Result<Matrix, ConvertError>;
}

/// Serializes a [`Matrix`] into text of one format.
pub trait Writer: Send + Sync {
    /// Get the declaration for this writer.
    fn decl(&self) -> &AdapterDecl;

    /// Serialize `matrix`. Output never ends with a trailing newline.
    fn write(&self, matrix: &Matrix, options: &ConvertOptions) -> Result<String, ConvertError>;
}

/// Which side of a conversion a format was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Input,
    Output,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Input => f.write_str("input"),
            Role::Output => f.write_str("output"),
        }
    }
}

/// Errors that can occur during conversion.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input does not meet the structural minimum for its declared format.
    #[error("parse error: {0}")]
    Parse(String),

    /// Parsing succeeded but produced no rows.
    #[error("input is empty: nothing to convert")]
    EmptyInput,

    /// Unexpected failure while serializing.
    #[error("conversion failed: {0}")]
    Conversion(String),

    #[error("{format} is not available as an {role} format")]
    UnsupportedFormat { format: Format, role: Role },

    #[error("unknown format: {0}")]
    UnknownFormat(String),
}
