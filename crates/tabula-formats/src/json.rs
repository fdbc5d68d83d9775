//! JSON: an array of flat objects, one object per data row.
//!
//! The header comes from the first element's keys only. Later objects are
//! read through that header: missing keys become empty cells and keys the
//! first element lacks are dropped. Heterogeneous arrays therefore do not
//! survive a round trip.

use indexmap::IndexMap;
use serde_json::Value;
use tabula::{AdapterDecl, ConvertError, ConvertOptions, Format, Matrix, Reader, Row, Writer};

/// Build one object per record, keyed by the header in header order.
///
/// Short rows are padded with empty strings; cells beyond the header are
/// ignored. Duplicate header names keep the first position and the last value.
pub fn to_json(matrix: &Matrix) -> Result<String, ConvertError> {
    let header = matrix.header().map(Vec::as_slice).unwrap_or_default();
    let objects: Vec<IndexMap<&str, &str>> = matrix
        .records()
        .iter()
        .map(|row| {
            header
                .iter()
                .enumerate()
                .map(|(i, key)| (key.as_str(), row.get(i).map_or("", String::as_str)))
                .collect()
        })
        .collect();

    serde_json::to_string_pretty(&objects).map_err(|e| ConvertError::Conversion(e.to_string()))
}

/// Parse a non-empty JSON array of objects.
pub fn from_json(text: &str) -> Result<Matrix, ConvertError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ConvertError::Parse(format!("invalid JSON: {}", e)))?;

    let elements = value
        .as_array()
        .ok_or_else(|| ConvertError::Parse("expected a JSON array of objects".into()))?;
    let first = elements
        .first()
        .ok_or_else(|| ConvertError::Parse("JSON array is empty".into()))?
        .as_object()
        .ok_or_else(|| ConvertError::Parse("first array element is not an object".into()))?;

    let header: Row = first.keys().cloned().collect();
    let records: Vec<Row> = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let object = element.as_object();
            if object.is_none() {
                tracing::debug!(index, "array element is not an object, emitting empty row");
            }
            header
                .iter()
                .map(|key| {
                    object
                        .and_then(|o| o.get(key))
                        .map(cell_text)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    Ok(std::iter::once(header).chain(records).collect())
}

/// Text form of a JSON value as a cell.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Parse JSON arrays of objects.
pub struct JsonReader;

impl Reader for JsonReader {
    fn decl(&self) -> &AdapterDecl {
        static DECL: std::sync::OnceLock<AdapterDecl> = std::sync::OnceLock::new();
        DECL.get_or_init(|| {
            AdapterDecl::new("json.read", Format::Json)
                .description("Parse a JSON array of objects; header from the first element")
        })
    }

    fn read(&self, input: &str) -> Result<Matrix, ConvertError> {
        from_json(input)
    }
}

/// Serialize records as a JSON array of objects.
pub struct JsonWriter;

impl Writer for JsonWriter {
    fn decl(&self) -> &AdapterDecl {
        static DECL: std::sync::OnceLock<AdapterDecl> = std::sync::OnceLock::new();
        DECL.get_or_init(|| {
            AdapterDecl::new("json.write", Format::Json)
                .description("Serialize rows as a JSON array of objects keyed by the header")
        })
    }

    fn write(&self, matrix: &Matrix, _options: &ConvertOptions) -> Result<String, ConvertError> {
        to_json(matrix)
    }
}
