//! Per-conversion options handed to writers.

use serde::Deserialize;

const DEFAULT_TABLE_NAME: &str = "table_name";

/// Options consumed by writers. Readers take none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Table name for SQL output. Emitted verbatim between backticks.
    pub table_name: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL table name.
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }
}
