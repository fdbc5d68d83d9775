//! Registry for readers and writers.

use crate::converter::{AdapterDecl, Reader, Writer};
use crate::format::Format;
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry of available adapters, at most one reader and one writer per format.
///
/// A format with a writer but no reader (SQL) is write-only: it can be a
/// conversion target but never a source.
#[derive(Clone)]
pub struct Registry {
    /// Readers indexed by the format they parse.
    readers: IndexMap<Format, Arc<dyn Reader>>,
    /// Writers indexed by the format they produce.
    writers: IndexMap<Format, Arc<dyn Writer>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            readers: IndexMap::new(),
            writers: IndexMap::new(),
        }
    }

    /// Register a reader. Replaces any reader already registered for its format.
    pub fn register_reader(&mut self, reader: impl Reader + 'static) {
        let format = reader.decl().format;
        self.readers.insert(format, Arc::new(reader));
    }

    /// Register a writer. Replaces any writer already registered for its format.
    pub fn register_writer(&mut self, writer: impl Writer + 'static) {
        let format = writer.decl().format;
        self.writers.insert(format, Arc::new(writer));
    }

    /// Get the reader for a format.
    pub fn reader(&self, format: Format) -> Option<Arc<dyn Reader>> {
        self.readers.get(&format).cloned()
    }

    /// Get the writer for a format.
    pub fn writer(&self, format: Format) -> Option<Arc<dyn Writer>> {
        self.writers.get(&format).cloned()
    }

    pub fn can_read(&self, format: Format) -> bool {
        self.readers.contains_key(&format)
    }

    pub fn can_write(&self, format: Format) -> bool {
        self.writers.contains_key(&format)
    }

    /// Iterate over reader declarations in registration order.
    pub fn readers(&self) -> impl Iterator<Item = &AdapterDecl> {
        self.readers.values().map(|reader| reader.decl())
    }

    /// Iterate over writer declarations in registration order.
    pub fn writers(&self) -> impl Iterator<Item = &AdapterDecl> {
        self.writers.values().map(|writer| writer.decl())
    }

    /// Number of registered adapters, readers and writers together.
    pub fn len(&self) -> usize {
        self.readers.len() + self.writers.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty() && self.writers.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::converter::ConvertError;
    use crate::matrix::Matrix;
    use crate::options::ConvertOptions;

    /// Reader that splits lines on `|`; enough to drive the orchestrator.
    pub(crate) struct PipeReader(pub AdapterDecl);

    impl Reader for PipeReader {
        fn decl(&self) -> &AdapterDecl {
            &self.0
        }

        fn read(&self, input: &str) -> Result<Matrix, ConvertError> {
            Ok(input
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.split('|').map(String::from).collect())
                .collect())
        }
    }

    /// Writer that joins cells with `|`, prefixed by its format name.
    pub(crate) struct PipeWriter(pub AdapterDecl);

    impl Writer for PipeWriter {
        fn decl(&self) -> &AdapterDecl {
            &self.0
        }

        fn write(&self, matrix: &Matrix, options: &ConvertOptions) -> Result<String, ConvertError> {
            let body: Vec<String> = matrix.rows().iter().map(|row| row.join("|")).collect();
            Ok(format!(
                "{}:{}:{}",
                self.0.format,
                options.table_name,
                body.join("/")
            ))
        }
    }

    pub(crate) fn make_test_registry() -> Registry {
        let mut registry = Registry::new();
        for format in [Format::Csv, Format::Tsv, Format::Json, Format::Html] {
            registry.register_reader(PipeReader(AdapterDecl::new(
                format!("{format}.read"),
                format,
            )));
        }
        for format in Format::ALL {
            registry.register_writer(PipeWriter(AdapterDecl::new(
                format!("{format}.write"),
                *format,
            )));
        }
        registry
    }

    #[test]
    fn test_lookup() {
        let registry = make_test_registry();

        assert!(registry.can_read(Format::Csv));
        assert!(!registry.can_read(Format::Sql));
        assert!(registry.can_write(Format::Sql));
        assert!(registry.reader(Format::Sql).is_none());
        assert_eq!(registry.writer(Format::Sql).unwrap().decl().id, "sql.write");
    }

    #[test]
    fn test_len_counts_both_directions() {
        let registry = make_test_registry();

        assert_eq!(registry.len(), 9);
        assert_eq!(registry.readers().count(), 4);
        assert_eq!(registry.writers().count(), 5);
        assert!(Registry::new().is_empty());
    }

    #[test]
    fn test_register_replaces_same_format() {
        let mut registry = Registry::new();
        registry.register_reader(PipeReader(AdapterDecl::new("first", Format::Csv)));
        registry.register_reader(PipeReader(AdapterDecl::new("second", Format::Csv)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.reader(Format::Csv).unwrap().decl().id, "second");
    }
}
