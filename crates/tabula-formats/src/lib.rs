//! Format adapters for Tabula.
//!
//! This crate provides the readers and writers behind each [`Format`].
//! Adapters that need a third-party parser are behind feature flags.
//!
//! # Features
//!
//! - `json` (default) - JSON arrays of flat objects via serde_json
//! - `html` (default) - reading HTML tables via scraper
//! - `all` - All formats
//!
//! CSV, TSV and SQL have no dependencies and are always available, as is
//! HTML output.
//!
//! ```
//! use tabula::{ConvertOptions, Format};
//!
//! let sql = tabula_formats::convert(
//!     "name,age\nAlice,30",
//!     Format::Csv,
//!     Format::Sql,
//!     &ConvertOptions::new().table_name("people"),
//! )
//! .unwrap();
//! assert_eq!(sql, "INSERT INTO `people` (`name`, `age`) VALUES ('Alice', 30);");
//! ```

pub mod delimited;
pub mod html;
#[cfg(feature = "json")]
pub mod json;
pub mod sql;

use std::sync::{Arc, OnceLock};
use tabula::{ConvertError, ConvertOptions, Format, Registry};

pub use delimited::{DelimitedReader, DelimitedWriter};
#[cfg(feature = "html")]
pub use html::{HtmlReader, parse_first_table};
pub use html::HtmlWriter;
#[cfg(feature = "json")]
pub use json::{JsonReader, JsonWriter};
pub use sql::SqlWriter;

/// Register all enabled adapters with the registry.
pub fn register_all(registry: &mut Registry) {
    registry.register_reader(DelimitedReader::csv());
    registry.register_writer(DelimitedWriter::csv());
    registry.register_reader(DelimitedReader::tsv());
    registry.register_writer(DelimitedWriter::tsv());

    #[cfg(feature = "json")]
    {
        registry.register_reader(JsonReader);
        registry.register_writer(JsonWriter);
    }

    #[cfg(feature = "html")]
    {
        registry.register_reader(HtmlReader);
    }
    registry.register_writer(HtmlWriter);

    registry.register_writer(SqlWriter);
}

/// Get list of readable formats based on feature flags.
pub fn readable_formats() -> Vec<Format> {
    [
        Format::Csv,
        Format::Tsv,
        #[cfg(feature = "json")]
        Format::Json,
        #[cfg(feature = "html")]
        Format::Html,
    ]
    .into()
}

/// Shared registry with every enabled adapter.
pub fn default_registry() -> Arc<Registry> {
    static REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();
    REGISTRY
        .get_or_init(|| {
            let mut registry = Registry::new();
            register_all(&mut registry);
            Arc::new(registry)
        })
        .clone()
}

/// Convert `text` from `input` to `output` with the default adapters.
pub fn convert(
    text: &str,
    input: Format,
    output: Format,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    tabula::convert(&default_registry(), text, input, output, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula::{Orchestrator, Role, Surface};

    #[test]
    fn test_register_all() {
        let registry = default_registry();

        for format in readable_formats() {
            assert!(registry.can_read(format), "no reader for {format}");
        }
        for format in Format::ALL {
            assert!(registry.can_write(*format), "no writer for {format}");
        }
        assert!(!registry.can_read(Format::Sql));
    }

    #[test]
    fn test_csv_to_sql() {
        let out = convert(
            "name,age,note\nAlice,30,",
            Format::Csv,
            Format::Sql,
            &ConvertOptions::new().table_name("t"),
        )
        .unwrap();

        assert_eq!(
            out,
            "INSERT INTO `t` (`name`, `age`, `note`) VALUES ('Alice', 30, NULL);"
        );
    }

    #[test]
    fn test_csv_to_tsv() {
        let out = convert(
            "\"a,b\",c\n1,\"x\ty\"",
            Format::Csv,
            Format::Tsv,
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(out, "a,b\tc\n1\t\"x\ty\"");
    }

    #[test]
    fn test_blank_csv_is_empty_input() {
        let result = convert(" \n \n", Format::Csv, Format::Tsv, &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::EmptyInput)));
    }

    #[test]
    fn test_header_only_csv_to_sql_is_empty_input() {
        let result = convert("a,b", Format::Csv, Format::Sql, &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::EmptyInput)));
    }

    #[test]
    fn test_sql_is_never_a_source() {
        let result = convert(
            "INSERT INTO `t` (`a`) VALUES (1);",
            Format::Sql,
            Format::Csv,
            &ConvertOptions::default(),
        );
        assert!(matches!(
            result,
            Err(ConvertError::UnsupportedFormat {
                format: Format::Sql,
                role: Role::Input
            })
        ));
    }

    #[test]
    #[cfg(feature = "json")]
    fn test_csv_json_roundtrip() {
        let csv = "name,age\nAlice,30\nBob,";
        let json = convert(csv, Format::Csv, Format::Json, &ConvertOptions::default()).unwrap();
        let back = convert(&json, Format::Json, Format::Csv, &ConvertOptions::default()).unwrap();

        assert_eq!(back, csv);
    }

    #[test]
    #[cfg(feature = "json")]
    fn test_invalid_json_message() {
        let err = convert("{oops", Format::Json, Format::Csv, &ConvertOptions::default())
            .unwrap_err();

        assert!(matches!(err, ConvertError::Parse(_)));
        assert!(err.to_string().starts_with("parse error: invalid JSON"));
    }

    #[test]
    #[cfg(feature = "html")]
    fn test_table_surface_html_to_csv_and_back() {
        let mut orch = Orchestrator::new(default_registry(), Surface::TABLE);
        let csv = orch
            .convert("<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>")
            .unwrap();
        assert_eq!(csv, "A,B\n1,2");

        assert_eq!(orch.swap(), (Format::Csv, Format::Html));
        let html = orch.convert(&csv).unwrap();
        assert!(html.starts_with("<table>\n  <thead>"));
        assert!(html.contains("      <td>2</td>"));
    }

    #[test]
    #[cfg(feature = "html")]
    fn test_html_without_table_is_parse_error() {
        let result = convert("<p>hi</p>", Format::Html, Format::Csv, &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::Parse(_))));
    }

    #[test]
    fn test_data_surface_swap_from_sql() {
        let mut orch = Orchestrator::new(default_registry(), Surface::DATA);
        orch.select_input(Format::Tsv).unwrap();
        orch.select_output(Format::Sql).unwrap();

        assert_eq!(orch.swap(), (Format::Csv, Format::Tsv));
        assert_eq!(orch.convert("a,b\n1,2").unwrap(), "a\tb\n1\t2");
    }
}
