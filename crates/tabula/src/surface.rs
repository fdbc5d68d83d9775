//! Conversion surfaces: fixed sets of formats offered together.
//!
//! A surface limits which formats may be picked as input and output, says
//! which input to fall back to when a swap would make a write-only format
//! the source, and lists the output order scanned to break a swap tie.

use crate::format::Format;

/// A fixed set of input and output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub name: &'static str,
    /// Formats allowed as input.
    pub inputs: &'static [Format],
    /// Formats allowed as output.
    pub outputs: &'static [Format],
    /// Input selected when a swap would move an unparseable output to the input side.
    pub fallback_input: Format,
    /// Outputs scanned in order when a swap leaves input and output equal.
    pub tie_break: &'static [Format],
    pub default_input: Format,
    pub default_output: Format,
}

impl Surface {
    /// Delimited text and JSON in, plus SQL out.
    pub const DATA: Surface = Surface {
        name: "data",
        inputs: &[Format::Csv, Format::Tsv, Format::Json],
        outputs: &[Format::Csv, Format::Tsv, Format::Json, Format::Sql],
        fallback_input: Format::Csv,
        tie_break: &[Format::Csv, Format::Tsv, Format::Json, Format::Sql],
        default_input: Format::Csv,
        default_output: Format::Json,
    };

    /// HTML tables to and from CSV and JSON.
    pub const TABLE: Surface = Surface {
        name: "table",
        inputs: &[Format::Html, Format::Csv, Format::Json],
        outputs: &[Format::Html, Format::Csv, Format::Json],
        fallback_input: Format::Html,
        tie_break: &[Format::Html, Format::Csv, Format::Json],
        default_input: Format::Html,
        default_output: Format::Csv,
    };

    pub const ALL: &'static [Surface] = &[Surface::DATA, Surface::TABLE];

    /// Look up a surface by name.
    pub fn by_name(name: &str) -> Option<Surface> {
        Self::ALL
            .iter()
            .find(|surface| surface.name.eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn accepts_input(&self, format: Format) -> bool {
        self.inputs.contains(&format)
    }

    pub fn accepts_output(&self, format: Format) -> bool {
        self.outputs.contains(&format)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Surface::DATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Surface::by_name("data"), Some(Surface::DATA));
        assert_eq!(Surface::by_name("TABLE"), Some(Surface::TABLE));
        assert_eq!(Surface::by_name("spreadsheet"), None);
    }

    #[test]
    fn test_sql_is_output_only() {
        assert!(Surface::DATA.accepts_output(Format::Sql));
        assert!(!Surface::DATA.accepts_input(Format::Sql));
        assert!(!Surface::TABLE.accepts_output(Format::Sql));
    }

    #[test]
    fn test_surfaces_are_consistent() {
        for surface in Surface::ALL {
            assert!(surface.accepts_input(surface.fallback_input));
            assert!(surface.accepts_input(surface.default_input));
            assert!(surface.accepts_output(surface.default_output));
            assert_ne!(surface.default_input, surface.default_output);
            assert!(surface.tie_break.iter().all(|f| surface.accepts_output(*f)));
            assert!(surface.inputs.iter().all(|f| surface.accepts_output(*f)));
        }
    }
}
