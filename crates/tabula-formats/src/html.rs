//! HTML tables.
//!
//! Reading takes the first `<table>` of a fragment and flattens every `th`
//! or `td` of every `tr` into a cell. `colspan`/`rowspan` are ignored, so a
//! spanned cell is one cell and the grid may not match what a browser shows.
//!
//! Writing puts row 0 in `<thead>` and the rest in `<tbody>`. Cell text is
//! inserted as-is: `<` and `&` are not escaped.

use tabula::{AdapterDecl, ConvertError, ConvertOptions, Format, LineBuilder, Matrix, Row, Writer};

/// Render a matrix as an indented `<table>`.
pub fn to_html(matrix: &Matrix) -> String {
    let mut lines = LineBuilder::lines();
    lines.push("<table>");

    lines.indented(1, "<thead>");
    if let Some(header) = matrix.header() {
        push_row(&mut lines, header, "th");
    }
    lines.indented(1, "</thead>");

    lines.indented(1, "<tbody>");
    for row in matrix.records() {
        push_row(&mut lines, row, "td");
    }
    lines.indented(1, "</tbody>");

    lines.push("</table>");
    lines.build()
}

fn push_row(lines: &mut LineBuilder, row: &Row, tag: &str) {
    lines.indented(2, "<tr>");
    for cell in row {
        lines.indented(3, format!("<{tag}>{cell}</{tag}>"));
    }
    lines.indented(2, "</tr>");
}

/// Serialize a matrix as HTML table markup.
pub struct HtmlWriter;

impl Writer for HtmlWriter {
    fn decl(&self) -> &AdapterDecl {
        static DECL: std::sync::OnceLock<AdapterDecl> = std::sync::OnceLock::new();
        DECL.get_or_init(|| {
            AdapterDecl::new("html.write", Format::Html)
                .description("Render rows as an HTML table, row 0 as the header")
        })
    }

    fn write(&self, matrix: &Matrix, _options: &ConvertOptions) -> Result<String, ConvertError> {
        Ok(to_html(matrix))
    }
}

#[cfg(feature = "html")]
mod reader_impl {
    use super::*;
    use scraper::{ElementRef, Html, Selector};
    use tabula::Reader;

    fn selector(css: &str) -> Result<Selector, ConvertError> {
        Selector::parse(css)
            .map_err(|e| ConvertError::Conversion(format!("invalid selector {css:?}: {e}")))
    }

    /// Flattened, trimmed text of an element and all its descendants.
    fn cell_text(cell: ElementRef<'_>) -> String {
        cell.text().collect::<String>().trim().to_string()
    }

    /// Parse the first `<table>` in an HTML fragment into a matrix.
    ///
    /// Rows and cells are collected in document order at any nesting depth.
    pub fn parse_first_table(text: &str) -> Result<Matrix, ConvertError> {
        let fragment = Html::parse_fragment(text);
        let table_selector = selector("table")?;
        let row_selector = selector("tr")?;
        let cell_selector = selector("th, td")?;

        let table = fragment
            .select(&table_selector)
            .next()
            .ok_or_else(|| ConvertError::Parse("no <table> element found".into()))?;

        Ok(table
            .select(&row_selector)
            .map(|row| row.select(&cell_selector).map(cell_text).collect())
            .collect())
    }

    /// Parse the first HTML table of a fragment.
    pub struct HtmlReader;

    impl Reader for HtmlReader {
        fn decl(&self) -> &AdapterDecl {
            static DECL: std::sync::OnceLock<AdapterDecl> = std::sync::OnceLock::new();
            DECL.get_or_init(|| {
                AdapterDecl::new("html.read", Format::Html)
                    .description("Parse the first <table> of an HTML fragment")
            })
        }

        fn read(&self, input: &str) -> Result<Matrix, ConvertError> {
            parse_first_table(input)
        }
    }
}

#[cfg(feature = "html")]
pub use reader_impl::{HtmlReader, parse_first_table};
