//! SQL `INSERT` statements. Write-only: there is no SQL reader.

use std::borrow::Cow;
use tabula::{AdapterDecl, ConvertError, ConvertOptions, Format, LineBuilder, Matrix, Writer};

/// One `INSERT INTO` statement per record, joined by `\n`.
///
/// Requires a header row and at least one record. Identifiers are wrapped in
/// backticks verbatim; a backtick inside a name is not escaped. Each record
/// supplies one value per header column: missing trailing cells are `NULL`
/// and cells past the header are dropped.
pub fn to_sql(matrix: &Matrix, table_name: &str) -> Result<String, ConvertError> {
    let Some(header) = matrix.header() else {
        return Err(ConvertError::EmptyInput);
    };
    let records = matrix.records();
    if records.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let mut columns = LineBuilder::new(", ");
    columns.extend(header.iter().map(|name| format!("`{}`", name)));
    let columns = columns.build();

    let mut statements = LineBuilder::lines();
    for row in records {
        let mut values = LineBuilder::new(", ");
        values.extend(
            (0..header.len()).map(|i| sql_literal(row.get(i).map_or("", String::as_str))),
        );
        statements.push(format!(
            "INSERT INTO `{}` ({}) VALUES ({});",
            table_name,
            columns,
            values.build()
        ));
    }
    Ok(statements.build())
}

/// Coerce one cell to a SQL literal.
///
/// Empty is `NULL`; a cell that parses entirely as a finite number is
/// emitted unquoted exactly as typed; anything else is a single-quoted
/// string with embedded single quotes doubled.
pub fn sql_literal(cell: &str) -> Cow<'_, str> {
    if cell.is_empty() {
        Cow::Borrowed("NULL")
    } else if is_number(cell) {
        Cow::Borrowed(cell)
    } else {
        Cow::Owned(format!("'{}'", cell.replace('\'', "''")))
    }
}

fn is_number(cell: &str) -> bool {
    cell.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Serialize records as SQL `INSERT` statements.
pub struct SqlWriter;

impl Writer for SqlWriter {
    fn decl(&self) -> &AdapterDecl {
        static DECL: std::sync::OnceLock<AdapterDecl> = std::sync::OnceLock::new();
        DECL.get_or_init(|| {
            AdapterDecl::new("sql.write", Format::Sql)
                .description("Render records as INSERT statements, row 0 as column names")
        })
    }

    fn write(&self, matrix: &Matrix, options: &ConvertOptions) -> Result<String, ConvertError> {
        to_sql(matrix, &options.table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_coercion() {
        let matrix = Matrix::from(vec![vec!["name", "age", "note"], vec!["Alice", "30", ""]]);

        assert_eq!(
            to_sql(&matrix, "t").unwrap(),
            "INSERT INTO `t` (`name`, `age`, `note`) VALUES ('Alice', 30, NULL);"
        );
    }

    #[test]
    fn test_one_statement_per_record() {
        let matrix = Matrix::from(vec![vec!["id"], vec!["1"], vec!["2"]]);

        assert_eq!(
            to_sql(&matrix, "nums").unwrap(),
            "INSERT INTO `nums` (`id`) VALUES (1);\nINSERT INTO `nums` (`id`) VALUES (2);"
        );
    }

    #[test]
    fn test_sql_literal() {
        assert_eq!(sql_literal(""), "NULL");
        assert_eq!(sql_literal("42"), "42");
        assert_eq!(sql_literal("-3.50"), "-3.50");
        assert_eq!(sql_literal("1e3"), "1e3");
        assert_eq!(sql_literal("O'Brien"), "'O''Brien'");
        assert_eq!(sql_literal("it''s"), "'it''''s'");
        assert_eq!(sql_literal("12abc"), "'12abc'");
        assert_eq!(sql_literal(" 12"), "' 12'");
        assert_eq!(sql_literal("NULL"), "'NULL'");
    }

    #[test]
    fn test_non_finite_spellings_are_strings() {
        assert_eq!(sql_literal("inf"), "'inf'");
        assert_eq!(sql_literal("NaN"), "'NaN'");
        assert_eq!(sql_literal("-infinity"), "'-infinity'");
    }

    #[test]
    fn test_ragged_records_follow_header() {
        let matrix = Matrix::from(vec![vec!["a", "b"], vec!["1"], vec!["x", "y", "z"]]);

        assert_eq!(
            to_sql(&matrix, "t").unwrap(),
            "INSERT INTO `t` (`a`, `b`) VALUES (1, NULL);\nINSERT INTO `t` (`a`, `b`) VALUES ('x', 'y');"
        );
    }

    #[test]
    fn test_identifiers_not_escaped() {
        let matrix = Matrix::from(vec![vec!["we`ird"], vec!["v"]]);

        assert_eq!(
            to_sql(&matrix, "my`table").unwrap(),
            "INSERT INTO `my`table` (`we`ird`) VALUES ('v');"
        );
    }

    #[test]
    fn test_requires_header_and_record() {
        assert!(matches!(
            to_sql(&Matrix::new(), "t"),
            Err(ConvertError::EmptyInput)
        ));
        assert!(matches!(
            to_sql(&Matrix::from(vec![vec!["only", "header"]]), "t"),
            Err(ConvertError::EmptyInput)
        ));
    }

    #[test]
    fn test_writer_uses_table_name_option() {
        let matrix = Matrix::from(vec![vec!["a"], vec!["b"]]);
        let out = SqlWriter
            .write(&matrix, &ConvertOptions::new().table_name("users"))
            .unwrap();

        assert_eq!(out, "INSERT INTO `users` (`a`) VALUES ('b');");
    }
}
