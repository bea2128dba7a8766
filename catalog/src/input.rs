//! Tabular input.
//!
//! Reads the product catalog CSV into [`Row`]s. Row order is preserved: it
//! drives first-seen ordering of every class and instance downstream.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::model::{Row, REQUIRED_COLUMNS};

/// Reads every row of the CSV file at `path`.
///
/// # Errors
///
/// - [`CatalogError::MissingInput`] if `path` does not exist.
/// - [`CatalogError::MissingColumn`] if the header lacks a required column.
/// - [`CatalogError::MalformedRow`] / [`CatalogError::InvalidField`] if any
///   record fails to decode; no rows are returned in that case.
/// - [`CatalogError::Io`] if the file exists but cannot be opened.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_rows(file)?;
    info!(path = %path.display(), rows = rows.len(), "read catalog input");
    Ok(rows)
}

/// Parses CSV rows from any reader.
///
/// # Errors
///
/// Same as [`read_rows`], minus the file-system variants.
pub fn parse_rows<R: io::Read>(source: R) -> Result<Vec<Row>, CatalogError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let headers = reader
        .headers()
        .map_err(|source| CatalogError::MalformedRow { line: 1, source })?
        .clone();
    check_columns(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| CatalogError::MalformedRow {
            line: source.position().map_or(0, csv::Position::line),
            source,
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: Row = record
            .deserialize(Some(&headers))
            .map_err(|source| CatalogError::MalformedRow { line, source })?;
        if !row.price.is_finite() || row.price < 0.0 {
            return Err(CatalogError::InvalidField {
                line,
                column: "price",
                message: format!("expected a non-negative number, got {}", row.price),
            });
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), "parsed catalog rows");
    Ok(rows)
}

fn check_columns(headers: &StringRecord) -> Result<(), CatalogError> {
    match REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        Some(column) => Err(CatalogError::MissingColumn { column }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const HEADER: &str = "id,name,category,subcategory,type,brand,price,quantity\n";

    #[test]
    fn reads_rows_in_order() {
        let csv = format!(
            "{HEADER}P1,Fuji Apple,Fruit,Apple,Apple,FarmCo,1.50,1kg\n\
             P2,Lime,Fruit,Citrus,Lime,FarmCo,0.4,1 pc\n"
        );
        let rows = parse_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "P1");
        assert_eq!(rows[0].name, "Fuji Apple");
        assert_eq!(rows[0].type_, "Apple");
        assert!((rows[0].price - 1.5).abs() < f64::EPSILON);
        assert_eq!(rows[1].quantity, "1 pc");
    }

    #[test]
    fn ignores_extra_columns_and_order() {
        let csv = "quantity,price,brand,type,subcategory,category,name,id,notes\n\
                   1kg,2,FarmCo,Apple,Apple,Fruit,Gala,P9,seasonal\n";
        let rows = parse_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].id, "P9");
        assert_eq!(rows[0].category, "Fruit");
    }

    #[test]
    fn missing_column_is_schema_error() {
        let csv = "id,name,category,subcategory,brand,price,quantity\n";
        let err = parse_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(matches!(err, CatalogError::MissingColumn { column: "type" }));
    }

    #[test]
    fn empty_input_is_missing_columns() {
        let err = parse_rows("".as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { column: "id" }));
    }

    #[test]
    fn unparsable_price_reports_line() {
        let csv = format!("{HEADER}P1,Gala,Fruit,Apple,Apple,FarmCo,cheap,1kg\n");
        let err = parse_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn negative_price_is_rejected() {
        let csv = format!("{HEADER}P1,Gala,Fruit,Apple,Apple,FarmCo,-1,1kg\n");
        let err = parse_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField {
                line: 2,
                column: "price",
                ..
            }
        ));
    }

    #[test]
    fn short_record_is_malformed() {
        let csv = format!("{HEADER}P1,Gala,Fruit\n");
        let err = parse_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn missing_file_is_reported_before_reading() {
        let err = read_rows(Path::new("/nonexistent/Products.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);
    }
}
