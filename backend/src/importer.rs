//! Spreadsheet ingestion: first worksheet of an `.xlsx` file into `assignments` rows.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::NaiveTime;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::db::{self, repository};
use crate::error::ImportError;
use crate::models::NewAssignment;

/// Header names the first row must carry, matched exactly.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "course", "due_date", "type"];

/// Column index of each required field within the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndices {
    name: usize,
    course: usize,
    due_date: usize,
    kind: usize,
}

/// Reads every data row of the first worksheet into [`NewAssignment`]s.
///
/// Fails with [`ImportError::MissingColumn`] before producing any row when a
/// required header is absent.
pub fn read_assignments(path: impl AsRef<Path>) -> Result<Vec<NewAssignment>, ImportError> {
    let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or(ImportError::NoWorksheet)?
        .clone();

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let cols = parse_header(header)?;

    let assignments: Vec<NewAssignment> = rows
        .filter(|row| !is_blank(row))
        .map(|row| NewAssignment {
            name: get_cell_string(row, cols.name),
            course: get_cell_string(row, cols.course),
            due_date: get_cell_string(row, cols.due_date),
            kind: get_cell_string(row, cols.kind),
        })
        .collect();

    debug!("read {} rows from sheet {:?}", assignments.len(), sheet_name);
    Ok(assignments)
}

/// Creates the schema if needed and inserts one record per spreadsheet row.
///
/// Rows are inserted one statement at a time; a failing row stops the import
/// and leaves earlier rows in place. Nothing prevents importing the same file
/// twice, which duplicates every row.
pub async fn import_file(db: &SqlitePool, path: impl AsRef<Path>) -> Result<usize, ImportError> {
    let path = path.as_ref();
    let assignments = read_assignments(path)?;

    db::ensure_schema(db).await?;

    if assignments.is_empty() {
        warn!("no data rows found in {}", path.display());
        return Ok(0);
    }

    for new in &assignments {
        repository::insert_assignment(db, new).await?;
    }

    info!("imported {} assignments from {}", assignments.len(), path.display());
    Ok(assignments.len())
}

fn parse_header(header: &[Data]) -> Result<ColumnIndices, ImportError> {
    let names: Vec<String> = header
        .iter()
        .map(|c| match c {
            Data::String(s) => s.clone(),
            _ => String::new(),
        })
        .collect();

    let find = |column: &'static str| {
        names
            .iter()
            .position(|n| n == column)
            .ok_or(ImportError::MissingColumn { column })
    };

    Ok(ColumnIndices {
        name: find(REQUIRED_COLUMNS[0])?,
        course: find(REQUIRED_COLUMNS[1])?,
        due_date: find(REQUIRED_COLUMNS[2])?,
        kind: find(REQUIRED_COLUMNS[3])?,
    })
}

fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|c| cell_to_string(c).is_none())
}

fn get_cell_string(row: &[Data], col: usize) -> Option<String> {
    row.get(col).and_then(cell_to_string)
}

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => dt.as_datetime().map(|dt| {
            if dt.time() == NaiveTime::MIN {
                dt.format("%Y-%m-%d").to_string()
            } else {
                dt.format("%Y-%m-%d %H:%M:%S").to_string()
            }
        }),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) | Data::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<Data> {
        names.iter().map(|n| Data::String(n.to_string())).collect()
    }

    #[test]
    fn test_parse_header_any_order() {
        let cols = parse_header(&header(&["type", "notes", "due_date", "name", "course"]))
            .expect("header should parse");
        assert_eq!(
            cols,
            ColumnIndices {
                name: 3,
                course: 4,
                due_date: 2,
                kind: 0,
            }
        );
    }

    #[test]
    fn test_parse_header_requires_exact_names() {
        let err = parse_header(&header(&[" name", "course", "due_date", "type"]))
            .expect_err("padded header must not match");
        assert!(matches!(err, ImportError::MissingColumn { column: "name" }));
    }

    #[test]
    fn test_parse_header_is_case_sensitive() {
        let err = parse_header(&header(&["Name", "course", "due_date", "type"]))
            .expect_err("capitalized header must not match");
        assert!(matches!(err, ImportError::MissingColumn { column: "name" }));
    }

    #[test]
    fn test_parse_header_reports_first_missing_column() {
        let err = parse_header(&header(&["name", "course", "type"]))
            .expect_err("due_date is missing");
        assert!(matches!(err, ImportError::MissingColumn { column: "due_date" }));
    }

    #[test]
    fn test_cell_to_string_coercion() {
        assert_eq!(cell_to_string(&Data::String("Essay".into())), Some("Essay".into()));
        assert_eq!(cell_to_string(&Data::Int(7)), Some("7".into()));
        assert_eq!(cell_to_string(&Data::Float(101.0)), Some("101".into()));
        assert_eq!(cell_to_string(&Data::Float(2.5)), Some("2.5".into()));
        assert_eq!(
            cell_to_string(&Data::Float(1e20)),
            Some("100000000000000000000".into())
        );
        assert_eq!(cell_to_string(&Data::Bool(true)), Some("true".into()));
        assert_eq!(
            cell_to_string(&Data::DateTimeIso("2024-05-01T00:00:00".into())),
            Some("2024-05-01T00:00:00".into())
        );
        assert_eq!(cell_to_string(&Data::String("   ".into())), None);
        assert_eq!(cell_to_string(&Data::Empty), None);
    }

    #[test]
    fn test_blank_row_detection() {
        assert!(is_blank(&[Data::Empty, Data::String(String::new())]));
        assert!(!is_blank(&[Data::Empty, Data::Int(0)]));
    }

    #[test]
    fn test_get_cell_string_out_of_range() {
        let row = vec![Data::String("Essay".into())];
        assert_eq!(get_cell_string(&row, 3), None);
    }
}
