use std::path::Path;

use calamine::{DataType, Range, Reader, open_workbook_auto};
use tracing::{debug, instrument};

use crate::error::{LookupError, Result};
use crate::model::{Cell, Table};

/// Extensions the workbook loader accepts.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb"];

/// Reads the first worksheet of a workbook into a [`Table`].
///
/// Column positions are absolute sheet columns (column A is position 0), even
/// when the used range of the sheet starts further right. Leading blank rows
/// are skipped, then the first `header_rows` rows are dropped as headers.
#[instrument(
    level = "info",
    skip_all,
    fields(path = %path.display(), header_rows = header_rows)
)]
pub fn read_table(path: &Path, header_rows: usize) -> Result<Table> {
    if !path.exists() {
        return Err(LookupError::MissingInput(path.to_path_buf()));
    }
    if !is_workbook(path) {
        return Err(LookupError::UnsupportedFormat(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LookupError::MissingSheet(path.to_path_buf()))??;

    let table = range_to_table(&range, header_rows);
    debug!(rows = table.len(), "worksheet loaded");
    Ok(table)
}

/// Returns true when the path carries one of the [`WORKBOOK_EXTENSIONS`].
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

fn range_to_table(range: &Range<DataType>, header_rows: usize) -> Table {
    let start_col = range.start().map_or(0, |(_, col)| col as usize);

    let rows = range
        .rows()
        .skip_while(|row| row.iter().all(|cell| matches!(cell, DataType::Empty)))
        .skip(header_rows)
        .map(|row| {
            let mut cells = vec![Cell::Empty; start_col];
            cells.extend(row.iter().map(cell_from_data));
            cells
        })
        .collect();

    Table::new(rows)
}

fn cell_from_data(cell: &DataType) -> Cell {
    match cell {
        DataType::Int(value) => Cell::Number(*value as f64),
        DataType::Float(value) | DataType::DateTime(value) => Cell::Number(*value),
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::Bool(value) => Cell::Text(value.to_string()),
        DataType::Empty | DataType::Error(_) => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}
