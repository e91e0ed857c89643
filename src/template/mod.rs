//! Excel template generators - the write side of the import round-trip.
//!
//! Every generated sheet follows the uniform template convention the
//! ingestor expects: title at row 1, an `INSTRUCTIONS:` block below it, the
//! header at row 10, data from row 11. Instruction blocks are capped so the
//! header always lands on row 10 regardless of how much guidance a sheet
//! carries.

mod business;
mod statements;

pub use business::BusinessTemplate;
pub use statements::StatementsTemplate;

use crate::error::{LiftError, LiftResult};
use crate::ingest::HEADER_ROW_INDEX;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

/// Maximum instruction lines per sheet; one row below stays blank so the
/// header sits exactly at [`HEADER_ROW_INDEX`].
const MAX_INSTRUCTION_LINES: usize = 5;

/// A literal template cell.
pub(crate) enum Cell {
    T(&'static str),
    N(f64),
}

impl From<XlsxError> for LiftError {
    fn from(e: XlsxError) -> Self {
        LiftError::Template(e.to_string())
    }
}

pub(crate) fn add_sheet<'a>(
    workbook: &'a mut Workbook,
    name: &str,
    title: &str,
    instructions: &[&str],
) -> LiftResult<&'a mut Worksheet> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;
    worksheet.write_string(0, 0, title)?;
    worksheet.write_string(2, 0, "INSTRUCTIONS:")?;
    for (i, line) in instructions.iter().take(MAX_INSTRUCTION_LINES).enumerate() {
        worksheet.write_string(3 + i as u32, 0, *line)?;
    }
    Ok(worksheet)
}

pub(crate) fn write_header(worksheet: &mut Worksheet, columns: &[&str]) -> LiftResult<()> {
    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string(HEADER_ROW_INDEX as u32, col as u16, *name)?;
    }
    Ok(())
}

pub(crate) fn write_row(worksheet: &mut Worksheet, row: u32, cells: &[Cell]) -> LiftResult<()> {
    for (col, cell) in cells.iter().enumerate() {
        match cell {
            Cell::T(s) if !s.is_empty() => {
                worksheet.write_string(row, col as u16, *s)?;
            }
            Cell::T(_) => {}
            Cell::N(n) => {
                worksheet.write_number(row, col as u16, *n)?;
            }
        }
    }
    Ok(())
}
