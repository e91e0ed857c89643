//! Workbook ingestor - uploaded spreadsheet bytes → in-memory `Workbook`
//!
//! Validation (file type, size) happens before any decode attempt. Every
//! sheet follows the template convention: the first 10 rows are reserved for
//! human-readable instructions, row 10 (index 9) is the header row, and data
//! starts at row 11.

use crate::error::{LiftError, LiftResult};
use crate::types::{CellValue, Sheet, UploadConfig, Workbook};
use calamine::{Data, Reader};
use std::io::Cursor;
use std::path::Path;

/// Absolute row index of the header row in every template sheet.
pub const HEADER_ROW_INDEX: usize = 9;

/// Number of leading rows reserved for instructions (header row included).
pub const INSTRUCTION_ROWS: usize = 10;

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) | Data::Empty => CellValue::Empty,
        }
    }
}

/// Converts a binary spreadsheet upload into a [`Workbook`].
pub struct WorkbookIngestor {
    config: UploadConfig,
}

impl WorkbookIngestor {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(UploadConfig::default())
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Check the upload constraints. Both checks run before parsing: the
    /// extension allow-list first, then the size cap.
    pub fn validate(&self, file_name: &str, size: u64) -> LiftResult<()> {
        let extension = Path::new(file_name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        if !self
            .config
            .accepted_extensions
            .iter()
            .any(|a| a.eq_ignore_ascii_case(&extension))
        {
            tracing::warn!(file = file_name, %extension, "rejected upload: file type");
            return Err(LiftError::InvalidFileType {
                extension,
                allowed: self.config.accepted_extensions.join(", "),
            });
        }

        if size > self.config.max_file_size {
            tracing::warn!(file = file_name, size, "rejected upload: too large");
            return Err(LiftError::FileTooLarge {
                size,
                max: self.config.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate and parse uploaded bytes. Never returns a partial workbook:
    /// any decode failure surfaces as [`LiftError::ParseFailure`] carrying
    /// the original file name.
    pub fn ingest(&self, file_name: &str, bytes: Vec<u8>) -> LiftResult<Workbook> {
        self.validate(file_name, bytes.len() as u64)?;

        let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(
            |e| LiftError::ParseFailure {
                file: file_name.to_string(),
                message: e.to_string(),
            },
        )?;

        let sheet_names = workbook.sheet_names().to_owned();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| LiftError::ParseFailure {
                    file: file_name.to_string(),
                    message: format!("sheet '{}': {}", sheet_name, e),
                })?;
            sheets.push(read_sheet(&sheet_name, &range));
        }

        tracing::debug!(file = file_name, sheets = sheets.len(), "workbook ingested");

        Ok(Workbook {
            file_name: file_name.to_string(),
            sheets,
        })
    }

    /// Convenience wrapper for filesystem callers (the CLI). The extension
    /// and size checks still run before the file is decoded.
    pub fn ingest_path(&self, path: &Path) -> LiftResult<Workbook> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.validate(&file_name, std::fs::metadata(path)?.len())?;
        let bytes = std::fs::read(path)?;
        self.ingest(&file_name, bytes)
    }
}

/// Split one worksheet range into header row and data rows, applying the
/// 10-row skip and dropping rows with zero non-empty cells.
fn read_sheet(name: &str, range: &calamine::Range<Data>) -> Sheet {
    let mut header = Vec::new();
    let mut rows = Vec::new();

    // Ranges are anchored at the first used cell, not necessarily A1.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (i, raw_row) in range.rows().enumerate() {
        let absolute = start_row as usize + i;
        if absolute < HEADER_ROW_INDEX {
            continue;
        }

        let mut cells: Vec<CellValue> = Vec::with_capacity(start_col as usize + raw_row.len());
        cells.extend(std::iter::repeat(CellValue::Empty).take(start_col as usize));
        cells.extend(raw_row.iter().map(CellValue::from));

        if absolute == HEADER_ROW_INDEX {
            header = cells;
        } else if !cells.iter().all(CellValue::is_empty) {
            rows.push(cells);
        }
    }

    tracing::debug!(sheet = name, data_rows = rows.len(), "sheet read");

    Sheet {
        name: name.to_string(),
        header,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingestor() -> WorkbookIngestor {
        WorkbookIngestor::with_defaults()
    }

    #[test]
    fn test_validate_accepts_default_extensions() {
        assert!(ingestor().validate("data.xlsx", 1024).is_ok());
        assert!(ingestor().validate("data.xls", 1024).is_ok());
        assert!(ingestor().validate("DATA.XLSX", 1024).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_extension() {
        let err = ingestor().validate("data.csv", 1024).unwrap_err();
        assert!(matches!(err, LiftError::InvalidFileType { .. }));
    }

    #[test]
    fn test_validate_rejects_missing_extension() {
        let err = ingestor().validate("data", 1024).unwrap_err();
        assert!(matches!(err, LiftError::InvalidFileType { .. }));
    }

    #[test]
    fn test_validate_rejects_oversized_file() {
        let err = ingestor()
            .validate("data.xlsx", 6 * 1024 * 1024)
            .unwrap_err();
        match err {
            LiftError::FileTooLarge { size, max } => {
                assert_eq!(size, 6 * 1024 * 1024);
                assert_eq!(max, 5 * 1024 * 1024);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_size_at_limit_is_ok() {
        assert!(ingestor().validate("data.xlsx", 5 * 1024 * 1024).is_ok());
    }

    #[test]
    fn test_size_check_runs_before_parse() {
        // 6 MiB of garbage: must fail on size, not on decode.
        let bytes = vec![0u8; 6 * 1024 * 1024];
        let err = ingestor().ingest("big.xlsx", bytes).unwrap_err();
        assert!(matches!(err, LiftError::FileTooLarge { .. }));
    }

    #[test]
    fn test_garbage_bytes_surface_as_parse_failure() {
        let err = ingestor()
            .ingest("junk.xlsx", b"not a spreadsheet".to_vec())
            .unwrap_err();
        match err {
            LiftError::ParseFailure { file, .. } => assert_eq!(file, "junk.xlsx"),
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_cell_value_emptiness() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text("   ".to_string()).is_empty());
        assert!(!CellValue::Text("x".to_string()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
        assert!(!CellValue::Bool(false).is_empty());
    }
}
