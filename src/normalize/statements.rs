//! Financial-statement normalization (fixed-template path).
//!
//! The template has fixed column positions, so this path bypasses the field
//! mapper: column 0 is the line-item label, the last header column is a
//! free-text description, and everything between is one fiscal year per
//! column.

use super::policy::{cell_to_string, parse_number_or_default};
use crate::types::{CellValue, FinancialStatements, LineItem, Sheet, Statement, Workbook};

pub const INCOME_STATEMENT_SHEET: &str = "Income Statement";
pub const BALANCE_SHEET_SHEET: &str = "Balance Sheet";
pub const CASH_FLOW_SHEET: &str = "Cash Flow Statement";

/// Normalize the three recognized statement sheets of a workbook. Sheet
/// names match case-insensitively; unrecognized sheets are ignored. A
/// recognized sheet with no data rows yields an empty statement.
pub fn normalize_statements(workbook: &Workbook) -> FinancialStatements {
    let mut out = FinancialStatements::default();

    for sheet in &workbook.sheets {
        if sheet.name.eq_ignore_ascii_case(INCOME_STATEMENT_SHEET) {
            out.income_statement = parse_statement(sheet);
        } else if sheet.name.eq_ignore_ascii_case(BALANCE_SHEET_SHEET) {
            out.balance_sheet = parse_statement(sheet);
        } else if sheet.name.eq_ignore_ascii_case(CASH_FLOW_SHEET) {
            out.cash_flow = parse_statement(sheet);
        } else {
            tracing::debug!(sheet = %sheet.name, "ignoring unrecognized sheet");
        }
    }

    out
}

/// Parse one statement sheet into years plus line items.
pub fn parse_statement(sheet: &Sheet) -> Statement {
    let years = extract_years(&sheet.header);
    let mut line_items = Vec::new();

    for row in &sheet.rows {
        let label = cell_to_string(row.first().unwrap_or(&CellValue::Empty));
        if label.trim().is_empty() {
            continue;
        }

        // One value per fiscal year; blanks and unparsable cells become 0.
        let values: Vec<f64> = (0..years.len())
            .map(|i| parse_number_or_default(row.get(i + 1).unwrap_or(&CellValue::Empty), 0.0))
            .collect();

        let description = row
            .get(years.len() + 1)
            .map(cell_to_string)
            .unwrap_or_default();

        let (is_header, is_total) = classify_label(&label);

        line_items.push(LineItem {
            label,
            values,
            description,
            is_header,
            is_total,
        });
    }

    Statement { years, line_items }
}

/// Extract fiscal-year labels from the header row. Column 0 (label header)
/// and the final column (description header) are excluded; a position
/// contributes a year only when it parses as an integer.
fn extract_years(header: &[CellValue]) -> Vec<String> {
    let mut years = Vec::new();
    if header.len() < 2 {
        return years;
    }

    for cell in &header[1..header.len() - 1] {
        match cell {
            CellValue::Number(n) if n.fract() == 0.0 => years.push(format!("{}", *n as i64)),
            CellValue::Text(s) if s.trim().parse::<i64>().is_ok() => {
                years.push(s.trim().to_string());
            }
            _ => {}
        }
    }

    years
}

/// Lexical header/total classification: an all-caps label is a section
/// header unless it contains "TOTAL"; labels containing "TOTAL" or "NET"
/// are totals.
fn classify_label(label: &str) -> (bool, bool) {
    if label == label.to_uppercase() && !label.contains("TOTAL") {
        (true, false)
    } else if label.contains("TOTAL") || label.contains("NET") {
        (false, true)
    } else {
        (false, false)
    }
}
