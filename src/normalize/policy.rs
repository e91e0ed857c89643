//! Lenient cell-coercion policy.
//!
//! Source spreadsheets routinely contain partial or placeholder data, so
//! field-level coercion never fails: every parse has an explicit default.
//! The policy lives here as named functions so tests can target it directly.

use crate::types::CellValue;
use chrono::Datelike;

/// Coerce a cell to a number, falling back to `default`. Text cells tolerate
/// thousands separators and a currency sign.
pub fn parse_number_or_default(cell: &CellValue, default: f64) -> f64 {
    match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => {
            let cleaned = s.replace(',', "").replace('$', "");
            cleaned.trim().parse().unwrap_or(default)
        }
        CellValue::Bool(_) | CellValue::Empty => default,
    }
}

/// Coerce a cell to an integer, falling back to `default`. Fractional
/// numbers truncate toward zero.
pub fn parse_int_or_default(cell: &CellValue, default: i64) -> i64 {
    match cell {
        CellValue::Number(n) => n.trunc() as i64,
        CellValue::Text(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .or_else(|_| trimmed.parse::<f64>().map(|f| f.trunc() as i64))
                .unwrap_or(default)
        }
        CellValue::Bool(_) | CellValue::Empty => default,
    }
}

/// Coerce a cell to a calendar year, defaulting to the current year when the
/// cell is missing, unparsable, or zero.
pub fn parse_year_or_default(cell: &CellValue) -> i32 {
    match parse_int_or_default(cell, 0) {
        0 => current_year(),
        y => y as i32,
    }
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Text content of a cell, or `default` when empty.
pub fn text_or(cell: &CellValue, default: &str) -> String {
    let text = cell_to_string(cell);
    if text.trim().is_empty() {
        default.to_string()
    } else {
        text
    }
}

/// Render any cell as display text. Integral numbers print without a
/// trailing `.0` so they round-trip as spreadsheet users typed them.
pub fn cell_to_string(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
        CellValue::Number(n) => format!("{n}"),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_from_number_cell() {
        assert_eq!(parse_number_or_default(&CellValue::Number(42.5), 0.0), 42.5);
    }

    #[test]
    fn test_parse_number_from_text() {
        assert_eq!(
            parse_number_or_default(&CellValue::Text("1,234.56".into()), 0.0),
            1234.56
        );
        assert_eq!(
            parse_number_or_default(&CellValue::Text("$500".into()), 0.0),
            500.0
        );
        assert_eq!(
            parse_number_or_default(&CellValue::Text(" -42.5 ".into()), 0.0),
            -42.5
        );
    }

    #[test]
    fn test_parse_number_defaults() {
        assert_eq!(parse_number_or_default(&CellValue::Empty, 0.0), 0.0);
        assert_eq!(
            parse_number_or_default(&CellValue::Text("n/a".into()), 0.0),
            0.0
        );
        assert_eq!(parse_number_or_default(&CellValue::Bool(true), 7.0), 7.0);
    }

    #[test]
    fn test_parse_int_truncates() {
        assert_eq!(parse_int_or_default(&CellValue::Number(2023.9), 0), 2023);
        assert_eq!(parse_int_or_default(&CellValue::Text("5.7".into()), 0), 5);
    }

    #[test]
    fn test_parse_int_defaults() {
        assert_eq!(parse_int_or_default(&CellValue::Empty, 5), 5);
        assert_eq!(parse_int_or_default(&CellValue::Text("abc".into()), 1), 1);
    }

    #[test]
    fn test_parse_year_defaults_to_current() {
        assert_eq!(parse_year_or_default(&CellValue::Empty), current_year());
        assert_eq!(
            parse_year_or_default(&CellValue::Text("soon".into())),
            current_year()
        );
        // Zero is treated as absent, not as year zero.
        assert_eq!(
            parse_year_or_default(&CellValue::Number(0.0)),
            current_year()
        );
    }

    #[test]
    fn test_parse_year_passes_through() {
        assert_eq!(parse_year_or_default(&CellValue::Number(2021.0)), 2021);
        assert_eq!(parse_year_or_default(&CellValue::Text("2019".into())), 2019);
    }

    #[test]
    fn test_text_or() {
        assert_eq!(text_or(&CellValue::Text("Rent".into()), "x"), "Rent");
        assert_eq!(text_or(&CellValue::Empty, "Variable"), "Variable");
        assert_eq!(text_or(&CellValue::Text("  ".into()), "Common"), "Common");
    }

    #[test]
    fn test_cell_to_string_integral_numbers() {
        assert_eq!(cell_to_string(&CellValue::Number(2023.0)), "2023");
        assert_eq!(cell_to_string(&CellValue::Number(2.5)), "2.5");
    }
}
