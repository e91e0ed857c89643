//! Business-data normalization (column-mapped path).
//!
//! Each known sheet has a fixed column-position contract. Every field has an
//! explicit default; no row is rejected for partial data. After coercion,
//! rows are grouped by year into buckets.

use super::group_by_year;
use super::policy::{
    parse_int_or_default, parse_number_or_default, parse_year_or_default, text_or,
};
use crate::types::{
    BusinessData, CellValue, EquipmentRow, ExpenseRow, InvestmentRow, LoanRow,
    OtherIncomeCostRow, ServiceMetricRow, ServiceRow, ShareholderRow, Sheet, Workbook,
};

pub const SERVICES_SHEET: &str = "Services";
pub const EXPENSES_SHEET: &str = "Expenses";
pub const EQUIPMENT_SHEET: &str = "Equipment";
pub const LOANS_SHEET: &str = "Loans";
pub const OTHER_INCOME_COSTS_SHEET: &str = "Other Income Costs";
pub const INVESTMENTS_SHEET: &str = "Investments";
pub const SHAREHOLDERS_SHEET: &str = "Shareholders";
pub const SERVICE_METRICS_SHEET: &str = "Service Metrics";

/// Normalize every known business-data sheet of a workbook. Unknown sheets
/// (including the Field/Value assumption sheets, which are not row data)
/// are left alone.
pub fn normalize_business(workbook: &Workbook) -> BusinessData {
    let mut data = BusinessData::default();

    for sheet in &workbook.sheets {
        let name = &sheet.name;
        if name.eq_ignore_ascii_case(SERVICES_SHEET) {
            data.services = group_by_year(rows(sheet, service_row), |r| r.year);
        } else if name.eq_ignore_ascii_case(EXPENSES_SHEET) {
            data.expenses = group_by_year(rows(sheet, expense_row), |r| r.year);
        } else if name.eq_ignore_ascii_case(EQUIPMENT_SHEET) {
            data.equipment = group_by_year(rows(sheet, equipment_row), |r| r.purchase_year);
        } else if name.eq_ignore_ascii_case(LOANS_SHEET) {
            data.loans = group_by_year(rows(sheet, loan_row), |r| r.start_year);
        } else if name.eq_ignore_ascii_case(OTHER_INCOME_COSTS_SHEET) {
            data.other_income_costs = group_by_year(rows(sheet, other_row), |r| r.year);
        } else if name.eq_ignore_ascii_case(INVESTMENTS_SHEET) {
            data.investments = group_by_year(rows(sheet, investment_row), |r| r.year);
        } else if name.eq_ignore_ascii_case(SHAREHOLDERS_SHEET) {
            data.shareholders = group_by_year(rows(sheet, shareholder_row), |r| r.year);
        } else if name.eq_ignore_ascii_case(SERVICE_METRICS_SHEET) {
            data.service_metrics = group_by_year(rows(sheet, metric_row), |r| r.year);
        } else {
            tracing::debug!(sheet = %name, "not a business-data sheet");
        }
    }

    data
}

fn rows<T>(sheet: &Sheet, build: impl Fn(&[CellValue]) -> T) -> Vec<T> {
    sheet.rows.iter().map(|row| build(row)).collect()
}

fn cell<'a>(row: &'a [CellValue], idx: usize) -> &'a CellValue {
    row.get(idx).unwrap_or(&CellValue::Empty)
}

// Services: [Service Name, Revenue, Cost, Year]
fn service_row(row: &[CellValue]) -> ServiceRow {
    ServiceRow {
        service_name: text_or(cell(row, 0), ""),
        revenue: parse_number_or_default(cell(row, 1), 0.0),
        cost: parse_number_or_default(cell(row, 2), 0.0),
        year: parse_year_or_default(cell(row, 3)),
    }
}

// Expenses: [Expense Category, Amount, Year, Type]
fn expense_row(row: &[CellValue]) -> ExpenseRow {
    ExpenseRow {
        category: text_or(cell(row, 0), ""),
        amount: parse_number_or_default(cell(row, 1), 0.0),
        year: parse_year_or_default(cell(row, 2)),
        expense_type: text_or(cell(row, 3), "Variable"),
    }
}

// Equipment: [Equipment Name, Purchase Cost, Purchase Year, Depreciation Method, Useful Life]
fn equipment_row(row: &[CellValue]) -> EquipmentRow {
    EquipmentRow {
        name: text_or(cell(row, 0), ""),
        purchase_cost: parse_number_or_default(cell(row, 1), 0.0),
        purchase_year: parse_year_or_default(cell(row, 2)),
        depreciation_method: text_or(cell(row, 3), "Straight Line"),
        useful_life: parse_int_or_default(cell(row, 4), 5),
    }
}

// Loans: [Loan Name, Loan Type, Sub Type, Amount, Interest Rate, Term,
//         Start Year, Royalty Type, Royalty %/Amount, Trade Document Type, Tenor]
fn loan_row(row: &[CellValue]) -> LoanRow {
    LoanRow {
        name: text_or(cell(row, 0), ""),
        loan_type: text_or(cell(row, 1), "Working Capital"),
        sub_type: text_or(cell(row, 2), ""),
        amount: parse_number_or_default(cell(row, 3), 0.0),
        interest_rate: parse_number_or_default(cell(row, 4), 0.0),
        term: parse_int_or_default(cell(row, 5), 1),
        start_year: parse_year_or_default(cell(row, 6)),
        royalty_type: text_or(cell(row, 7), ""),
        // Column 8 is percentage or fixed amount depending on the royalty
        // type; the raw text is carried under both names.
        royalty_percentage: text_or(cell(row, 8), ""),
        fixed_royalty_amount: text_or(cell(row, 8), ""),
        trade_document_type: text_or(cell(row, 9), ""),
        tenor: text_or(cell(row, 10), ""),
    }
}

// Other Income/Costs: [Description, Amount, Type, Year]
fn other_row(row: &[CellValue]) -> OtherIncomeCostRow {
    OtherIncomeCostRow {
        description: text_or(cell(row, 0), ""),
        amount: parse_number_or_default(cell(row, 1), 0.0),
        entry_type: text_or(cell(row, 2), "Cost"),
        year: parse_year_or_default(cell(row, 3)),
    }
}

// Investments: [Investment Name, Investment Type, Amount, Year, Investor]
fn investment_row(row: &[CellValue]) -> InvestmentRow {
    InvestmentRow {
        name: text_or(cell(row, 0), ""),
        investment_type: text_or(cell(row, 1), "Equity"),
        amount: parse_number_or_default(cell(row, 2), 0.0),
        year: parse_year_or_default(cell(row, 3)),
        investor: text_or(cell(row, 4), ""),
    }
}

// Shareholders: [Shareholder Name, Shares Owned, Ownership %, Year, Share Class]
fn shareholder_row(row: &[CellValue]) -> ShareholderRow {
    ShareholderRow {
        name: text_or(cell(row, 0), ""),
        shares_owned: parse_int_or_default(cell(row, 1), 0),
        ownership_percent: parse_number_or_default(cell(row, 2), 0.0),
        year: parse_year_or_default(cell(row, 3)),
        share_class: text_or(cell(row, 4), "Common"),
    }
}

// Service Metrics: [Metric, Value, Year, Unit]
fn metric_row(row: &[CellValue]) -> ServiceMetricRow {
    ServiceMetricRow {
        metric: text_or(cell(row, 0), ""),
        value: parse_number_or_default(cell(row, 1), 0.0),
        year: parse_year_or_default(cell(row, 2)),
        unit: text_or(cell(row, 3), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::policy::current_year;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn sheet(name: &str, rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet {
            name: name.to_string(),
            header: vec![],
            rows,
        }
    }

    fn workbook(sheets: Vec<Sheet>) -> Workbook {
        Workbook {
            file_name: "b.xlsx".to_string(),
            sheets,
        }
    }

    #[test]
    fn test_expense_rows_coerce_with_defaults() {
        let wb = workbook(vec![sheet(
            "Expenses",
            vec![
                vec![text("Rent"), num(36_000.0), num(2023.0), text("Fixed")],
                vec![text("Utilities"), text("bad"), CellValue::Empty, CellValue::Empty],
            ],
        )]);
        let data = normalize_business(&wb);
        assert_eq!(data.expenses.len(), 2);

        let first = &data.expenses[0].items[0];
        assert_eq!(first.category, "Rent");
        assert_eq!(first.amount, 36_000.0);
        assert_eq!(first.expense_type, "Fixed");

        let second = &data.expenses[1];
        assert_eq!(second.year, current_year());
        assert_eq!(second.items[0].amount, 0.0);
        assert_eq!(second.items[0].expense_type, "Variable");
    }

    #[test]
    fn test_year_buckets_keep_first_occurrence_order() {
        let wb = workbook(vec![sheet(
            "Expenses",
            vec![
                vec![text("A"), num(1.0), num(2023.0), text("Fixed")],
                vec![text("B"), num(2.0), num(2021.0), text("Fixed")],
                vec![text("C"), num(3.0), num(2023.0), text("Fixed")],
            ],
        )]);
        let data = normalize_business(&wb);
        let years: Vec<i32> = data.expenses.iter().map(|b| b.year).collect();
        assert_eq!(years, vec![2023, 2021]);
        assert_eq!(data.expenses[0].items.len(), 2);
        assert_eq!(data.expenses[1].items.len(), 1);
    }

    #[test]
    fn test_loan_rows_carry_royalty_and_trade_fields() {
        let wb = workbook(vec![sheet(
            "Loans",
            vec![vec![
                text("Startup Royalty Loan"),
                text("Startup Loan"),
                text("Royalty"),
                num(75_000.0),
                num(4.2),
                num(4.0),
                num(2023.0),
                text("Percentage"),
                text("5"),
                text(""),
                text(""),
            ]],
        )]);
        let data = normalize_business(&wb);
        let loan = &data.loans[0].items[0];
        assert_eq!(loan.loan_type, "Startup Loan");
        assert_eq!(loan.sub_type, "Royalty");
        assert_eq!(loan.interest_rate, 4.2);
        assert_eq!(loan.term, 4);
        assert_eq!(loan.royalty_type, "Percentage");
        assert_eq!(loan.royalty_percentage, "5");
        assert_eq!(loan.fixed_royalty_amount, "5");
    }

    #[test]
    fn test_loan_defaults() {
        let wb = workbook(vec![sheet("Loans", vec![vec![text("Unnamed")]])]);
        let loan = &normalize_business(&wb).loans[0].items[0];
        assert_eq!(loan.loan_type, "Working Capital");
        assert_eq!(loan.term, 1);
        assert_eq!(loan.start_year, current_year());
    }

    #[test]
    fn test_service_categories_empty_without_matching_sheets() {
        let wb = workbook(vec![sheet(
            "Expenses",
            vec![vec![text("Rent"), num(1.0), num(2023.0), text("Fixed")]],
        )]);
        let data = normalize_business(&wb);
        assert!(data.services.is_empty());
        assert!(data.service_metrics.is_empty());

        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("services").is_none());
        assert!(json.get("serviceMetrics").is_none());
        assert!(json.get("expenses").is_some());
    }

    #[test]
    fn test_shareholder_and_metric_sheets() {
        let wb = workbook(vec![
            sheet(
                "Shareholders",
                vec![vec![text("Founder"), num(1000.0), num(60.0), num(2023.0), CellValue::Empty]],
            ),
            sheet(
                "Service Metrics",
                vec![vec![text("Utilization Rate"), num(0.75), num(2023.0), text("Percentage")]],
            ),
        ]);
        let data = normalize_business(&wb);
        let holder = &data.shareholders[0].items[0];
        assert_eq!(holder.shares_owned, 1000);
        assert_eq!(holder.share_class, "Common");
        let metric = &data.service_metrics[0].items[0];
        assert_eq!(metric.metric, "Utilization Rate");
        assert_eq!(metric.value, 0.75);
        assert_eq!(metric.unit, "Percentage");
    }
}
