//! Financial-statements template: Income Statement, Balance Sheet and Cash
//! Flow Statement sheets pre-filled with the standard line-item structure
//! and sample values for three historical years.

use super::{add_sheet, write_header, write_row, Cell};
use crate::error::LiftResult;
use crate::ingest::HEADER_ROW_INDEX;
use crate::normalize::policy::current_year;
use crate::normalize::statements::{BALANCE_SHEET_SHEET, CASH_FLOW_SHEET, INCOME_STATEMENT_SHEET};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// One template line item: label, per-year sample values (None for section
/// headers and spacer-free blanks), description.
struct TemplateRow {
    label: &'static str,
    values: Option<[f64; 3]>,
    description: &'static str,
}

const fn header_row(label: &'static str) -> TemplateRow {
    TemplateRow {
        label,
        values: None,
        description: "Header - leave blank",
    }
}

const fn data_row(
    label: &'static str,
    values: [f64; 3],
    description: &'static str,
) -> TemplateRow {
    TemplateRow {
        label,
        values: Some(values),
        description,
    }
}

const INCOME_STATEMENT_ROWS: &[TemplateRow] = &[
    header_row("REVENUE"),
    data_row("    Service Revenue", [500000.0, 550000.0, 600000.0], "Total revenue from services"),
    data_row("TOTAL REVENUE", [500000.0, 550000.0, 600000.0], "Sum of all revenue"),
    header_row("COST OF GOODS SOLD (COGS)"),
    data_row("    Direct Costs", [200000.0, 220000.0, 240000.0], "Direct costs for service delivery"),
    data_row("TOTAL COGS", [200000.0, 220000.0, 240000.0], "Sum of all direct costs"),
    data_row("GROSS PROFIT", [300000.0, 330000.0, 360000.0], "Revenue minus COGS"),
    header_row("OPERATING EXPENSES"),
    data_row("    Salaries & Wages", [120000.0, 130000.0, 140000.0], "Employee salaries and wages"),
    data_row("    Rent", [36000.0, 38000.0, 40000.0], "Office rent and facilities"),
    data_row("    Utilities", [12000.0, 13000.0, 14000.0], "Electricity, water, internet"),
    data_row("    Marketing & Advertising", [25000.0, 28000.0, 30000.0], "Marketing and promotional costs"),
    data_row("    Insurance", [8000.0, 9000.0, 10000.0], "Business insurance premiums"),
    data_row("    Professional Services", [15000.0, 16000.0, 18000.0], "Legal, accounting, consulting"),
    data_row("    Software & Technology", [18000.0, 20000.0, 22000.0], "Software licenses and IT costs"),
    data_row("    Travel & Entertainment", [10000.0, 8000.0, 12000.0], "Business travel and client entertainment"),
    data_row("    Office Supplies", [5000.0, 5500.0, 6000.0], "Office supplies and equipment"),
    data_row("    Depreciation & Amortization (Operating)", [15000.0, 18000.0, 20000.0], "Asset depreciation"),
    data_row("    Other Operating Expenses", [8000.0, 9000.0, 10000.0], "Miscellaneous operating costs"),
    data_row("TOTAL OPERATING EXPENSES", [272000.0, 294500.0, 322000.0], "Sum of all operating expenses"),
    header_row("OTHER OPERATING INCOME / EXPENSES"),
    data_row("    Other Operating Income", [5000.0, 7000.0, 8000.0], "Other operating income"),
    data_row("    Other Operating Expenses", [-2000.0, -3000.0, -4000.0], "Other operating expenses (negative)"),
    data_row("EBITDA", [31000.0, 39500.0, 42000.0], "Earnings before interest, taxes, depreciation, amortization"),
    data_row("    Less: Depreciation & Amortization", [-15000.0, -18000.0, -20000.0], "Depreciation expense (negative)"),
    data_row("EBIT", [16000.0, 21500.0, 22000.0], "Earnings before interest and taxes"),
    header_row("NON-OPERATING INCOME / EXPENSES"),
    data_row("    Investment Income", [2000.0, 3000.0, 4000.0], "Income from investments"),
    data_row("    Interest Expense", [-8000.0, -10000.0, -12000.0], "Interest paid on loans (negative)"),
    data_row("EARNINGS BEFORE TAXES (EBT)", [10000.0, 14500.0, 14000.0], "Income before tax provision"),
    header_row("TAX CALCULATION"),
    data_row("    Tax Provision (with Loss Carryforward)", [-2500.0, -3625.0, -3500.0], "Tax expense (negative)"),
    data_row("NET INCOME", [7500.0, 10875.0, 10500.0], "Final net income after taxes"),
    header_row("CASH FLOW TO OWNER"),
    data_row("    Less: Owner Drawings", [-50000.0, -55000.0, -60000.0], "Owner withdrawals (negative)"),
    data_row("CASH AVAILABLE TO OWNER", [-42500.0, -44125.0, -49500.0], "Cash available after owner drawings"),
];

const BALANCE_SHEET_ROWS: &[TemplateRow] = &[
    header_row("ASSETS"),
    header_row("Current Assets"),
    data_row("    Cash and Cash Equivalents", [50000.0, 75000.0, 100000.0], "Cash in bank accounts"),
    data_row("    Accounts Receivable", [50000.0, 55000.0, 60000.0], "Money owed by customers"),
    data_row("    Prepaid Expenses", [13600.0, 14725.0, 16100.0], "Prepaid rent, insurance, etc."),
    data_row("    Other Current Assets", [0.0, 0.0, 0.0], "Other short-term assets"),
    data_row("Total Current Assets", [113600.0, 144725.0, 176100.0], "Sum of current assets"),
    header_row("Non-Current Assets"),
    data_row("    Property, Plant & Equipment (Gross)", [15000.0, 33000.0, 53000.0], "Original cost of fixed assets"),
    data_row("    Less: Accumulated Depreciation", [-15000.0, -33000.0, -53000.0], "Total depreciation to date (negative)"),
    data_row("    Net Equipment", [0.0, 0.0, 0.0], "Net book value of fixed assets"),
    data_row("    Investments", [0.0, 0.0, 0.0], "Long-term investments"),
    data_row("    Intangible Assets (if applicable)", [0.0, 0.0, 0.0], "Patents, trademarks, goodwill"),
    data_row("Total Non-Current Assets", [0.0, 0.0, 0.0], "Sum of non-current assets"),
    data_row("TOTAL ASSETS", [113600.0, 144725.0, 176100.0], "Sum of all assets"),
    header_row("LIABILITIES"),
    header_row("Current Liabilities"),
    data_row("    Accounts Payable", [54400.0, 58900.0, 64400.0], "Money owed to suppliers"),
    data_row("    Short-Term Loans (Due < 1 Year)", [0.0, 0.0, 0.0], "Loans due within one year"),
    data_row("    Accrued Expenses", [27200.0, 29450.0, 32200.0], "Accrued wages, utilities, etc."),
    data_row("    Taxes Payable", [2500.0, 3625.0, 3500.0], "Tax obligations"),
    data_row("Total Current Liabilities", [84100.0, 91975.0, 100100.0], "Sum of current liabilities"),
    header_row("Non-Current Liabilities"),
    data_row("    Long-Term Loans", [0.0, 0.0, 0.0], "Loans due after one year"),
    data_row("    Lease Liabilities (if any)", [0.0, 0.0, 0.0], "Lease obligations"),
    data_row("    Deferred Tax Liabilities", [0.0, 0.0, 0.0], "Future tax obligations"),
    data_row("Total Non-Current Liabilities", [0.0, 0.0, 0.0], "Sum of non-current liabilities"),
    data_row("TOTAL LIABILITIES", [84100.0, 91975.0, 100100.0], "Sum of all liabilities"),
    header_row("EQUITY"),
    data_row("    Common Stock / Share Capital", [50000.0, 50000.0, 50000.0], "Issued share capital"),
    data_row("    Shareholder Contributions", [0.0, 0.0, 0.0], "Additional shareholder contributions"),
    data_row("    Retained Earnings", [-42500.0, -86625.0, -136125.0], "Accumulated profits retained"),
    data_row("    Less: Owner Drawings", [-50000.0, -55000.0, -60000.0], "Owner withdrawals (negative)"),
    data_row("    Other Comprehensive Income (OCI)", [0.0, 0.0, 0.0], "Other equity items"),
    data_row("TOTAL EQUITY", [29500.0, 52750.0, 76000.0], "Sum of all equity"),
    data_row("TOTAL LIABILITIES & EQUITY", [113600.0, 144725.0, 176100.0], "Must equal Total Assets"),
];

const CASH_FLOW_ROWS: &[TemplateRow] = &[
    header_row("OPERATING ACTIVITIES"),
    data_row("    Net Income", [7500.0, 10875.0, 10500.0], "Net income from income statement"),
    data_row("    Depreciation & Amortization (Add Back)", [15000.0, 18000.0, 20000.0], "Add back non-cash expenses"),
    header_row("    Changes in Working Capital"),
    data_row("        Accounts Receivable", [-50000.0, -5000.0, -5000.0], "Change in AR (negative if increase)"),
    data_row("        Accounts Payable", [54400.0, 4500.0, 5500.0], "Change in AP (positive if increase)"),
    data_row("        Prepaid Expenses", [-13600.0, -1125.0, -1375.0], "Change in prepaid (negative if increase)"),
    data_row("    Net Cash from Operations", [-1700.0, 27250.0, 29625.0], "Total operating cash flow"),
    header_row("INVESTING ACTIVITIES"),
    data_row("    Capital Expenditures", [-15000.0, -18000.0, -20000.0], "Capital expenditures (negative)"),
    data_row("    Investment Purchases", [0.0, 0.0, 0.0], "Investment purchases (negative)"),
    data_row("    Net Cash from Investing", [-15000.0, -18000.0, -20000.0], "Total investing cash flow"),
    header_row("FINANCING ACTIVITIES"),
    data_row("    Owner Investments", [50000.0, 0.0, 0.0], "Owner capital contributions (positive)"),
    data_row("    Owner Drawings", [-50000.0, -55000.0, -60000.0], "Owner withdrawals (negative)"),
    data_row("    Loan Proceeds", [0.0, 0.0, 0.0], "New borrowings (positive)"),
    data_row("    Loan Repayments", [0.0, 0.0, 0.0], "Loan repayments (negative)"),
    data_row("    Net Cash from Financing", [0.0, -55000.0, -60000.0], "Total financing cash flow"),
    data_row("NET CHANGE IN CASH", [-16700.0, -45750.0, -50375.0], "Total change in cash position"),
    data_row("    Beginning Cash", [0.0, 50000.0, 75000.0], "Starting cash balance"),
    data_row("    Ending Cash", [50000.0, 75000.0, 100000.0], "Ending cash balance (must match Balance Sheet)"),
];

/// Generator for the fixed three-sheet financial-statements template.
pub struct StatementsTemplate {
    years: [i32; 3],
}

impl StatementsTemplate {
    /// Template for the three most recent calendar years.
    pub fn new() -> Self {
        let current = current_year();
        Self {
            years: [current - 2, current - 1, current],
        }
    }

    /// Template ending at an explicit year (`end_year - 2 ..= end_year`).
    pub fn ending_in(end_year: i32) -> Self {
        Self {
            years: [end_year - 2, end_year - 1, end_year],
        }
    }

    pub fn years(&self) -> Vec<String> {
        self.years.iter().map(|y| y.to_string()).collect()
    }

    /// Write the template workbook to `path`.
    pub fn write(&self, path: &Path) -> LiftResult<()> {
        let mut workbook = Workbook::new();

        self.write_sheet(
            &mut workbook,
            INCOME_STATEMENT_SHEET,
            "FINANCIAL STATEMENTS TEMPLATE - INCOME STATEMENT",
            &[
                "• Enter your historical income statement data for each year",
                "• Use the exact line item names provided for accurate mapping",
                "• Enter amounts in your base currency (positive for income, negative for expenses)",
                "• Leave blank if a line item does not apply to your business",
                "• Add additional years as columns if you have more historical data",
            ],
            INCOME_STATEMENT_ROWS,
        )?;

        self.write_sheet(
            &mut workbook,
            BALANCE_SHEET_SHEET,
            "FINANCIAL STATEMENTS TEMPLATE - BALANCE SHEET",
            &[
                "• Enter your historical balance sheet data for each year",
                "• Assets = Liabilities + Equity (must balance)",
                "• Enter amounts as of year-end for each year",
                "• Use positive amounts for all items",
                "• Leave blank if a line item does not apply",
            ],
            BALANCE_SHEET_ROWS,
        )?;

        self.write_sheet(
            &mut workbook,
            CASH_FLOW_SHEET,
            "FINANCIAL STATEMENTS TEMPLATE - CASH FLOW STATEMENT",
            &[
                "• Enter your historical cash flow data for each year",
                "• Use positive amounts for cash inflows, negative for outflows",
                "• Operating activities: cash from day-to-day operations",
                "• Investing activities: cash from buying/selling assets",
                "• Financing activities: cash from loans, equity, dividends",
            ],
            CASH_FLOW_ROWS,
        )?;

        workbook.save(path)?;
        tracing::info!(path = %path.display(), "statements template written");
        Ok(())
    }

    fn write_sheet(
        &self,
        workbook: &mut Workbook,
        name: &str,
        title: &str,
        instructions: &[&str],
        rows: &[TemplateRow],
    ) -> LiftResult<()> {
        let worksheet = add_sheet(workbook, name, title, instructions)?;

        let year_labels = self.years();
        let mut columns = vec!["Line Item"];
        columns.extend(year_labels.iter().map(String::as_str));
        columns.push("Description");
        write_header(worksheet, &columns)?;

        for (i, row) in rows.iter().enumerate() {
            let mut cells = vec![Cell::T(row.label)];
            match row.values {
                Some(values) => cells.extend(values.iter().map(|v| Cell::N(*v))),
                None => cells.extend([Cell::T(""), Cell::T(""), Cell::T("")]),
            }
            cells.push(Cell::T(row.description));
            write_row(worksheet, (HEADER_ROW_INDEX + 1 + i) as u32, &cells)?;
        }

        Ok(())
    }
}

impl Default for StatementsTemplate {
    fn default() -> Self {
        Self::new()
    }
}
