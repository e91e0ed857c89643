use serde::{Deserialize, Serialize};

//==============================================================================
// Upload configuration
//==============================================================================

/// Default upload size cap: 5 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Caller-configurable upload constraints, checked before any parse attempt.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Allowed file extensions, including the leading dot.
    pub accepted_extensions: Vec<String>,
    /// Maximum upload size in bytes.
    pub max_file_size: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec![".xlsx".to_string(), ".xls".to_string()],
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

//==============================================================================
// Workbook (ingestor output)
//==============================================================================

/// A raw spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Whether the cell counts as empty for row filtering (blank text counts).
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// One parsed worksheet: the row-10 header plus the data rows below it.
/// Rows 1-9 are instructional and are discarded at ingest time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    /// Header row (absolute row index 9). Empty if the sheet is shorter.
    pub header: Vec<CellValue>,
    /// Data rows (absolute row index 10+), all-empty rows dropped.
    pub rows: Vec<Vec<CellValue>>,
}

/// In-memory result of parsing one uploaded file. Sheet order is preserved
/// exactly as read.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub file_name: String,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Case-insensitive sheet lookup.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

//==============================================================================
// Financial statements (fixed-template path)
//==============================================================================

/// One row of a financial statement: a label plus one value per fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub label: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_header: bool,
    #[serde(default)]
    pub is_total: bool,
}

/// A parsed statement: fiscal-year labels plus line items. The invariant
/// `values.len() == years.len()` holds for every line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub years: Vec<String>,
    pub line_items: Vec<LineItem>,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.line_items.is_empty()
    }
}

/// The three statements recognized in the fixed template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatements {
    pub income_statement: Statement,
    pub balance_sheet: Statement,
    pub cash_flow: Statement,
}

//==============================================================================
// Business data (column-mapped path)
//==============================================================================

/// Records of one category grouped under a single year. Bucket order follows
/// first occurrence of each distinct year in the source rows, not numeric
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBucket<T> {
    pub year: i32,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRow {
    pub service_name: String,
    pub revenue: f64,
    pub cost: f64,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRow {
    pub category: String,
    pub amount: f64,
    pub year: i32,
    #[serde(rename = "type")]
    pub expense_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRow {
    pub name: String,
    pub purchase_cost: f64,
    pub purchase_year: i32,
    pub depreciation_method: String,
    pub useful_life: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRow {
    pub name: String,
    pub loan_type: String,
    pub sub_type: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub term: i64,
    pub start_year: i32,
    pub royalty_type: String,
    pub royalty_percentage: String,
    pub fixed_royalty_amount: String,
    pub trade_document_type: String,
    pub tenor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherIncomeCostRow {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRow {
    pub name: String,
    pub investment_type: String,
    pub amount: f64,
    pub year: i32,
    pub investor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareholderRow {
    pub name: String,
    pub shares_owned: i64,
    pub ownership_percent: f64,
    pub year: i32,
    pub share_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetricRow {
    pub metric: String,
    pub value: f64,
    pub year: i32,
    pub unit: String,
}

/// Normalized business data, one bucketed sequence per category. The
/// service-specific categories are omitted from serialized output when the
/// workbook has no matching rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<YearBucket<ServiceRow>>,
    pub expenses: Vec<YearBucket<ExpenseRow>>,
    pub equipment: Vec<YearBucket<EquipmentRow>>,
    pub loans: Vec<YearBucket<LoanRow>>,
    pub other_income_costs: Vec<YearBucket<OtherIncomeCostRow>>,
    pub investments: Vec<YearBucket<InvestmentRow>>,
    pub shareholders: Vec<YearBucket<ShareholderRow>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_metrics: Vec<YearBucket<ServiceMetricRow>>,
}
