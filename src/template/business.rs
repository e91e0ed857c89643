//! Business-data template: one sheet per input category, with conditional
//! company-specific sheets appended after the base set.

use super::{add_sheet, write_header, write_row, Cell};
use crate::error::LiftResult;
use crate::ingest::HEADER_ROW_INDEX;
use crate::normalize::business::{
    EQUIPMENT_SHEET, EXPENSES_SHEET, INVESTMENTS_SHEET, LOANS_SHEET, OTHER_INCOME_COSTS_SHEET,
    SERVICES_SHEET, SERVICE_METRICS_SHEET, SHAREHOLDERS_SHEET,
};
use rust_xlsxwriter::Workbook;
use std::path::Path;

struct TemplateSheet {
    name: &'static str,
    title: &'static str,
    instructions: &'static [&'static str],
    columns: &'static [&'static str],
    rows: &'static [&'static [Cell]],
}

const BASE_SHEETS: &[TemplateSheet] = &[
    TemplateSheet {
        name: "Basic Information",
        title: "BUSINESS DATA TEMPLATE - BASIC INFORMATION",
        instructions: &[
            "• Enter basic business information and assumptions",
            "• These are fundamental parameters for your business model",
            "• All fields are required for accurate calculations",
        ],
        columns: &["Field", "Value", "Unit", "Description"],
        rows: &[
            &[Cell::T("Years in Business"), Cell::N(3.0), Cell::T("Years"), Cell::T("How long the business has been operating")],
            &[Cell::T("Forecast Years"), Cell::N(5.0), Cell::T("Years"), Cell::T("Number of years to forecast")],
            &[Cell::T("Tax Rate"), Cell::N(25.0), Cell::T("Percentage"), Cell::T("Corporate tax rate")],
            &[Cell::T("Self Funding"), Cell::N(50000.0), Cell::T("Currency"), Cell::T("Amount you can invest from own resources")],
            &[Cell::T("Fiscal Year Start"), Cell::T("January"), Cell::T("Month"), Cell::T("Start of fiscal year")],
            &[Cell::T("Revenue Input Type"), Cell::T("Annual"), Cell::T("Type"), Cell::T("Annual or Monthly revenue input")],
            &[Cell::T("Expense Input Type"), Cell::T("Annual"), Cell::T("Type"), Cell::T("Annual or Monthly expense input")],
        ],
    },
    TemplateSheet {
        name: SERVICES_SHEET,
        title: "BUSINESS DATA TEMPLATE - SERVICES",
        instructions: &[
            "• Enter each service your business provides",
            "• Include revenue and cost for each service",
            "• Add multiple rows for different years if you have historical data",
            "• Leave blank if not applicable",
            "• Growth rates are handled in the Growth Assumptions sheet",
        ],
        columns: &["Service Name", "Revenue", "Cost", "Year"],
        rows: &[
            &[Cell::T("Consulting Services"), Cell::N(100000.0), Cell::N(60000.0), Cell::N(2023.0)],
            &[Cell::T("Training Programs"), Cell::N(50000.0), Cell::N(20000.0), Cell::N(2023.0)],
            &[Cell::T("Software Development"), Cell::N(150000.0), Cell::N(80000.0), Cell::N(2023.0)],
            &[Cell::T("Marketing Services"), Cell::N(75000.0), Cell::N(45000.0), Cell::N(2023.0)],
        ],
    },
    TemplateSheet {
        name: EXPENSES_SHEET,
        title: "BUSINESS DATA TEMPLATE - EXPENSES",
        instructions: &[
            "• Enter all business expenses by category",
            "• Include both fixed and variable expenses",
            "• Add multiple rows for different years if you have historical data",
            "• Use consistent category names",
        ],
        columns: &["Expense Category", "Amount", "Year", "Type"],
        rows: &[
            &[Cell::T("Salaries & Wages"), Cell::N(200000.0), Cell::N(2023.0), Cell::T("Fixed")],
            &[Cell::T("Rent"), Cell::N(36000.0), Cell::N(2023.0), Cell::T("Fixed")],
            &[Cell::T("Utilities"), Cell::N(12000.0), Cell::N(2023.0), Cell::T("Variable")],
            &[Cell::T("Marketing"), Cell::N(25000.0), Cell::N(2023.0), Cell::T("Variable")],
            &[Cell::T("Insurance"), Cell::N(8000.0), Cell::N(2023.0), Cell::T("Fixed")],
            &[Cell::T("Software Licenses"), Cell::N(15000.0), Cell::N(2023.0), Cell::T("Variable")],
            &[Cell::T("Travel"), Cell::N(10000.0), Cell::N(2023.0), Cell::T("Variable")],
            &[Cell::T("Office Supplies"), Cell::N(5000.0), Cell::N(2023.0), Cell::T("Variable")],
        ],
    },
    TemplateSheet {
        name: EQUIPMENT_SHEET,
        title: "BUSINESS DATA TEMPLATE - EQUIPMENT",
        instructions: &[
            "• Enter all equipment and assets purchased",
            "• Include purchase cost and depreciation method",
            "• Add multiple rows for different years if you have historical data",
            "• Depreciation Methods: Straight Line, Double Declining, Sum of Years, Units of Production",
        ],
        columns: &["Equipment Name", "Purchase Cost", "Purchase Year", "Depreciation Method", "Useful Life (Years)"],
        rows: &[
            &[Cell::T("Laptops"), Cell::N(15000.0), Cell::N(2023.0), Cell::T("Straight Line"), Cell::N(3.0)],
            &[Cell::T("Office Furniture"), Cell::N(8000.0), Cell::N(2023.0), Cell::T("Straight Line"), Cell::N(7.0)],
            &[Cell::T("Software Licenses"), Cell::N(5000.0), Cell::N(2023.0), Cell::T("Straight Line"), Cell::N(1.0)],
            &[Cell::T("Vehicles"), Cell::N(25000.0), Cell::N(2023.0), Cell::T("Double Declining"), Cell::N(5.0)],
        ],
    },
    TemplateSheet {
        name: LOANS_SHEET,
        title: "BUSINESS DATA TEMPLATE - LOANS",
        instructions: &[
            "• Enter all loans and financing arrangements",
            "• Loan Types: Working Capital, SME Loan, Trade Finance, Letter of Guarantee, Startup Loan",
            "• Sub Types: only for Trade Finance (LC, Bills Discounting) and Startup Loan (Equity, Royalty, Fixed)",
            "• For Startup Loan with Royalty Sub Type: specify Royalty Type (Percentage or Fixed)",
            "• Leave Sub Type blank for Working Capital, SME Loan, and Letter of Guarantee",
        ],
        columns: &[
            "Loan Name", "Loan Type", "Sub Type", "Amount", "Interest Rate (%)",
            "Term (Years)", "Start Year", "Royalty Type", "Royalty %/Amount",
            "Trade Document Type", "Tenor",
        ],
        rows: &[
            &[Cell::T("Working Capital Loan"), Cell::T("Working Capital"), Cell::T(""), Cell::N(50000.0), Cell::N(8.5), Cell::N(3.0), Cell::N(2023.0), Cell::T(""), Cell::T(""), Cell::T(""), Cell::T("")],
            &[Cell::T("Equipment Financing"), Cell::T("SME Loan"), Cell::T(""), Cell::N(30000.0), Cell::N(7.2), Cell::N(5.0), Cell::N(2023.0), Cell::T(""), Cell::T(""), Cell::T(""), Cell::T("")],
            &[Cell::T("Trade Finance LC"), Cell::T("Trade Finance"), Cell::T("Letter of Credit (LC)"), Cell::N(25000.0), Cell::N(6.8), Cell::N(1.0), Cell::N(2023.0), Cell::T(""), Cell::T(""), Cell::T("LC"), Cell::T("90 days")],
            &[Cell::T("Startup Equity Loan"), Cell::T("Startup Loan"), Cell::T("Equity"), Cell::N(100000.0), Cell::N(5.5), Cell::N(5.0), Cell::N(2023.0), Cell::T(""), Cell::T(""), Cell::T(""), Cell::T("")],
            &[Cell::T("Startup Royalty Loan"), Cell::T("Startup Loan"), Cell::T("Royalty"), Cell::N(75000.0), Cell::N(4.2), Cell::N(4.0), Cell::N(2023.0), Cell::T("Percentage"), Cell::T("5"), Cell::T(""), Cell::T("")],
            &[Cell::T("Startup Fixed Royalty"), Cell::T("Startup Loan"), Cell::T("Royalty"), Cell::N(60000.0), Cell::N(3.8), Cell::N(3.0), Cell::N(2023.0), Cell::T("Fixed"), Cell::T("5000"), Cell::T(""), Cell::T("")],
        ],
    },
    TemplateSheet {
        name: OTHER_INCOME_COSTS_SHEET,
        title: "BUSINESS DATA TEMPLATE - OTHER INCOME/COSTS",
        instructions: &[
            "• Enter any other income or costs not covered above",
            "• Include one-time items, grants, subsidies, etc.",
            "• Add multiple rows for different years if you have historical data",
            "• Use positive amounts for income, negative for costs",
        ],
        columns: &["Description", "Amount", "Type", "Year"],
        rows: &[
            &[Cell::T("Government Grant"), Cell::N(10000.0), Cell::T("Income"), Cell::N(2023.0)],
            &[Cell::T("Interest Income"), Cell::N(2000.0), Cell::T("Income"), Cell::N(2023.0)],
            &[Cell::T("Legal Fees"), Cell::N(-5000.0), Cell::T("Cost"), Cell::N(2023.0)],
            &[Cell::T("Consulting Fees"), Cell::N(-8000.0), Cell::T("Cost"), Cell::N(2023.0)],
        ],
    },
    TemplateSheet {
        name: INVESTMENTS_SHEET,
        title: "BUSINESS DATA TEMPLATE - INVESTMENTS",
        instructions: &[
            "• Enter all investments made in the business",
            "• Include equity investments, loans to business, etc.",
            "• Add multiple rows for different years if you have historical data",
            "• Investment Types: Equity, Loan, Asset Purchase, Other",
        ],
        columns: &["Investment Name", "Investment Type", "Amount", "Year", "Investor"],
        rows: &[
            &[Cell::T("Founder Investment"), Cell::T("Equity"), Cell::N(50000.0), Cell::N(2023.0), Cell::T("Founder")],
            &[Cell::T("Angel Investment"), Cell::T("Equity"), Cell::N(100000.0), Cell::N(2023.0), Cell::T("Angel Investor")],
            &[Cell::T("Equipment Investment"), Cell::T("Asset Purchase"), Cell::N(25000.0), Cell::N(2023.0), Cell::T("Business")],
            &[Cell::T("Working Capital"), Cell::T("Loan"), Cell::N(30000.0), Cell::N(2023.0), Cell::T("Founder")],
        ],
    },
    TemplateSheet {
        name: SHAREHOLDERS_SHEET,
        title: "BUSINESS DATA TEMPLATE - SHAREHOLDERS",
        instructions: &[
            "• Enter all shareholders and their ownership details",
            "• Include shares owned and ownership percentage",
            "• Add multiple rows for different years if ownership changed",
            "• Ownership percentage should total 100%",
        ],
        columns: &["Shareholder Name", "Shares Owned", "Ownership %", "Year", "Share Class"],
        rows: &[
            &[Cell::T("Founder"), Cell::N(1000.0), Cell::N(60.0), Cell::N(2023.0), Cell::T("Common")],
            &[Cell::T("Angel Investor"), Cell::N(500.0), Cell::N(30.0), Cell::N(2023.0), Cell::T("Preferred")],
            &[Cell::T("Employee Stock"), Cell::N(100.0), Cell::N(5.0), Cell::N(2023.0), Cell::T("Common")],
            &[Cell::T("Advisor"), Cell::N(50.0), Cell::N(2.5), Cell::N(2023.0), Cell::T("Common")],
        ],
    },
    TemplateSheet {
        name: "Growth Assumptions",
        title: "BUSINESS DATA TEMPLATE - GROWTH ASSUMPTIONS",
        instructions: &[
            "• Enter growth rate assumptions for your business",
            "• These rates will be used for future projections",
            "• Rates should be based on historical performance or industry benchmarks",
            "• All rates should be entered as percentages (e.g., 15 for 15%)",
        ],
        columns: &["Growth Type", "Rate (%)", "Description"],
        rows: &[
            &[Cell::T("Revenue Growth Rate"), Cell::N(15.0), Cell::T("Expected annual revenue growth")],
            &[Cell::T("Expense Growth Rate"), Cell::N(10.0), Cell::T("Expected annual expense growth")],
            &[Cell::T("Customer Growth Rate"), Cell::N(20.0), Cell::T("Expected annual customer growth")],
        ],
    },
    TemplateSheet {
        name: "Credit Sales",
        title: "BUSINESS DATA TEMPLATE - CREDIT SALES",
        instructions: &[
            "• Enter credit sales and payment terms information",
            "• This affects cash flow calculations",
            "• Collection days should reflect your actual payment terms",
            "• Accounts payable days should reflect your payment terms to suppliers",
        ],
        columns: &["Field", "Value", "Unit", "Description"],
        rows: &[
            &[Cell::T("Credit Sales Percentage"), Cell::N(30.0), Cell::T("Percentage"), Cell::T("Percentage of sales on credit")],
            &[Cell::T("Collection Days"), Cell::N(45.0), Cell::T("Days"), Cell::T("Average days to collect payment")],
            &[Cell::T("Accounts Payable Days"), Cell::N(30.0), Cell::T("Days"), Cell::T("Average days to pay suppliers")],
        ],
    },
    TemplateSheet {
        name: "Owner Drawings",
        title: "BUSINESS DATA TEMPLATE - OWNER DRAWINGS",
        instructions: &[
            "• Enter owner drawings information",
            "• This affects cash flow and profitability calculations",
            "• Frequency should be Monthly or Annual",
            "• Amount should be the total annual amount",
        ],
        columns: &["Field", "Value", "Unit", "Description"],
        rows: &[
            &[Cell::T("Owner Drawings Amount"), Cell::N(50000.0), Cell::T("Currency"), Cell::T("Annual owner drawings")],
            &[Cell::T("Owner Drawings Frequency"), Cell::T("Annual"), Cell::T("Frequency"), Cell::T("Monthly or Annual")],
        ],
    },
    TemplateSheet {
        name: "Terminal Value",
        title: "BUSINESS DATA TEMPLATE - TERMINAL VALUE",
        instructions: &[
            "• Enter terminal value calculation parameters",
            "• These are used for DCF valuation",
            "• Terminal value method options: Perpetuity, Multiple, Custom",
            "• Terminal value metric options: EBITDA, Revenue, FCF",
        ],
        columns: &["Field", "Value", "Unit", "Description"],
        rows: &[
            &[Cell::T("Discount Rate"), Cell::N(12.0), Cell::T("Percentage"), Cell::T("Discount rate for DCF")],
            &[Cell::T("Terminal Growth"), Cell::N(3.0), Cell::T("Percentage"), Cell::T("Long-term growth rate")],
            &[Cell::T("Terminal Value Method"), Cell::T("Perpetuity"), Cell::T("Method"), Cell::T("Perpetuity, Multiple, or Custom")],
            &[Cell::T("Terminal Value Metric"), Cell::T("EBITDA"), Cell::T("Metric"), Cell::T("EBITDA, Revenue, or FCF")],
            &[Cell::T("Terminal Value Multiple"), Cell::N(8.0), Cell::T("Multiple"), Cell::T("EBITDA multiple if using multiple method")],
            &[Cell::T("Terminal Value Custom"), Cell::T(""), Cell::T("Currency"), Cell::T("Custom terminal value if using custom method")],
            &[Cell::T("Terminal Value Year"), Cell::N(5.0), Cell::T("Year"), Cell::T("Year for terminal value calculation")],
        ],
    },
    TemplateSheet {
        name: "WACC",
        title: "BUSINESS DATA TEMPLATE - WACC",
        instructions: &[
            "• Enter WACC (Weighted Average Cost of Capital) parameters",
            "• These are used for discount rate calculations",
            "• Use WACC Build Up: true for component-based calculation, false for direct input",
            "• Use Cost of Equity Only: true to use only cost of equity",
        ],
        columns: &["Field", "Value", "Unit", "Description"],
        rows: &[
            &[Cell::T("Use WACC Build Up"), Cell::T("true"), Cell::T("Boolean"), Cell::T("Use component-based WACC calculation")],
            &[Cell::T("Use Cost of Equity Only"), Cell::T("false"), Cell::T("Boolean"), Cell::T("Use only cost of equity")],
            &[Cell::T("Risk-Free Rate"), Cell::N(3.5), Cell::T("Percentage"), Cell::T("Government bond rate")],
            &[Cell::T("Beta"), Cell::N(1.2), Cell::T("Ratio"), Cell::T("Stock beta relative to market")],
            &[Cell::T("Market Premium"), Cell::N(6.0), Cell::T("Percentage"), Cell::T("Market risk premium")],
            &[Cell::T("Cost of Debt"), Cell::N(8.0), Cell::T("Percentage"), Cell::T("Pre-tax cost of debt")],
            &[Cell::T("Tax Rate for WACC"), Cell::N(25.0), Cell::T("Percentage"), Cell::T("Corporate tax rate for WACC")],
            &[Cell::T("Equity Percentage"), Cell::N(70.0), Cell::T("Percentage"), Cell::T("Percentage of equity in capital structure")],
            &[Cell::T("Debt Percentage"), Cell::N(30.0), Cell::T("Percentage"), Cell::T("Percentage of debt in capital structure")],
        ],
    },
    TemplateSheet {
        name: "Global Interest Rates",
        title: "BUSINESS DATA TEMPLATE - GLOBAL INTEREST RATES",
        instructions: &[
            "• Enter global interest rate parameters",
            "• Short term rate: typically 1-3 year government bond rate",
            "• Long term rate: typically 10-year government bond rate",
            "• Use for Loans: whether to apply these rates to loan calculations",
        ],
        columns: &["Field", "Value", "Unit", "Description"],
        rows: &[
            &[Cell::T("Short Term Rate"), Cell::N(4.0), Cell::T("Percentage"), Cell::T("Short-term interest rate")],
            &[Cell::T("Long Term Rate"), Cell::N(5.5), Cell::T("Percentage"), Cell::T("Long-term interest rate")],
            &[Cell::T("Investment Rate"), Cell::N(7.0), Cell::T("Percentage"), Cell::T("Investment opportunity rate")],
            &[Cell::T("Use for Loans"), Cell::T("true"), Cell::T("Boolean"), Cell::T("Apply rates to loan calculations")],
        ],
    },
];

const SERVICE_SHEETS: &[TemplateSheet] = &[
    TemplateSheet {
        name: "Service Business Model",
        title: "BUSINESS DATA TEMPLATE - SERVICE BUSINESS MODEL",
        instructions: &[
            "• Enter service business model parameters",
            "• These are specific to service-based businesses",
            "• Service Delivery Model: Hourly, Project, Retainer, Subscription",
            "• Pricing Strategy: Fixed, Variable, Tiered",
        ],
        columns: &["Field", "Value", "Unit", "Description"],
        rows: &[
            &[Cell::T("Service Delivery Model"), Cell::T("Project"), Cell::T("Model"), Cell::T("Hourly, Project, Retainer, or Subscription")],
            &[Cell::T("Pricing Strategy"), Cell::T("Fixed"), Cell::T("Strategy"), Cell::T("Fixed, Variable, or Tiered")],
            &[Cell::T("Client Retention Rate"), Cell::N(85.0), Cell::T("Percentage"), Cell::T("Annual client retention rate")],
        ],
    },
    TemplateSheet {
        name: SERVICE_METRICS_SHEET,
        title: "BUSINESS DATA TEMPLATE - SERVICE METRICS",
        instructions: &[
            "• Enter service-specific operational metrics",
            "• Add multiple rows for different years if you have historical data",
            "• All percentages should be entered as decimals (e.g., 0.75 for 75%)",
        ],
        columns: &["Metric", "Value", "Year", "Unit"],
        rows: &[
            &[Cell::T("Utilization Rate"), Cell::N(0.75), Cell::N(2023.0), Cell::T("Percentage")],
            &[Cell::T("Team Size"), Cell::N(8.0), Cell::N(2023.0), Cell::T("People")],
            &[Cell::T("Team Growth Rate"), Cell::N(0.25), Cell::N(2023.0), Cell::T("Percentage")],
            &[Cell::T("Average Project Duration"), Cell::N(3.0), Cell::N(2023.0), Cell::T("Months")],
            &[Cell::T("Client Acquisition Cost"), Cell::N(2000.0), Cell::N(2023.0), Cell::T("Currency")],
            &[Cell::T("Customer Lifetime Value"), Cell::N(15000.0), Cell::N(2023.0), Cell::T("Currency")],
            &[Cell::T("Recurring Revenue %"), Cell::N(0.60), Cell::N(2023.0), Cell::T("Percentage")],
            &[Cell::T("Churn Rate"), Cell::N(0.10), Cell::N(2023.0), Cell::T("Percentage")],
            &[Cell::T("Expansion Revenue %"), Cell::N(0.20), Cell::N(2023.0), Cell::T("Percentage")],
            &[Cell::T("Seasonality Factor"), Cell::N(0.15), Cell::N(2023.0), Cell::T("Percentage")],
        ],
    },
];

/// Generator for the business-data template workbook.
pub struct BusinessTemplate {
    company_type: String,
}

impl BusinessTemplate {
    pub fn new(company_type: &str) -> Self {
        Self {
            company_type: company_type.to_lowercase(),
        }
    }

    /// Write the template workbook to `path`: the base sheets plus the
    /// conditional sheets for the company type. Unknown company types get
    /// the service sheets, the only set currently implemented.
    pub fn write(&self, path: &Path) -> LiftResult<()> {
        let mut workbook = Workbook::new();

        for sheet in BASE_SHEETS {
            write_template_sheet(&mut workbook, sheet)?;
        }

        // Conditional sheets; "service" is the only dedicated set so far and
        // doubles as the fallback.
        for sheet in SERVICE_SHEETS {
            write_template_sheet(&mut workbook, sheet)?;
        }

        workbook.save(path)?;
        tracing::info!(
            path = %path.display(),
            company_type = %self.company_type,
            "business template written"
        );
        Ok(())
    }
}

fn write_template_sheet(workbook: &mut Workbook, sheet: &TemplateSheet) -> LiftResult<()> {
    let worksheet = add_sheet(workbook, sheet.name, sheet.title, sheet.instructions)?;
    write_header(worksheet, sheet.columns)?;
    for (i, row) in sheet.rows.iter().enumerate() {
        write_row(worksheet, (HEADER_ROW_INDEX + 1 + i) as u32, row)?;
    }
    Ok(())
}
