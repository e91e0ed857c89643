//! Static column catalogs: the target fields an import can populate.
//!
//! One catalog per import type. Entries are matched against source column
//! headers by the fuzzy mapper; iteration order is the tie-break order.

/// One target field in a column catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub display_name: &'static str,
    pub sheet: &'static str,
    pub required: bool,
}

const fn entry(
    id: &'static str,
    display_name: &'static str,
    sheet: &'static str,
    required: bool,
) -> CatalogEntry {
    CatalogEntry {
        id,
        display_name,
        sheet,
        required,
    }
}

/// Business-data template fields, grouped by source sheet.
pub const BUSINESS_CATALOG: &[CatalogEntry] = &[
    // Basic Information
    entry("years_in_business", "Years in Business", "Basic Information", true),
    entry("forecast_years", "Forecast Years", "Basic Information", true),
    entry("tax_rate", "Tax Rate (%)", "Basic Information", true),
    entry("self_funding", "Self Funding", "Basic Information", true),
    entry("fiscal_year_start", "Fiscal Year Start", "Basic Information", true),
    entry("revenue_input_type", "Revenue Input Type", "Basic Information", true),
    entry("expense_input_type", "Expense Input Type", "Basic Information", true),
    // Services
    entry("service_name", "Service Name", "Services", true),
    entry("service_revenue", "Revenue", "Services", true),
    entry("service_cost", "Cost", "Services", false),
    entry("service_year", "Year", "Services", true),
    // Expenses
    entry("expense_category", "Expense Category", "Expenses", true),
    entry("expense_amount", "Amount", "Expenses", true),
    entry("expense_year", "Year", "Expenses", true),
    entry("expense_type", "Type", "Expenses", false),
    // Equipment
    entry("equipment_name", "Equipment Name", "Equipment", true),
    entry("equipment_cost", "Purchase Cost", "Equipment", true),
    entry("equipment_year", "Purchase Year", "Equipment", true),
    entry("equipment_depreciation", "Depreciation Method", "Equipment", true),
    entry("equipment_life", "Useful Life (Years)", "Equipment", true),
    // Loans
    entry("loan_name", "Loan Name", "Loans", true),
    entry("loan_type", "Loan Type", "Loans", true),
    entry("loan_subtype", "Sub Type", "Loans", false),
    entry("loan_amount", "Amount", "Loans", true),
    entry("loan_rate", "Interest Rate (%)", "Loans", true),
    entry("loan_term", "Term (Years)", "Loans", true),
    entry("loan_start_year", "Start Year", "Loans", true),
    // Other Income/Costs
    entry("other_description", "Description", "Other Income Costs", true),
    entry("other_amount", "Amount", "Other Income Costs", true),
    entry("other_type", "Type", "Other Income Costs", true),
    entry("other_year", "Year", "Other Income Costs", true),
    // Investments
    entry("investment_name", "Investment Name", "Investments", true),
    entry("investment_type", "Investment Type", "Investments", true),
    entry("investment_amount", "Amount", "Investments", true),
    entry("investment_year", "Year", "Investments", true),
    entry("investment_investor", "Investor", "Investments", false),
    // Shareholders
    entry("shareholder_name", "Shareholder Name", "Shareholders", true),
    entry("shareholder_shares", "Shares Owned", "Shareholders", true),
    entry("shareholder_percent", "Ownership %", "Shareholders", true),
    entry("shareholder_year", "Year", "Shareholders", true),
    entry("shareholder_class", "Share Class", "Shareholders", false),
    // Growth Assumptions
    entry("growth_type", "Growth Type", "Growth Assumptions", true),
    entry("growth_rate", "Rate (%)", "Growth Assumptions", true),
    entry("growth_description", "Description", "Growth Assumptions", false),
    // Credit Sales
    entry("credit_sales_percent", "Credit Sales Percentage", "Credit Sales", true),
    entry("collection_days", "Collection Days", "Credit Sales", true),
    entry("accounts_payable_days", "Accounts Payable Days", "Credit Sales", true),
    // Owner Drawings
    entry("owner_drawings_amount", "Owner Drawings Amount", "Owner Drawings", true),
    entry("owner_drawings_frequency", "Owner Drawings Frequency", "Owner Drawings", true),
    // Terminal Value
    entry("discount_rate", "Discount Rate", "Terminal Value", true),
    entry("terminal_growth", "Terminal Growth", "Terminal Value", true),
    entry("tv_method", "Terminal Value Method", "Terminal Value", true),
    entry("tv_metric", "Terminal Value Metric", "Terminal Value", false),
    entry("tv_multiple", "Terminal Value Multiple", "Terminal Value", false),
    entry("tv_custom_value", "Terminal Value Custom", "Terminal Value", false),
    entry("tv_year", "Terminal Value Year", "Terminal Value", false),
    // WACC
    entry("use_wacc_build_up", "Use WACC Build Up", "WACC", true),
    entry("use_cost_of_equity_only", "Use Cost of Equity Only", "WACC", true),
    entry("rf_rate", "Risk-Free Rate", "WACC", true),
    entry("beta", "Beta", "WACC", true),
    entry("market_premium", "Market Premium", "WACC", true),
    entry("cost_of_debt", "Cost of Debt", "WACC", true),
    entry("tax_rate_wacc", "Tax Rate for WACC", "WACC", true),
    entry("equity_pct", "Equity Percentage", "WACC", true),
    entry("debt_pct", "Debt Percentage", "WACC", true),
    // Global Interest Rates
    entry("short_term_rate", "Short Term Rate", "Global Interest Rates", true),
    entry("long_term_rate", "Long Term Rate", "Global Interest Rates", true),
    entry("investment_rate", "Investment Rate", "Global Interest Rates", true),
    entry("use_for_loans", "Use for Loans", "Global Interest Rates", true),
    // Service Business Model (conditional, service companies)
    entry("service_delivery_model", "Service Delivery Model", "Service Business Model", true),
    entry("pricing_strategy", "Pricing Strategy", "Service Business Model", true),
    entry("client_retention_rate", "Client Retention Rate", "Service Business Model", true),
    // Service Metrics (conditional, service companies)
    entry("utilization_rate", "Utilization Rate", "Service Metrics", false),
    entry("team_size", "Team Size", "Service Metrics", false),
    entry("team_growth", "Team Growth Rate", "Service Metrics", false),
    entry("project_duration", "Average Project Duration", "Service Metrics", false),
    entry("cac", "Client Acquisition Cost", "Service Metrics", false),
    entry("clv", "Customer Lifetime Value", "Service Metrics", false),
    entry("recurring_revenue", "Recurring Revenue %", "Service Metrics", false),
    entry("churn_rate", "Churn Rate", "Service Metrics", false),
    entry("expansion_revenue", "Expansion Revenue %", "Service Metrics", false),
    entry("seasonality", "Seasonality Factor", "Service Metrics", false),
];

/// Statement-level fields, used when mapping free-form (non-template)
/// financial spreadsheets.
pub const STATEMENT_CATALOG: &[CatalogEntry] = &[
    // Income Statement
    entry("revenue", "Total Revenue", "Income Statement", true),
    entry("cogs", "Cost of Goods Sold", "Income Statement", true),
    entry("gross_profit", "Gross Profit", "Income Statement", false),
    entry("operating_expenses", "Operating Expenses", "Income Statement", true),
    entry("ebitda", "EBITDA", "Income Statement", false),
    entry("depreciation", "Depreciation & Amortization", "Income Statement", true),
    entry("interest_expense", "Interest Expense", "Income Statement", false),
    entry("tax_expense", "Tax Expense", "Income Statement", false),
    entry("net_income", "Net Income", "Income Statement", true),
    // Balance Sheet
    entry("cash", "Cash & Cash Equivalents", "Balance Sheet", true),
    entry("accounts_receivable", "Accounts Receivable", "Balance Sheet", false),
    entry("inventory", "Inventory", "Balance Sheet", false),
    entry("current_assets", "Total Current Assets", "Balance Sheet", true),
    entry("ppe", "Property, Plant & Equipment", "Balance Sheet", true),
    entry("total_assets", "Total Assets", "Balance Sheet", true),
    entry("accounts_payable", "Accounts Payable", "Balance Sheet", false),
    entry("current_liabilities", "Total Current Liabilities", "Balance Sheet", true),
    entry("long_term_debt", "Long-term Debt", "Balance Sheet", false),
    entry("total_liabilities", "Total Liabilities", "Balance Sheet", true),
    entry("shareholders_equity", "Shareholders' Equity", "Balance Sheet", true),
    // Cash Flow
    entry("operating_cash_flow", "Operating Cash Flow", "Cash Flow", true),
    entry("investing_cash_flow", "Investing Cash Flow", "Cash Flow", false),
    entry("financing_cash_flow", "Financing Cash Flow", "Cash Flow", false),
    entry("free_cash_flow", "Free Cash Flow", "Cash Flow", true),
    // Assumptions
    entry("revenue_growth_rate", "Revenue Growth Rate", "Assumptions", true),
    entry("gross_margin", "Gross Margin %", "Assumptions", true),
    entry("tax_rate", "Tax Rate", "Assumptions", true),
    entry("discount_rate", "Discount Rate", "Assumptions", false),
];
