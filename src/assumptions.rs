//! Forecasting assumptions derived from imported statements.
//!
//! Every numeric field carries a fixed sane default, so the assumptions step
//! is always completable without user input. Growth rates are auto-derived
//! from the historical statements and recomputed when the user switches
//! calculation method; picking `custom` freezes the displayed rate until a
//! different method is selected.

use crate::types::{FinancialStatements, LineItem};
use serde::{Deserialize, Serialize};

/// How a growth rate is derived from the historical value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthMethod {
    /// Arithmetic mean of year-over-year percentage changes.
    Simple,
    /// Year-over-year changes weighted by recency.
    Weighted,
    /// Compound annual growth rate.
    Cagr,
    /// User-entered value.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingsFrequency {
    Monthly,
    Annual,
}

/// User-adjustable forecasting parameters attached to a statements import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    pub forecast_years: u32,
    pub tax_rate: f64,

    pub revenue_growth_rate: f64,
    pub revenue_calculation_method: GrowthMethod,
    pub expense_growth_rate: f64,
    pub expense_calculation_method: GrowthMethod,

    pub credit_sales_percent: f64,
    pub credit_collection_days: u32,
    pub accounts_payable_days: u32,

    pub owner_drawings_amount: f64,
    pub owner_drawings_frequency: DrawingsFrequency,

    pub fiscal_year_start: String,

    pub discount_rate: f64,
    pub terminal_growth: f64,
    pub tv_method: String,
    pub tv_metric: String,
    pub tv_multiple: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            forecast_years: 5,
            tax_rate: 25.0,
            revenue_growth_rate: 10.0,
            revenue_calculation_method: GrowthMethod::Cagr,
            expense_growth_rate: 5.0,
            expense_calculation_method: GrowthMethod::Cagr,
            credit_sales_percent: 30.0,
            credit_collection_days: 45,
            accounts_payable_days: 30,
            owner_drawings_amount: 50_000.0,
            owner_drawings_frequency: DrawingsFrequency::Annual,
            fiscal_year_start: "January".to_string(),
            discount_rate: 10.0,
            terminal_growth: 2.0,
            tv_method: "perpetuity".to_string(),
            tv_metric: "EBITDA".to_string(),
            tv_multiple: 8.0,
        }
    }
}

impl Assumptions {
    /// Defaults plus growth rates auto-calculated (CAGR) from the imported
    /// statements.
    pub fn derive(statements: &FinancialStatements) -> Self {
        Self {
            revenue_growth_rate: round1(growth_rate(
                &revenue_values(statements),
                GrowthMethod::Cagr,
            )),
            expense_growth_rate: round1(growth_rate(
                &expense_values(statements),
                GrowthMethod::Cagr,
            )),
            ..Self::default()
        }
    }

    /// Switch the revenue growth method. Non-custom methods recompute the
    /// rate from the statements; `custom` keeps the current rate frozen.
    pub fn set_revenue_method(&mut self, method: GrowthMethod, statements: &FinancialStatements) {
        self.revenue_calculation_method = method;
        if method != GrowthMethod::Custom {
            self.revenue_growth_rate = round1(growth_rate(&revenue_values(statements), method));
        }
    }

    /// Switch the expense growth method; same semantics as the revenue side.
    pub fn set_expense_method(&mut self, method: GrowthMethod, statements: &FinancialStatements) {
        self.expense_calculation_method = method;
        if method != GrowthMethod::Custom {
            self.expense_growth_rate = round1(growth_rate(&expense_values(statements), method));
        }
    }

    /// Manual rate entry implies the custom method.
    pub fn set_custom_revenue_rate(&mut self, rate: f64) {
        self.revenue_growth_rate = rate;
        self.revenue_calculation_method = GrowthMethod::Custom;
    }

    pub fn set_custom_expense_rate(&mut self, rate: f64) {
        self.expense_growth_rate = rate;
        self.expense_calculation_method = GrowthMethod::Custom;
    }
}

/// Growth rate in percent for a historical value series. Series shorter
/// than two points yield 0; the custom method never computes anything.
pub fn growth_rate(values: &[f64], method: GrowthMethod) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    match method {
        GrowthMethod::Simple => simple_average_growth(values),
        GrowthMethod::Weighted => weighted_average_growth(values),
        GrowthMethod::Cagr => cagr(values) * 100.0,
        GrowthMethod::Custom => 0.0,
    }
}

/// Mean of year-over-year percentage changes. Transitions whose base value
/// is not positive are skipped.
pub fn simple_average_growth(values: &[f64]) -> f64 {
    let rates = yoy_rates(values);
    if rates.is_empty() {
        return 0.0;
    }
    rates.iter().map(|(r, _)| r).sum::<f64>() / rates.len() as f64
}

/// Year-over-year percentage changes weighted by the 1-indexed transition
/// number, so recent transitions dominate.
pub fn weighted_average_growth(values: &[f64]) -> f64 {
    let rates = yoy_rates(values);
    if rates.is_empty() {
        return 0.0;
    }
    let total_weight: f64 = rates.iter().map(|(_, w)| w).sum();
    rates.iter().map(|(r, w)| r * w).sum::<f64>() / total_weight
}

/// Compound annual growth rate as a raw ratio: `(last/first)^(1/(n-1)) - 1`.
/// Returns 0 for fewer than two points or a non-positive endpoint.
pub fn cagr(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let first = values[0];
    let last = values[values.len() - 1];
    if first <= 0.0 || last <= 0.0 {
        return 0.0;
    }
    let periods = (values.len() - 1) as f64;
    (last / first).powf(1.0 / periods) - 1.0
}

fn yoy_rates(values: &[f64]) -> Vec<(f64, f64)> {
    let mut rates = Vec::new();
    for i in 1..values.len() {
        if values[i - 1] > 0.0 {
            rates.push((
                (values[i] - values[i - 1]) / values[i - 1] * 100.0,
                i as f64,
            ));
        }
    }
    rates
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn find_values<'a>(
    items: &'a [LineItem],
    needles: &[&str],
) -> Option<&'a LineItem> {
    items.iter().find(|item| {
        let label = item.label.to_lowercase();
        needles.iter().any(|n| label.contains(n))
    })
}

fn revenue_values(statements: &FinancialStatements) -> Vec<f64> {
    find_values(
        &statements.income_statement.line_items,
        &["total revenue", "service revenue"],
    )
    .map(|item| item.values.clone())
    .unwrap_or_default()
}

fn expense_values(statements: &FinancialStatements) -> Vec<f64> {
    find_values(
        &statements.income_statement.line_items,
        &["total operating expenses", "operating expenses"],
    )
    .map(|item| item.values.clone())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Statement;

    fn statements_with_revenue(values: Vec<f64>) -> FinancialStatements {
        FinancialStatements {
            income_statement: Statement {
                years: (0..values.len()).map(|i| format!("{}", 2020 + i)).collect(),
                line_items: vec![LineItem {
                    label: "TOTAL REVENUE".to_string(),
                    values,
                    description: String::new(),
                    is_header: false,
                    is_total: true,
                }],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_cagr_two_points() {
        let result = cagr(&[100.0, 121.0]);
        assert!((result - 0.21).abs() < 1e-9);
    }

    #[test]
    fn test_cagr_three_points() {
        // 100 → 121 over two periods: sqrt(1.21) - 1 = 0.1
        let result = cagr(&[100.0, 110.0, 121.0]);
        assert!((result - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_cagr_guards() {
        assert_eq!(cagr(&[]), 0.0);
        assert_eq!(cagr(&[100.0]), 0.0);
        assert_eq!(cagr(&[0.0, 121.0]), 0.0);
        assert_eq!(cagr(&[100.0, -5.0]), 0.0);
    }

    #[test]
    fn test_simple_average_growth() {
        // +10% then +20%: mean 15%.
        let result = simple_average_growth(&[100.0, 110.0, 132.0]);
        assert!((result - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_simple_average_skips_non_positive_base() {
        // Transition from 0 is skipped, only +10% counts.
        let result = simple_average_growth(&[0.0, 100.0, 110.0]);
        assert!((result - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_average_growth_recency() {
        // Rates: +10% (weight 1), +20% (weight 2) → (10 + 40) / 3.
        let result = weighted_average_growth(&[100.0, 110.0, 132.0]);
        assert!((result - 50.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_rate_short_series_is_zero() {
        assert_eq!(growth_rate(&[100.0], GrowthMethod::Simple), 0.0);
        assert_eq!(growth_rate(&[], GrowthMethod::Cagr), 0.0);
    }

    #[test]
    fn test_derive_uses_cagr() {
        let statements = statements_with_revenue(vec![100_000.0, 121_000.0]);
        let assumptions = Assumptions::derive(&statements);
        assert_eq!(assumptions.revenue_calculation_method, GrowthMethod::Cagr);
        assert_eq!(assumptions.revenue_growth_rate, 21.0);
        // No expense line item: rate falls back to 0.
        assert_eq!(assumptions.expense_growth_rate, 0.0);
    }

    #[test]
    fn test_custom_method_freezes_rate() {
        let statements = statements_with_revenue(vec![100.0, 121.0]);
        let mut assumptions = Assumptions::derive(&statements);
        assert_eq!(assumptions.revenue_growth_rate, 21.0);

        assumptions.set_custom_revenue_rate(7.5);
        assert_eq!(assumptions.revenue_growth_rate, 7.5);

        // Switching to custom again does not recompute.
        assumptions.set_revenue_method(GrowthMethod::Custom, &statements);
        assert_eq!(assumptions.revenue_growth_rate, 7.5);

        // Picking a concrete method does.
        assumptions.set_revenue_method(GrowthMethod::Simple, &statements);
        assert_eq!(assumptions.revenue_growth_rate, 21.0);
    }

    #[test]
    fn test_defaults_are_complete() {
        let a = Assumptions::default();
        assert_eq!(a.forecast_years, 5);
        assert_eq!(a.tax_rate, 25.0);
        assert_eq!(a.discount_rate, 10.0);
        assert_eq!(a.terminal_growth, 2.0);
        assert_eq!(a.tv_method, "perpetuity");
        assert_eq!(a.tv_multiple, 8.0);
        assert_eq!(a.owner_drawings_frequency, DrawingsFrequency::Annual);
    }
}
