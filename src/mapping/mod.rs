//! Schema-driven field mapper - source column headers → catalog fields
//!
//! Pure functions of the inputs plus the static catalog. Matching is fuzzy:
//! both sides are normalized to lowercase alphanumerics and compared by edit
//! distance. A match is accepted only when its similarity strictly exceeds
//! [`SIMILARITY_THRESHOLD`]; ties go to the first catalog entry in iteration
//! order. Missing required fields are reported as data, never as an error -
//! the caller decides whether to block progression.

mod catalog;

pub use catalog::{CatalogEntry, BUSINESS_CATALOG, STATEMENT_CATALOG};

use serde::{Deserialize, Serialize};

/// Minimum similarity a match must strictly exceed to be accepted.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Declared type of the data in a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Date,
    Boolean,
}

/// The resolved association between one source column and one catalog field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub source_column: String,
    pub target_field_id: String,
    pub data_type: DataType,
    pub required: bool,
}

/// Mapper output: accepted mappings plus the advisory list of required
/// catalog fields no source column matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingReport {
    pub mappings: Vec<ColumnMapping>,
    pub missing_required: Vec<String>,
}

impl MappingReport {
    /// Whether every required catalog field found a source column.
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Lowercase and strip everything that is not alphanumeric.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Classic Levenshtein edit distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            let indicator = usize::from(a[i - 1] != b[j - 1]);
            matrix[j][i] = (matrix[j][i - 1] + 1)
                .min(matrix[j - 1][i] + 1)
                .min(matrix[j - 1][i - 1] + indicator);
        }
    }

    matrix[b.len()][a.len()]
}

/// Edit-distance ratio: `1 − distance / max(len)`. Two empty strings score
/// 1.0. Inputs are expected to be pre-normalized.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Find the catalog entry most similar to `column`, if any scores strictly
/// above the threshold. Equal scores keep the earlier catalog entry.
pub fn best_match<'a>(
    column: &str,
    catalog: &'a [CatalogEntry],
) -> Option<(&'a CatalogEntry, f64)> {
    let normalized = normalize_header(column);

    let mut best: Option<(&CatalogEntry, f64)> = None;
    for field in catalog {
        let score = similarity(&normalized, &normalize_header(field.display_name));
        if score > SIMILARITY_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
            best = Some((field, score));
        }
    }
    best
}

/// Map every source column against the catalog, then verify required-field
/// coverage. All missing required fields are collected, not just the first.
pub fn map_columns(columns: &[String], catalog: &[CatalogEntry]) -> MappingReport {
    let mut mappings = Vec::new();

    for column in columns {
        if let Some((field, score)) = best_match(column, catalog) {
            tracing::debug!(column = %column, field = field.id, score, "column mapped");
            mappings.push(ColumnMapping {
                source_column: column.clone(),
                target_field_id: field.id.to_string(),
                data_type: DataType::String,
                required: field.required,
            });
        } else {
            tracing::debug!(column = %column, "column left unmapped");
        }
    }

    let missing_required = missing_required_fields(catalog, &mappings);

    MappingReport {
        mappings,
        missing_required,
    }
}

/// Display names of required catalog fields no mapping targets.
pub fn missing_required_fields(
    catalog: &[CatalogEntry],
    mappings: &[ColumnMapping],
) -> Vec<String> {
    catalog
        .iter()
        .filter(|f| f.required)
        .filter(|f| !mappings.iter().any(|m| m.target_field_id == f.id))
        .map(|f| f.display_name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Interest Rate (%)"), "interestrate");
        assert_eq!(normalize_header("Useful Life (Years)"), "usefullifeyears");
        assert_eq!(normalize_header("  Year  "), "year");
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_similarity_identical_is_one() {
        assert_eq!(similarity("revenue", "revenue"), 1.0);
    }

    #[test]
    fn test_similarity_empty_vs_empty_is_one() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_disjoint_is_low() {
        // No shared characters: distance == max length, ratio == 0.
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_best_match_exact_name() {
        let (field, score) = best_match("Loan Name", BUSINESS_CATALOG).unwrap();
        assert_eq!(field.id, "loan_name");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_best_match_threshold_is_strict() {
        // "xyz123" shares digits with nothing in the catalog above 0.3.
        assert!(best_match("qqqqqqqqqqqqqqqqqqqqqqqq", BUSINESS_CATALOG).is_none());
    }

    #[test]
    fn test_best_match_tie_prefers_catalog_order() {
        // "Year" appears verbatim on several sheets; the Services entry
        // comes first in the catalog and must win the 1.0 tie.
        let (field, score) = best_match("Year", BUSINESS_CATALOG).unwrap();
        assert_eq!(score, 1.0);
        assert_eq!(field.id, "service_year");
    }

    #[test]
    fn test_map_columns_reports_all_missing_required() {
        let report = map_columns(
            &["xyz123".to_string(), "foo456".to_string()],
            STATEMENT_CATALOG,
        );
        assert!(report.mappings.is_empty());
        assert!(!report.is_complete());
        let required_count = STATEMENT_CATALOG.iter().filter(|f| f.required).count();
        assert_eq!(report.missing_required.len(), required_count);
        assert!(report
            .missing_required
            .contains(&"Total Revenue".to_string()));
    }

    #[test]
    fn test_map_columns_fills_required() {
        let columns: Vec<String> = ["Service Name", "Revenue", "Cost", "Year"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report = map_columns(&columns, BUSINESS_CATALOG);
        assert_eq!(report.mappings.len(), 4);
        assert!(report
            .mappings
            .iter()
            .any(|m| m.target_field_id == "service_name"));
        // Plenty of other sheets' required fields stay uncovered.
        assert!(!report.is_complete());
    }
}
