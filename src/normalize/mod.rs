//! Statement/record normalizer - matched rows → typed domain records
//!
//! Two sub-paths: the fixed financial-statement template (no field mapping,
//! positions are fixed) and the business-data sheets (per-sheet column
//! contracts). Both share the lenient coercion policy in [`policy`].

pub mod business;
pub mod policy;
pub mod statements;

pub use business::normalize_business;
pub use statements::{normalize_statements, parse_statement};

use crate::types::YearBucket;

/// Group rows into year buckets. Bucket order follows the first occurrence
/// of each distinct year in the input; downstream consumers rely on that
/// order, so it is never sorted.
pub fn group_by_year<T>(rows: Vec<T>, year_of: impl Fn(&T) -> i32) -> Vec<YearBucket<T>> {
    let mut buckets: Vec<YearBucket<T>> = Vec::new();

    for row in rows {
        let year = year_of(&row);
        match buckets.iter_mut().find(|b| b.year == year) {
            Some(bucket) => bucket.items.push(row),
            None => buckets.push(YearBucket {
                year,
                items: vec![row],
            }),
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_year_first_occurrence_order() {
        let rows = vec![(2023, "a"), (2021, "b"), (2023, "c")];
        let buckets = group_by_year(rows, |r| r.0);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].year, 2023);
        assert_eq!(buckets[0].items, vec![(2023, "a"), (2023, "c")]);
        assert_eq!(buckets[1].year, 2021);
    }

    #[test]
    fn test_group_by_year_empty() {
        let buckets = group_by_year(Vec::<(i32, &str)>::new(), |r| r.0);
        assert!(buckets.is_empty());
    }
}
