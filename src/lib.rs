//! Ledgerlift - historical financial data import pipeline
//!
//! This library turns uploaded Excel workbooks (historical business data or
//! full financial statements) into the normalized, typed structures a
//! financial-modeling backend consumes, and generates the matching Excel
//! templates users fill in.
//!
//! # Pipeline
//!
//! - Workbook ingestion (`ingest`): validated upload → sheets of raw cells
//! - Field mapping (`mapping`): fuzzy header matching against a static
//!   column catalog
//! - Normalization (`normalize`): statements and business data as typed
//!   records, with a lenient cell-coercion policy
//! - Assumptions (`assumptions`): forecasting defaults auto-derived from
//!   the imported history
//! - Orchestration (`wizard`): the multi-step import session state machine
//!
//! # Example
//!
//! ```no_run
//! use ledgerlift::ingest::WorkbookIngestor;
//! use ledgerlift::normalize::normalize_statements;
//! use ledgerlift::assumptions::Assumptions;
//!
//! let ingestor = WorkbookIngestor::with_defaults();
//! let bytes = std::fs::read("statements.xlsx")?;
//! let workbook = ingestor.ingest("statements.xlsx", bytes)?;
//!
//! let statements = normalize_statements(&workbook);
//! let assumptions = Assumptions::derive(&statements);
//! println!("revenue growth: {}%", assumptions.revenue_growth_rate);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assumptions;
pub mod cli;
pub mod error;
pub mod ingest;
pub mod mapping;
pub mod normalize;
pub mod template;
pub mod types;
pub mod wizard;

// Re-export commonly used types
pub use error::{LiftError, LiftResult};
pub use types::{
    BusinessData, CellValue, FinancialStatements, LineItem, Sheet, Statement, UploadConfig,
    Workbook, YearBucket,
};
