//! CLI command implementations.

mod commands;

pub use commands::{import, inspect, template_business, template_statements};
