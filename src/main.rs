use clap::{Parser, Subcommand};
use ledgerlift::cli;
use ledgerlift::error::LiftResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ledgerlift")]
#[command(about = "Historical financial data import: Excel templates in, model inputs out")]
#[command(long_about = "Ledgerlift - historical data import pipeline

Generates the Excel templates users fill in, then parses completed uploads
into the normalized JSON a financial-modeling backend consumes.

COMMANDS:
  template  - Generate a blank import template (.xlsx)
  import    - Parse a completed template into normalized JSON
  inspect   - List sheets, columns and row counts of an upload

EXAMPLES:
  ledgerlift template statements -o statements.xlsx
  ledgerlift template business --company-type service
  ledgerlift import statements.xlsx --statements -o body.json
  ledgerlift inspect upload.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a blank import template
    Template {
        #[command(subcommand)]
        which: TemplateCommands,
    },

    #[command(long_about = "Parse a completed template into normalized JSON.

Runs the full import pipeline headlessly: upload validation, sheet parsing
(10 instruction rows skipped, header on row 10), normalization, and - for
financial statements - auto-derived forecasting assumptions. The output is
the request body the calculation API accepts.")]
    /// Parse a completed template into normalized JSON
    Import {
        /// Path to the .xlsx/.xls upload
        input: PathBuf,

        /// Treat the upload as the financial-statements template
        /// (default: business data)
        #[arg(long)]
        statements: bool,

        /// Write the JSON body here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show per-sheet parse details
        #[arg(short, long)]
        verbose: bool,
    },

    /// List sheets, columns and row counts of an upload
    Inspect {
        /// Path to the .xlsx/.xls upload
        input: PathBuf,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// Three-sheet financial statements template
    Statements {
        /// Output path (default: dated file name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Business data template (one sheet per input category)
    Business {
        /// Output path (default: dated file name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Company type for the conditional sheets
        #[arg(long, default_value = "service")]
        company_type: String,
    },
}

fn main() -> LiftResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Template { which } => match which {
            TemplateCommands::Statements { output } => cli::template_statements(output),
            TemplateCommands::Business {
                output,
                company_type,
            } => cli::template_business(output, company_type),
        },

        Commands::Import {
            input,
            statements,
            output,
            verbose,
        } => cli::import(input, statements, output, verbose),

        Commands::Inspect { input } => cli::inspect(input),
    }
}
