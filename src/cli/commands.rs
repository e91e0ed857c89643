use crate::assumptions::Assumptions;
use crate::error::LiftResult;
use crate::ingest::WorkbookIngestor;
use crate::normalize::{normalize_business, normalize_statements};
use crate::template::{BusinessTemplate, StatementsTemplate};
use crate::types::UploadConfig;
use crate::wizard::ImportKind;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Default output name for a generated template, stamped with today's date.
fn default_template_name(prefix: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("{prefix}_{date}.xlsx"))
}

/// Execute `template statements`.
pub fn template_statements(output: Option<PathBuf>) -> LiftResult<()> {
    let output =
        output.unwrap_or_else(|| default_template_name("historical_financial_statements_template"));

    println!("{}", "📄 Ledgerlift - Statements Template".bold().green());
    println!("   Output: {}\n", output.display());

    let template = StatementsTemplate::new();
    template.write(&output)?;

    println!("{}", "✅ Template written".bold().green());
    println!("   Years: {}", template.years().join(", "));
    println!("   Sheets: Income Statement, Balance Sheet, Cash Flow Statement\n");
    Ok(())
}

/// Execute `template business`.
pub fn template_business(output: Option<PathBuf>, company_type: String) -> LiftResult<()> {
    let output = output.unwrap_or_else(|| {
        default_template_name(&format!("historical_business_data_template_{company_type}"))
    });

    println!("{}", "📄 Ledgerlift - Business Data Template".bold().green());
    println!("   Company type: {company_type}");
    println!("   Output: {}\n", output.display());

    BusinessTemplate::new(&company_type).write(&output)?;

    println!("{}", "✅ Template written".bold().green());
    println!("   14 base sheets + company-specific sheets\n");
    Ok(())
}

/// Execute `import`: run the pipeline headlessly and emit the normalized
/// calculation-API request body as JSON.
pub fn import(
    input: PathBuf,
    statements: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> LiftResult<()> {
    let kind = if statements {
        ImportKind::Statements
    } else {
        ImportKind::Business
    };

    println!("{}", "📥 Ledgerlift - Import".bold().green());
    println!("   Input: {}", input.display());
    println!(
        "   Kind:  {}\n",
        match kind {
            ImportKind::Statements => "financial statements",
            ImportKind::Business => "business data",
        }
    );

    let ingestor = WorkbookIngestor::new(UploadConfig::default());
    let workbook = ingestor.ingest_path(&input)?;

    if verbose {
        println!("{}", "📖 Parsed workbook".cyan());
        for sheet in &workbook.sheets {
            println!(
                "   📊 {} ({} data rows)",
                sheet.name.bright_blue(),
                sheet.rows.len()
            );
        }
        println!();
    }

    let body = match kind {
        ImportKind::Statements => {
            let statements = normalize_statements(&workbook);
            let assumptions = Assumptions::derive(&statements);
            if verbose {
                println!(
                    "   Income statement: {} line items over {} years",
                    statements.income_statement.line_items.len(),
                    statements.income_statement.years.len()
                );
                println!(
                    "   Revenue growth (CAGR): {}%\n",
                    assumptions.revenue_growth_rate
                );
            }
            serde_json::json!({
                "statements": statements,
                "assumptions": assumptions,
            })
        }
        ImportKind::Business => {
            let data = normalize_business(&workbook);
            if verbose {
                println!(
                    "   {} expense years, {} loan years, {} service years\n",
                    data.expenses.len(),
                    data.loans.len(),
                    data.services.len()
                );
            }
            serde_json::json!({ "businessData": data })
        }
    };

    let json = serde_json::to_string_pretty(&body)?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("{}", "✅ Import complete".bold().green());
            println!("   JSON written to {}\n", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Execute `inspect`: the preview step, headless.
pub fn inspect(input: PathBuf) -> LiftResult<()> {
    println!("{}", "🔎 Ledgerlift - Inspect".bold().green());
    println!("   Input: {}\n", input.display());

    let ingestor = WorkbookIngestor::new(UploadConfig::default());
    let workbook = ingestor.ingest_path(&input)?;

    for sheet in &workbook.sheets {
        println!("   📊 {}", sheet.name.bright_blue().bold());
        let columns: Vec<String> = sheet
            .header
            .iter()
            .map(crate::normalize::policy::cell_to_string)
            .filter(|s| !s.trim().is_empty())
            .collect();
        if columns.is_empty() {
            println!("      (no header row)");
        } else {
            println!("      Columns: {}", columns.join(" | "));
        }
        println!("      Data rows: {}", sheet.rows.len());
    }
    println!();

    Ok(())
}
