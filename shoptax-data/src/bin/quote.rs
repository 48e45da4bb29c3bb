use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use shoptax_core::format::{format_currency, tax_summary_text};
use shoptax_core::{SalesTaxCalculator, TaxCalculationInput};
use shoptax_data::{ExemptCustomerImport, SettingsLoader};
use tracing_subscriber::EnvFilter;

/// Price a quote with a tenant's tax settings.
///
/// Reads a tax settings JSON document (the same payload shape the hosted
/// settings endpoint serves), applies it to the given labor and parts
/// subtotals, and prints the taxed totals plus the summary line shown on
/// quotes and invoices.
#[derive(Parser, Debug)]
#[command(name = "shoptax-quote")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the tenant's tax settings JSON document
    #[arg(short, long)]
    settings: PathBuf,

    /// Labor subtotal before tax
    #[arg(short, long)]
    labor: Decimal,

    /// Parts subtotal before tax
    #[arg(short, long)]
    parts: Decimal,

    /// Customer id to check against the tenant's exemption list
    #[arg(short, long)]
    customer: Option<String>,

    /// Treat the customer as tax exempt regardless of the exemption list
    #[arg(long, default_value_t = false)]
    tax_exempt: bool,

    /// CSV of exempt customers to merge into the settings before pricing
    #[arg(short, long)]
    exemptions: Option<PathBuf>,

    /// Emit the full calculation result as JSON instead of readable lines
    #[arg(long)]
    json: bool,
}

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set and falls back to `info`. Timestamps and
/// target names are stripped so quote output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let file = File::open(&args.settings)
        .with_context(|| format!("Failed to open: {}", args.settings.display()))?;
    let mut settings = SettingsLoader::parse(file)
        .with_context(|| format!("Failed to load settings: {}", args.settings.display()))?;

    if let Some(exemptions_path) = &args.exemptions {
        let file = File::open(exemptions_path)
            .with_context(|| format!("Failed to open: {}", exemptions_path.display()))?;
        let records = ExemptCustomerImport::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", exemptions_path.display()))?;
        let appended = ExemptCustomerImport::merge_into(&mut settings, &records);

        println!(
            "Merged {} exempt customers from: {}",
            appended,
            exemptions_path.display()
        );
    }

    let input = TaxCalculationInput {
        labor_amount: args.labor,
        parts_amount: args.parts,
        customer_tax_exempt: if args.tax_exempt { Some(true) } else { None },
        customer_exemption_id: args.customer,
    };

    let calculator = SalesTaxCalculator::new(&settings);
    let result = calculator.calculate(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Labor tax:   {}", format_currency(result.labor_tax));
        println!("Parts tax:   {}", format_currency(result.parts_tax));
        println!("Total tax:   {}", format_currency(result.total_tax));
        println!("Labor total: {}", format_currency(result.labor_total));
        println!("Parts total: {}", format_currency(result.parts_total));
        println!("Grand total: {}", format_currency(result.grand_total));
        println!();
        println!("{}", tax_summary_text(&result));
    }

    Ok(())
}
