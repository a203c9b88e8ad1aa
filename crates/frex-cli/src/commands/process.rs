//! Process command - extract an order from a single document text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use frex_core::models::config::FrexConfig;
use frex_core::order::{HeuristicOrderParser, OrderParser, OrderSink};
use frex_core::{OrderRecord, SinkError};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input document text file (one line per extracted document line)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Attachment filename recorded on the order (default: input file name)
    #[arg(long)]
    attachment: Option<String>,

    /// Process the document even if the format gate rejects it
    #[arg(long)]
    force: bool,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// JSON submission sink: renders the record the way the downstream order
/// intake consumes it.
struct JsonSink;

impl OrderSink for JsonSink {
    fn submit(&self, order: &OrderRecord) -> Result<serde_json::Value, SinkError> {
        serde_json::to_value(order).map_err(|e| SinkError::Schema(e.to_string()))
    }
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = fs::read_to_string(&args.input)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    let parser = HeuristicOrderParser::new().with_config(config);

    if !parser.matches_format(&lines) && !args.force {
        anyhow::bail!(
            "{} does not look like a transport order (use --force to process anyway)",
            args.input.display()
        );
    }

    info!("Processing {}", args.input.display());

    let attachment = args.attachment.clone().or_else(|| {
        args.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });
    let result = parser.parse(&lines, attachment.as_deref());

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {warning}");
        }
    }

    let submitted = JsonSink.submit(&result.order)?;
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&submitted)?,
        OutputFormat::Text => format_order(&result.order),
    };

    if let Some(path) = &args.output {
        fs::write(path, &output)?;
        println!("{} Wrote {}", style("✓").green(), path.display());
    } else {
        println!("{output}");
    }

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<FrexConfig> {
    Ok(match config_path {
        Some(path) => FrexConfig::from_file(std::path::Path::new(path))?,
        None => FrexConfig::default(),
    })
}

fn format_order(order: &OrderRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Order reference: {}\n", order.order_reference));
    out.push_str(&format!("Customer:        {}\n", order.customer.details.company));
    for location in &order.loading_locations {
        out.push_str(&format!(
            "Loading:         {} ({} to {})\n",
            location.company_address.company,
            location.time.datetime_from.to_rfc3339(),
            location.time.datetime_to.to_rfc3339()
        ));
    }
    for location in &order.destination_locations {
        out.push_str(&format!(
            "Destination:     {} ({} to {})\n",
            location.company_address.company,
            location.time.datetime_from.to_rfc3339(),
            location.time.datetime_to.to_rfc3339()
        ));
    }
    out.push_str(&format!("Incoterms:       {}\n", order.incoterms));
    out.push_str(&format!("Cargo ({} row(s)):\n", order.cargos.len()));
    for cargo in &order.cargos {
        out.push_str(&format!(
            "  {} x{} {} ({} kg)\n",
            cargo.title, cargo.package_count, cargo.package_type, cargo.weight
        ));
    }
    out
}
