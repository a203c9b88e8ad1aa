//! Batch command - extract orders from multiple document text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use frex_core::order::{HeuristicOrderParser, OrderParser};

use super::process::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "documents/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory for per-document order JSON
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip documents rejected by the format gate instead of failing
    #[arg(long)]
    skip_unmatched: bool,

    /// Also write a summary JSON with per-file results
    #[arg(long)]
    summary: bool,
}

struct FileOutcome {
    path: PathBuf,
    reference: Option<String>,
    skipped: bool,
    warnings: usize,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let parser = HeuristicOrderParser::new().with_config(config);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut outcomes = Vec::new();
    for path in &files {
        pb.set_message(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("skipping unreadable file {}: {}", path.display(), e);
                pb.inc(1);
                continue;
            }
        };
        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        if !parser.matches_format(&lines) {
            if args.skip_unmatched {
                debug!("format gate rejected {}", path.display());
                outcomes.push(FileOutcome {
                    path: path.clone(),
                    reference: None,
                    skipped: true,
                    warnings: 0,
                });
                pb.inc(1);
                continue;
            }
            pb.finish_and_clear();
            anyhow::bail!(
                "{} does not look like a transport order (use --skip-unmatched)",
                path.display()
            );
        }

        let attachment = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let result = parser.parse(&lines, attachment.as_deref());

        if let Some(dir) = &args.output_dir {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("order");
            let out_path = dir.join(format!("{stem}.json"));
            fs::write(&out_path, serde_json::to_string_pretty(&result.order)?)?;
        }

        outcomes.push(FileOutcome {
            path: path.clone(),
            reference: Some(result.order.order_reference.clone()),
            skipped: false,
            warnings: result.warnings.len(),
        });
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    let processed = outcomes.iter().filter(|o| !o.skipped).count();
    let skipped = outcomes.len() - processed;
    println!(
        "{} Processed {} documents ({} skipped) in {:.1}s",
        style("✓").green(),
        processed,
        skipped,
        start.elapsed().as_secs_f64()
    );

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.json");
        let documents: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|o| {
                serde_json::json!({
                    "file": o.path.display().to_string(),
                    "order_reference": o.reference,
                    "skipped": o.skipped,
                    "warnings": o.warnings,
                })
            })
            .collect();
        let summary = serde_json::json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "documents": documents,
        });
        fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    Ok(())
}
