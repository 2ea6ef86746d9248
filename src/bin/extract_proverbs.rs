//! Extract Proverbs
//!
//! Segments and tags every proverb found in the given PDFs (or text files) and
//! writes a spreadsheet report. Directories are searched recursively for PDFs.
//!
//! Usage:
//!   cargo run --release --bin extract_proverbs -- pdfs/
//!   cargo run --release --bin extract_proverbs -- a.pdf b.pdf --format csv --output-dir out
//!   RUST_LOG=debug cargo run --bin extract_proverbs -- pdfs/ --json batch.json

use clap::Parser;
use proverb_tagger::config::{ExtractionConfig, ReportFormat, DEFAULT_OUTPUT_FILENAME};
use proverb_tagger::converters::write_report;
use proverb_tagger::extractors::{discover_pdfs, AutoExtractor};
use proverb_tagger::pipeline::{BatchResult, ProverbPipeline};
use proverb_tagger::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "extract_proverbs",
    version,
    about = "Extract Romanian proverbs from PDFs, tag parts of speech and write a report."
)]
struct Cli {
    /// PDF or text files, or directories to search for PDFs
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the report is written into
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Report base name, without extension
    #[arg(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    output_name: String,

    /// Report format: xlsx or csv
    #[arg(long, default_value = "xlsx")]
    format: ReportFormat,

    /// Page number used when a filename carries none
    #[arg(long, default_value = "N/A")]
    default_page: String,

    /// Leave out the category legend sheet
    #[arg(long)]
    no_code_sheet: bool,

    /// Leave out the statistics sheet
    #[arg(long)]
    no_stats_sheet: bool,

    /// Also dump the whole batch as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ExtractionConfig {
        ExtractionConfig::new()
            .with_default_page(self.default_page.as_str())
            .with_output_dir(self.output_dir.clone())
            .with_output_filename(self.output_name.as_str())
            .with_format(self.format)
            .with_code_sheet(!self.no_code_sheet)
            .with_statistics_sheet(!self.no_stats_sheet)
    }

    /// Expand directories into the PDFs below them.
    fn input_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in &self.inputs {
            if input.is_dir() {
                files.extend(discover_pdfs(input)?);
            } else {
                files.push(input.clone());
            }
        }
        Ok(files)
    }
}

fn print_summary(batch: &BatchResult, report_path: &std::path::Path, elapsed: std::time::Duration) {
    let stats = batch.statistics();

    println!("\n{}", "=".repeat(70));
    println!("Extraction Complete");
    println!("{}", "=".repeat(70));
    println!("Files processed: {}", stats.total_files);
    println!("Proverbs:        {}", stats.total_proverbs);
    println!("Average length:  {:.2}", stats.average_length);
    for (category, count) in stats.legend_distribution() {
        println!("  {:<28} {}", category.label(), count);
    }
    if !batch.skipped.is_empty() {
        println!("Skipped:         {}", batch.skipped.len());
        for skipped in &batch.skipped {
            println!("  ✗ {}: {}", skipped.path.display(), skipped.reason);
        }
    }
    println!("Time:            {:?}", elapsed);
    println!("Report:          {}", report_path.display());
    println!("{}", "=".repeat(70));
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let files = cli.input_files()?;
    if files.is_empty() {
        eprintln!("No input files found");
        return Ok(());
    }
    println!("Processing {} files", files.len());

    let start = Instant::now();
    let pipeline = ProverbPipeline::with_config(&config);
    let batch = pipeline.process_files(&files, &AutoExtractor::new());
    let report_path = write_report(&batch.report, &config)?;

    if let Some(json_path) = &cli.json {
        let writer = BufWriter::new(File::create(json_path)?);
        serde_json::to_writer_pretty(writer, &batch)?;
        log::info!("Wrote batch JSON to {}", json_path.display());
    }

    print_summary(&batch, &report_path, start.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
