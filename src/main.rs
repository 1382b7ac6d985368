//! @ai:module:intent CLI for the translation benchmark analyzer
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use transbench::{
    config::AnalyzerConfig,
    dataset::{find_latest_csv, CsvDatasetReader, DatasetReaderTrait},
    metrics::{AnalysisResults, FailureDetector, StatsAggregator, StatsAggregatorTrait},
    report::ReportGenerator,
    scoring::{score_translations, BleuScorer},
};

#[derive(Parser)]
#[command(name = "transbench")]
#[command(about = "Translation benchmark analyzer: BLEU scores and per-model performance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a translation results CSV
    Analyze {
        /// Results CSV (defaults to the latest CSV in the configured data directory)
        file: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured reference model
        #[arg(long)]
        reference_model: Option<String>,

        /// Output directory for reports
        #[arg(short, long, default_value = "results")]
        output: PathBuf,

        /// Print the console summary without writing report files
        #[arg(long)]
        no_reports: bool,
    },

    /// Show reference/candidate/latency columns discovered in a CSV
    Columns {
        /// Results CSV to inspect
        file: PathBuf,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Re-render reports from a saved analysis.json
    Report {
        /// Path to analysis JSON file
        #[arg(short, long)]
        results: PathBuf,

        /// Output directory for reports
        #[arg(short, long, default_value = "reports")]
        output: PathBuf,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "transbench.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("transbench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            config,
            reference_model,
            output,
            no_reports,
        } => analyze(file, config, reference_model, output, no_reports),
        Commands::Columns { file, config } => show_columns(file, config),
        Commands::Report { results, output } => generate_reports(results, output),
        Commands::Init { output } => init_config(output),
    }
}

/// @ai:intent Run the full analysis pipeline on one CSV
/// @ai:effects fs:read, fs:write
fn analyze(
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    reference_model: Option<String>,
    output: PathBuf,
    no_reports: bool,
) -> Result<()> {
    let mut config = load_or_default_config(config_path)?;

    if let Some(reference) = reference_model {
        config.input.reference_model = reference;
    }

    let input_file = match file {
        Some(path) => path,
        None => find_latest_csv(&config.paths.data_dir).with_context(|| {
            format!(
                "no CSV files found under {}; pass a file argument",
                config.paths.data_dir.display()
            )
        })?,
    };

    tracing::info!("Analyzing {}", input_file.display());

    let reader = CsvDatasetReader::new(config.input.clone());
    let set = reader.read(&input_file)?;

    tracing::info!(
        "Found {} models across {} rows (reference: {})",
        set.models.len(),
        set.rows.len(),
        set.reference_model
    );

    let scorer = BleuScorer::new();
    let detector = FailureDetector::new(config.failure.sentinels.clone());
    let records = score_translations(&set, &scorer, &detector);

    let aggregator = StatsAggregator::new();
    let results = aggregator.aggregate(
        &records,
        &input_file.display().to_string(),
        &set.reference_model,
    );

    if !no_reports {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S");
        let output_dir = output.join(timestamp.to_string());
        ReportGenerator::new().generate_all(&results, &output_dir)?;
    }

    print_summary(&results);

    Ok(())
}

/// @ai:intent Show discovered columns for a CSV without scoring it
/// @ai:effects fs:read
fn show_columns(file: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config_path)?;

    let mut csv_reader = csv::Reader::from_path(&file)
        .with_context(|| format!("failed to open {}", file.display()))?;
    let headers = csv_reader.headers()?.clone();

    let reader = CsvDatasetReader::new(config.input.clone());
    let models = reader.discover_models(&headers);

    println!("Columns in {}:", file.display());
    println!();
    println!(
        "Reference column: {}",
        config.input.candidate_column(&config.input.reference_model)
    );
    println!();
    println!("{:<25} {:<35} {}", "Model", "Candidate column", "Latency column");
    println!("{}", "-".repeat(85));

    for model in &models {
        let latency_column = config.input.latency_column(model);
        let has_latency = headers.iter().any(|h| h == latency_column);

        println!(
            "{:<25} {:<35} {}",
            model,
            config.input.candidate_column(model),
            if has_latency {
                latency_column
            } else {
                "(missing)".to_string()
            }
        );
    }

    Ok(())
}

/// @ai:intent Generate reports from a saved results file
/// @ai:effects fs:read, fs:write
fn generate_reports(results_path: PathBuf, output_dir: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&results_path)?;
    let results: AnalysisResults = serde_json::from_str(&content)?;

    ReportGenerator::new().generate_all(&results, &output_dir)?;

    println!("Reports generated in {}", output_dir.display());
    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = AnalyzerConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<AnalyzerConfig> {
    match path {
        Some(p) => AnalyzerConfig::load(&p),
        None => {
            let default_path = PathBuf::from("transbench.toml");

            if default_path.exists() {
                AnalyzerConfig::load(&default_path)
            } else {
                Ok(AnalyzerConfig::default())
            }
        }
    }
}

/// @ai:intent Print summary to console
/// @ai:effects io
fn print_summary(results: &AnalysisResults) {
    println!();
    println!("Translation Benchmark Results");
    println!("=============================");
    println!();
    println!(
        "{:<25} {:>8} {:>10} {:>9} {:>11}  {}",
        "Model", "BLEU", "Latency", "Success%", "Efficiency", "Status"
    );
    println!("{}", "-".repeat(78));

    for summary in &results.ranking {
        println!(
            "{:<25} {:>8.4} {:>8.0}ms {:>8.1}% {:>11.4}  {}",
            summary.name,
            summary.stats.avg_bleu,
            summary.stats.avg_latency_ms,
            summary.stats.success_rate_pct,
            summary.stats.efficiency,
            summary.status.as_str()
        );
    }

    println!();
    println!("Performance Categories");
    println!("----------------------");

    println!("Fully working: {} models", results.working.len());
    for entry in &results.working {
        println!("  {}. {}: {:.0}ms", entry.rank, entry.name, entry.avg_latency_ms);
    }

    println!("Partially working: {} models", results.partial.len());
    for entry in &results.partial {
        println!("  - {}: {} failures", entry.name, entry.failures);
    }

    println!("Failed: {} models", results.failed.len());
    for name in &results.failed {
        println!("  - {}: no successful translations", name);
    }

    println!();
    println!("Overall Assessment");
    println!("------------------");
    println!(
        "Operational rate: {:.1}% ({}/{})",
        results.overall.operational_rate_pct,
        results.working.len(),
        results.overall.model_count
    );

    if let Some(fastest) = &results.overall.fastest {
        println!("Fastest: {} ({:.0}ms)", fastest.name, fastest.avg_latency_ms);
    }

    if let Some(slowest) = &results.overall.slowest {
        println!("Slowest: {} ({:.0}ms)", slowest.name, slowest.avg_latency_ms);
    }

    if !results.working.is_empty() {
        println!(
            "Average latency: {:.0}ms",
            results.overall.avg_working_latency_ms
        );
    }

    println!();
}
