use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use skk_analysis::input::discover_batch_inputs;
use skk_analysis::SkkAnalyzer;
use skk_core::config::{CliOverrides, SkkConfig};
use skk_core::errors::{ConfigError, InputError, PipelineError, SkkErrorCode, StorageError};
use skk_core::types::AnalysisReport;
use skk_storage::ReportStore;
use tracing::info;

#[derive(Parser)]
#[command(name = "skk")]
#[command(about = "SKK - aggregate lexical markers into attractors, anchors and syntheses", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file, or a directory together with --batch
    input: PathBuf,

    /// Configuration file (TOML). Defaults to ./skk.toml when present
    #[arg(short, long, env = "SKK_CONFIG")]
    config: Option<PathBuf>,

    /// Analyze every matching file in the input directory
    #[arg(short, long)]
    batch: bool,

    /// Root directory for persisted reports and structures
    #[arg(short, long)]
    output_dir: Option<String>,

    /// What to print on stdout
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Analyze without writing any files
    #[arg(long)]
    no_persist: bool,

    /// Words per chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Aggregate score at which a cluster is flagged as runaway
    #[arg(long)]
    hyperfocus_threshold: Option<f64>,

    /// Rigidity at which an anchor is flagged as too rigid
    #[arg(long)]
    rigidity_warning: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn main() -> ExitCode {
    skk_core::tracing::init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let working_dir = std::env::current_dir().context("cannot determine working directory")?;
    let overrides = CliOverrides {
        chunk_size: cli.chunk_size,
        hyperfocus_threshold: cli.hyperfocus_threshold,
        rigidity_warning: cli.rigidity_warning,
        output_directory: cli.output_dir.clone(),
    };
    let config = SkkConfig::load(&working_dir, cli.config.as_deref(), Some(&overrides))?;
    let analyzer = SkkAnalyzer::new(&config)?;
    let store = ReportStore::from_config(&config.output);

    let inputs = if cli.batch {
        discover_batch_inputs(&cli.input, &config.batch.effective_patterns())?
    } else {
        vec![cli.input.clone()]
    };
    info!(count = inputs.len(), "inputs resolved");

    for input in &inputs {
        if cli.batch {
            eprintln!("Analysiere: {}", input.display());
        }
        let report = analyzer.analyze_file(input)?;
        print_report(&report, cli.format)?;

        if !cli.no_persist {
            let persisted = store.persist(&report)?;
            eprintln!("SKK-Analyse abgeschlossen: {}", persisted.report_path.display());
        }
    }
    Ok(())
}

fn print_report(report: &AnalysisReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", report.narrative);
            println!(
                "Flügel: {} | Strudel: {} | Knoten: {} | Kristalle: {} | Hyperfokus: {} | Rigide: {}",
                report.counts.occurrences,
                report.counts.clusters,
                report.counts.anchors,
                report.counts.syntheses,
                report.warnings.runaway_clusters,
                report.warnings.rigid_anchors,
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("cannot render report as JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(report).context("cannot render report as YAML")?;
            print!("{yaml}");
        }
    }
    Ok(())
}

/// Persistence failures exit with 2, everything else with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<StorageError>().is_some() {
        2
    } else {
        1
    }
}

fn describe(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<PipelineError>() {
        e.tagged()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.tagged()
    } else if let Some(e) = err.downcast_ref::<InputError>() {
        e.tagged()
    } else if let Some(e) = err.downcast_ref::<StorageError>() {
        e.tagged()
    } else {
        format!("{err:#}")
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn parses_batch_invocation() {
        let cli = Cli::try_parse_from([
            "skk",
            "texte",
            "--batch",
            "--config",
            "skk.toml",
            "--format",
            "json",
            "--chunk-size",
            "25",
        ])
        .unwrap();
        assert!(cli.batch);
        assert_eq!(cli.input, Path::new("texte"));
        assert_eq!(cli.config.as_deref(), Some(Path::new("skk.toml")));
        assert_eq!(cli.chunk_size, Some(25));
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn storage_failures_get_their_own_exit_code() {
        let storage = anyhow::Error::new(StorageError::Write {
            path: "x".to_string(),
            message: "denied".to_string(),
        });
        assert_eq!(exit_code(&storage), 2);
        assert!(describe(&storage).starts_with("[STORAGE_ERROR]"));

        let input = anyhow::Error::new(PipelineError::from(InputError::NotFound {
            path: "x".to_string(),
        }));
        assert_eq!(exit_code(&input), 1);
        assert!(describe(&input).starts_with("[INPUT_ERROR]"));
    }
}
