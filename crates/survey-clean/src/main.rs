use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use survey_core::{run, CleaningConfig, CleaningError, CleaningSummary, RiskScheme};
use survey_parser::ParserError;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const TOP_COUNTRIES: usize = 10;

#[derive(Parser, Debug)]
#[command(author, version, about = "Clean the social-media usage survey export", long_about = None)]
struct Cli {
    /// Raw survey CSV export
    #[arg(long)]
    input: Option<PathBuf>,
    /// Destination for the cleaned CSV
    #[arg(long)]
    output: Option<PathBuf>,
    /// TOML file with paths, risk scheme and country rules
    #[arg(long)]
    config: Option<PathBuf>,
    /// How the six risk indicators are scored
    #[arg(long, value_enum)]
    risk_scheme: Option<RiskSchemeArg>,
    /// Also write the run summary as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RiskSchemeArg {
    /// Frequency answers weighted 0 / 0.25 / 0.5 / 1
    Weighted,
    /// Yes/no answers counted 0 or 1
    Boolean,
}

impl From<RiskSchemeArg> for RiskScheme {
    fn from(arg: RiskSchemeArg) -> Self {
        match arg {
            RiskSchemeArg::Weighted => RiskScheme::Weighted,
            RiskSchemeArg::Boolean => RiskScheme::Boolean,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        scheme = %config.risk_scheme,
        "starting cleaning run"
    );

    let output = run(&config)?;

    println!("Cleaned file written to {}", config.output_path.display());
    println!("{}", render_summary(&output.summary));

    if let Some(path) = &cli.summary_json {
        output
            .summary
            .write_json(path)
            .with_context(|| format!("failed to write summary JSON to {}", path.display()))?;
        info!(path = %path.display(), "wrote run summary");
    }

    Ok(())
}

/// Config file values first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<CleaningConfig> {
    let mut config = match &cli.config {
        Some(path) => CleaningConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CleaningConfig::default(),
    };

    if let Some(input) = &cli.input {
        config.input_path = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if let Some(scheme) = cli.risk_scheme {
        config.risk_scheme = scheme.into();
    }

    Ok(config)
}

fn render_summary(summary: &CleaningSummary) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Country", "Responses"]);
    for entry in summary.top_countries(TOP_COUNTRIES) {
        table.add_row(vec![
            Cell::new(&entry.country),
            Cell::new(entry.responses).set_alignment(CellAlignment::Right),
        ]);
    }

    let mean = summary
        .mean_risk_score
        .map(|score| format!("{score:.1}"))
        .unwrap_or_else(|| "n/a".to_string());

    let mut lines = vec![format!(
        "{} rows, {} columns, {} risk scheme, mean risk score {}",
        summary.row_count, summary.column_count, summary.risk_scheme, mean
    )];
    if !summary.schema.absent.is_empty() {
        lines.push(format!(
            "Columns missing from the export: {}",
            summary.schema.absent.join(", ")
        ));
    }
    lines.push(format!("Countries (top {TOP_COUNTRIES}):"));
    lines.push(table.to_string());
    lines.join("\n")
}

fn report_failure(err: &anyhow::Error) {
    error!("{err:#}");

    let missing = err.chain().find_map(|cause| match cause.downcast_ref::<CleaningError>() {
        Some(CleaningError::Parser(ParserError::MissingFile { path })) => Some(path.clone()),
        _ => None,
    });

    match missing {
        Some(path) => {
            eprintln!("Error: input file not found: {}", path.display());
            eprintln!("  1. Check that the export sits in data/raw/");
            eprintln!("  2. Check that it is named Usage_des_reseaux_sociaux.csv");
            eprintln!("  3. Or point --input at the file");
        }
        None => eprintln!("Error: {err:#}"),
    }
}
