//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::markdown_report::MarkdownReportAdapter;
use crate::domain::analysis::{AnalysisReport, AnalysisRequest, run_analysis};
use crate::domain::config_validation::validate_config;
use crate::domain::draw::{DrawDataset, parse_draw_date};
use crate::domain::error::RuotaError;
use crate::domain::scorer::{
    DELAY_WEIGHT, FREQUENCY_WEIGHT, RECENT_DRAW_LIMIT, RECENT_WINDOW_DAYS, REPETITION_WEIGHT,
    ScoringConfig,
};
use crate::domain::suggester::{DEFAULT_PLAY_COUNT, PlayCount};
use crate::domain::wheel::Wheel;
use crate::logging;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DrawSource;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "ruota", about = "Score lottery wheels against a seed draw")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Csv,
}

impl ReportFormat {
    fn from_config(config: &dyn ConfigPort) -> Self {
        match config.get_non_empty("report", "format") {
            Some(f) if f.eq_ignore_ascii_case("csv") => ReportFormat::Csv,
            _ => ReportFormat::Markdown,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AnalyzeOverrides {
    /// Wheel whose draw provides the seed numbers
    #[arg(short, long)]
    pub wheel: Option<String>,
    /// Draw date (YYYY-MM-DD); defaults to the newest draw
    #[arg(long)]
    pub date: Option<String>,
    /// Reference date for delays; defaults to the newest draw
    #[arg(long)]
    pub as_of: Option<String>,
    /// How many numbers to suggest (5-15)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Draw archive CSV
    #[arg(short, long)]
    pub data: Option<PathBuf>,
    /// INI configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Preamble lines before the CSV header
    #[arg(long)]
    pub skip_rows: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank wheels and suggest numbers for a seed draw
    Analyze {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        overrides: AnalyzeOverrides,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// Show the numbers drawn on a date
    Draws {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long)]
        date: String,
        #[arg(short, long)]
        wheel: Option<String>,
    },
    /// Show record count and date range of a draw archive
    Info {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    logging::init_cli_logger(cli.verbose);
    match cli.command {
        Command::Analyze {
            data,
            overrides,
            output,
            format,
        } => run_analyze(&data, &overrides, output.as_deref(), format),
        Command::Draws { data, date, wheel } => run_draws(&data, &date, wheel.as_deref()),
        Command::Info { data } => run_info(&data),
        Command::Validate { config } => run_validate(&config),
    }
}

fn report_error(err: &RuotaError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(err)
}

pub fn load_config(path: Option<&Path>) -> Result<FileConfigAdapter, RuotaError> {
    match path {
        Some(p) => {
            tracing::info!("Loading config from {}", p.display());
            FileConfigAdapter::from_file(p)
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

/// Builds the CSV source from CLI flags, falling back to `[analysis]` keys.
pub fn build_draw_source(args: &DataArgs, config: &dyn ConfigPort) -> Result<CsvAdapter, RuotaError> {
    let path = match &args.data {
        Some(p) => p.clone(),
        None => config
            .get_non_empty("analysis", "data_path")
            .map(PathBuf::from)
            .ok_or_else(|| RuotaError::ConfigMissing {
                section: "analysis".into(),
                key: "data_path".into(),
            })?,
    };
    let skip_rows = match args.skip_rows {
        Some(n) => n,
        None => usize::try_from(config.get_int("analysis", "skip_rows", 0)).map_err(|_| {
            RuotaError::ConfigInvalid {
                section: "analysis".into(),
                key: "skip_rows".into(),
                reason: "skip_rows must be a non-negative integer".into(),
            }
        })?,
    };
    Ok(CsvAdapter::new(path).with_skip_rows(skip_rows))
}

pub fn build_scoring_config(config: &dyn ConfigPort) -> ScoringConfig {
    ScoringConfig {
        frequency_weight: config.get_double("scoring", "frequency_weight", FREQUENCY_WEIGHT),
        delay_weight: config.get_double("scoring", "delay_weight", DELAY_WEIGHT),
        repetition_weight: config.get_double("scoring", "repetition_weight", REPETITION_WEIGHT),
        recent_window_days: config.get_int("scoring", "recent_window_days", RECENT_WINDOW_DAYS),
        recent_draw_limit: config
            .get_int("scoring", "recent_draws", RECENT_DRAW_LIMIT as i64)
            .max(0) as usize,
    }
}

fn parse_date_setting(value: &str, key: &str) -> Result<NaiveDate, RuotaError> {
    parse_draw_date(value).ok_or_else(|| RuotaError::ConfigInvalid {
        section: "analysis".into(),
        key: key.into(),
        reason: format!("invalid {} format, expected YYYY-MM-DD", key),
    })
}

/// Merges CLI overrides, `[analysis]`/`[scoring]` config and dataset defaults.
pub fn build_analysis_request(
    config: &dyn ConfigPort,
    overrides: &AnalyzeOverrides,
    dataset: &DrawDataset,
) -> Result<AnalysisRequest, RuotaError> {
    let seed_wheel = match overrides
        .wheel
        .clone()
        .or_else(|| config.get_non_empty("analysis", "wheel"))
    {
        Some(name) => name.parse::<Wheel>()?,
        None => Wheel::ALL[0],
    };

    let draw_date = match overrides
        .date
        .clone()
        .or_else(|| config.get_non_empty("analysis", "date"))
    {
        Some(value) => parse_date_setting(&value, "date")?,
        None => dataset.last_date().ok_or_else(|| RuotaError::ConfigMissing {
            section: "analysis".into(),
            key: "date".into(),
        })?,
    };

    let as_of = overrides
        .as_of
        .clone()
        .or_else(|| config.get_non_empty("analysis", "as_of"))
        .map(|value| parse_date_setting(&value, "as_of"))
        .transpose()?;

    let count = match overrides.count {
        Some(n) => n,
        None => usize::try_from(config.get_int("analysis", "count", DEFAULT_PLAY_COUNT as i64))
            .unwrap_or(0),
    };

    Ok(AnalysisRequest {
        seed_wheel,
        draw_date,
        play_count: PlayCount::new(count)?,
        scoring: build_scoring_config(config),
        as_of,
    })
}

fn run_analyze(
    data: &DataArgs,
    overrides: &AnalyzeOverrides,
    output: Option<&Path>,
    format: Option<ReportFormat>,
) -> ExitCode {
    let config = match load_config(data.config.as_deref()) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    if let Err(e) = validate_config(&config) {
        return report_error(&e);
    }
    let source = match build_draw_source(data, &config) {
        Ok(s) => s,
        Err(e) => return report_error(&e),
    };
    let format = format.unwrap_or_else(|| ReportFormat::from_config(&config));
    let template = config.get_non_empty("report", "template_path").map(PathBuf::from);

    run_analysis_pipeline(&source, &config, overrides, output, format, template)
}

/// Load → request → analysis → console summary → report.
pub fn run_analysis_pipeline(
    source: &dyn DrawSource,
    config: &dyn ConfigPort,
    overrides: &AnalyzeOverrides,
    output: Option<&Path>,
    format: ReportFormat,
    template: Option<PathBuf>,
) -> ExitCode {
    let dataset = match source.load_draws() {
        Ok(d) => d,
        Err(e) => return report_error(&e),
    };

    let request = match build_analysis_request(config, overrides, &dataset) {
        Ok(r) => r,
        Err(e) => return report_error(&e),
    };

    let report = run_analysis(&dataset, &request);
    print_summary(&report);

    if report.is_empty() {
        return ExitCode::SUCCESS;
    }

    let reporter: Box<dyn ReportPort> = match (format, template) {
        (ReportFormat::Csv, _) => Box::new(CsvReportAdapter::new()),
        (ReportFormat::Markdown, Some(path)) => Box::new(MarkdownReportAdapter::with_template(path)),
        (ReportFormat::Markdown, None) => Box::new(MarkdownReportAdapter::new()),
    };

    match output {
        Some(path) => match reporter.write(&report, path) {
            Ok(()) => {
                eprintln!("\nReport written to: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => report_error(&e),
        },
        None => match reporter.render(&report) {
            Ok(content) => {
                println!("{content}");
                ExitCode::SUCCESS
            }
            Err(e) => report_error(&e),
        },
    }
}

fn print_summary(report: &AnalysisReport) {
    if report.is_empty() {
        eprintln!(
            "No {} draw on {}: nothing to analyse",
            report.seed_wheel, report.draw_date
        );
        return;
    }

    eprintln!("=== Analysis ===");
    eprintln!("Seed draw:       {} {}", report.seed_wheel, report.draw_date);
    eprintln!("Drawn numbers:   {}", report.group.direct);
    eprintln!("Analysis set:    {}", report.analysis_set);
    eprintln!("As of:           {}", report.as_of);

    eprintln!("\n=== Wheel Ranking ===");
    for (i, stat) in report.ranking.iter().enumerate() {
        eprintln!(
            "  {:>2}. {:<10} freq {:>4}  delay {:>6.1}  recent {:>3}  score {:>8.2}",
            i + 1,
            stat.wheel.name(),
            stat.frequency,
            stat.rounded_average_delay(),
            stat.recent_repetitions,
            stat.score
        );
    }

    if let Some(best) = report.best_wheel {
        let picked = report
            .suggestions
            .iter()
            .map(|s| s.number.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("\nBest wheel:      {}", best);
        eprintln!("Suggested:       {}", picked);
    }
}

fn run_draws(data: &DataArgs, date: &str, wheel: Option<&str>) -> ExitCode {
    let config = match load_config(data.config.as_deref()) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    let date = match parse_date_setting(date, "date") {
        Ok(d) => d,
        Err(e) => return report_error(&e),
    };
    let wheels: Vec<Wheel> = match wheel {
        Some(name) => match name.parse::<Wheel>() {
            Ok(w) => vec![w],
            Err(e) => return report_error(&e),
        },
        None => Wheel::ALL.to_vec(),
    };
    let dataset = match build_draw_source(data, &config).and_then(|s| s.load_draws()) {
        Ok(d) => d,
        Err(e) => return report_error(&e),
    };

    if dataset.record_on(date).is_none() {
        eprintln!("No draw on {}", date);
        return ExitCode::SUCCESS;
    }
    for wheel in wheels {
        let drawn = dataset.numbers_drawn(date, wheel);
        if drawn.is_empty() {
            println!("{:<10} -", wheel.name());
        } else {
            println!("{:<10} {}", wheel.name(), drawn);
        }
    }
    ExitCode::SUCCESS
}

fn run_info(data: &DataArgs) -> ExitCode {
    let config = match load_config(data.config.as_deref()) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    let source = match build_draw_source(data, &config) {
        Ok(s) => s,
        Err(e) => return report_error(&e),
    };
    let dataset = match source.load_draws() {
        Ok(d) => d,
        Err(e) => return report_error(&e),
    };

    match (dataset.first_date(), dataset.last_date()) {
        (Some(first), Some(last)) => {
            println!(
                "{}: {} draws, {} to {}",
                source.describe(),
                dataset.len(),
                first,
                last
            );
            for wheel in Wheel::ALL {
                let drawn = dataset
                    .records()
                    .iter()
                    .filter(|r| r.has_draw(wheel))
                    .count();
                println!("  {:<10} {} draws", wheel.name(), drawn);
            }
        }
        _ => eprintln!("{}: no draws found", source.describe()),
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(Some(config_path)) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    match validate_config(&config) {
        Ok(()) => {
            let scoring = build_scoring_config(&config);
            eprintln!(
                "Scoring: frequency x{} + delay x{} + repetitions x{} (last {} draws within {} days)",
                scoring.frequency_weight,
                scoring.delay_weight,
                scoring.repetition_weight,
                scoring.recent_draw_limit,
                scoring.recent_window_days
            );
            eprintln!("\nConfiguration is valid.");
            ExitCode::SUCCESS
        }
        Err(e) => report_error(&e),
    }
}
