//! Workout Flux CLI
//!
//! Commands:
//! - demo: Print summaries for the built-in sample packages
//! - transform: Process packages from a file or stdin
//! - validate: Check packages without computing summaries
//! - codes: List supported activity codes

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use workout_flux::schema::{sample_packages, Package, PackageAdapter};
use workout_flux::types::{ActivityConstants, ActivityType, TrainingInfo};
use workout_flux::{SummaryEncoder, WorkoutError, WorkoutProcessor, FLUX_VERSION};

/// Workout Flux - derived metrics from workout sensor packages
#[derive(Parser)]
#[command(name = "workout-flux")]
#[command(author = "Synheart AI Inc")]
#[command(version = FLUX_VERSION)]
#[command(about = "Compute distance, speed and calories from sensor packages", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summaries for the built-in sample packages
    Demo,

    /// Process packages from a file or stdin
    Transform {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Skip failing packages instead of aborting the batch
        #[arg(long)]
        continue_on_error: bool,
    },

    /// Check packages without computing summaries
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported activity codes
    Codes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per package
    Text,
    /// JSON report
    Json,
    /// Pretty-printed JSON report
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn log_level(verbose: u8, quiet: u8) -> &'static str {
    match (i16::from(verbose) - i16::from(quiet)).clamp(-2, 2) {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = log_level(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,workout_flux={level}")));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), FluxCliError> {
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cmd_demo(),

        Commands::Transform {
            input,
            input_format,
            output_format,
            continue_on_error,
        } => cmd_transform(&input, input_format, output_format, continue_on_error),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Codes { json } => cmd_codes(json),
    }
}

fn cmd_demo() -> Result<(), FluxCliError> {
    let packages = sample_packages();
    debug!(count = packages.len(), "processing sample packages");

    let summaries = workout_flux::process_packages(&packages)?;
    print!("{}", SummaryEncoder::new().encode_text(&summaries));

    Ok(())
}

fn cmd_transform(
    input: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    continue_on_error: bool,
) -> Result<(), FluxCliError> {
    let packages = read_packages(input, &input_format)?;

    if packages.is_empty() {
        return Err(FluxCliError::NoPackages);
    }

    let results = WorkoutProcessor::new()
        .continue_on_error(continue_on_error)
        .process(&packages)?;

    let total = results.len();
    let summaries: Vec<TrainingInfo> = results.into_iter().filter_map(Result::ok).collect();
    info!(total, processed = summaries.len(), "transform complete");

    let encoder = SummaryEncoder::new();
    match output_format {
        OutputFormat::Text => print!("{}", encoder.encode_text(&summaries)),
        OutputFormat::Json => println!("{}", encoder.encode_to_json(&summaries, false)?),
        OutputFormat::JsonPretty => println!("{}", encoder.encode_to_json(&summaries, true)?),
    }

    let failed = total - summaries.len();
    if failed > 0 {
        Err(FluxCliError::PartialFailure(failed))
    } else {
        Ok(())
    }
}

fn cmd_validate(input: &Path, input_format: InputFormat, json: bool) -> Result<(), FluxCliError> {
    let packages = read_packages(input, &input_format)?;
    let results = PackageAdapter::validate_packages(&packages);

    let report = ValidationReport {
        total_packages: packages.len(),
        valid_packages: packages.len() - results.len(),
        invalid_packages: results.len(),
        errors: results
            .iter()
            .map(|r| ValidationErrorDetail {
                index: r.index,
                workout_type: r.workout_type.clone(),
                error: r.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total packages:   {}", report.total_packages);
        println!("Valid packages:   {}", report.valid_packages);
        println!("Invalid packages: {}", report.invalid_packages);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!(
                    "  - Package {} (index {}): {}",
                    err.workout_type, err.index, err.error
                );
            }
        }
    }

    if report.invalid_packages > 0 {
        Err(FluxCliError::ValidationFailed(report.invalid_packages))
    } else {
        Ok(())
    }
}

fn cmd_codes(json: bool) -> Result<(), FluxCliError> {
    let codes: Vec<CodeInfo> = ActivityType::ALL
        .iter()
        .map(|a| CodeInfo {
            code: a.code(),
            label: a.label(),
            fields: a.fields(),
            constants: a.constants(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        for c in &codes {
            println!("{}  {:<14} [{}]", c.code, c.label, c.fields.join(", "));
        }
    }

    Ok(())
}

// Helper functions

fn read_packages(input: &Path, input_format: &InputFormat) -> Result<Vec<Package>, FluxCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            info!("reading packages from interactive stdin, end input with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageAdapter::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageAdapter::parse_array(&input_data)?,
    };
    debug!(count = packages.len(), "parsed packages");

    Ok(packages)
}

// Error types

#[derive(Debug)]
enum FluxCliError {
    Io(io::Error),
    Workout(WorkoutError),
    Json(serde_json::Error),
    NoPackages,
    ValidationFailed(usize),
    PartialFailure(usize),
}

impl From<io::Error> for FluxCliError {
    fn from(e: io::Error) -> Self {
        FluxCliError::Io(e)
    }
}

impl From<WorkoutError> for FluxCliError {
    fn from(e: WorkoutError) -> Self {
        FluxCliError::Workout(e)
    }
}

impl From<serde_json::Error> for FluxCliError {
    fn from(e: serde_json::Error) -> Self {
        FluxCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<FluxCliError> for CliError {
    fn from(e: FluxCliError) -> Self {
        match e {
            FluxCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            FluxCliError::Workout(e) => {
                let (code, hint) = workout_error_code(&e);
                CliError {
                    code: code.to_string(),
                    message: e.to_string(),
                    hint: Some(hint.to_string()),
                }
            }
            FluxCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            FluxCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            FluxCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} packages failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
            FluxCliError::PartialFailure(count) => CliError {
                code: "PARTIAL_FAILURE".to_string(),
                message: format!("{} packages were skipped", count),
                hint: Some("Run 'workout-flux validate' for details".to_string()),
            },
        }
    }
}

fn workout_error_code(e: &WorkoutError) -> (&'static str, &'static str) {
    match e {
        WorkoutError::UnknownActivityType(_) => ("UNKNOWN_ACTIVITY_TYPE", "Run the codes command"),
        WorkoutError::ArityMismatch { .. } => ("ARITY_MISMATCH", "Run the codes command"),
        WorkoutError::InvalidDuration(_) => ("INVALID_READING", "Duration must be positive"),
        WorkoutError::InvalidReading { .. } => ("INVALID_READING", "Check the sensor readings"),
        WorkoutError::ParseError(_) => ("PARSE_ERROR", "Check the package format"),
        WorkoutError::JsonError(_) => ("PARSE_ERROR", "Check JSON syntax"),
        WorkoutError::EncodingError(_) => ("ENCODING_ERROR", "Retry with --output-format text"),
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_packages: usize,
    valid_packages: usize,
    invalid_packages: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    workout_type: String,
    error: String,
}

#[derive(serde::Serialize)]
struct CodeInfo {
    code: &'static str,
    label: &'static str,
    fields: &'static [&'static str],
    constants: &'static ActivityConstants,
}
