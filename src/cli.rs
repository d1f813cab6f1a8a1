//! CLI definitions and entry point

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use stringcalc::Calculator;
use stringcalc::config::CalcConfig;
use stringcalc::output::{ErrorReport, OutputMode, SumResult};

/// stringcalc - Sum delimited integer strings
#[derive(Parser, Debug)]
#[command(
    name = "stringcalc",
    version,
    about = "Sum delimited integer strings",
    long_about = "Sum a list of integers separated by commas or newlines.\n\n\
                  Start the input with //<delimiter>\\n to use another delimiter.\n\
                  Negative numbers are rejected and all of them are reported."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sum the numbers in INPUT (reads stdin when omitted or "-")
    Add {
        /// Delimited numbers, e.g. "1,2" or "//;\n1;2"
        input: Option<String>,

        /// Do not interpret "\n" in INPUT as a newline
        #[arg(long)]
        raw: bool,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = match &cli.config {
        Some(path) => CalcConfig::load_from(path)?,
        None => CalcConfig::load(),
    };
    let output_mode = OutputMode::from_flags(cli.json, config.output.json);

    match cli.command {
        Some(Command::Add { input, raw }) => add(input, raw, &config, output_mode),
        Some(Command::Config) => {
            let path = cli.config.unwrap_or_else(CalcConfig::config_path);
            show_config(&path, &config, output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("stringcalc v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("stringcalc v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'stringcalc --help' for usage");
                println!("Run 'stringcalc add \"1,2,3\"' to sum some numbers");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn add(
    input: Option<String>,
    raw: bool,
    config: &CalcConfig,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let calculator = Calculator::from_config(config).context("invalid calculator config")?;

    let input = match input.as_deref() {
        None | Some("-") => read_stdin()?,
        Some(arg) if raw => arg.to_string(),
        Some(arg) => unescape_newlines(arg),
    };

    match calculator.add(&input) {
        Ok(sum) => {
            SumResult { input, sum }.render(mode);
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            log::debug!("add failed: {err:?}");
            ErrorReport::from(&err).render(mode);
            Ok(ExitCode::FAILURE)
        },
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
    Ok(buf)
}

/// Shells don't pass `\n` through as a newline, so accept the escape
fn unescape_newlines(arg: &str) -> String {
    arg.replace("\\n", "\n")
}

fn show_config(path: &Path, config: &CalcConfig, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
                "config": config,
            })
        );
    } else {
        let state = if path.exists() { "" } else { " (not found, using defaults)" };
        println!("# {}{state}", path.display());
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
