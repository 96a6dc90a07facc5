//! Finsheet - An editable financial statement on the command line

mod config;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use finsheet_core::storage::{render_markdown, to_json, write_json, write_markdown};
use finsheet_core::{Command, CommandOutcome, EditOutcome, Statement};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "finsheet", version, about)]
struct Cli {
    /// Apply a command, in order: `set <row> <column> <value>`,
    /// `add-row <anchor> [type]`, `add-column` (can be repeated)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    commands: Vec<String>,

    /// Load configuration from this file instead of the user config dir
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore any config file
    #[arg(long)]
    no_config: bool,

    /// Output format (default: markdown, or the config's output.format)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// More logging (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn build_statement(cli: &Cli) -> anyhow::Result<(Statement, OutputFormat)> {
    let (config, warnings) = if cli.no_config {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(cli.config.as_deref())?
    };
    for warning in warnings {
        log::warn!("{}", warning);
    }

    let statement = match &config.rows {
        Some(rows) => Statement::from_seed(rows).context("Invalid rows in config")?,
        None => Statement::seeded(),
    };
    let mut statement = statement.with_variance_pair(config.variance_pair()?);
    if let Some(width) = config.columns.new_width {
        statement = statement.with_new_column_width(width);
    }

    let format = cli
        .format
        .or(config.output.format)
        .unwrap_or(OutputFormat::Markdown);
    Ok((statement, format))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (mut statement, format) = build_statement(&cli)?;

    for input in &cli.commands {
        let command: Command = input.parse()?;
        match statement.execute(command) {
            CommandOutcome::Edited(EditOutcome::Ignored(reason))
            | CommandOutcome::RowRejected(reason) => {
                log::warn!("Ignored '{}': {}", input, reason);
            }
            outcome => log::debug!("{} -> {:?}", input, outcome),
        }
    }

    match cli.output {
        Some(path) => {
            let written = match format {
                OutputFormat::Markdown => write_markdown(&path, &statement),
                OutputFormat::Json => write_json(&path, &statement),
            };
            written.with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => match format {
            OutputFormat::Markdown => print!("{}", render_markdown(&statement)),
            OutputFormat::Json => println!("{}", to_json(&statement)?),
        },
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
