//! mermaid-drawio CLI entry point.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::{ArgGroup, Parser};
use log::{LevelFilter, debug, info};
use thiserror::Error;

use mermaid_drawio::{EmitConfig, convert_with_config};

/// Convert Mermaid flowchart code to draw.io XML.
#[derive(Parser, Debug)]
#[command(
    name = "mermaid-drawio",
    version = env!("MERMAID_DRAWIO_VERSION"),
    about = "Convert Mermaid flowchart code to draw.io XML"
)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["input_file", "input_string"])
))]
struct Cli {
    /// Path to an input file containing Mermaid code
    #[arg(short = 'i', long = "input-file", alias = "input_file")]
    input_file: Option<PathBuf>,

    /// Mermaid code directly as a string
    #[arg(short = 's', long = "input-string", alias = "input_string")]
    input_string: Option<String>,

    /// Path for the output .drawio file
    #[arg(short = 'o', long = "output-file", alias = "output_file")]
    output_file: PathBuf,

    /// Indent the XML document instead of writing a single line
    #[arg(long)]
    pretty: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("input file not found at {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("cannot read input file {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("Mermaid input is empty")]
    EmptyInput,

    #[error("cannot write output file {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Convert(#[from] mermaid_drawio::Error),
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
    match (&cli.input_file, &cli.input_string) {
        (Some(path), _) => fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CliError::InputNotFound { path: path.clone() }
            } else {
                CliError::ReadInput {
                    path: path.clone(),
                    source,
                }
            }
        }),
        (None, Some(text)) => Ok(text.clone()),
        // clap's required group rules this out.
        (None, None) => Err(CliError::EmptyInput),
    }
}

fn write_output(path: &Path, xml: &str) -> Result<(), CliError> {
    fs::write(path, xml).map_err(|source| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let src = read_input(cli)?;
    if src.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }

    let config = if cli.pretty {
        EmitConfig::pretty()
    } else {
        EmitConfig::default()
    };
    let xml = convert_with_config(&src, &config)?;
    write_output(&cli.output_file, &xml)?;

    info!(output_file:? = cli.output_file; "draw.io XML written");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            cli.log_level
        );
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    println!(
        "Successfully converted Mermaid input to Draw.io XML and saved to {}",
        cli.output_file.display()
    );
}
