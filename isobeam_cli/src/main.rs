//! # Isobeam CLI
//!
//! Command-line front end for `isobeam_core`: reads a beam model from JSON,
//! solves it and prints either the full result as JSON or a text report.
//! Log output goes to stderr and is controlled with `RUST_LOG`.

mod input;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use isobeam_core::{solve, solve_and_project_with, solve_with, ResultView};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "isobeam")]
#[command(about = "Isobeam - statically determinate beam solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a beam model and print the result
    Solve {
        /// Path to the beam model JSON file
        model_path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Optional settings JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Solve a beam model and print its graphic scenes as JSON
    Scene {
        /// Path to the beam model JSON file
        model_path: PathBuf,
        /// Optional settings JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Solve the built-in 6 m demo beam
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let valid = match cli.command {
        Commands::Solve {
            model_path,
            format,
            config,
        } => cmd_solve(&model_path, format, config.as_deref())?,
        Commands::Scene { model_path, config } => cmd_scene(&model_path, config.as_deref())?,
        Commands::Demo { format } => {
            let result = solve(&input::demo_model());
            print_result(&result, format)?;
            result.is_valid
        }
    };

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn cmd_solve(model_path: &Path, format: OutputFormat, config: Option<&Path>) -> Result<bool> {
    let model = input::load_model(model_path)?;
    let settings = input::load_settings(config)?;
    let result = solve_with(&model, &settings.analysis);
    print_result(&result, format)?;
    Ok(result.is_valid)
}

fn cmd_scene(model_path: &Path, config: Option<&Path>) -> Result<bool> {
    let model = input::load_model(model_path)?;
    let settings = input::load_settings(config)?;
    let (result, scenes) = solve_and_project_with(&model, &settings);
    if !result.is_valid {
        for error in &result.errors {
            eprintln!("error: {error}");
        }
    }
    println!("{}", serde_json::to_string_pretty(&scenes)?);
    Ok(result.is_valid)
}

fn print_result(result: &ResultView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Text => print!("{}", report::render(result)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ONE_SUPPORT: &str = r#"{
        "id": "V-bad",
        "length": 6.0,
        "supports": [{ "id": "A", "position": 0.0, "kind": "simple" }],
        "point_loads": [{ "id": "P1", "position": 3.0, "magnitude": 10.0 }]
    }"#;

    const TWO_SUPPORTS: &str = r#"{
        "id": "V-ok",
        "length": 6.0,
        "supports": [
            { "id": "A", "position": 0.0, "kind": "simple" },
            { "id": "B", "position": 6.0, "kind": "roller" }
        ],
        "point_loads": [{ "id": "P1", "position": 3.0, "magnitude": 10.0 }]
    }"#;

    fn model_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("isobeam-main-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_solve_reports_invalid_beam() {
        let path = model_file("invalid-solve.json", ONE_SUPPORT);
        let valid = cmd_solve(&path, OutputFormat::Json, None).unwrap();
        fs::remove_file(&path).ok();
        assert!(!valid);
    }

    #[test]
    fn test_scene_reports_invalid_beam() {
        let path = model_file("invalid-scene.json", ONE_SUPPORT);
        let valid = cmd_scene(&path, None).unwrap();
        fs::remove_file(&path).ok();
        assert!(!valid);
    }

    #[test]
    fn test_valid_beam_succeeds() {
        let path = model_file("valid.json", TWO_SUPPORTS);
        let solved = cmd_solve(&path, OutputFormat::Text, None).unwrap();
        let projected = cmd_scene(&path, None).unwrap();
        fs::remove_file(&path).ok();
        assert!(solved);
        assert!(projected);
    }

    #[test]
    fn test_missing_model_is_an_error() {
        assert!(cmd_solve(Path::new("/nonexistent/beam.json"), OutputFormat::Text, None).is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["isobeam", "solve", "beam.json", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Solve { format: OutputFormat::Json, config: None, .. }
        ));
        assert!(Cli::try_parse_from(["isobeam", "demo"]).is_ok());
    }
}
