//! schemaguard CLI - declarative SQL schema linter

mod args;
mod config;
mod output;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use schemaguard_core::{Linter, RuleCode, REGISTRY};

use crate::args::{Args, Command, OutputFormat};
use crate::config::Config;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    match args.command {
        Command::Check {
            files,
            config: config_path,
            disable,
            format,
        } => {
            // Load configuration
            let config = if let Some(path) = config_path {
                Config::from_file(&path)?
            } else {
                Config::find_and_load()?.unwrap_or_default()
            };

            // Merge CLI args with config (CLI takes precedence)
            let config = config.merge_with_args(&files, &format, &disable);

            // Expand file patterns from config or CLI
            let mut schema_files = Vec::new();
            for pattern in &config.files {
                if pattern.contains('*') {
                    for path in glob::glob(pattern).into_diagnostic()?.flatten() {
                        schema_files.push(path);
                    }
                } else {
                    schema_files.push(std::path::PathBuf::from(pattern));
                }
            }

            if schema_files.is_empty() {
                miette::bail!(
                    "No schema files specified. Pass file paths or configure in schemaguard.toml"
                );
            }

            // Determine output format
            let output_format = match config.format.as_deref() {
                Some("json") => OutputFormat::Json,
                Some("sarif") => OutputFormat::Sarif,
                _ => OutputFormat::Human,
            };

            // Build the linter with disabled rules applied
            let mut linter = Linter::new();
            for code in &config.disable {
                let code: RuleCode = code.parse().map_err(|e: String| miette::miette!(e))?;
                linter.disable(code);
            }

            // Lint each schema file
            let mut total_errors = 0;
            for schema_file in &schema_files {
                let content = fs::read_to_string(schema_file).into_diagnostic()?;
                let diagnostics = linter.lint(&content);

                if !diagnostics.is_empty() {
                    let formatter =
                        OutputFormatter::new(output_format, schema_file.display().to_string());
                    formatter.print_diagnostics(&diagnostics);
                    total_errors += diagnostics.len();
                }
            }

            // Print summary
            if total_errors > 0 {
                eprintln!();
                eprintln!(
                    "Found {} violation(s) in {} file(s)",
                    total_errors,
                    schema_files.len()
                );
            } else if !args.quiet {
                eprintln!("All {} file(s) passed validation", schema_files.len());
            }

            Ok(total_errors > 0)
        }

        Command::Rules => {
            println!("Rules:");
            println!("======");
            for rule in REGISTRY.iter() {
                println!("\n{} ({})", rule.code.code(), rule.code.name());
                println!("  {}", rule.message);
            }

            Ok(false)
        }

        Command::Sanitize { file } => {
            // Show the text the scanner actually sees (for debugging)
            let content = fs::read_to_string(&file).into_diagnostic()?;
            print!("{}", schemaguard_core::neutralize_comments(&content));

            Ok(false)
        }
    }
}
