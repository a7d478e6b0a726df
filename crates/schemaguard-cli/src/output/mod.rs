//! Output formatting

use schemaguard_core::Diagnostic;

use crate::args::OutputFormat;

/// Output formatter for diagnostics
pub struct OutputFormatter {
    format: OutputFormat,
    file_name: String,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, file_name: String) -> Self {
        Self { format, file_name }
    }

    /// Print diagnostics in the configured format
    pub fn print_diagnostics(&self, diagnostics: &[Diagnostic]) {
        match self.format {
            OutputFormat::Human => self.print_human(diagnostics),
            OutputFormat::Json => self.print_json(diagnostics),
            OutputFormat::Sarif => self.print_sarif(diagnostics),
        }
    }

    fn print_human(&self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            // Print main message
            eprintln!("\x1b[31merror\x1b[0m[{}]: {}", diag.code(), diag.message);
            eprintln!("  --> {}:{}:{}", self.file_name, diag.line, diag.column);

            // Print offending line
            if !diag.snippet.is_empty() {
                eprintln!("   |");
                eprintln!("{:>3} | {}", diag.line, diag.snippet);
            }

            eprintln!();
        }
    }

    fn print_json(&self, diagnostics: &[Diagnostic]) {
        let output = serde_json::json!({
            "file": self.file_name,
            "diagnostics": diagnostics
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    }

    fn print_sarif(&self, diagnostics: &[Diagnostic]) {
        let results: Vec<serde_json::Value> = diagnostics
            .iter()
            .map(|d| {
                serde_json::json!({
                    "ruleId": d.code(),
                    "level": "error",
                    "message": {
                        "text": d.message
                    },
                    "locations": [{
                        "physicalLocation": {
                            "artifactLocation": {
                                "uri": self.file_name
                            },
                            "region": {
                                "startLine": d.line,
                                "startColumn": d.column,
                                "snippet": {
                                    "text": d.snippet
                                }
                            }
                        }
                    }]
                })
            })
            .collect();

        let sarif = serde_json::json!({
            "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json",
            "version": "2.1.0",
            "runs": [{
                "tool": {
                    "driver": {
                        "name": "schemaguard",
                        "version": env!("CARGO_PKG_VERSION")
                    }
                },
                "results": results
            }]
        });

        println!("{}", serde_json::to_string_pretty(&sarif).unwrap());
    }
}
