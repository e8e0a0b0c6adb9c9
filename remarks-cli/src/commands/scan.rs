//! Scan command - list tagged comment markers

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use remarks_core::{AnnotationTag, Severity};

use super::get_context;
use crate::output;

/// Severity threshold for `--fail-on`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FailOn {
    Info,
    Warning,
    Critical,
}

impl From<FailOn> for Severity {
    fn from(value: FailOn) -> Self {
        match value {
            FailOn::Info => Severity::Info,
            FailOn::Warning => Severity::Warning,
            FailOn::Critical => Severity::Critical,
        }
    }
}

pub fn run(
    path: &Path,
    tags: &[String],
    fail_on: Option<FailOn>,
    summary: bool,
    json: bool,
) -> Result<ExitCode> {
    let ctx = get_context()?;
    let wanted: Vec<AnnotationTag> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(AnnotationTag::from_name)
        .collect();

    let report = ctx
        .scan_service
        .scan(path)
        .with_context(|| format!("Failed to scan {}", path.display()))?
        .filter(&wanted);

    let failed = fail_on.is_some_and(|threshold| report.exceeds(threshold.into()));
    let code = if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };

    if json {
        if summary {
            output::json(&report.counts())?;
        } else {
            output::json(&report)?;
        }
        return Ok(code);
    }

    if report.annotations.is_empty() {
        println!("No markers found in {} file(s).", report.files_scanned);
        return Ok(code);
    }

    let mut table = output::create_table();
    if summary {
        table.set_header(vec!["Tag", "Count", "Meaning"]);
        for (tag, count) in report.counts() {
            table.add_row(vec![
                output::severity_label(tag.name(), tag.severity()).to_string(),
                count.to_string(),
                tag.description().to_string(),
            ]);
        }
    } else {
        table.set_header(vec!["Location", "Tag", "Text"]);
        for annotation in &report.annotations {
            table.add_row(vec![
                format!("{}:{}", annotation.path.display(), annotation.line),
                output::severity_label(annotation.tag.name(), annotation.tag.severity()).to_string(),
                annotation.text.clone(),
            ]);
        }
    }
    println!("{}", table);

    println!(
        "{} marker(s) in {} file(s)",
        report.annotations.len(),
        report.files_scanned
    );
    if report.files_skipped > 0 {
        output::warning(&format!("Skipped {} unreadable file(s)", report.files_skipped));
    }
    if failed {
        println!("{}", "Markers at or above the --fail-on severity were found".red());
    }

    Ok(code)
}
