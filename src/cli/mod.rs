// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line surface: argument parsing, input resolution, output, exit status.
//!
//! Documents are independent, so several inputs are checked in parallel; output always follows
//! input order.

pub mod config;
pub mod error;
pub mod input;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{error, info};
use rayon::prelude::*;
use serde::Serialize;

pub use error::CliError;

use crate::check::check_document;
use crate::config::CheckerConfig;
use crate::report::{render_summary_text, Summary};

pub const DEFAULT_PREFIX: &str = "SolutionOverview-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Check Mermaid diagram blocks embedded in Markdown documents.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mmdcheck", author, version, about, long_about = None)]
pub struct Args {
    /// Markdown files to check; a directory resolves to its latest `<prefix>*.md` file
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// File name prefix used when an input is a directory
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Result of checking one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReport {
    pub path: PathBuf,
    pub summary: Summary,
}

/// One entry of the JSON output: a checked input, or the input as given plus why it failed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum InputEntry<'a> {
    Checked(&'a InputReport),
    Failed { path: &'a Path, error: String },
}

fn check_input(
    input: &Path,
    prefix: &str,
    config: &CheckerConfig,
) -> Result<InputReport, CliError> {
    let path = input::resolve_input(input, prefix)?;
    let text = fs::read_to_string(&path).map_err(|err| CliError::io(&path, err))?;
    let summary = check_document(&text, config).summary();
    info!(
        path = path.display().to_string(),
        blocks = summary.total_blocks,
        well_formed = summary.well_formed_blocks;
        "checked input"
    );
    Ok(InputReport { path, summary })
}

/// Check every input, in parallel, keeping input order.
pub fn check_inputs(args: &Args, config: &CheckerConfig) -> Vec<Result<InputReport, CliError>> {
    args.inputs
        .par_iter()
        .map(|input| check_input(input, &args.prefix, config))
        .collect()
}

fn write_text(out: &mut impl Write, reports: &[InputReport]) -> std::io::Result<()> {
    for report in reports {
        writeln!(out, "checking {}", report.path.display())?;
        out.write_all(render_summary_text(&report.summary).as_bytes())?;
    }
    Ok(())
}

/// Run the checker and write results to `out`.
///
/// Returns `Ok(true)` when every input has at least one diagram block and every block is
/// well-formed. Unreadable inputs are logged, listed with their error in JSON output, and count
/// as failures; only configuration and output errors abort the run.
pub fn run(args: &Args, out: &mut impl Write) -> Result<bool, CliError> {
    let config = config::load_config(args.config.as_deref())?;
    run_with_config(args, &config, out)
}

pub(crate) fn run_with_config(
    args: &Args,
    config: &CheckerConfig,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let results = check_inputs(args, config);
    let mut success = true;
    for result in &results {
        match result {
            Ok(report) => success &= report.summary.is_valid(),
            Err(err) => {
                error!("{err}");
                success = false;
            }
        }
    }

    match args.format {
        OutputFormat::Text => {
            let reports: Vec<InputReport> = results.into_iter().filter_map(Result::ok).collect();
            write_text(out, &reports).map_err(|err| CliError::io("<stdout>", err))?
        }
        OutputFormat::Json => {
            let entries: Vec<InputEntry<'_>> = args
                .inputs
                .iter()
                .zip(&results)
                .map(|(input, result)| match result {
                    Ok(report) => InputEntry::Checked(report),
                    Err(err) => InputEntry::Failed {
                        path: input,
                        error: err.to_string(),
                    },
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out).map_err(|err| CliError::io("<stdout>", err))?;
        }
    }

    Ok(success)
}
