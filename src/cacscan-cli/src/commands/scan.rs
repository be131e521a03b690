//! Scan session command handlers
//!
//! Payloads arrive one per line, typically from a keyboard-wedge scanner.
//! Lines starting with `:` are session commands.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::export;
use crate::session::{ScanOutcome, ScanSession};

/// Operator commands recognised inside a scan session
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Filter(String),
    Export(PathBuf),
    List,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix(':')?;
        let (name, arg) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(n, a)| (n, a.trim()));

        Some(match (name, arg) {
            ("filter" | "f", arg) => Self::Filter(arg.to_string()),
            ("export" | "e", arg) if !arg.is_empty() => Self::Export(PathBuf::from(arg)),
            ("list" | "l", _) => Self::List,
            ("quit" | "q", _) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        })
    }
}

/// Strip only the line terminator; spaces are part of the payload
fn payload_of(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Handle the scan command against stdin
pub fn interactive(log: Option<PathBuf>, output: Option<&Path>) -> Result<()> {
    let log = match log {
        Some(path) => path,
        None => Config::load()?.scan_log(),
    };
    tracing::info!(log = %log.display(), "scan session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = run_session(stdin.lock(), &mut stdout.lock(), &log)?;

    if let Some(path) = output {
        export::export(path, session.rows())
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        tracing::info!(rows = session.len(), path = %path.display(), "session exported");
    }

    Ok(())
}

/// Drive a scan session until `:quit` or end of input
fn run_session<R: BufRead, W: Write>(input: R, out: &mut W, log: &Path) -> Result<ScanSession> {
    let mut session = ScanSession::new();

    for line in input.lines() {
        let line = line.context("Failed to read scan input")?;
        let raw = payload_of(&line);
        if raw.trim().is_empty() {
            continue;
        }

        if let Some(command) = SessionCommand::parse(raw) {
            match command {
                SessionCommand::Quit => break,
                SessionCommand::List => {
                    for row in session.rows() {
                        writeln!(out, "{}", export::fields(row).join(" | "))?;
                    }
                }
                SessionCommand::Filter(needle) => {
                    for row in session.rows().iter().filter(|r| export::matches(r, &needle)) {
                        writeln!(out, "{}", export::fields(row).join(" | "))?;
                    }
                }
                SessionCommand::Export(path) => {
                    export::export(&path, session.rows())
                        .with_context(|| format!("Failed to export to {}", path.display()))?;
                    export::truncate(log)
                        .with_context(|| format!("Failed to reset {}", log.display()))?;
                    writeln!(out, "Data exported and new CSV file created.")?;
                }
                SessionCommand::Unknown(text) => {
                    writeln!(out, "Error: Unknown command {}", text)?;
                }
            }
            continue;
        }

        scan_line(&mut session, out, log, raw)?;
    }

    Ok(session)
}

/// Decode one payload into the session and report the result
fn scan_line<W: Write>(session: &mut ScanSession, out: &mut W, log: &Path, raw: &str) -> Result<()> {
    tracing::debug!(data = raw, "scanned data");

    let barcode = match cacscan::identify(raw) {
        Ok(barcode) => barcode,
        Err(e) => {
            tracing::warn!("{}", e);
            writeln!(out, "Error: Failed to parse barcode data.")?;
            return Ok(());
        }
    };
    let edipi = barcode.edipi();

    let outcome = match session.record(barcode, Local::now().naive_local()) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("{}", e);
            writeln!(out, "Error: Duplicate EDIPI detected.")?;
            return Ok(());
        }
    };

    if let Some(row) = session.get(edipi) {
        export::append(log, row)
            .with_context(|| format!("Failed to append to {}", log.display()))?;
    }

    let message = match outcome {
        ScanOutcome::Added => "Barcode scanned successfully.",
        ScanOutcome::Upgraded => "Barcode scanned successfully (front added to existing card).",
        ScanOutcome::Merged => "Barcode scanned successfully (back matched existing card).",
    };
    writeln!(out, "{}", message)?;

    Ok(())
}

/// Handle the batch command
pub fn batch(input: &Path, output: Option<&Path>) -> Result<()> {
    let file =
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let session = decode_lines(BufReader::new(file))?;
    if session.is_empty() {
        tracing::warn!(input = %input.display(), "no barcodes decoded");
    }

    match output {
        Some(path) => export::export(path, session.rows())
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => export::write_rows(io::stdout().lock(), session.rows())?,
    }

    tracing::info!(rows = session.len(), "batch decoded");
    Ok(())
}

/// Decode every non-blank line into a fresh session, skipping failures
fn decode_lines<R: BufRead>(input: R) -> Result<ScanSession> {
    let mut session = ScanSession::new();
    let now = Local::now().naive_local();

    for (number, line) in input.lines().enumerate() {
        let line = line.context("Failed to read batch input")?;
        let raw = payload_of(&line);
        if raw.trim().is_empty() {
            continue;
        }

        let recorded = cacscan::identify(raw)
            .map_err(anyhow::Error::from)
            .and_then(|barcode| Ok(session.record(barcode, now)?));
        if let Err(e) = recorded {
            eprintln!("line {}: {}", number + 1, e);
        }
    }

    Ok(session)
}
