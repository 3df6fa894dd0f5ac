//! rapid-summary - command-line front end
//!
//! Loads plain-text documents, summarizes them with the heuristic pipeline
//! and prints (or saves) one summary per document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rapid_summary::extract::{mime_from_name, PlainTextExtractor};
use rapid_summary::pipeline::validation::ValidationEngine;
use rapid_summary::session::summary_file_name;
use rapid_summary::{DocumentSummary, KeywordSet, Session, SummarySpec};

/// Shown in place of an empty summary.
const EMPTY_SUMMARY_MESSAGE: &str = "No relevant content found.";

/// Command-line arguments for rapid-summary
#[derive(Parser, Debug)]
#[command(name = "rapid-summary")]
#[command(about = "Extractive summaries of plain-text documents")]
#[command(version)]
struct Args {
    /// Documents to summarize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Comma-separated keywords that boost matching sentences
    #[arg(short, long)]
    keywords: Option<String>,

    /// Share of sentences to keep, clamped to 1..=100
    #[arg(short, long, allow_negative_numbers = true)]
    percentage: Option<i64>,

    /// JSON spec with percentage, keywords and phrase lists
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write summary_<name>.txt files into
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Print one JSON record per document instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let spec = match &args.config {
        Some(path) => load_spec(path)?,
        None => SummarySpec::default(),
    };

    let mut session = Session::from_spec(&spec);
    if let Some(keywords) = &args.keywords {
        session.set_keywords(KeywordSet::parse(keywords));
    }
    if let Some(p) = args.percentage {
        session.set_percentage(p);
    }

    for path in &args.files {
        if let Err(e) = upload(&mut session, path) {
            error!("{e:#}");
        }
    }
    if session.is_empty() {
        bail!("no document could be loaded");
    }

    info!("Generating summaries...");
    let summaries = session
        .summarize_all()
        .context("Error generating summaries")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, summary) in summaries.iter().enumerate() {
        if args.json {
            serde_json::to_writer(&mut out, summary)?;
            writeln!(out)?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            write_text(&mut out, summary)?;
        }
    }

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        for summary in &summaries {
            let target = dir.join(summary_file_name(&summary.name));
            fs::write(&target, &summary.result.summary_text)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            info!("Summary saved to {}", target.display());
        }
    }

    info!("Summaries generated successfully");
    Ok(())
}

/// Read and validate a JSON spec; warnings are logged, errors abort.
fn load_spec(path: &Path) -> Result<SummarySpec> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let spec = SummarySpec::from_json(&raw)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    let report = ValidationEngine::with_defaults().validate(&spec);
    for warning in report.warnings() {
        warn!("{warning}");
    }
    if report.has_errors() {
        for err in report.errors() {
            error!("{err}");
        }
        bail!("config {} failed validation", path.display());
    }
    Ok(spec)
}

fn upload(session: &mut Session, path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let Some(mime) = mime_from_name(&name) else {
        bail!("{name} is not a valid document type");
    };

    info!("Processing {name}...");
    let bytes = fs::read(path).with_context(|| format!("Error processing {name}"))?;
    session.upload(&PlainTextExtractor, &name, mime, &bytes)?;
    Ok(())
}

fn write_text(out: &mut impl Write, summary: &DocumentSummary) -> io::Result<()> {
    let result = &summary.result;
    writeln!(out, "== {}", summary.name)?;
    writeln!(out, "Summary Length: {}% of original", result.percentage)?;
    writeln!(
        out,
        "Sentences: {} of {}",
        result.summary_sentence_count, result.original_sentence_count
    )?;
    if !summary.keywords.is_empty() {
        writeln!(out, "Keywords: {}", summary.keywords.display())?;
    }
    writeln!(out)?;
    if result.is_empty() {
        writeln!(out, "{EMPTY_SUMMARY_MESSAGE}")
    } else {
        writeln!(out, "{}", result.summary_text)
    }
}
