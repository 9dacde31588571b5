//! Highlight verifier binary
//!
//! Verifies an HTML dump of a rendered editor against a JSON expectation set.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: highlight_verify=warn)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! Logs go to stderr so `--json` output stays machine-readable.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --features cli --bin highlight_verify -- editor.html --expectations case.json --keywords
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use highlight_verify::corpus::{missing_expected_types, TERRAFORM_KEYWORDS};
use highlight_verify::{
    ExpectationEngine, ExpectationSet, HtmlTree, KeywordReport, MarkerPolicy, RenderedDocument,
    Summary, TokenType, VerificationResult, DEFAULT_MARKER_PREFIX,
};

#[derive(Parser, Debug)]
#[command(name = "highlight_verify", version, about = "Verify syntax highlighting in a rendered editor dump")]
struct Cli {
    /// HTML dump of the rendered editor
    html: PathBuf,
    #[arg(long, help = "JSON expectation set (camelCase flags; missing fields default)")]
    expectations: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_MARKER_PREFIX, help = "Marker class prefix")]
    prefix: String,
    #[arg(long, default_value_t = false, help = "Also report which Terraform keywords are highlighted")]
    keywords: bool,
    #[arg(long, default_value_t = false, help = "Output machine-readable JSON")]
    json: bool,
}

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "highlight_verify=warn".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Everything the binary reports about one dump.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    summary: Summary,
    fingerprint: String,
    has_syntax_highlighting: bool,
    missing_types: Vec<TokenType>,
    result: VerificationResult,
    keywords: Option<KeywordReport>,
}

fn build_report(cli: &Cli) -> Result<Report, Box<dyn std::error::Error>> {
    let tree = HtmlTree::from_path(&cli.html)?;
    let expectations = match &cli.expectations {
        Some(path) => ExpectationSet::from_json(&std::fs::read_to_string(path)?)?,
        None => ExpectationSet::default(),
    };

    let engine = ExpectationEngine::with_policy(MarkerPolicy::new(cli.prefix.clone()));
    let root = tree.root();

    let summary = engine.aggregator().summarize(Some(&root));
    let result = ExpectationEngine::check_summary(&summary, &expectations);
    let keywords = cli
        .keywords
        .then(|| engine.verify_keywords(Some(&root), &TERRAFORM_KEYWORDS));

    info!(
        path = %cli.html.display(),
        total = summary.total(),
        passed = result.passed,
        "verified dump"
    );

    Ok(Report {
        fingerprint: summary.fingerprint(),
        has_syntax_highlighting: engine.scanner().has_syntax_highlighting(Some(&root)),
        missing_types: missing_expected_types(&summary),
        summary,
        result,
        keywords,
    })
}

fn print_report(report: &Report) {
    println!("summary: {}", report.summary);
    println!("fingerprint: {}", report.fingerprint);
    if !report.has_syntax_highlighting {
        println!("warning: no highlighting detected");
    }
    if !report.missing_types.is_empty() {
        let names: Vec<&str> = report.missing_types.iter().map(|t| t.as_str()).collect();
        println!("not seen: {}", names.join(", "));
    }
    if let Some(keywords) = &report.keywords {
        println!(
            "keywords: {} found, {} missing",
            keywords.found.len(),
            keywords.missing.len()
        );
        for missing in &keywords.missing {
            println!("  missing: {}", missing);
        }
    }
    if report.result.passed {
        println!("PASS");
    } else {
        println!("FAIL");
        for failure in &report.result.failures {
            println!("  {}", failure);
        }
    }
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let report = build_report(cli)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(report.result.passed)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "verification aborted");
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
