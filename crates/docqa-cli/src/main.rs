//! Command-line interface for docqa-rs
//!
//! Scans a directory of PDF documents, routes each one to a specialized
//! question-answering agent by filename keyword, and prints the answers.
//! Authentication against the inference backend is read from the
//! `HF_API_TOKEN` environment variable when present.

use clap::Parser;
use docqa_inference::providers::HfInferenceProvider;
use docqa_runtime::{DEFAULT_MODEL, Dispatcher, DocumentOutcome, QaRuntime};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(about = "Route PDF documents to specialized QA agents", long_about = None)]
struct Args {
    /// Directory scanned for PDF documents
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Question-answering model every agent binds
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    docqa_utils::init_tracing();

    let args = Args::parse();

    info!("Document intelligence system initializing");

    let provider = Arc::new(HfInferenceProvider::from_env()?);
    let runtime = QaRuntime::builder()
        .provider(provider)
        .data_dir(args.data_dir)
        .default_model(args.model)
        .build()?;

    let report = Dispatcher::new(runtime).run().await?;

    if report.is_empty() {
        return Ok(());
    }

    println!();
    for (name, outcome) in &report.outcomes {
        println!("Document: {name}");
        match outcome {
            DocumentOutcome::Answered { question, result } => {
                println!("  Question: {question}");
                println!("  Answer:   {}", result.answer);
                println!("  (query took {:.2} seconds)", result.elapsed.as_secs_f64());
            }
            DocumentOutcome::SkippedNoRule => {
                println!("  Skipped: no agent matched this filename");
            }
            DocumentOutcome::ExtractionFailed => {
                println!("  Failed: could not extract any text");
            }
            DocumentOutcome::AgentFailed(reason) => {
                println!("  Failed: {reason}");
            }
        }
        println!("{}", "-".repeat(50));
    }

    println!(
        "{} answered, {} skipped, {} failed",
        report.answered(),
        report.skipped(),
        report.failed()
    );

    Ok(())
}
