//! Document dispatcher
//!
//! The dispatcher drives the end-to-end sequence for a document collection:
//! enumerate PDFs, route each filename through the keyword rules, construct
//! the selected agent, load the document text, query, and report. Failures
//! are isolated per document; only a missing data directory aborts the run.

use crate::error::DispatchError;
use crate::rules::route;
use crate::runtime::QaRuntime;
use docqa_core::{Document, QueryResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Per-document outcome of a dispatch run
///
/// Every scanned document produces exactly one outcome, in scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentOutcome {
    /// Routed, loaded, and answered
    Answered {
        /// The question the rule routed to this document
        question: String,
        /// Answer text and elapsed wall-clock time
        result: QueryResult,
    },

    /// No keyword rule matched; no agent was constructed
    SkippedNoRule,

    /// Text extraction yielded nothing; the query was never made
    ExtractionFailed,

    /// Agent construction or the query itself failed for this document
    AgentFailed(String),
}

/// Ordered outcomes of one dispatch run
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// (file name, outcome) per scanned document, in scan order
    pub outcomes: Vec<(String, DocumentOutcome)>,
}

impl RunReport {
    /// Number of documents that produced an answer
    pub fn answered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, DocumentOutcome::Answered { .. }))
            .count()
    }

    /// Number of documents skipped because no rule matched
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, DocumentOutcome::SkippedNoRule))
            .count()
    }

    /// Number of documents that failed to load or to answer
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| {
                matches!(
                    o,
                    DocumentOutcome::ExtractionFailed | DocumentOutcome::AgentFailed(_)
                )
            })
            .count()
    }

    /// True when no documents were scanned at all
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Drives routing and querying over the configured document collection
pub struct Dispatcher {
    runtime: QaRuntime,
}

impl Dispatcher {
    /// Create a dispatcher over a runtime
    pub fn new(runtime: QaRuntime) -> Self {
        Self { runtime }
    }

    /// Get a reference to the underlying runtime
    pub fn runtime(&self) -> &QaRuntime {
        &self.runtime
    }

    /// Run the whole collection and collect per-document outcomes
    ///
    /// A missing data directory is the only fatal error. An existing but
    /// empty collection is a normal terminal state with an empty report.
    pub async fn run(&self) -> Result<RunReport, DispatchError> {
        let data_dir = &self.runtime.config().data_dir;

        if !data_dir.is_dir() {
            return Err(DispatchError::DataDirMissing(data_dir.clone()));
        }

        let files = scan_pdfs(data_dir)?;

        if files.is_empty() {
            info!(
                "No PDF files found in '{}'. Nothing to process.",
                data_dir.display()
            );
            return Ok(RunReport::default());
        }

        let mut report = RunReport::default();

        for path in files {
            let document = Document::new(path);
            let file_name = document.file_name().unwrap_or_default().to_string();

            info!("Processing document: {file_name}");
            let outcome = self.process_document(document, &file_name).await;
            report.outcomes.push((file_name, outcome));
        }

        info!(
            "Run complete: {} answered, {} skipped, {} failed",
            report.answered(),
            report.skipped(),
            report.failed()
        );

        Ok(report)
    }

    /// Process one document; all failures stay inside the returned outcome
    ///
    /// The document's text lives only for this call - it is populated by
    /// the agent's loader and dropped with the document when the query
    /// completes.
    async fn process_document(&self, mut document: Document, file_name: &str) -> DocumentOutcome {
        let config = self.runtime.config();

        // First matching rule wins; no rule means no agent, even though a
        // default question exists in the configuration.
        let Some(rule) = route(&config.rules, file_name) else {
            warn!("No specific agent found for '{file_name}'. Skipping.");
            return DocumentOutcome::SkippedNoRule;
        };

        info!("Agent selected: {}", rule.variant.name());

        let agent = match self.runtime.create_agent(rule.variant).await {
            Ok(agent) => agent,
            Err(e) => {
                warn!("Agent construction failed for '{file_name}': {e}");
                return DocumentOutcome::AgentFailed(e.to_string());
            }
        };

        document.text = agent.load_document(document.path());
        if document.text.is_empty() {
            warn!("Failed to load document '{file_name}'.");
            return DocumentOutcome::ExtractionFailed;
        }

        info!("Asking: {}", rule.question);
        let started = Instant::now();

        match agent.query(&document.text, &rule.question).await {
            Ok(answer) => {
                let elapsed = started.elapsed();
                info!("Answer: {answer}");
                info!("(Query took {:.2} seconds)", elapsed.as_secs_f64());
                DocumentOutcome::Answered {
                    question: rule.question.clone(),
                    result: QueryResult { answer, elapsed },
                }
            }
            Err(e) => {
                warn!("Query failed for '{file_name}': {e}");
                DocumentOutcome::AgentFailed(e.to_string())
            }
        }
    }
}

/// Enumerate `*.pdf` files (case-insensitive extension), sorted by name
///
/// `read_dir` order is platform-dependent; sorting keeps routing and report
/// order identical across runs over an unchanged directory.
fn scan_pdfs(dir: &Path) -> Result<Vec<PathBuf>, DispatchError> {
    let entries = std::fs::read_dir(dir).map_err(|source| DispatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    files.sort();
    Ok(files)
}
