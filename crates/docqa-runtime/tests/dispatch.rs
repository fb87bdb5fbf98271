//! End-to-end dispatch tests against a deterministic stub provider
//!
//! No network, no real models: the stub provider hands back fixed handles
//! and a fixed answer, and counts how often it is asked to do either.

use async_trait::async_trait;
use docqa_core::Agent;
use docqa_inference::{ModelHandle, QaAnswer, QaError, QaProvider, TokenizerHandle};
use docqa_runtime::{
    Dispatcher, DocumentOutcome, MachineLearningAgent, QaRuntime, RuntimeConfig,
};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct StubProvider {
    answer: String,
    fail_load: bool,
    load_calls: AtomicUsize,
    answer_calls: AtomicUsize,
}

impl StubProvider {
    fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            fail_load: false,
            load_calls: AtomicUsize::new(0),
            answer_calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail_load: true,
            ..Self::new("")
        }
    }

    fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    fn answer_calls(&self) -> usize {
        self.answer_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QaProvider for StubProvider {
    async fn load_model(
        &self,
        model_id: &str,
    ) -> docqa_inference::Result<(ModelHandle, TokenizerHandle)> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_load {
            return Err(QaError::ModelNotFound(model_id.to_string()));
        }
        Ok((
            ModelHandle::new(model_id, "stub"),
            TokenizerHandle::new(model_id, "StubTokenizer"),
        ))
    }

    async fn answer(
        &self,
        _model: &ModelHandle,
        _tokenizer: &TokenizerHandle,
        _context: &str,
        _question: &str,
    ) -> docqa_inference::Result<QaAnswer> {
        self.answer_calls.fetch_add(1, Ordering::SeqCst);
        Ok(QaAnswer {
            answer: self.answer.clone(),
            score: 1.0,
            start: 0,
            end: self.answer.len(),
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}

fn dispatcher_over(dir: &Path, provider: Arc<StubProvider>) -> Dispatcher {
    let runtime = QaRuntime::builder()
        .provider(provider)
        .config(RuntimeConfig {
            data_dir: dir.to_path_buf(),
            ..RuntimeConfig::default()
        })
        .build()
        .expect("runtime");
    Dispatcher::new(runtime)
}

fn touch(dir: &Path, name: &str, contents: &[u8]) {
    std::fs::write(dir.join(name), contents).expect("write file");
}

/// Write a minimal single-page PDF whose content stream draws `text`
///
/// Offsets in the cross-reference table are computed while the objects are
/// emitted, so the file is a structurally valid PDF that the extractor can
/// parse. `text` must not contain parentheses or backslashes.
fn write_pdf(dir: &Path, name: &str, text: &str) {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets = Vec::new();

    buf.extend_from_slice(b"%PDF-1.4\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        {
            let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            )
        },
    ];

    for (i, body) in objects.iter().enumerate() {
        offsets.push(buf.len());
        buf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );

    std::fs::write(dir.join(name), buf).expect("write pdf");
}

#[tokio::test]
async fn missing_data_directory_is_fatal_to_the_run() {
    let provider = Arc::new(StubProvider::new("x"));
    let dispatcher = dispatcher_over(Path::new("no/such/dir"), provider);

    let result = dispatcher.run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn empty_directory_yields_an_empty_report_and_no_agents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let provider = Arc::new(StubProvider::new("x"));
    let dispatcher = dispatcher_over(dir.path(), provider.clone());

    let report = dispatcher.run().await.expect("run");
    assert!(report.is_empty());
    assert_eq!(provider.load_calls(), 0);
}

#[tokio::test]
async fn routing_skips_unmatched_files_and_never_queries_unreadable_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Not real PDFs: extraction soft-fails, which is exactly the branch
    // under test - routed documents whose text comes back empty must not
    // be queried.
    touch(dir.path(), "Intro to Machine Learning.pdf", b"junk");
    touch(dir.path(), "network_cybersec_report.pdf", b"junk");
    touch(dir.path(), "random_notes.pdf", b"junk");

    let provider = Arc::new(StubProvider::new("an answer"));
    let dispatcher = dispatcher_over(dir.path(), provider.clone());

    let report = dispatcher.run().await.expect("run");

    assert_eq!(report.outcomes.len(), 3);
    let outcome_for = |name: &str| {
        report
            .outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, o)| o.clone())
            .expect("outcome present")
    };

    assert_eq!(
        outcome_for("Intro to Machine Learning.pdf"),
        DocumentOutcome::ExtractionFailed
    );
    assert_eq!(
        outcome_for("network_cybersec_report.pdf"),
        DocumentOutcome::ExtractionFailed
    );
    assert_eq!(
        outcome_for("random_notes.pdf"),
        DocumentOutcome::SkippedNoRule
    );

    // Two routed documents, two agent constructions, zero queries.
    assert_eq!(provider.load_calls(), 2);
    assert_eq!(provider.answer_calls(), 0);
}

#[tokio::test]
async fn readable_routed_document_is_answered_with_the_rule_question() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_pdf(
        dir.path(),
        "Intro to Machine Learning.pdf",
        "A short note on supervised learning.",
    );

    let provider = Arc::new(StubProvider::new("supervised learning"));
    let dispatcher = dispatcher_over(dir.path(), provider.clone());

    let report = dispatcher.run().await.expect("run");
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.answered(), 1);

    let (name, outcome) = &report.outcomes[0];
    assert_eq!(name, "Intro to Machine Learning.pdf");
    match outcome {
        DocumentOutcome::Answered { question, result } => {
            assert_eq!(
                question,
                "What are the primary machine learning concepts discussed?"
            );
            assert_eq!(result.answer, "supervised learning");
        }
        other => panic!("expected an answered outcome, got {other:?}"),
    }

    assert_eq!(provider.load_calls(), 1);
    assert_eq!(provider.answer_calls(), 1);
}

#[tokio::test]
async fn uppercase_extension_is_still_scanned() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "Deep Learning Survey.PDF", b"junk");

    let provider = Arc::new(StubProvider::new("x"));
    let dispatcher = dispatcher_over(dir.path(), provider.clone());

    let report = dispatcher.run().await.expect("run");
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(provider.load_calls(), 1);
}

#[tokio::test]
async fn model_load_failure_is_isolated_per_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "machine learning 1.pdf", b"junk");
    touch(dir.path(), "data science 2.pdf", b"junk");

    let provider = Arc::new(StubProvider::failing());
    let dispatcher = dispatcher_over(dir.path(), provider.clone());

    // The run itself succeeds; both documents fail individually.
    let report = dispatcher.run().await.expect("run");
    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.failed(), 2);
    for (_, outcome) in &report.outcomes {
        assert!(matches!(outcome, DocumentOutcome::AgentFailed(_)));
    }
    assert_eq!(provider.load_calls(), 2);
    assert_eq!(provider.answer_calls(), 0);
}

#[tokio::test]
async fn dispatch_is_idempotent_over_an_unchanged_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "Intro to Machine Learning.pdf", b"junk");
    touch(dir.path(), "random_notes.pdf", b"junk");
    touch(dir.path(), "cybersec briefing.pdf", b"junk");

    let provider = Arc::new(StubProvider::new("x"));
    let dispatcher = dispatcher_over(dir.path(), provider);

    let first = dispatcher.run().await.expect("first run");
    let second = dispatcher.run().await.expect("second run");
    assert_eq!(first, second);
}

#[tokio::test]
async fn query_returns_the_backend_answer_unmodified() {
    let provider = Arc::new(StubProvider::new("stochastic gradient descent"));
    let agent = MachineLearningAgent::bind(provider.clone(), "stub-model")
        .await
        .expect("bind");

    let answer = agent
        .query("The optimizer discussed is SGD.", "Which optimizer?")
        .await
        .expect("query");

    assert_eq!(answer, "stochastic gradient descent");
    assert_eq!(provider.answer_calls(), 1);
}

#[tokio::test]
async fn agent_load_document_soft_fails_to_empty_string() {
    let provider = Arc::new(StubProvider::new("x"));
    let agent = MachineLearningAgent::bind(provider, "stub-model")
        .await
        .expect("bind");

    assert_eq!(agent.load_document(Path::new("no/such/file.pdf")), "");
}
