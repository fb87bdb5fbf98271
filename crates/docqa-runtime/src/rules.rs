//! Keyword routing rules
//!
//! A rule pairs a filename keyword with the agent variant and the fixed
//! question that variant should be asked for matching documents. The table
//! is ordered: the first rule whose keyword is a substring of the
//! lower-cased filename wins, and later rules are never reconsidered.

use serde::{Deserialize, Serialize};

/// The closed set of specialized agent variants
///
/// Adding a document category means adding a variant here plus one agent
/// implementation; the contract and dispatcher sequencing do not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentVariant {
    /// Machine learning and deep learning documents
    MachineLearning,
    /// Data science and data engineering documents
    DataScience,
    /// Security reports and threat analyses
    Cybersecurity,
}

impl AgentVariant {
    /// Human-readable agent name used in status reporting
    pub fn name(self) -> &'static str {
        match self {
            Self::MachineLearning => "MachineLearningAgent",
            Self::DataScience => "DataScienceAgent",
            Self::Cybersecurity => "CybersecurityAgent",
        }
    }
}

/// One ordered routing rule: keyword substring, variant, question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Keyword matched as a substring of the lower-cased filename
    pub keyword: String,

    /// Variant selected when the keyword matches
    pub variant: AgentVariant,

    /// The question routed to that variant for matching documents
    pub question: String,
}

impl KeywordRule {
    /// Create a rule; the keyword is lower-cased so matching stays
    /// case-insensitive regardless of how the table was written
    pub fn new(
        keyword: impl Into<String>,
        variant: AgentVariant,
        question: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            variant,
            question: question.into(),
        }
    }
}

/// Select the first rule whose keyword matches `file_name`
///
/// Matching is case-insensitive and table order is authoritative. `None`
/// means no variant handles this document - it is skipped, never assigned
/// a default agent.
pub fn route<'a>(rules: &'a [KeywordRule], file_name: &str) -> Option<&'a KeywordRule> {
    let lowered = file_name.to_lowercase();
    rules.iter().find(|rule| lowered.contains(&rule.keyword))
}

/// The built-in rule table
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            "machine learning",
            AgentVariant::MachineLearning,
            "What are the primary machine learning concepts discussed?",
        ),
        KeywordRule::new(
            "deep learning",
            AgentVariant::MachineLearning,
            "What is the key deep learning architecture or algorithm described?",
        ),
        KeywordRule::new(
            "data science",
            AgentVariant::DataScience,
            "What is the main topic of data analysis or data processing covered?",
        ),
        KeywordRule::new(
            "designing data",
            AgentVariant::DataScience,
            "What are the key principles for designing data-intensive applications mentioned?",
        ),
        KeywordRule::new(
            "cybersec",
            AgentVariant::Cybersecurity,
            "What is the primary security threat or defense mechanism identified?",
        ),
    ]
}
