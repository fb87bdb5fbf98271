//! Concrete agent implementations
//!
//! This module provides the specialized implementations of the Agent trait:
//! - MachineLearningAgent: machine learning / deep learning documents
//! - DataScienceAgent: data science / data engineering documents
//! - CybersecurityAgent: security reports and threat analyses
//!
//! All three share one binding and answering path (`base`); the variant set
//! is open - a new category is a new file here plus one `AgentVariant`.

mod base;
pub mod cybersecurity;
pub mod data_science;
pub mod machine_learning;

pub use cybersecurity::CybersecurityAgent;
pub use data_science::DataScienceAgent;
pub use machine_learning::MachineLearningAgent;
