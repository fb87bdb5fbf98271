//! Runtime for docqa-rs
//!
//! This crate ties the workspace together: the specialized agent variants,
//! the ordered keyword routing table, the runtime (provider + configuration
//! + agent factory), and the dispatcher that drives a whole document
//! collection through the load -> route -> query -> report sequence.
//!
//! Execution is fully sequential: one document, one agent instance, one
//! query at a time. Each document gets its own agent construction (and
//! model load) - there is no cross-document model reuse.

pub mod agents;
pub mod dispatcher;
pub mod error;
pub mod rules;
pub mod runtime;

pub use agents::{CybersecurityAgent, DataScienceAgent, MachineLearningAgent};
pub use dispatcher::{Dispatcher, DocumentOutcome, RunReport};
pub use error::DispatchError;
pub use rules::{AgentVariant, KeywordRule, default_rules, route};
pub use runtime::{DEFAULT_MODEL, DEFAULT_QUESTION, QaRuntime, QaRuntimeBuilder, RuntimeConfig};
