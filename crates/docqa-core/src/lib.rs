//! Core abstractions for docqa-rs
//!
//! This crate defines the fundamental traits and types shared across the
//! docqa-rs workspace: the `Agent` contract for document question answering,
//! the `Document` and `QueryResult` value types, and the core error type.

pub mod agent;
pub mod document;
pub mod error;

pub use agent::Agent;
pub use document::{Document, QueryResult};
pub use error::{Error, Result};
