//! Shared utilities for docqa-rs
//!
//! This crate provides common functionality used across the docqa-rs
//! workspace. Today that is tracing setup only.

pub mod logging;

pub use logging::init_tracing;
