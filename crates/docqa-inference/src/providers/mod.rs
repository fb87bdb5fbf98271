//! Concrete provider implementations

#[cfg(feature = "hf")]
pub mod hf;

#[cfg(feature = "hf")]
pub use hf::HfInferenceProvider;
