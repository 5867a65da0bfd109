//! # HtmlJp Config
//!
//! Credential and model configuration for the HtmlJp translator.
//! This crate holds the API keys and model identifier the translation
//! client uses to authenticate against the Gemini API.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::*;
pub use error::*;

/// Version information for HtmlJp
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
