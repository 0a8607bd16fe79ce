//! Core types for glux, the Android font constant generator.
//!
//! Provides the pipeline data model ([`model::GenerationRequest`], [`model::FontAsset`]),
//! the shared error type, the ERROR/NOTE diagnostics channel, Java naming rules,
//! and project configuration loaded from `.glux/config.toml`.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod java;
pub mod model;

pub use error::{GluxError, Result};
