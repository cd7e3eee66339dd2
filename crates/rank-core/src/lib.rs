//! # rank-core
//!
//! Core types, validation, and ID generation for taskrank.
//!
//! This crate provides the foundational types shared across all taskrank crates:
//! - [`entities::TaskRecord`] and the raw form input it is validated from
//! - [`entities::ScoredTask`] and the other shapes returned by the scoring service
//! - Score tiers used for display classification
//! - Session-local task ID generation
//! - Cross-cutting validation errors
//! - Lenient serde adapters for service payloads echoed from hand-edited JSON

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod lenient_serde;

pub use entities::{
    AnalysisReport, ScoredTask, Suggestion, SuggestionReport, TaskDraft, TaskFields, TaskFlags,
    TaskRecord,
};
pub use enums::{DEFAULT_STRATEGY, KNOWN_STRATEGIES, Tier};
pub use errors::ValidationError;
