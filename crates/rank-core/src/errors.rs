//! Cross-cutting error types for taskrank.
//!
//! Only local input problems live here. Failures talking to the scoring
//! service are defined in `rank-client`, and the binary converges everything
//! into `anyhow` at its boundary.

use thiserror::Error;

/// Local input that cannot be repaired by substituting a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The task title was empty or whitespace-only.
    #[error("title required")]
    TitleRequired,
}
