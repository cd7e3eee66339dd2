//! # rank-session
//!
//! Session-scoped state for one interactive taskrank user.
//!
//! A [`Session`] owns everything the user sees and edits:
//! - the local [`TaskCollection`] built from form input
//! - the editable JSON preview that feeds analysis
//! - the message line
//! - the results region of classified [`TaskCard`]s
//!
//! Each user action maps to one handler method on [`Session`]. The preview
//! text, not the collection, is what gets analyzed: the collection only
//! refreshes the preview when a task is added.

mod collection;
mod message;
mod preview;
mod render;
mod session;

pub use collection::TaskCollection;
pub use message::{Message, MessageKind};
pub use preview::render_preview;
pub use render::{
    MISSING_PLACEHOLDER, NO_RESULTS_TEXT, NO_TITLE_PLACEHOLDER, ResultsRegion, TaskCard, render,
};
pub use session::{AnalysisSummary, Session};
