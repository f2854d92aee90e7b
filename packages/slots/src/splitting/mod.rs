//! Slot splitting and merging for matched documents.
//!
//! The splitter divides raw text into an ordered slot sequence; the merger
//! reconciles that sequence with a document's existing state.

mod merger;
mod splitter;

pub use merger::{merge_slots, MergeOutcome};
pub use splitter::split_slots;
