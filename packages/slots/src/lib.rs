//! Pagefold Slots - divide document contents into named slots.
//!
//! This crate splits documents containing embedded metadata-delimited
//! blocks into named "slots" - contiguous content regions exposed as a
//! mapping for downstream templating - so a single authored page can carry
//! its body, footer, and sidebar fragments without separate files.
//!
//! # Example
//!
//! ```
//! use pagefold_slots::{process, Document, Files, Matter, Options};
//!
//! let mut files = Files::new();
//! files.insert(
//!     "page.md".to_string(),
//!     Document::new("Intro\n---\nslot: footer\n---\nSee you!"),
//! );
//!
//! let report = process(&mut files, &Matter::default(), &Options::default()).unwrap();
//! assert_eq!(report.matched, vec!["page.md".to_string()]);
//!
//! let page = &files["page.md"];
//! assert_eq!(page.contents, "Intro");
//! assert_eq!(page.slot("footer").unwrap().to_string(), "See you!");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`]: Options, defaults, and pattern validation
//! - [`types`]: Core data types (Slot, Document, slot mappings)
//! - [`error`]: Error types and Result alias
//! - [`matter`]: Front-matter delimiter-block parsing
//! - [`splitting`]: Slot splitting and merging logic
//! - [`pipeline`]: The per-run stage over matched documents
//! - [`io`]: Source-tree loading and output writing
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod matter;
pub mod pipeline;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use pipeline::{process, Report};

// Re-export commonly used items
pub use config::{Options, DEFAULT_DELIMITER, DEFAULT_PATTERN, PRIMARY_SLOT};
pub use error::{Result, SlotsError};
pub use matter::{BlockParser, Matter, ParsedBlock};
pub use splitting::{merge_slots, split_slots, MergeOutcome};
pub use types::{Document, Files, Slot, SlotEntry, SlotMap, SlotsField};
