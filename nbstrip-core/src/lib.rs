//! Core library for nbstrip — a cleaner for Jupyter notebook files that have
//! accumulated leftover interactive-widget state.
//!
//! The primary entry point is [`process_file`], which backs up a notebook to a
//! sibling `.bak` file, removes any `widgets` key from cell-level and
//! top-level metadata, and rewrites the notebook in place only when something
//! was actually removed.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    backup::{backup_path, create_backup},
    error::{NbStripError, Result},
    notebook::{read_notebook, write_notebook},
    stripper::{process_file, strip_widgets, ProcessOutcome, StripOutcome, WIDGETS_KEY},
};
