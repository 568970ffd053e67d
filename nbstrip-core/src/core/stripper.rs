//! Removal of `widgets` metadata from notebook documents.

use crate::core::backup::create_backup;
use crate::core::notebook::{read_notebook, write_notebook};
use crate::Result;
use log::{debug, info};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Metadata key written by interactive-display extensions (ipywidgets) and
/// removed by this tool.
pub const WIDGETS_KEY: &str = "widgets";

/// What [`strip_widgets`] removed from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripOutcome {
    /// Indices of cells whose `metadata.widgets` was removed, in document order.
    pub removed_cells: Vec<usize>,
    /// Whether the top-level `metadata.widgets` was removed.
    pub removed_top_level: bool,
}

impl StripOutcome {
    /// True iff anything was removed from the document.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.removed_top_level || !self.removed_cells.is_empty()
    }
}

/// Result of processing one input path.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The path does not reference an existing file; nothing was done.
    Skipped,
    /// A backup was made but the document contained no `widgets` metadata;
    /// the original file was left untouched.
    NoChange {
        /// Path of the backup created before parsing.
        backup: PathBuf,
    },
    /// A backup was made, `widgets` metadata was removed, and the document
    /// was rewritten in place.
    Patched {
        /// Path of the backup created before parsing.
        backup: PathBuf,
        /// What was removed.
        outcome: StripOutcome,
    },
}

/// Removes the `widgets` key from each cell's metadata and from the
/// document's top-level metadata, in place.
///
/// Documents without a `cells` array, non-object cells, and cells without a
/// `metadata` object are left untouched; no fields are synthesized.
pub fn strip_widgets(doc: &mut Value) -> StripOutcome {
    let mut outcome = StripOutcome::default();

    if let Some(cells) = doc.get_mut("cells").and_then(Value::as_array_mut) {
        for (index, cell) in cells.iter_mut().enumerate() {
            if let Some(meta) = cell.get_mut("metadata").and_then(Value::as_object_mut) {
                // shift_remove: with preserve_order a plain remove swaps the
                // last key into the hole, reordering the surviving keys.
                if meta.shift_remove(WIDGETS_KEY).is_some() {
                    debug!("removed metadata.widgets from cell {index}");
                    outcome.removed_cells.push(index);
                }
            }
        }
    }

    if let Some(meta) = doc.get_mut("metadata").and_then(Value::as_object_mut) {
        if meta.shift_remove(WIDGETS_KEY).is_some() {
            debug!("removed top-level metadata.widgets");
            outcome.removed_top_level = true;
        }
    }

    outcome
}

/// Processes one notebook file: backup, strip, conditional write-back.
///
/// A missing file short-circuits to [`ProcessOutcome::Skipped`] with no side
/// effects. Otherwise the file is first copied to its `.bak` sibling,
/// unconditionally, then parsed and stripped; the original path is rewritten
/// only when a `widgets` key was actually removed.
///
/// # Errors
///
/// Parse failures and filesystem failures propagate to the caller; there is
/// no recovery beyond the missing-file skip.
pub fn process_file(path: &Path) -> Result<ProcessOutcome> {
    if !path.exists() {
        info!("skipping missing file {}", path.display());
        return Ok(ProcessOutcome::Skipped);
    }

    let backup = create_backup(path)?;

    let mut doc = read_notebook(path)?;
    let outcome = strip_widgets(&mut doc);

    if outcome.changed() {
        write_notebook(path, &doc)?;
        info!("patched {}", path.display());
        Ok(ProcessOutcome::Patched { backup, outcome })
    } else {
        info!("no widget metadata in {}", path.display());
        Ok(ProcessOutcome::NoChange { backup })
    }
}
