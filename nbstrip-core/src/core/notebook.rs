//! Reading and writing notebook documents.
//!
//! Notebooks are handled as untyped JSON trees rather than a typed schema:
//! the tool mutates two specific keys and passes everything else through
//! unexamined, so unknown fields, cell shapes, and the declared
//! `nbformat`/`nbformat_minor` version all round-trip unchanged.

use crate::{NbStripError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs;
use std::path::Path;

/// Parses the file at `path` into a JSON tree.
///
/// # Errors
///
/// Returns [`NbStripError::Json`] if the content is not valid JSON, or
/// [`NbStripError::InvalidNotebook`] if the top level is not a JSON object.
pub fn read_notebook(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&text)?;
    if !doc.is_object() {
        return Err(NbStripError::InvalidNotebook(format!(
            "{}: top level is not a JSON object",
            path.display()
        )));
    }
    Ok(doc)
}

/// Serializes `doc` back to `path`, overwriting it.
///
/// Output uses one-space indentation and a trailing newline, the on-disk
/// convention of the Jupyter nbformat writer, so rewrites produce minimal
/// diffs against notebooks saved by Jupyter itself.
pub fn write_notebook(path: &Path, doc: &Value) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    buf.push(b'\n');
    fs::write(path, buf)?;
    Ok(())
}
