//! Emission of the merged document.

use std::io::Write;

use camino::Utf8Path;
use config_mixin::Document;
use config_mixin::render::{write_document, write_document_to_path};

use crate::error::CliError;

/// Write `document` to `destination`, or to `stdout` when none is set.
///
/// # Errors
///
/// Returns [`CliError::Document`] when serialisation or the write fails.
pub fn emit<W: Write>(
    document: &Document,
    destination: Option<&Utf8Path>,
    stdout: W,
) -> Result<(), CliError> {
    match destination {
        Some(path) => {
            write_document_to_path(document, path.as_std_path())?;
            tracing::debug!(%path, "wrote merged document");
        }
        None => write_document(document, stdout)?,
    }
    Ok(())
}
