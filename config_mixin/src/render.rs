//! Serialisation of merged documents.
//!
//! Output is pretty-printed JSON with two-space indentation. Non-ASCII text is
//! written literally rather than as `\u` escapes.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::{Document, MixinError, MixinResult, MixinResultExt};

/// Render `document` as pretty JSON without a trailing newline.
///
/// # Errors
///
/// Returns [`MixinError::Serialize`] if serialisation fails.
///
/// # Examples
///
/// ```rust
/// use config_mixin::render::to_pretty_json;
/// use serde_json::json;
///
/// let text = to_pretty_json(&json!({"name": "香港"}))?;
/// assert_eq!(text, "{\n  \"name\": \"香港\"\n}");
/// # Ok::<_, std::sync::Arc<config_mixin::MixinError>>(())
/// ```
pub fn to_pretty_json(document: &Document) -> MixinResult<String> {
    serde_json::to_string_pretty(document).into_mixin()
}

/// Write `document` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns [`MixinError::Write`] when `writer` fails, for example on a broken
/// pipe, and [`MixinError::Serialize`] when serialisation itself fails.
pub fn write_document<W: Write>(document: &Document, mut writer: W) -> MixinResult<()> {
    serde_json::to_writer_pretty(&mut writer, document).map_err(stream_error)?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(MixinError::write)
}

fn stream_error(err: serde_json::Error) -> Arc<MixinError> {
    if err.is_io() {
        MixinError::write(err.into())
    } else {
        Arc::new(MixinError::Serialize(err))
    }
}

/// Write `document` to the file at `path`, replacing any existing contents.
///
/// # Errors
///
/// Returns [`MixinError::Io`] if the file cannot be created or written.
pub fn write_document_to_path(document: &Document, path: &Path) -> MixinResult<()> {
    let mut text = to_pretty_json(document)?;
    text.push('\n');
    std::fs::write(path, text).map_err(|e| MixinError::io(path, e))
}
