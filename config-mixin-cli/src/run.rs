//! Invocation flow shared by the binary and tests.

use std::io::Write;

use config_mixin::{Document, empty_document, merge_documents, try_merge_documents};

use crate::cli::Args;
use crate::error::CliError;
use crate::output::emit;
use crate::settings::MergeSettings;

/// Merge the operands named in `args` and emit the result.
///
/// With fewer than two operands an empty mapping is emitted, unless strict
/// mode is on.
///
/// # Errors
///
/// Returns [`CliError`] for strict-mode failures and when the result cannot
/// be written.
pub fn run<W: Write>(args: &Args, settings: &MergeSettings, stdout: W) -> Result<(), CliError> {
    if !args.ignored.is_empty() {
        tracing::warn!(count = args.ignored.len(), "ignoring surplus operands");
    }
    let merged = merged_document(args, settings)?;
    emit(&merged, settings.output.as_deref(), stdout)
}

/// Emit the empty mapping for an invocation the argument parser rejected.
///
/// Unknown options and options missing their value degrade like any other
/// incomplete invocation. Callers decide beforehand whether strict mode makes
/// the rejection fatal.
///
/// # Errors
///
/// Returns [`CliError::Document`] when the result cannot be written.
pub fn run_rejected<W: Write>(
    error: &clap::Error,
    settings: &MergeSettings,
    stdout: W,
) -> Result<(), CliError> {
    tracing::warn!(
        reason = %error.kind(),
        "invalid arguments; emitting an empty document"
    );
    emit(&empty_document(), settings.output.as_deref(), stdout)
}

fn merged_document(args: &Args, settings: &MergeSettings) -> Result<Document, CliError> {
    let Some((base, mixin)) = args.operands() else {
        if settings.strict {
            return Err(CliError::MissingOperands(args.operand_count()));
        }
        tracing::warn!(
            supplied = args.operand_count(),
            "expected base and mixin documents; emitting an empty document"
        );
        return Ok(empty_document());
    };
    tracing::debug!(%base, %mixin, strict = settings.strict, "merging documents");
    if settings.strict {
        Ok(try_merge_documents(base.as_std_path(), mixin.as_std_path())?)
    } else {
        Ok(merge_documents(base.as_std_path(), mixin.as_std_path()))
    }
}
