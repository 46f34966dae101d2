//! Error types for `merge-config`.

use std::sync::Arc;

use config_mixin::MixinError;
use thiserror::Error;

/// Failures that end an invocation with a non-zero status.
///
/// In the default lenient mode only output failures end a run; the remaining
/// variants are fatal in strict mode only.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading an input or writing the result failed.
    #[error(transparent)]
    Document(#[from] Arc<MixinError>),

    /// Settings could not be resolved from the environment.
    #[error("failed to resolve settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// Strict mode requires both operands.
    #[error("expected base and mixin documents but received {0} operand(s)")]
    MissingOperands(usize),
}
