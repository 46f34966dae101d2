//! Command-line interface definitions for `merge-config`.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;

use crate::settings::SettingsOverrides;

/// Parsed CLI arguments for `merge-config`.
///
/// Both operands are optional so that an incomplete invocation still produces
/// a document instead of a usage error.
#[derive(Debug, Parser)]
#[command(name = "merge-config")]
#[command(about = "Deep-merge a mixin configuration document over a base document")]
#[command(version)]
pub struct Args {
    /// Document being overridden or extended.
    #[arg(value_name = "BASE")]
    pub base: Option<Utf8PathBuf>,
    /// Document supplying the overrides.
    #[arg(value_name = "MIXIN")]
    pub mixin: Option<Utf8PathBuf>,
    /// Surplus operands, accepted and ignored.
    #[arg(value_name = "IGNORED", hide = true)]
    pub ignored: Vec<Utf8PathBuf>,
    /// Write the merged document to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
    /// Fail on unreadable documents or missing operands.
    #[arg(long = "strict")]
    pub is_strict: bool,
    /// Emit debug diagnostics on standard error.
    #[arg(short = 'v', long = "verbose")]
    pub is_verbose: bool,
}

impl Args {
    /// Returns the base and mixin paths when both were supplied.
    #[must_use]
    pub fn operands(&self) -> Option<(&Utf8Path, &Utf8Path)> {
        Some((self.base.as_deref()?, self.mixin.as_deref()?))
    }

    /// Number of positional operands supplied, including ignored ones.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        usize::from(self.base.is_some()) + usize::from(self.mixin.is_some()) + self.ignored.len()
    }

    /// Settings explicitly requested on the command line.
    ///
    /// Flags that were not given stay unset so that environment values are
    /// not overridden by clap defaults.
    #[must_use]
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            strict: self.is_strict.then_some(true),
            verbose: self.is_verbose.then_some(true),
            output: self.output.clone(),
        }
    }
}
