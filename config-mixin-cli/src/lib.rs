//! Library interface for the `merge-config` command.
//!
//! The binary is a thin shell over [`run`]: parse [`cli::Args`], resolve
//! [`settings::MergeSettings`] from defaults, environment and flags, then merge
//! the two operands and emit the result. Arguments the parser rejects go
//! through [`run_rejected`] instead.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
mod run;
pub mod settings;

pub use run::{run, run_rejected};
