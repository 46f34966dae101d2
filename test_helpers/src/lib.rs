//! Test helpers shared across crates in the config-mixin workspace.
//!
//! - [`documents`] compares documents including key order.
//! - [`fixtures`] writes fixture documents into a temporary directory.
//! - [`figment`] isolates environment variables inside a `figment::Jail`.

pub mod documents;
pub mod figment;
pub mod fixtures;
