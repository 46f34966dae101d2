//! Error types produced while loading, merging and rendering documents.

mod constructors;
mod types;

pub use types::MixinError;
