//! Reading documents from disk.
//!
//! The parser is selected from the file extension; anything unrecognised is
//! treated as JSON. Strict callers use [`load_document`] or
//! [`require_document`]; the lenient [`load_document_or_absent`] collapses
//! every failure to "absent" after logging a warning.

mod loader;
mod parser;

pub use loader::{load_document, load_document_or_absent, require_document};
pub use parser::{DocumentFormat, parse_document};

#[cfg(test)]
mod tests;
