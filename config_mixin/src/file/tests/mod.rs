//! Shared helpers for file module tests along with focused submodules.

use anyhow::{Result, anyhow};

mod parser_tests;

fn to_anyhow<T>(result: crate::MixinResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}
