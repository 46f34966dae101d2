//! Extension for mapping foreign errors into `MixinResult` concisely.
//!
//! Replaces `.map_err(|e| Arc::new(MixinError::from(e)))` chains when an error
//! type already converts into [`MixinError`], such as `serde_json::Error`.
//!
//! # Examples
//!
//! ```
//! use config_mixin::{MixinResult, MixinResultExt};
//!
//! fn render() -> MixinResult<String> {
//!     serde_json::to_string(&serde_json::json!({"port": 7890})).into_mixin()
//! }
//! # assert_eq!(render().ok().as_deref(), Some(r#"{"port":7890}"#));
//! ```

use std::sync::Arc;

use crate::{MixinError, MixinResult};

/// Maps any `Result<T, E>` with `E: Into<MixinError>` into a [`MixinResult`].
pub trait MixinResultExt<T> {
    /// Convert the error side into a shared [`MixinError`].
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion.
    fn into_mixin(self) -> MixinResult<T>;
}

impl<T, E> MixinResultExt<T> for Result<T, E>
where
    E: Into<MixinError>,
{
    fn into_mixin(self) -> MixinResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
