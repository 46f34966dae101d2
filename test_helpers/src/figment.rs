//! Environment isolation built on `figment::Jail`.
//!
//! The jail serialises access to process-global state, restores every
//! variable it sets, and runs the closure inside a scratch working directory.

use anyhow::{Result, anyhow};

/// Runs `f` inside a [`figment::Jail`] with `vars` exported, returning the
/// closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
///
/// # Examples
///
/// ```
/// use test_helpers::figment::with_env;
///
/// let value = with_env(&[("MERGE_CONFIG_STRICT", "true")], |_| {
///     Ok(std::env::var("MERGE_CONFIG_STRICT").unwrap_or_default())
/// })?;
/// assert_eq!(value, "true");
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        for (key, value) in vars {
            jail.set_env(key, value);
        }
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error into a [`figment::Error`] so `?` works
/// inside jail closures.
pub fn jail_error<E: std::fmt::Display>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}
