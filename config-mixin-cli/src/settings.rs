//! Layered runtime settings.
//!
//! Precedence, lowest first: built-in defaults, `MERGE_CONFIG_*` environment
//! variables, command-line flags.

use camino::Utf8PathBuf;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Prefix for environment variables read into [`MergeSettings`].
pub const ENV_PREFIX: &str = "MERGE_CONFIG_";

/// Effective settings for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    /// Report loading failures and missing operands as errors.
    pub strict: bool,
    /// Emit debug diagnostics.
    pub verbose: bool,
    /// Destination file; standard output when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
}

/// Settings supplied on the command line. Unset fields defer to lower layers.
#[derive(Debug, Default, Serialize)]
pub struct SettingsOverrides {
    /// `--strict` when given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    /// `--verbose` when given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    /// `--output` when given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
}

impl MergeSettings {
    /// Resolve settings from defaults, the environment, and `overrides`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Settings`] when an environment value has the wrong
    /// type, for example a sequence in `MERGE_CONFIG_STRICT`.
    pub fn resolve(overrides: &SettingsOverrides) -> Result<Self, CliError> {
        Self::figment(overrides)
            .extract()
            .map_err(|err| CliError::Settings(Box::new(err)))
    }

    /// Resolve settings, falling back to the built-in defaults plus
    /// `overrides` when the environment cannot be read.
    ///
    /// The resolution failure is returned alongside the fallback so callers
    /// can decide whether it is fatal.
    #[must_use]
    pub fn resolve_or_fallback(overrides: &SettingsOverrides) -> (Self, Option<CliError>) {
        Self::resolve(overrides).map_or_else(
            |err| (Self::from_overrides(overrides), Some(err)),
            |settings| (settings, None),
        )
    }

    fn from_overrides(overrides: &SettingsOverrides) -> Self {
        Self {
            strict: overrides.strict.unwrap_or_default(),
            verbose: overrides.verbose.unwrap_or_default(),
            output: overrides.output.clone(),
        }
    }

    fn figment(overrides: &SettingsOverrides) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }
}
