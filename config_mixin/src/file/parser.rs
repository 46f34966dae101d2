//! Format-specific parsing of document text.

use std::path::Path;

use crate::{Document, MixinError, MixinResult};

/// Serialisation formats understood by the loader.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentFormat {
    /// JSON, the default for unknown extensions.
    Json,
    /// JSON5 (`.json5`), requires the `json5` feature.
    Json5,
    /// TOML (`.toml`), requires the `toml` feature.
    Toml,
    /// YAML (`.yaml`, `.yml`), requires the `yaml` feature.
    Yaml,
}

impl DocumentFormat {
    /// Pick the format for `path` from its extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_mixin::file::DocumentFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), DocumentFormat::Yaml);
    /// assert_eq!(DocumentFormat::from_path(Path::new("a.conf")), DocumentFormat::Json);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json5") => Self::Json5,
            Some("toml") => Self::Toml,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Cargo feature gating this format, if any.
    #[must_use]
    pub const fn feature(self) -> Option<&'static str> {
        match self {
            Self::Json => None,
            Self::Json5 => Some("json5"),
            Self::Toml => Some("toml"),
            Self::Yaml => Some("yaml"),
        }
    }
}

/// Parse `data` according to the extension of `path`.
///
/// # Errors
///
/// Returns [`MixinError::File`] when the text is malformed or when the format's
/// feature is disabled.
pub fn parse_document(path: &Path, data: &str) -> MixinResult<Document> {
    let format = DocumentFormat::from_path(path);
    tracing::trace!(path = %path.display(), ?format, "parsing document");
    match format {
        DocumentFormat::Json => serde_json::from_str(data).map_err(|e| MixinError::file(path, e)),
        DocumentFormat::Json5 => parse_json5(path, data),
        DocumentFormat::Toml => parse_toml(path, data),
        DocumentFormat::Yaml => parse_yaml(path, data),
    }
}

#[cfg(feature = "json5")]
fn parse_json5(path: &Path, data: &str) -> MixinResult<Document> {
    json5::from_str(data).map_err(|e| MixinError::file(path, e.to_string()))
}

#[cfg(not(feature = "json5"))]
fn parse_json5(path: &Path, _data: &str) -> MixinResult<Document> {
    Err(feature_disabled(path, DocumentFormat::Json5))
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Path, data: &str) -> MixinResult<Document> {
    toml::from_str(data).map_err(|e| MixinError::file(path, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Path, _data: &str) -> MixinResult<Document> {
    Err(feature_disabled(path, DocumentFormat::Toml))
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Path, data: &str) -> MixinResult<Document> {
    serde_saphyr::from_str_with_options(
        data,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
    .map_err(|e| MixinError::file(path, e.to_string()))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Path, _data: &str) -> MixinResult<Document> {
    Err(feature_disabled(path, DocumentFormat::Yaml))
}

#[cfg(not(all(feature = "json5", feature = "toml", feature = "yaml")))]
fn feature_disabled(path: &Path, format: DocumentFormat) -> std::sync::Arc<MixinError> {
    let feature = format.feature().unwrap_or("default");
    MixinError::file(
        path,
        std::io::Error::other(format!(
            "{feature} feature disabled: enable the '{feature}' feature to support this file format"
        )),
    )
}
