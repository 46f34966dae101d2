//! Format selection and per-format parsing.

use super::to_anyhow;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::json;
use std::path::Path;
use test_helpers::documents::ensure_identical;

use crate::file::{DocumentFormat, parse_document};

#[rstest]
#[case("config.json", DocumentFormat::Json)]
#[case("config.JSON", DocumentFormat::Json)]
#[case("config", DocumentFormat::Json)]
#[case("config.txt", DocumentFormat::Json)]
#[case("config.json5", DocumentFormat::Json5)]
#[case("config.toml", DocumentFormat::Toml)]
#[case("config.yaml", DocumentFormat::Yaml)]
#[case("config.Yml", DocumentFormat::Yaml)]
fn format_follows_extension(#[case] path: &str, #[case] expected: DocumentFormat) {
    assert_eq!(DocumentFormat::from_path(Path::new(path)), expected);
}

#[rstest]
fn json_keeps_multibyte_text() -> Result<()> {
    let parsed = to_anyhow(parse_document(
        Path::new("names.json"),
        r#"{"name": "香港节点"}"#,
    ))?;
    ensure_identical(&parsed, &json!({"name": "香港节点"}))
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_tables_become_mappings() -> Result<()> {
    let parsed = to_anyhow(parse_document(
        Path::new("config.toml"),
        "port = 7890\nrules = [\"RULE1\"]\n\n[dns]\nenable = true\n",
    ))?;
    ensure_identical(
        &parsed,
        &json!({"port": 7890, "rules": ["RULE1"], "dns": {"enable": true}}),
    )
}

#[cfg(feature = "toml")]
#[rstest]
fn malformed_toml_names_the_file() -> Result<()> {
    let Err(err) = parse_document(Path::new("broken.toml"), "port = ") else {
        return Err(anyhow!("malformed TOML should not parse"));
    };
    ensure!(err.to_string().contains("broken.toml"), "path missing: {err}");
    Ok(())
}

#[cfg(feature = "json5")]
#[rstest]
fn json5_allows_comments_and_trailing_commas() -> Result<()> {
    let parsed = to_anyhow(parse_document(
        Path::new("config.json5"),
        "{\n  // proxy port\n  port: 7890,\n}\n",
    ))?;
    ensure_identical(&parsed, &json!({"port": 7890}))
}

#[cfg(not(feature = "json5"))]
#[rstest]
fn disabled_json5_reports_the_feature() -> Result<()> {
    let Err(err) = parse_document(Path::new("config.json5"), "{}") else {
        return Err(anyhow!("json5 should be unavailable"));
    };
    ensure!(err.to_string().contains("json5 feature disabled"), "got {err}");
    Ok(())
}

#[cfg(not(feature = "yaml"))]
#[rstest]
fn disabled_yaml_reports_the_feature() -> Result<()> {
    let Err(err) = parse_document(Path::new("config.yaml"), "port: 1") else {
        return Err(anyhow!("yaml should be unavailable"));
    };
    ensure!(err.to_string().contains("yaml feature disabled"), "got {err}");
    Ok(())
}
