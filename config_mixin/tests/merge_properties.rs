//! Behavioural properties of the document merge.
//!
//! Exercises the published guarantees: idempotence on mapping roots, stable
//! ordering of pre-existing keys, record upsert identity, and the end-to-end
//! proxy configuration scenario.
use anyhow::{Result, anyhow, ensure};
use config_mixin::{Document, merge};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::documents::{ensure_identical, keys, record_names};

#[fixture]
fn proxy_base() -> Document {
    json!({
        "proxies": [{"name": "A", "server": "1.1.1.1"}],
        "rules": ["RULE1", "RULE2"],
    })
}

#[fixture]
fn proxy_mixin() -> Document {
    json!({
        "proxies": [
            {"name": "A", "server": "2.2.2.2"},
            {"name": "B", "server": "3.3.3.3"},
        ],
        "rules": ["RULE0"],
    })
}

#[rstest]
fn proxy_configuration_end_to_end(proxy_base: Document, proxy_mixin: Document) -> Result<()> {
    ensure_identical(
        &merge(proxy_base, &proxy_mixin),
        &json!({
            "proxies": [
                {"name": "A", "server": "2.2.2.2"},
                {"name": "B", "server": "3.3.3.3"},
            ],
            "rules": ["RULE0", "RULE1", "RULE2"],
        }),
    )
}

#[rstest]
#[case::proxies(
    json!({"proxies": [{"name": "A", "port": 1}], "mode": "rule"}),
    json!({"proxies": [{"name": "A", "port": 2}, {"name": "B"}], "dns": {"enable": true}}),
)]
#[case::rules(
    json!({"rules": ["x", "y", "z"], "nested": {"list": [1, 2]}}),
    json!({"rules": ["y", "w"], "nested": {"list": [2, 3], "extra": true}}),
)]
#[case::mismatch(json!({"a": {"b": 1}}), json!({"a": [1], "c": null}))]
fn merging_twice_keeps_keys_and_record_identities(
    #[case] base: Document,
    #[case] mixin: Document,
) -> Result<()> {
    let once = merge(base, &mixin);
    let twice = merge(once.clone(), &mixin);

    ensure!(
        keys(&once) == keys(&twice),
        "key sets differ: {:?} vs {:?}",
        keys(&once),
        keys(&twice)
    );
    for key in keys(&once) {
        ensure!(
            record_names(&once[&key]) == record_names(&twice[&key]),
            "record identities under {key} changed"
        );
    }
    Ok(())
}

#[rstest]
fn prepend_dedupe_is_stable_after_one_pass() -> Result<()> {
    let mixin = json!({"rules": ["y", "w"]});
    let once = merge(json!({"rules": ["x", "y", "z"]}), &mixin);
    let twice = merge(once.clone(), &mixin);
    ensure_identical(&once, &json!({"rules": ["y", "w", "x", "z"]}))?;
    ensure_identical(&twice, &once)
}

#[rstest]
fn base_only_keys_keep_value_and_relative_position() -> Result<()> {
    let base = json!({"first": 1, "shared": {"x": 1}, "middle": [1, 2], "last": "end"});
    let mixin = json!({"new": true, "shared": {"y": 2}});

    let merged = merge(base.clone(), &mixin);

    let merged_keys = keys(&merged);
    let original: Vec<String> = merged_keys
        .iter()
        .filter(|key| base.get(key.as_str()).is_some())
        .cloned()
        .collect();
    ensure!(original == keys(&base), "original keys reordered: {original:?}");
    for key in ["first", "middle", "last"] {
        ensure!(merged[key] == base[key], "{key} changed");
    }
    ensure!(
        merged_keys.last().map(String::as_str) == Some("new"),
        "new keys must be appended: {merged_keys:?}"
    );
    Ok(())
}

#[rstest]
fn upsert_yields_one_record_per_matched_name() -> Result<()> {
    let base = json!({"groups": [
        {"name": "auto", "type": "url-test", "proxies": ["A"]},
        {"name": "manual", "type": "select"},
    ]});
    let mixin = json!({"groups": [
        {"name": "manual", "proxies": ["B"]},
        {"name": "fallback", "type": "fallback"},
        {"name": "extra"},
    ]});

    let merged = merge(base, &mixin);

    ensure!(
        record_names(&merged["groups"]) == [json!("auto"), json!("manual"), json!("fallback"), json!("extra")],
        "unexpected record order {:?}",
        record_names(&merged["groups"])
    );
    let manual = merged["groups"]
        .as_array()
        .and_then(|groups| groups.iter().find(|group| group["name"] == "manual"))
        .ok_or_else(|| anyhow!("manual group missing"))?;
    ensure_identical(
        manual,
        &json!({"name": "manual", "type": "select", "proxies": ["B"]}),
    )
}

#[rstest]
#[case::scalar_replaced_by_mapping(json!(5), json!({"a": 1}), json!({"a": 1}))]
#[case::mapping_replaced_by_null(json!({"a": 1}), json!(null), json!(null))]
#[case::empty_mixin_sequence(json!([1, 2, 3]), json!([]), json!([1, 2, 3]))]
#[case::scalar_sequences(json!(["x", "y", "z"]), json!(["y", "w"]), json!(["y", "w", "x", "z"]))]
fn documented_examples_hold(
    #[case] base: Document,
    #[case] mixin: Document,
    #[case] expected: Document,
) -> Result<()> {
    ensure_identical(&merge(base, &mixin), &expected)
}

#[rstest]
fn repeated_pairwise_merges_layer_documents() -> Result<()> {
    let layers = [
        json!({"port": 1, "rules": ["a"]}),
        json!({"port": 2, "rules": ["b"]}),
        json!({"rules": ["c"], "mode": "global"}),
    ];
    let merged = layers
        .iter()
        .fold(json!({}), |acc, layer| merge(acc, layer));
    ensure_identical(
        &merged,
        &json!({"port": 2, "rules": ["c", "b", "a"], "mode": "global"}),
    )
}
