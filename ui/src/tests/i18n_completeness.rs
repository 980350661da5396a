use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{content, Locale};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "farmsmart-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// What the loader returns for an id it cannot resolve.
const MISSING_MARKER: &str = "No localization for id";

/// Extract message IDs from a Fluent file: any `<identifier> =` line that is
/// not a comment or a term.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((maybe_id, _)) = line.split_once('=') {
            let id = maybe_id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal ids passed to the `t("...")` lookup closure in `content.rs`.
/// Ids assembled with `format!` are covered by the rendered-bundle check below.
fn literal_ids_in(source: &Path) -> BTreeSet<String> {
    let text = fs::read_to_string(source).expect("read content.rs");
    let mut found = BTreeSet::new();
    let mut rest = text.as_str();
    while let Some(pos) = rest.find("t(\"") {
        rest = &rest[pos + 3..];
        if let Some(end) = rest.find('"') {
            let id = &rest[..end];
            if id.contains('-') && id.chars().all(valid_key_char) {
                found.insert(id.to_string());
            }
            rest = &rest[end..];
        }
    }
    found
}

fn read_keys(locale_dir: &str) -> BTreeSet<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(I18N_DIR)
        .join(locale_dir)
        .join(FTL_FILENAME);
    let raw = fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {path:?}: {err}"));
    parse_ftl_keys(&raw)
}

fn collect_strings(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::String(s) => out.push(s.clone()),
        serde_json::Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        serde_json::Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        _ => {}
    }
}

#[test]
fn literal_ids_exist_in_fallback() {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/content.rs");
    let used = literal_ids_in(&source);
    assert!(used.len() > 50, "suspiciously few ids found: {}", used.len());

    let fallback = read_keys("en-US");
    let missing: Vec<_> = used.difference(&fallback).collect();
    assert!(missing.is_empty(), "ids missing from en-US: {missing:?}");
}

#[test]
fn every_locale_has_every_fallback_key() {
    let fallback = read_keys("en-US");
    for locale in Locale::ALL {
        let keys = read_keys(locale.language_tag());
        let missing: Vec<_> = fallback.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&fallback).collect();
        assert!(missing.is_empty(), "{locale}: missing {missing:?}");
        assert!(extra.is_empty(), "{locale}: unknown {extra:?}");
    }
}

#[test]
fn rendered_bundles_have_no_unresolved_ids() {
    for locale in Locale::ALL {
        let json = serde_json::to_value(content(locale)).expect("bundle serializes");
        let mut strings = Vec::new();
        collect_strings(&json, &mut strings);

        let unresolved: Vec<_> = strings
            .iter()
            .filter(|s| s.contains(MISSING_MARKER) || s.is_empty())
            .collect();
        assert!(unresolved.is_empty(), "{locale}: {unresolved:?}");
    }
}

#[test]
fn hindi_bundle_is_translated() {
    let en = content(Locale::En);
    let hi = content(Locale::Hi);
    assert_ne!(en.hero.title, hi.hero.title);
    assert_ne!(en.dashboard.logout, hi.dashboard.logout);
    // Shared values such as stats and icons stay identical.
    assert_eq!(en.stats[1].number, hi.stats[1].number);
}
