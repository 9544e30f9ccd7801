//! Every `t!` key used in the sources must resolve in each bundled locale,
//! and every fallback message must be used somewhere.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

const FTL_FILENAME: &str = "biocircuit-ui.ftl";

/// Message id -> sorted set of `$variables` referenced in its value.
fn parse_messages(content: &str) -> BTreeMap<String, BTreeSet<String>> {
    let id = Regex::new(r"^([a-z][a-z0-9-]*)\s*=(.*)$").unwrap();
    let var = Regex::new(r"\{\s*\$([a-z_]+)\s*\}").unwrap();
    let mut messages = BTreeMap::new();
    for line in content.lines() {
        if let Some(caps) = id.captures(line) {
            let vars = var
                .captures_iter(&caps[2])
                .map(|v| v[1].to_string())
                .collect();
            messages.insert(caps[1].to_string(), vars);
        }
    }
    messages
}

fn source_keys(root: &Path) -> BTreeSet<String> {
    let call = Regex::new(r#"t!\(\s*"([a-z0-9-]+)""#).unwrap();
    let mut keys = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).unwrap().flatten() {
                stack.push(entry.path());
            }
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = fs::read_to_string(&path).unwrap();
            keys.extend(call.captures_iter(&content).map(|c| c[1].to_string()));
        }
    }
    keys
}

fn locales(i18n_root: &Path) -> Vec<String> {
    let mut found: Vec<String> = fs::read_dir(i18n_root)
        .unwrap()
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    found.sort();
    found
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join("i18n");
    let used = source_keys(&crate_root.join("src"));
    assert!(!used.is_empty(), "no t! calls found under src/");

    let fallback =
        parse_messages(&fs::read_to_string(i18n_root.join("en-US").join(FTL_FILENAME)).unwrap());

    let unused: Vec<_> = fallback.keys().filter(|k| !used.contains(*k)).collect();
    assert!(unused.is_empty(), "fallback keys never used: {unused:?}");

    let mut report = Vec::new();
    for locale in locales(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let messages = parse_messages(&fs::read_to_string(&path).unwrap());
        for key in &used {
            match messages.get(key) {
                None => report.push(format!("{locale}: missing `{key}`")),
                Some(vars) if fallback.get(key).is_some_and(|f| f != vars) => {
                    report.push(format!("{locale}: `{key}` uses variables {vars:?}"))
                }
                Some(_) => {}
            }
        }
    }
    assert!(report.is_empty(), "translation problems:\n{}", report.join("\n"));
}
