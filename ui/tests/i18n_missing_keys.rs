use std::collections::{BTreeSet, HashSet};

/// Locales bundled with the UI crate. The fallback comes first.
const LOCALES: &[(&str, &str)] = &[
    ("en-US", include_str!("../i18n/en-US/biocircuit-ui.ftl")),
    ("es-ES", include_str!("../i18n/es-ES/biocircuit-ui.ftl")),
];

/// Message ids defined in a Fluent file, in order of appearance.
/// Comments, terms and continuation lines are skipped.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

#[test]
fn locales_define_the_same_messages_as_fallback() {
    let (_, fallback_src) = LOCALES[0];
    let fallback: BTreeSet<&str> = message_ids(fallback_src).into_iter().collect();
    assert!(!fallback.is_empty(), "fallback defines no messages");

    let mut failures = Vec::new();
    for (locale, src) in &LOCALES[1..] {
        let keys: BTreeSet<&str> = message_ids(src).into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&fallback).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing {missing:?}"));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} defines unknown {extra:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "locale bundles drifted from en-US:\n{}",
        failures.join("\n")
    );
}

#[test]
fn no_locale_defines_a_message_twice() {
    for (locale, src) in LOCALES {
        let mut seen = HashSet::new();
        let dups: Vec<_> = message_ids(src)
            .into_iter()
            .filter(|id| !seen.insert(*id))
            .collect();
        assert!(dups.is_empty(), "{locale} repeats {dups:?}");
    }
}

#[test]
fn no_message_is_left_blank() {
    for (locale, src) in LOCALES {
        for line in src.lines().filter(|l| !l.starts_with([' ', '#'])) {
            if let Some((id, value)) = line.split_once('=') {
                assert!(
                    !value.trim().is_empty(),
                    "{locale}: `{}` has an empty value",
                    id.trim()
                );
            }
        }
    }
}
