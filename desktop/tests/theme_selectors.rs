#![cfg(test)]
//! Selectors the wizard views render must stay in the shared theme. This is a
//! substring check, not a CSS parser; update the list alongside the markup.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    ".wizard--upload",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".button--block",
    // Intro
    ".intro__logo",
    ".intro__crack",
    ".intro--drop",
    ".intro--impact",
    ".intro--settle",
    ".intro--fade",
    // Upload
    ".dropzone",
    ".upload__image-wrap",
    ".upload__error",
    ".pin__head",
    ".pin__stem",
    // Questions
    ".question__title--shake",
    ".question__underline",
    ".question__input",
    ".choice--yes",
    ".choice--no",
    ".choice--selected",
    // Result
    ".result__score",
    ".result__recap-row",
    ".result--declined",
    // Overlay
    ".overlay__svg",
    ".overlay__cell",
    ".overlay__route",
    ".overlay__route--squiggly",
    ".overlay__branch",
    ".overlay__pin",
    // Motion
    "@keyframes shake",
    "@keyframes draw",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .collect();

    assert!(
        missing.is_empty(),
        "missing {} selector(s) in shared theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "theme looks truncated ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn overlay_branches_read_their_reveal_fraction() {
    // OverlayPanel sets `--reveal` inline on each branch path.
    assert!(THEME_CSS.contains("var(--reveal)"));
}
