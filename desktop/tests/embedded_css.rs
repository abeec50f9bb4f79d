#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present and still
//! carries the layout rules the sidebar shell depends on.
//!
//! If you relocate the theme, update both this test and the `include_str!`
//! constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_theme_has_rules() {
    let rules = EMBEDDED_CSS.matches('{').count();
    assert!(
        rules >= 5,
        "ui/assets/theme/main.css has only {rules} rule blocks; the desktop window would render unstyled"
    );
}

#[test]
fn embedded_css_contains_layout_tokens() {
    let required = [":root", "body {", ".row {", ".col-md-10 {", ".page {", "@media (max-width: 720px)"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
