//! Structural grammar for the complete 18-character identifier.

use std::sync::LazyLock;

use regex::Regex;

use curp_model::SexPolicy;

/// 4 letters, 6 digits, sex code, 5 letters, 2 alphanumerics.
static BINARY_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[0-9]{6}[HM][A-Z]{5}[0-9A-Z]{2}$").expect("valid CURP grammar")
});

static INCLUSIVE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[0-9]{6}[HMX][A-Z]{5}[0-9A-Z]{2}$").expect("valid CURP grammar")
});

/// The compiled grammar for the given sex policy.
pub fn grammar(policy: SexPolicy) -> &'static Regex {
    match policy {
        SexPolicy::Binary => &BINARY_GRAMMAR,
        SexPolicy::Inclusive => &INCLUSIVE_GRAMMAR,
    }
}

/// Whether the normalized string matches the full positional grammar.
///
/// The anchors make this an exact-length test: no partial-length string is
/// structurally valid.
pub fn matches_grammar(normalized: &str, policy: SexPolicy) -> bool {
    grammar(policy).is_match(normalized)
}
