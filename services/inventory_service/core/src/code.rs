//! Deterministic slug/code generation (§4.7).
//!
//! `code(s)`: lowercase, collapse runs of non-alphanumeric characters into
//! a single hyphen, then strip leading/trailing hyphens. Idempotent:
//! `code(code(s)) == code(s)`.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex is valid"));

pub fn code(s: &str) -> String {
    let lower = s.to_lowercase();
    let collapsed = NON_ALPHANUMERIC_RUN.replace_all(&lower, "-");
    collapsed.trim_matches('-').to_string()
}
