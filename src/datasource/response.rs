//! Typed view of a `SELECT (COUNT(*) as ?total)` JSON result

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CountResults {
    results: ResultSet,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    bindings: Vec<CountBinding>,
}

#[derive(Debug, Deserialize)]
struct CountBinding {
    total: BoundTerm,
}

#[derive(Debug, Deserialize)]
struct BoundTerm {
    value: String,
}

/// Extract `results.bindings[0].total.value` as an integer.
///
/// Returns `None` when the body is not JSON, the binding is missing, or the
/// value is not a decimal integer.
pub(crate) fn parse_total(body: &str) -> Option<u64> {
    let parsed: CountResults = serde_json::from_str(body).ok()?;
    let first = parsed.results.bindings.into_iter().next()?;
    first.total.value.trim().parse().ok()
}
