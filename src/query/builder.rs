//! SPARQL query construction for endpoint requests
//!
//! Both builders splice the pattern verbatim, once as the template/head and
//! once as the WHERE clause. No `ORDER BY` is emitted: paging with LIMIT and
//! OFFSET is therefore not guaranteed stable across requests, which keeps
//! large endpoints from sorting their whole result set.

use super::pattern::{NamedGraphSet, TriplePattern};

/// Build the `SELECT COUNT` query used for cardinality estimates.
///
/// Counts are not scoped to named graphs.
pub fn build_count_query(pattern: &TriplePattern) -> String {
    ["SELECT (COUNT(*) as ?total)", "WHERE", pattern.as_str()].join(" ")
}

/// Build a bounded `CONSTRUCT` query for one page of triples.
///
/// Emits one `FROM <uri>` per named graph in order. `LIMIT` appears only for
/// a positive limit and `OFFSET` only for a positive offset.
pub fn build_construct_query(
    pattern: &TriplePattern,
    offset: Option<u64>,
    limit: Option<u64>,
    graphs: &NamedGraphSet,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(6 + graphs.len());
    parts.push("CONSTRUCT".to_string());
    parts.push(pattern.to_string());
    for graph in graphs.iter() {
        parts.push(format!("FROM <{}>", graph));
    }
    parts.push("WHERE".to_string());
    parts.push(pattern.to_string());
    if let Some(limit) = limit.filter(|&n| n > 0) {
        parts.push(format!("LIMIT {}", limit));
    }
    if let Some(offset) = offset.filter(|&n| n > 0) {
        parts.push(format!("OFFSET {}", offset));
    }
    parts.join(" ")
}
