//! Triple patterns and named-graph scopes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A SPARQL graph-pattern fragment such as `{?s ?p ?o}`.
///
/// Treated as an opaque string: two patterns are equal iff their text is
/// identical. No normalization or validation is performed, so a malformed
/// pattern produces a malformed query that the endpoint rejects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriplePattern(String);

impl TriplePattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Render a single-triple pattern from optional terms.
    ///
    /// Absent terms become the variables `?s`, `?p` and `?o`. Literals
    /// (`"..."`), blank nodes (`_:b`) and variables (`?x`) are spliced as
    /// given; anything else is treated as an IRI and wrapped in `<...>`.
    pub fn from_terms(
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&str>,
    ) -> Self {
        Self(format!(
            "{{{} {} {}}}",
            encode_term(subject, "?s"),
            encode_term(predicate, "?p"),
            encode_term(object, "?o"),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn encode_term(term: Option<&str>, variable: &str) -> String {
    match term {
        None => variable.to_string(),
        Some(t) if t.starts_with('"') || t.starts_with("_:") || t.starts_with('?') => {
            t.to_string()
        }
        Some(t) => format!("<{}>", t),
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TriplePattern {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TriplePattern {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for TriplePattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered named graphs a datasource is scoped to.
///
/// Fixed at construction. An empty set means the default graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedGraphSet(Vec<String>);

impl NamedGraphSet {
    pub fn new(graphs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(graphs.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compare_by_text() {
        assert_eq!(TriplePattern::new("{?s ?p ?o}"), TriplePattern::from("{?s ?p ?o}"));
        assert_ne!(TriplePattern::new("{?s ?p ?o}"), TriplePattern::new("{ ?s ?p ?o }"));
    }

    #[test]
    fn from_terms_uses_variables_for_missing_terms() {
        let pattern = TriplePattern::from_terms(None, None, None);
        assert_eq!(pattern.as_str(), "{?s ?p ?o}");
    }

    #[test]
    fn from_terms_wraps_iris_and_keeps_literals() {
        let pattern = TriplePattern::from_terms(
            Some("http://vivo.example.org/individual/n123"),
            Some("http://www.w3.org/2000/01/rdf-schema#label"),
            Some("\"Jane Doe\"@en"),
        );
        assert_eq!(
            pattern.as_str(),
            "{<http://vivo.example.org/individual/n123> \
             <http://www.w3.org/2000/01/rdf-schema#label> \"Jane Doe\"@en}"
        );
    }

    #[test]
    fn from_terms_keeps_blank_nodes() {
        let pattern = TriplePattern::from_terms(Some("_:b0"), None, None);
        assert_eq!(pattern.as_str(), "{_:b0 ?p ?o}");
    }

    #[test]
    fn graph_set_preserves_order() {
        let graphs = NamedGraphSet::new(["http://g2", "http://g1"]);
        let collected: Vec<&str> = graphs.iter().collect();
        assert_eq!(collected, vec!["http://g2", "http://g1"]);
        assert!(NamedGraphSet::empty().is_empty());
    }
}
