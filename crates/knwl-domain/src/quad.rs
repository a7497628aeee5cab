//! Statements and statement patterns
//!
//! A [`Quad`] is one subject-predicate-object statement, optionally placed in
//! a named graph. A [`QuadPattern`] leaves any of those positions open and is
//! what backends match against.

use crate::namespace::{Namespace, Uri};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Object position of a statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Term {
    /// A reference to another resource
    Iri(Uri),
    /// A plain literal value
    Literal(String),
}

impl Term {
    /// Build a literal term
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    /// The identifier, when this term is one
    pub fn as_uri(&self) -> Option<&Uri> {
        match self {
            Term::Iri(uri) => Some(uri),
            Term::Literal(_) => None,
        }
    }

    /// Raw text of the term: the identifier or the literal value
    pub fn lexical(&self) -> &str {
        match self {
            Term::Iri(uri) => uri.as_str(),
            Term::Literal(value) => value,
        }
    }

    /// Whether this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Display form: short form of an identifier, lexical value of a literal
    pub fn short_form(&self, root: &Namespace) -> String {
        match self {
            Term::Iri(uri) => root.short_form(uri.as_str()),
            Term::Literal(value) => value.clone(),
        }
    }
}

impl From<Uri> for Term {
    fn from(uri: Uri) -> Self {
        Term::Iri(uri)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(uri) => write!(f, "<{}>", uri),
            Term::Literal(value) => write!(f, "{:?}", value),
        }
    }
}

/// A single statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quad {
    /// Statement subject
    pub subject: Uri,
    /// Statement predicate
    pub predicate: Uri,
    /// Statement object
    pub object: Term,
    /// Named graph, `None` for the default graph
    #[serde(default)]
    pub graph: Option<String>,
}

impl Quad {
    /// Create a statement in the default graph
    pub fn new(subject: Uri, predicate: Uri, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
            graph: None,
        }
    }

    /// Place the statement in a named graph
    pub fn in_graph(mut self, graph: impl Into<String>) -> Self {
        self.graph = Some(graph.into());
        self
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> {}", self.subject, self.predicate, self.object)?;
        if let Some(graph) = &self.graph {
            write!(f, " <{}>", graph)?;
        }
        f.write_str(" .")
    }
}

/// Statement pattern, `None` positions match anything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadPattern {
    /// Subject to match
    pub subject: Option<Uri>,
    /// Predicate to match
    pub predicate: Option<Uri>,
    /// Object to match
    pub object: Option<Term>,
    /// Graph to match
    pub graph: Option<String>,
}

impl QuadPattern {
    /// Pattern matching every statement
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict the subject
    pub fn subject(mut self, subject: Uri) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Restrict the predicate
    pub fn predicate(mut self, predicate: Uri) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Restrict the object
    pub fn object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Restrict the graph
    pub fn graph(mut self, graph: impl Into<String>) -> Self {
        self.graph = Some(graph.into());
        self
    }

    /// Whether a statement satisfies every fixed position
    pub fn matches(&self, quad: &Quad) -> bool {
        self.subject.as_ref().is_none_or(|s| *s == quad.subject)
            && self.predicate.as_ref().is_none_or(|p| *p == quad.predicate)
            && self.object.as_ref().is_none_or(|o| *o == quad.object)
            && self
                .graph
                .as_ref()
                .is_none_or(|g| quad.graph.as_deref() == Some(g.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary;

    fn uri(value: &str) -> Uri {
        Uri::new(value).unwrap()
    }

    #[test]
    fn test_term_short_form() {
        let root = Namespace::new("http://example.org/").unwrap();
        assert_eq!(Term::Iri(uri("http://example.org/Dog")).short_form(&root), "Dog");
        assert_eq!(Term::literal("A dog").short_form(&root), "A dog");
    }

    #[test]
    fn test_pattern_matches() {
        let quad = Quad::new(uri("http://example.org/Dog"), vocabulary::rdf_type(), vocabulary::owl_class());

        assert!(QuadPattern::any().matches(&quad));
        assert!(QuadPattern::any()
            .predicate(vocabulary::rdf_type())
            .object(vocabulary::owl_class())
            .matches(&quad));
        assert!(!QuadPattern::any()
            .object(vocabulary::owl_object_property())
            .matches(&quad));
        assert!(!QuadPattern::any().graph("g1").matches(&quad));
        assert!(QuadPattern::any().graph("g1").matches(&quad.clone().in_graph("g1")));
    }

    #[test]
    fn test_quad_display() {
        let quad = Quad::new(uri("http://example.org/Dog"), vocabulary::label(), Term::literal("Dog"));
        assert_eq!(
            quad.to_string(),
            "<http://example.org/Dog> <http://www.w3.org/2000/01/rdf-schema#label> \"Dog\" ."
        );
    }
}
