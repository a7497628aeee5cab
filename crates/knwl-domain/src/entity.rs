//! Typed ontology entities
//!
//! Entities are transient projections of the statements held in a store.
//! They are never written back: the statements remain the source of truth.

use crate::namespace::Namespace;
use crate::vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of ontology element declared by a type statement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OntologyType {
    /// `owl:Class`
    Class,
    /// `owl:DatatypeProperty`
    DatatypeProperty,
    /// `owl:ObjectProperty`
    ObjectProperty,
    /// Any other declared type
    Other(String),
    /// Several type statements for the same identifier
    Ambiguous(usize),
}

impl OntologyType {
    /// Classify a type statement object
    ///
    /// Unknown types keep the identifier they were given, so callers decide
    /// whether to pass the full identifier or its short form.
    pub fn from_type_identifier(value: &str) -> Self {
        match value {
            vocabulary::OWL_CLASS => OntologyType::Class,
            vocabulary::OWL_DATATYPE_PROPERTY => OntologyType::DatatypeProperty,
            vocabulary::OWL_OBJECT_PROPERTY => OntologyType::ObjectProperty,
            other => OntologyType::Other(other.to_string()),
        }
    }

    /// Same as [`OntologyType::from_type_identifier`] with unknown types short-formed
    pub fn from_type_short(root: &Namespace, value: &str) -> Self {
        match Self::from_type_identifier(value) {
            OntologyType::Other(other) => OntologyType::Other(root.short_form(&other)),
            known => known,
        }
    }
}

impl fmt::Display for OntologyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OntologyType::Class => f.write_str("Class"),
            OntologyType::DatatypeProperty => f.write_str("DatatypeProperty"),
            OntologyType::ObjectProperty => f.write_str("ObjectProperty"),
            OntologyType::Other(name) => f.write_str(name),
            OntologyType::Ambiguous(_) => f.write_str("Other"),
        }
    }
}

/// Name and identifier of a property attached to a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRef {
    /// Short name
    pub name: String,
    /// Full identifier
    pub uri: String,
}

/// An `owl:Class`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyClass {
    /// Short name
    pub name: String,
    /// Full identifier
    pub id: String,
    /// `rdfs:label` value
    pub label: Option<String>,
    /// `rdfs:comment` value
    pub comment: Option<String>,
    /// Identifier of the single parent class
    pub parent_id: Option<String>,
    /// Short name of the parent class
    pub parent_name: Option<String>,
    /// Data properties whose domain includes this class
    #[serde(default)]
    pub data_properties: Vec<PropertyRef>,
    /// Object properties whose domain includes this class
    #[serde(default)]
    pub object_properties: Vec<PropertyRef>,
}

impl OntologyClass {
    /// Fill the label from the name and the parent with `owl:Thing`
    pub fn apply_defaults(&mut self, root: &Namespace) {
        if self.label.is_none() && !self.id.is_empty() {
            self.label = Some(root.short_form(&self.id));
        }
        if self.parent_id.is_none() {
            self.parent_id = Some(vocabulary::THING.to_string());
            self.parent_name = Some(vocabulary::THING_NAME.to_string());
        }
    }
}

/// An `owl:DatatypeProperty`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyDataProperty {
    /// Short name
    pub name: String,
    /// Full identifier
    pub id: String,
    /// `rdfs:label` value
    pub label: Option<String>,
    /// `rdfs:comment` value
    pub comment: Option<String>,
    /// Classes in the property domain, in statement order
    #[serde(default)]
    pub domain_ids: Vec<String>,
}

/// An `owl:ObjectProperty`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyObjectProperty {
    /// Short name
    pub name: String,
    /// Full identifier
    pub id: String,
    /// `rdfs:label` value
    pub label: Option<String>,
    /// `rdfs:comment` value
    pub comment: Option<String>,
    /// Classes in the property domain, in statement order
    #[serde(default)]
    pub domain_ids: Vec<String>,
    /// Classes in the property range, in statement order
    #[serde(default)]
    pub range_ids: Vec<String>,
}

/// One edge of the simplified graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    /// The object property
    pub uri: String,
    /// A domain class
    pub from: String,
    /// A range class
    pub to: String,
}

/// Classes as nodes and object properties as edges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedGraph {
    /// Class identifiers
    pub nodes: Vec<String>,
    /// Object-property links
    pub links: Vec<GraphLink>,
}
