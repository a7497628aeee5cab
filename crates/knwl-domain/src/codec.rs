//! Translation between ontology elements and their statements
//!
//! Builders produce the fixed statement patterns that represent a class or a
//! property. Hydrators go the other way and rebuild typed entities from a
//! statement set fetched from a store.

use crate::entity::{OntologyClass, OntologyDataProperty, OntologyObjectProperty, OntologyType};
use crate::error::{OntologyError, Result};
use crate::namespace::{EntityRef, Namespace, Uri};
use crate::quad::{Quad, Term};
use crate::vocabulary;
use serde::{Deserialize, Serialize};

/// How `rdfs:comment` statements are read back into entities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentHydration {
    /// Comments are never hydrated, `comment` stays empty
    #[default]
    Legacy,
    /// The comment statement is read into `comment`
    Corrected,
}

/// The four statements of a class: type, parent, label, comment
///
/// The parent defaults to `owl:Thing`, the label to the short form of the
/// name and the comment to an empty literal.
pub fn class_statements<'a>(
    root: &Namespace,
    name: impl Into<EntityRef<'a>>,
    parent: Option<EntityRef<'_>>,
    label: Option<&str>,
    comment: Option<&str>,
) -> Result<Vec<Quad>> {
    let name = name.into();
    let id = root.uri(name)?;
    let parent = match parent {
        Some(parent) => root.uri(parent)?,
        None => vocabulary::thing(),
    };
    let label = match label {
        Some(label) => label.to_string(),
        None => root.short_form(name.as_str()),
    };

    Ok(vec![
        Quad::new(id.clone(), vocabulary::rdf_type(), vocabulary::owl_class()),
        Quad::new(id.clone(), vocabulary::sub_class_of(), parent),
        Quad::new(id.clone(), vocabulary::label(), Term::Literal(label)),
        Quad::new(id, vocabulary::comment(), Term::literal(comment.unwrap_or_default())),
    ])
}

/// Type, label and comment of a datatype property followed by its domain
///
/// The label defaults to the name exactly as given.
pub fn data_property_statements<'a, D: AsRef<str>>(
    root: &Namespace,
    name: impl Into<EntityRef<'a>>,
    domain: &[D],
    label: Option<&str>,
    comment: Option<&str>,
) -> Result<Vec<Quad>> {
    let name = name.into();
    let id = root.uri(name)?;
    let mut statements = property_header(
        &id,
        vocabulary::owl_datatype_property(),
        label.unwrap_or(name.as_str()),
        comment,
    );
    push_links(root, &mut statements, &id, vocabulary::domain(), domain)?;
    Ok(statements)
}

/// Type, label and comment of an object property followed by its domain and range
pub fn object_property_statements<'a, D: AsRef<str>, R: AsRef<str>>(
    root: &Namespace,
    name: impl Into<EntityRef<'a>>,
    domain: &[D],
    range: &[R],
    label: Option<&str>,
    comment: Option<&str>,
) -> Result<Vec<Quad>> {
    let name = name.into();
    let id = root.uri(name)?;
    let mut statements = property_header(
        &id,
        vocabulary::owl_object_property(),
        label.unwrap_or(name.as_str()),
        comment,
    );
    push_links(root, &mut statements, &id, vocabulary::domain(), domain)?;
    push_links(root, &mut statements, &id, vocabulary::range(), range)?;
    Ok(statements)
}

fn property_header(id: &Uri, kind: Uri, label: &str, comment: Option<&str>) -> Vec<Quad> {
    vec![
        Quad::new(id.clone(), vocabulary::rdf_type(), kind),
        Quad::new(id.clone(), vocabulary::label(), Term::literal(label)),
        Quad::new(id.clone(), vocabulary::comment(), Term::literal(comment.unwrap_or_default())),
    ]
}

fn push_links<T: AsRef<str>>(
    root: &Namespace,
    statements: &mut Vec<Quad>,
    id: &Uri,
    predicate: Uri,
    targets: &[T],
) -> Result<()> {
    for target in targets {
        let target = root.uri(EntityRef::Name(target.as_ref()))?;
        statements.push(Quad::new(id.clone(), predicate.clone(), target));
    }
    Ok(())
}

fn single_type_statement(statements: &[Quad]) -> Result<&Quad> {
    let mut found = statements
        .iter()
        .filter(|q| q.predicate.as_str() == vocabulary::TYPE);
    match (found.next(), found.count()) {
        (Some(statement), 0) => Ok(statement),
        (None, _) => Err(OntologyError::NotAnOntologyElement { type_statements: 0 }),
        (Some(_), rest) => Err(OntologyError::NotAnOntologyElement {
            type_statements: rest + 1,
        }),
    }
}

/// Determine what a statement set declares
///
/// Unknown types are reported with their full identifier.
///
/// # Errors
/// `NotAnOntologyElement` when there is not exactly one type statement.
pub fn classify_statement_set(statements: &[Quad]) -> Result<OntologyType> {
    let statement = single_type_statement(statements)?;
    Ok(OntologyType::from_type_identifier(statement.object.lexical()))
}

fn expect_type(statements: &[Quad], expected: OntologyType) -> Result<&Quad> {
    let statement = single_type_statement(statements)?;
    let found = OntologyType::from_type_identifier(statement.object.lexical());
    if found != expected {
        return Err(OntologyError::WrongOntologyType { expected, found });
    }
    Ok(statement)
}

fn first_object<'q>(statements: &'q [Quad], predicate: &str) -> Option<&'q Term> {
    statements
        .iter()
        .find(|q| q.predicate.as_str() == predicate)
        .map(|q| &q.object)
}

fn all_objects(statements: &[Quad], predicate: &str) -> Vec<String> {
    statements
        .iter()
        .filter(|q| q.predicate.as_str() == predicate)
        .map(|q| q.object.lexical().to_string())
        .collect()
}

fn label_and_comment(statements: &[Quad], comments: CommentHydration) -> (Option<String>, Option<String>) {
    let label = first_object(statements, vocabulary::LABEL).map(|t| t.lexical().to_string());
    let comment = match comments {
        CommentHydration::Legacy => None,
        CommentHydration::Corrected => {
            first_object(statements, vocabulary::COMMENT).map(|t| t.lexical().to_string())
        }
    };
    (label, comment)
}

/// Rebuild a class from its statements
///
/// The first `subClassOf` statement names the parent; a class without one
/// is placed under `owl:Thing`.
///
/// # Errors
/// `NotAnOntologyElement` or `WrongOntologyType` when the statements do not
/// declare exactly one class.
pub fn hydrate_class(
    root: &Namespace,
    statements: &[Quad],
    comments: CommentHydration,
) -> Result<OntologyClass> {
    let declaration = expect_type(statements, OntologyType::Class)?;
    let (label, comment) = label_and_comment(statements, comments);
    let parent = first_object(statements, vocabulary::SUB_CLASS_OF);

    let mut class = OntologyClass {
        name: root.short_form(declaration.subject.as_str()),
        id: declaration.subject.to_string(),
        label,
        comment,
        parent_id: parent.map(|t| t.lexical().to_string()),
        parent_name: parent.map(|t| t.short_form(root)),
        ..Default::default()
    };
    class.apply_defaults(root);
    Ok(class)
}

/// Rebuild a datatype property, collecting every domain statement
pub fn hydrate_data_property(
    root: &Namespace,
    statements: &[Quad],
    comments: CommentHydration,
) -> Result<OntologyDataProperty> {
    let declaration = expect_type(statements, OntologyType::DatatypeProperty)?;
    let (label, comment) = label_and_comment(statements, comments);

    Ok(OntologyDataProperty {
        name: root.short_form(declaration.subject.as_str()),
        id: declaration.subject.to_string(),
        label,
        comment,
        domain_ids: all_objects(statements, vocabulary::DOMAIN),
    })
}

/// Rebuild an object property, collecting every domain and range statement
pub fn hydrate_object_property(
    root: &Namespace,
    statements: &[Quad],
    comments: CommentHydration,
) -> Result<OntologyObjectProperty> {
    let declaration = expect_type(statements, OntologyType::ObjectProperty)?;
    let (label, comment) = label_and_comment(statements, comments);

    Ok(OntologyObjectProperty {
        name: root.short_form(declaration.subject.as_str()),
        id: declaration.subject.to_string(),
        label,
        comment,
        domain_ids: all_objects(statements, vocabulary::DOMAIN),
        range_ids: all_objects(statements, vocabulary::RANGE),
    })
}
