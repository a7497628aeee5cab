//! Namespace roots, qualified identifiers and short forms
//!
//! Only slash-delimited namespaces are supported: a root always uses an
//! `http`/`https` scheme and always ends with `/`.

use crate::error::{OntologyError, Result};
use crate::vocabulary::WELL_KNOWN_NAMESPACES;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A qualified identifier
///
/// Any value with a URI scheme is accepted, so identifiers from foreign
/// namespaces (or foreign schemes) pass through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri(String);

impl Uri {
    /// Validate and wrap an identifier
    ///
    /// # Errors
    /// Returns `InvalidIdentifier` when the value is empty, contains
    /// whitespace or has no scheme.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(OntologyError::invalid_identifier(value, "identifier cannot be empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(OntologyError::invalid_identifier(value, "identifier contains whitespace"));
        }
        if !has_scheme(&value) {
            return Err(OntologyError::invalid_identifier(value, "identifier has no scheme"));
        }
        Ok(Self(value))
    }

    /// Wrap one of the reserved vocabulary constants
    pub(crate) fn reserved(value: &'static str) -> Self {
        Self(value.to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for Uri {
    type Error = OntologyError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.0
    }
}

fn has_scheme(value: &str) -> bool {
    match value.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// A reference to an ontology element: either a name resolved against the
/// current namespace, or an identifier taken verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    /// Name (or path) under the current namespace
    Name(&'a str),
    /// Fully qualified identifier, possibly foreign
    Uri(&'a Uri),
}

impl<'a> From<&'a str> for EntityRef<'a> {
    fn from(name: &'a str) -> Self {
        EntityRef::Name(name)
    }
}

impl<'a> From<&'a String> for EntityRef<'a> {
    fn from(name: &'a String) -> Self {
        EntityRef::Name(name.as_str())
    }
}

impl<'a> From<&'a Uri> for EntityRef<'a> {
    fn from(uri: &'a Uri) -> Self {
        EntityRef::Uri(uri)
    }
}

impl EntityRef<'_> {
    /// The raw text of the reference
    pub fn as_str(&self) -> &str {
        match self {
            EntityRef::Name(name) => name,
            EntityRef::Uri(uri) => uri.as_str(),
        }
    }
}

/// Validated namespace root
///
/// Handles that query the store carry their own `Namespace`; switching
/// namespace means deriving a new handle, never mutating this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Create a namespace from a root, normalizing the trailing slash
    ///
    /// # Errors
    /// Returns `InvalidNamespace` if the root is empty, does not start with
    /// `http` or ends with `#`.
    pub fn new(root: impl AsRef<str>) -> Result<Self> {
        normalize_namespace(root.as_ref()).map(Self)
    }

    /// Get namespace as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The root itself as an identifier
    pub fn as_uri(&self) -> Uri {
        Uri(self.0.clone())
    }

    /// Whether the identifier lives in this namespace
    pub fn contains(&self, uri: &str) -> bool {
        uri.starts_with(&self.0)
    }

    /// Resolve a name or identifier against this namespace
    pub fn uri<'a>(&self, reference: impl Into<EntityRef<'a>>) -> Result<Uri> {
        match reference.into() {
            EntityRef::Name(name) => build_uri(self, &[name]),
            EntityRef::Uri(uri) => Ok(uri.clone()),
        }
    }

    /// Short display form of an identifier, see [`short_form`]
    pub fn short_form(&self, value: &str) -> String {
        short_form(self, value)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Namespace {
    type Error = OntologyError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.0
    }
}

/// Validate a namespace root and make sure it ends with `/`
///
/// # Errors
/// Returns `InvalidNamespace` for empty roots, roots that do not start
/// with `http` and roots ending with `#`.
pub fn normalize_namespace(root: &str) -> Result<String> {
    if root.trim().is_empty() {
        return Err(OntologyError::invalid_namespace(root, "missing root Uri or Url"));
    }
    if !root.starts_with("http") {
        return Err(OntologyError::invalid_namespace(
            root,
            "the root should begin with 'http' or 'https'",
        ));
    }
    if root.ends_with('#') {
        return Err(OntologyError::invalid_namespace(
            root,
            "naming based on '#' is not supported, only on trailing '/'",
        ));
    }
    if root.chars().any(char::is_whitespace) {
        return Err(OntologyError::invalid_namespace(root, "the root contains whitespace"));
    }
    let mut normalized = root.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

/// Assemble an identifier from the root and path segments
///
/// Without segments the root itself is returned. A first segment that is
/// already a qualified `http://` or `https://` identifier is returned
/// verbatim, which lets one-argument calls reference elements outside the
/// namespace. Names that merely begin with `http` are resolved like any other.
///
/// # Errors
/// Returns `InvalidIdentifier` for empty or whitespace-bearing segments.
pub fn build_uri(root: &Namespace, segments: &[&str]) -> Result<Uri> {
    let Some(first) = segments.first() else {
        return Ok(root.as_uri());
    };
    if is_qualified(first) {
        return Uri::new(*first);
    }

    let mut parts = Vec::with_capacity(segments.len());
    for segment in segments {
        let trimmed = segment.strip_prefix('/').unwrap_or(segment);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(OntologyError::invalid_identifier(*segment, "empty path segment"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(OntologyError::invalid_identifier(
                *segment,
                "path segment contains whitespace",
            ));
        }
        parts.push(trimmed);
    }
    Ok(Uri(format!("{}{}", root.as_str(), parts.join("/"))))
}

fn is_qualified(segment: &str) -> bool {
    segment.starts_with("http://") || segment.starts_with("https://")
}

/// Shorten an identifier to its display name
///
/// Strips the root, then the RDF, RDFS and OWL namespaces, then keeps what
/// follows the last `/` and finally what follows the last `#`.
pub fn short_form(root: &Namespace, value: &str) -> String {
    let mut short = value.replacen(root.as_str(), "", 1);
    for ns in WELL_KNOWN_NAMESPACES {
        short = short.replacen(ns, "", 1);
    }
    if let Some(idx) = short.rfind('/') {
        short = short[idx + 1..].to_string();
    }
    if let Some(idx) = short.rfind('#') {
        short = short[idx + 1..].to_string();
    }
    short
}

/// Element-wise [`short_form`]
pub fn short_forms<S: AsRef<str>>(root: &Namespace, values: &[S]) -> Vec<String> {
    values.iter().map(|v| short_form(root, v.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary;

    fn ns(root: &str) -> Namespace {
        Namespace::new(root).unwrap()
    }

    #[test]
    fn test_namespace_creation() {
        let ns = Namespace::new("http://example.org/onto/").unwrap();
        assert_eq!(ns.as_str(), "http://example.org/onto/");
    }

    #[test]
    fn test_namespace_trailing_slash() {
        assert_eq!(ns("http://wat.com").as_str(), "http://wat.com/");
    }

    #[test]
    fn test_namespace_rejections() {
        assert!(matches!(Namespace::new(""), Err(OntologyError::InvalidNamespace { .. })));
        assert!(matches!(
            Namespace::new("ftp://example.org/"),
            Err(OntologyError::InvalidNamespace { .. })
        ));
        assert!(matches!(
            Namespace::new("http://example.org/onto#"),
            Err(OntologyError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn test_namespace_contains() {
        let root = ns("http://example.org/");
        assert!(root.contains("http://example.org/Dog"));
        assert!(!root.contains("http://whatever.com/Dog"));
    }

    #[test]
    fn test_namespace_serde() {
        let root: Namespace = serde_json::from_str("\"https://dbpedia.org/ontology\"").unwrap();
        assert_eq!(root.as_str(), "https://dbpedia.org/ontology/");
        assert!(serde_json::from_str::<Namespace>("\"dbpedia\"").is_err());
    }

    #[test]
    fn test_build_uri_without_segments_returns_root() {
        let uri = build_uri(&ns("http://abc/"), &[]).unwrap();
        assert_eq!(uri.as_str(), "http://abc/");
    }

    #[test]
    fn test_build_uri_concats_segments() {
        let uri = build_uri(&ns("http://wat.com"), &["a", "b"]).unwrap();
        assert_eq!(uri.as_str(), "http://wat.com/a/b");
    }

    #[test]
    fn test_build_uri_trims_slashes() {
        let uri = build_uri(&ns("http://wat.com/"), &["/a/", "b/"]).unwrap();
        assert_eq!(uri.as_str(), "http://wat.com/a/b");
    }

    #[test]
    fn test_build_uri_passes_qualified_identifier_through() {
        let uri = build_uri(&ns("http://wat.com/"), &["http://whatever.com/Dog"]).unwrap();
        assert_eq!(uri.as_str(), "http://whatever.com/Dog");
    }

    #[test]
    fn test_build_uri_names_starting_with_http() {
        let root = ns("http://example.org/");
        let uri = build_uri(&root, &["httpServer"]).unwrap();
        assert_eq!(uri.as_str(), "http://example.org/httpServer");

        let uri = build_uri(&root, &["https"]).unwrap();
        assert_eq!(uri.as_str(), "http://example.org/https");

        let uri = build_uri(&root, &["https://other.org/Dog"]).unwrap();
        assert_eq!(uri.as_str(), "https://other.org/Dog");
    }

    #[test]
    fn test_build_uri_rejects_empty_segment() {
        let result = build_uri(&ns("http://wat.com/"), &["a", ""]);
        assert!(matches!(result, Err(OntologyError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_entity_ref_foreign_uri() {
        let foreign = Uri::new("urn:isbn:0451450523").unwrap();
        let uri = ns("http://wat.com/").uri(&foreign).unwrap();
        assert_eq!(uri, foreign);
    }

    #[test]
    fn test_uri_validation() {
        assert!(Uri::new("http://example.org/a").is_ok());
        assert!(Uri::new("urn:x").is_ok());
        assert!(Uri::new("Dog").is_err());
        assert!(Uri::new("http://example.org/a b").is_err());
        assert!(Uri::new("").is_err());
    }

    #[test]
    fn test_short_form_strips_root() {
        let root = ns("http://example.org/");
        assert_eq!(short_form(&root, "http://example.org/Dog"), "Dog");
    }

    #[test]
    fn test_short_form_strips_reserved_namespaces() {
        let root = ns("http://example.org/");
        assert_eq!(short_form(&root, vocabulary::THING), "Thing");
        assert_eq!(short_form(&root, vocabulary::OWL_CLASS), "Class");
        assert_eq!(short_form(&root, vocabulary::LABEL), "label");
    }

    #[test]
    fn test_short_form_foreign_identifier() {
        let root = ns("http://example.org/");
        assert_eq!(short_form(&root, "http://dbpedia.org/ontology/Person"), "Person");
        assert_eq!(short_form(&root, "http://xmlns.com/foaf/0.1/#name"), "name");
    }

    #[test]
    fn test_short_forms_element_wise() {
        let root = ns("http://example.org/");
        let shorts = short_forms(&root, &["http://example.org/A", "http://example.org/B"]);
        assert_eq!(shorts, vec!["A", "B"]);
    }
}
