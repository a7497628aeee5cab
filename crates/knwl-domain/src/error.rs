//! Error taxonomy for ontology operations

use crate::entity::OntologyType;
use thiserror::Error;

/// Boxed error raised by a triple-store backend
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the ontology layers
pub type Result<T> = std::result::Result<T, OntologyError>;

/// Errors raised by the schema, codec, ontology store and facade
///
/// Ambiguous typing is deliberately absent: more than one type statement is
/// reported as [`OntologyType::Ambiguous`] instead of failing.
#[derive(Error, Debug)]
pub enum OntologyError {
    /// Malformed namespace root
    #[error("Invalid namespace '{value}': {reason}")]
    InvalidNamespace {
        /// The rejected root
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Malformed identifier or path segment
    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier {
        /// The rejected identifier
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A structured definition lacks a required field
    #[error("Missing required field '{0}'")]
    MissingRequiredField(String),

    /// The identifier already carries a type statement
    #[error("An ontology object with Uri '{uri}' already exists with type '{found}'")]
    AlreadyExists {
        /// Identifier that was about to be created
        uri: String,
        /// The type it already has
        found: OntologyType,
    },

    /// Zero or several type statements in a statement set
    #[error("Given statements do not define an ontology element ({type_statements} type statements found)")]
    NotAnOntologyElement {
        /// Number of type statements encountered
        type_statements: usize,
    },

    /// The statement set defines another kind of element
    #[error("The given statements define {found} rather than {expected}")]
    WrongOntologyType {
        /// The kind the caller asked for
        expected: OntologyType,
        /// The kind actually declared
        found: OntologyType,
    },

    /// Failure inside the triple-store collaborator
    #[error("Store error: {0}")]
    Store(#[source] BoxError),
}

impl OntologyError {
    /// Wrap a backend error
    pub fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        OntologyError::Store(Box::new(error))
    }

    pub(crate) fn invalid_identifier(value: impl Into<String>, reason: impl Into<String>) -> Self {
        OntologyError::InvalidIdentifier {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_namespace(value: impl Into<String>, reason: impl Into<String>) -> Self {
        OntologyError::InvalidNamespace {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_message() {
        let err = OntologyError::AlreadyExists {
            uri: "http://example.org/Dog".to_string(),
            found: OntologyType::Class,
        };
        assert_eq!(
            err.to_string(),
            "An ontology object with Uri 'http://example.org/Dog' already exists with type 'Class'"
        );
    }

    #[test]
    fn test_ambiguous_renders_other() {
        let err = OntologyError::AlreadyExists {
            uri: "http://example.org/Dog".to_string(),
            found: OntologyType::Ambiguous(2),
        };
        assert!(err.to_string().ends_with("with type 'Other'"));
    }

    #[test]
    fn test_store_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = OntologyError::store(io);
        assert_eq!(err.to_string(), "Store error: disk gone");
        assert!(std::error::Error::source(&err).is_some());
    }
}
