//! Knwl Domain Layer
//!
//! This crate contains the ontology schema shared by every other layer of
//! Knwl: namespace rules, the reserved vocabulary, statements, typed
//! ontology entities and the codec translating between them.
//!
//! ## Key Concepts
//!
//! - **Namespace**: an `http(s)` root ending with `/`; names resolve under it
//! - **Quad**: one subject-predicate-object statement, optionally in a graph
//! - **Entities**: classes, datatype properties and object properties
//! - **Codec**: the statement patterns that represent each entity kind
//!
//! ## Architecture
//!
//! - Pure schema logic only
//! - The triple store is reached through the [`traits::QuadStore`] trait
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod entity;
pub mod error;
pub mod namespace;
pub mod quad;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use codec::CommentHydration;
pub use entity::{
    GraphLink, OntologyClass, OntologyDataProperty, OntologyObjectProperty, OntologyType,
    PropertyRef, SimplifiedGraph,
};
pub use error::{OntologyError, Result};
pub use namespace::{EntityRef, Namespace, Uri};
pub use quad::{Quad, QuadPattern, Term};
pub use traits::{QuadSink, QuadStore, QuadStream};
