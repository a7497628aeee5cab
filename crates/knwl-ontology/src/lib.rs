//! Knwl Ontology Store
//!
//! Entity-level operations (classes, datatype properties, object properties)
//! executed against any [`QuadStore`](knwl_domain::traits::QuadStore). Every
//! operation is a handful of pattern matches plus the statement codec from
//! `knwl-domain`; nothing is cached, the backend stays the single source of
//! truth.
//!
//! Multi-step operations such as `add_class` with a missing parent are not
//! transactional.

#![warn(missing_docs)]

pub mod graph;
mod store;

pub use store::OntologyStore;
