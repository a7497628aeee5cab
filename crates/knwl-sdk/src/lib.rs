//! Knwl Rust SDK
//!
//! Typed facade over the ontology store: classes, datatype properties and
//! object properties go in as loosely-typed inputs and come back as
//! hydrated entities.
//!
//! # Example
//!
//! ```no_run
//! use knwl_sdk::{ClassDefinition, Knowledge};
//!
//! # async fn run() -> knwl_domain::Result<()> {
//! let knwl = Knowledge::open("knwl.db", "http://knwl.example.org/")?;
//!
//! let dog = knwl
//!     .add_class(ClassDefinition::named("Dog").parent("Animal"))
//!     .await?;
//! assert_eq!(dog.parent_name.as_deref(), Some("Animal"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod input;
mod knowledge;

pub use input::{AddClassInput, ClassDefinition, DataPropertyDefinition, ObjectPropertyDefinition};
pub use knowledge::Knowledge;
pub use knwl_domain::codec::CommentHydration;
