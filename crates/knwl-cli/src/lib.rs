//! Knwl CLI library.
//!
//! Bootstraps and inspects an ontology kept in a SQLite quad store:
//! loading RDF files, clearing, counting, listing classes and printing
//! the simplified graph.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};

use knwl_sdk::Knowledge;
use knwl_store::SqliteQuadStore;

/// Open the knowledge base selected by the global arguments.
pub fn open_knowledge(cli: &Cli) -> Result<Knowledge<SqliteQuadStore>> {
    let knowledge = Knowledge::open(&cli.database, &cli.namespace)?;
    Ok(knowledge.with_comment_hydration(cli.comments.into()))
}
