//! Knwl Storage Layer
//!
//! Implements the `QuadStore` trait on top of SQLite.
//!
//! # Architecture
//!
//! - One `quads` table, unique on (subject, predicate, object, kind, graph)
//! - The connection sits behind a mutex and is only touched from blocking workers
//! - Matches are read under the lock, then delivered through a bounded channel
//! - RDF files are parsed with sophia (see [`loader`])
//!
//! # Examples
//!
//! ```no_run
//! use knwl_store::SqliteQuadStore;
//!
//! let store = SqliteQuadStore::open("knwl.db").unwrap();
//! // Store is now ready for statement operations
//! ```

#![warn(missing_docs)]

pub mod loader;

use async_trait::async_trait;
use knwl_domain::traits::{QuadStore, QuadStream};
use knwl_domain::{Quad, QuadPattern, Term, Uri};
use rusqlite::{params, params_from_iter, Connection, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

pub use loader::RdfFormat;

/// Channel capacity for streamed matches
const STREAM_CAPACITY: usize = 256;

const IRI_KIND: &str = "iri";
const LITERAL_KIND: &str = "literal";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File access error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// RDF document could not be parsed
    #[error("Failed to parse {format} data: {message}")]
    Parse {
        /// Format being parsed
        format: RdfFormat,
        /// Parser message
        message: String,
    },

    /// File extension without a known RDF format
    #[error("Unsupported RDF file: {0}")]
    UnsupportedFormat(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The store was closed
    #[error("Store is closed")]
    Closed,

    /// A blocking worker panicked or the connection lock was poisoned
    #[error("Storage worker failed: {0}")]
    Worker(String),

    /// Streaming requires a running tokio runtime
    #[error("No tokio runtime available for streaming")]
    NoRuntime,
}

type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// SQLite-based implementation of QuadStore
///
/// Clones share the same connection.
#[derive(Clone)]
pub struct SqliteQuadStore {
    conn: SharedConnection,
}

impl std::fmt::Debug for SqliteQuadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteQuadStore").finish_non_exhaustive()
    }
}

impl SqliteQuadStore {
    /// Open (or create) a database file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use knwl_store::SqliteQuadStore;
    ///
    /// let store = SqliteQuadStore::open("knwl.db").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        info!(path = %path.as_ref().display(), "Opening quad store");
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// Parse an RDF file and insert its statements, returning how many were new
    pub async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<usize, StoreError> {
        let path = path.as_ref().to_path_buf();
        let shown = path.display().to_string();
        let quads = tokio::task::spawn_blocking(move || loader::load_file(&path))
            .await
            .map_err(|e| StoreError::Worker(e.to_string()))??;
        let parsed = quads.len();
        let inserted = self.put(quads).await?;
        info!(path = %shown, parsed, inserted, "Loaded RDF file");
        Ok(inserted)
    }

    async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || with_connection(&conn, op))
            .await
            .map_err(|e| StoreError::Worker(e.to_string()))?
    }
}

fn with_connection<T>(
    conn: &Mutex<Option<Connection>>,
    op: impl FnOnce(&mut Connection) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    let mut guard = conn
        .lock()
        .map_err(|_| StoreError::Worker("connection lock poisoned".to_string()))?;
    let conn = guard.as_mut().ok_or(StoreError::Closed)?;
    op(conn)
}

/// Build the WHERE clause and its parameters for a pattern
fn where_clause(pattern: &QuadPattern) -> (String, Vec<String>) {
    let mut sql = String::from(" WHERE 1=1");
    let mut params = Vec::new();

    if let Some(subject) = &pattern.subject {
        sql.push_str(" AND subject = ?");
        params.push(subject.to_string());
    }
    if let Some(predicate) = &pattern.predicate {
        sql.push_str(" AND predicate = ?");
        params.push(predicate.to_string());
    }
    if let Some(object) = &pattern.object {
        let (value, kind) = encode_term(object);
        sql.push_str(" AND object = ? AND object_kind = ?");
        params.push(value.to_string());
        params.push(kind.to_string());
    }
    if let Some(graph) = &pattern.graph {
        sql.push_str(" AND graph = ?");
        params.push(graph.clone());
    }

    (sql, params)
}

fn encode_term(term: &Term) -> (&str, &'static str) {
    match term {
        Term::Iri(uri) => (uri.as_str(), IRI_KIND),
        Term::Literal(value) => (value.as_str(), LITERAL_KIND),
    }
}

fn parse_uri(idx: usize, value: String) -> rusqlite::Result<Uri> {
    Uri::new(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn row_to_quad(row: &Row<'_>) -> rusqlite::Result<Quad> {
    let subject = parse_uri(0, row.get(0)?)?;
    let predicate = parse_uri(1, row.get(1)?)?;
    let object: String = row.get(2)?;
    let kind: String = row.get(3)?;
    let graph: String = row.get(4)?;

    let object = if kind == IRI_KIND {
        Term::Iri(parse_uri(2, object)?)
    } else {
        Term::Literal(object)
    };

    Ok(Quad {
        subject,
        predicate,
        object,
        graph: (!graph.is_empty()).then_some(graph),
    })
}

fn select(conn: &Connection, pattern: &QuadPattern) -> Result<Vec<Quad>, StoreError> {
    let (clause, params) = where_clause(pattern);
    let sql = format!(
        "SELECT subject, predicate, object, object_kind, graph FROM quads{} ORDER BY id",
        clause
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let quads = stmt
        .query_map(params_from_iter(params.iter()), row_to_quad)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quads)
}

#[async_trait]
impl QuadStore for SqliteQuadStore {
    type Error = StoreError;

    async fn put(&self, quads: Vec<Quad>) -> Result<usize, Self::Error> {
        let submitted = quads.len();
        let inserted = self
            .run(move |conn| {
                let tx = conn.transaction()?;
                let mut inserted = 0;
                {
                    let mut stmt = tx.prepare_cached(
                        "INSERT OR IGNORE INTO quads (subject, predicate, object, object_kind, graph)
                         VALUES (?1, ?2, ?3, ?4, ?5)",
                    )?;
                    for quad in &quads {
                        let (object, kind) = encode_term(&quad.object);
                        inserted += stmt.execute(params![
                            quad.subject.as_str(),
                            quad.predicate.as_str(),
                            object,
                            kind,
                            quad.graph.as_deref().unwrap_or(""),
                        ])?;
                    }
                }
                tx.commit()?;
                Ok(inserted)
            })
            .await?;
        debug!(submitted, inserted, "Inserted statements");
        Ok(inserted)
    }

    async fn get(&self, pattern: &QuadPattern) -> Result<Vec<Quad>, Self::Error> {
        let pattern = pattern.clone();
        self.run(move |conn| select(conn, &pattern)).await
    }

    fn match_quads(&self, pattern: QuadPattern) -> QuadStream<Self::Error> {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return QuadStream::failed(StoreError::NoRuntime);
        };
        let (sink, stream) = QuadStream::channel(STREAM_CAPACITY);
        let conn = Arc::clone(&self.conn);

        handle.spawn_blocking(move || match with_connection(&conn, |c| select(c, &pattern)) {
            Ok(quads) => {
                for quad in quads {
                    if !sink.blocking_send(quad) {
                        break;
                    }
                }
            }
            Err(e) => sink.blocking_fail(e),
        });

        stream
    }

    async fn remove_matches(&self, pattern: &QuadPattern) -> Result<usize, Self::Error> {
        let pattern = pattern.clone();
        let removed = self
            .run(move |conn| {
                let (clause, params) = where_clause(&pattern);
                let sql = format!("DELETE FROM quads{}", clause);
                Ok(conn.execute(&sql, params_from_iter(params.iter()))?)
            })
            .await?;
        debug!(removed, "Removed statements");
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, Self::Error> {
        self.run(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM quads", [], |row| row.get(0))?;
            usize::try_from(count).map_err(|_| StoreError::InvalidData(format!("negative count {}", count)))
        })
        .await
    }

    async fn close(&self) -> Result<(), Self::Error> {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StoreError::Worker("connection lock poisoned".to_string()))?;
            match guard.take() {
                Some(conn) => conn.close().map_err(|(_, e)| StoreError::Database(e)),
                None => Ok(()),
            }
        })
        .await
        .map_err(|e| StoreError::Worker(e.to_string()))??;
        info!("Closed quad store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knwl_domain::vocabulary;

    #[test]
    fn test_where_clause_for_open_pattern() {
        let (sql, params) = where_clause(&QuadPattern::any());
        assert_eq!(sql, " WHERE 1=1");
        assert!(params.is_empty());
    }

    #[test]
    fn test_where_clause_binds_object_kind() {
        let pattern = QuadPattern::any()
            .predicate(vocabulary::rdf_type())
            .object(vocabulary::owl_class());
        let (sql, params) = where_clause(&pattern);

        assert_eq!(sql, " WHERE 1=1 AND predicate = ? AND object = ? AND object_kind = ?");
        assert_eq!(params, vec![vocabulary::TYPE, vocabulary::OWL_CLASS, "iri"]);
    }

    #[test]
    fn test_schema_initializes() {
        assert!(SqliteQuadStore::open_in_memory().is_ok());
    }
}
