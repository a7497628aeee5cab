//! Knwl Server
//!
//! REST adapter exposing the ontology queries used by the graph
//! visualization client.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use knwl_domain::OntologyError;
use knwl_sdk::Knowledge;
use knwl_store::SqliteQuadStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Knowledge base could not be opened
    #[error("Failed to open knowledge base: {0}")]
    Knowledge(#[from] OntologyError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Open the knowledge base described by the configuration
pub fn open_knowledge(config: &ServerConfig) -> Result<Knowledge<SqliteQuadStore>, ServerError> {
    config.validate()?;
    let knowledge = match &config.database_path {
        Some(path) => Knowledge::open(path, &config.namespace)?,
        None => Knowledge::in_memory(&config.namespace)?,
    };
    Ok(knowledge.with_comment_hydration(config.comment_hydration))
}

/// Start the HTTP server
///
/// Opens the knowledge base, builds the routes and serves until the
/// listener fails.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing; a subscriber may already be installed by the host
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    info!("Starting Knwl server");
    info!("Bind address: {}", config.bind_addr());
    info!("Namespace: {}", config.namespace);
    info!(
        "Database: {}",
        config.database_path.as_deref().unwrap_or(":memory:")
    );

    let knowledge = open_knowledge(&config)?;
    info!("Statements in store: {}", knowledge.count_triples().await?);

    let app = create_router(AppState { knowledge });

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
