//! HTTP request handlers for the ontology API.
//!
//! Read-only endpoints over a shared [`Knowledge`] handle, using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use knwl_domain::{OntologyClass, OntologyError, SimplifiedGraph};
use knwl_sdk::Knowledge;
use knwl_store::SqliteQuadStore;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Knowledge base answering every request
    pub knowledge: Knowledge<SqliteQuadStore>,
}

/// Body of `POST /api/getClass`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClassRequest {
    /// Class name or identifier
    pub name: String,
    /// Attach data and object properties
    #[serde(default)]
    pub include_props: bool,
}

/// Body of the property listing endpoints
#[derive(Debug, Deserialize)]
pub struct ClassNameRequest {
    /// Class name or identifier
    pub name: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Statements in the store
    pub triples: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub struct AppError(OntologyError);

impl From<OntologyError> for AppError {
    fn from(e: OntologyError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            OntologyError::InvalidNamespace { .. }
            | OntologyError::InvalidIdentifier { .. }
            | OntologyError::MissingRequiredField(_) => StatusCode::BAD_REQUEST,
            OntologyError::AlreadyExists { .. } => StatusCode::CONFLICT,
            OntologyError::NotAnOntologyElement { .. } | OntologyError::WrongOntologyType { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            OntologyError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!(error = %self.0, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

/// GET /api - Liveness of the API root
async fn api_root() -> Json<bool> {
    Json(true)
}

/// POST /api/getClass - Hydrated class or `null`
async fn get_class(
    State(state): State<AppState>,
    Json(request): Json<GetClassRequest>,
) -> Result<Json<Option<OntologyClass>>, AppError> {
    let class = state
        .knowledge
        .get_class(&request.name, request.include_props)
        .await?;
    Ok(Json(class))
}

/// GET /api/getSimplifiedOntologyGraph - Own, connected classes and their links
async fn get_simplified_ontology_graph(
    State(state): State<AppState>,
) -> Result<Json<SimplifiedGraph>, AppError> {
    let graph = state.knowledge.get_simplified_ontology_graph(true, true).await?;
    Ok(Json(graph))
}

/// POST /api/getDataPropertyUrisOfClass
async fn get_data_property_uris_of_class(
    State(state): State<AppState>,
    Json(request): Json<ClassNameRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let uris = state
        .knowledge
        .get_data_property_uris_of_class(&request.name)
        .await?;
    Ok(Json(uris))
}

/// POST /api/getObjectPropertyUrisOfClass
async fn get_object_property_uris_of_class(
    State(state): State<AppState>,
    Json(request): Json<ClassNameRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let uris = state
        .knowledge
        .get_object_property_uris_of_class(&request.name)
        .await?;
    Ok(Json(uris))
}

/// GET /health - Store reachability
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthCheckResponse>) {
    match state.knowledge.count_triples().await {
        Ok(triples) => (
            StatusCode::OK,
            Json(HealthCheckResponse {
                status: "healthy".to_string(),
                triples,
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthCheckResponse {
                    status: "unhealthy".to_string(),
                    triples: 0,
                }),
            )
        }
    }
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api", get(api_root))
        .route("/api/getClass", post(get_class))
        .route("/api/getSimplifiedOntologyGraph", get(get_simplified_ontology_graph))
        .route("/api/getDataPropertyUrisOfClass", post(get_data_property_uris_of_class))
        .route("/api/getObjectPropertyUrisOfClass", post(get_object_property_uris_of_class))
        .route("/health", get(health_check))
        .with_state(state)
}
