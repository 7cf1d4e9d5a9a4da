//! HTTP surface for roster.
//!
//! Five handlers mapping one-to-one onto store operations. The store
//! handle is owned by server startup and threaded through handlers as
//! axum state; there is no process-wide mutable state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::record::{DeleteAck, InsertAck, Record, RecordFields, UpdateAck};
use crate::store::RecordStore;

/// Shared state threaded through request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Wrap a store handle for the router.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

/// Error wrapper mapping crate errors onto HTTP responses.
///
/// An unparseable identifier is the caller's fault (400); anything else
/// aborts the request as a store failure (500). The body is plain text;
/// there is no structured error contract.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_id() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        error!(error = %self.0, "request failed");
        (status, self.0.to_string()).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// `GET /record`: all records, no pagination, store order.
async fn list_records(State(state): State<AppState>) -> ApiResult<Vec<Record>> {
    Ok(Json(state.store.list().await?))
}

/// `GET /record/{id}`: one record, or `null` when absent.
async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Option<Record>> {
    Ok(Json(state.store.get(&id).await?))
}

/// `POST /record/add`: insert the body fields verbatim.
async fn create_record(
    State(state): State<AppState>,
    Json(fields): Json<RecordFields>,
) -> ApiResult<InsertAck> {
    Ok(Json(state.store.insert(fields).await?))
}

/// `POST /update/{id}`: overwrite all three fields; zero matched when absent.
async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<RecordFields>,
) -> ApiResult<UpdateAck> {
    Ok(Json(state.store.update(&id, fields).await?))
}

/// `DELETE /{id}`: remove one record, acknowledgment as JSON like every
/// other endpoint.
async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeleteAck> {
    Ok(Json(state.store.delete(&id).await?))
}

/// Build the record API router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/record", get(list_records))
        .route("/record/add", post(create_record))
        .route("/record/{id}", get(get_record))
        .route("/update/{id}", post(update_record))
        .route("/{id}", delete(delete_record))
        .with_state(state)
}

/// Bind the listener and serve the record API until the process exits.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "record API listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
