use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::graph::{Graph, NodeId};
use crate::session::RouteSession;
use crate::view::GraphView;
use crate::web::models::*;
use crate::Error;

/// Shared application state.
///
/// Edits take the write lock; route queries and reads share the read lock.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<RouteSession>>,
}

impl AppState {
    pub fn new(session: RouteSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, RouteSession> {
        self.session.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RouteSession> {
        self.session.write().unwrap_or_else(|e| e.into_inner())
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graph", get(get_graph))
        .route("/api/graph/save", post(save_graph))
        .route("/api/nodes", get(list_nodes))
        .route("/api/nodes/:node/neighbors", get(get_neighbors))
        .route("/api/edges", post(add_edge).delete(remove_edge))
        .route("/api/routes", post(find_route))
        .route("/api/health", get(health_check))
}

/// Maps a library error to a status code and error body
pub fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        Error::NodeNotFound(_) => (StatusCode::NOT_FOUND, "node_not_found"),
        Error::EdgeNotFound(..) => (StatusCode::NOT_FOUND, "edge_not_found"),
        Error::InvalidWeight(_) => (StatusCode::BAD_REQUEST, "invalid_weight"),
        Error::InvalidWeightInput(_) => (StatusCode::BAD_REQUEST, "invalid_weight"),
        Error::SelfLoop(_) => (StatusCode::BAD_REQUEST, "self_loop"),
        Error::EmptyNodeName => (StatusCode::BAD_REQUEST, "empty_node_name"),
        Error::InvalidCommand(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        Error::AsymmetricEdge(..) | Error::Io(_) | Error::Serialization(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "storage_failed")
        }
    };
    if status.is_server_error() {
        warn!("request failed: {}", err);
    }
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
}

/// Current graph without highlighting
pub async fn get_graph(State(state): State<AppState>) -> ApiResult<GraphView> {
    Ok(Json(state.read().view(None)))
}

/// All node labels, sorted
pub async fn list_nodes(State(state): State<AppState>) -> ApiResult<Vec<NodeId>> {
    Ok(Json(state.read().nodes()))
}

pub async fn get_neighbors(
    State(state): State<AppState>,
    Path(node): Path<String>,
) -> ApiResult<BTreeMap<NodeId, f64>> {
    let session = state.read();
    let neighbors = session.neighbors(&node).map_err(error_response)?;
    Ok(Json(neighbors.clone()))
}

/// Add or overwrite an edge
pub async fn add_edge(
    State(state): State<AppState>,
    Json(request): Json<AddEdgeRequest>,
) -> ApiResult<EdgeResponse> {
    let mut session = state.write();
    let edit = session
        .add_edge(&request.a, &request.b, &request.weight.as_raw())
        .map_err(error_response)?;
    info!("{}", edit);
    Ok(Json(EdgeResponse {
        message: edit.to_string(),
        graph: session.view(None),
    }))
}

/// Remove an existing edge
pub async fn remove_edge(
    State(state): State<AppState>,
    Json(request): Json<RemoveEdgeRequest>,
) -> ApiResult<EdgeResponse> {
    let mut session = state.write();
    let edit = session
        .remove_edge(&request.a, &request.b)
        .map_err(error_response)?;
    info!("{}", edit);
    Ok(Json(EdgeResponse {
        message: edit.to_string(),
        graph: session.view(None),
    }))
}

/// Find the cheapest route between two nodes
pub async fn find_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> ApiResult<RouteResponse> {
    let session = state.read();
    let report = session
        .find_route(&request.start, &request.end)
        .map_err(error_response)?;
    let view = session.view(Some(report.path()));
    Ok(Json(RouteResponse::new(&report, view)))
}

/// Persist the current graph. File I/O runs on the blocking pool.
pub async fn save_graph(State(state): State<AppState>) -> ApiResult<SaveResponse> {
    let response = tokio::task::spawn_blocking(move || -> crate::Result<SaveResponse> {
        let session = state.read();
        session.save()?;
        Ok(SaveResponse {
            saved: true,
            nodes: session.graph().node_count(),
            edges: session.graph().edge_count(),
        })
    })
    .await
    .map_err(|e| error_response(io::Error::new(io::ErrorKind::Other, e).into()))?
    .map_err(error_response)?;
    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}
