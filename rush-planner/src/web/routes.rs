//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{GraphError, Node, NodeId};
use crate::planner::{Algorithm, InvalidAlgorithm, MAX_DEPTH_LIMIT, MIN_DEPTH_LIMIT, SearchConfig};
use crate::snapshot::{Snapshot, SnapshotError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/graph", get(export_graph))
        .route("/graph/import", post(import_graph))
        .route("/graph/nodes", post(add_node))
        .route("/graph/nodes/:id", patch(update_node).delete(delete_node))
        .route("/graph/nodes/:id/start", post(set_start))
        .route("/graph/edges", post(add_edge))
        .route("/graph/edges/costs", get(edge_costs))
        .route("/graph/edges/:index", patch(update_edge).delete(delete_edge))
        .route("/config", get(get_config).put(update_config))
        .route("/algorithms", get(list_algorithms))
        .route("/search/:algorithm", post(search))
        .route("/compare", post(compare))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging what was rejected.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

// ========== Graph ==========

/// Export the current graph and configuration as a snapshot.
async fn export_graph(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.workspace.read().await.export())
}

/// Replace the graph from a snapshot. Nothing changes if it is rejected.
async fn import_graph(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Snapshot>, AppError> {
    let mut workspace = state.workspace.write().await;
    workspace.import_json(&body)?;
    Ok(Json(workspace.export()))
}

async fn add_node(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Node>), AppError> {
    let req: AddNodeRequest = parse_body(&body)?;
    let mut workspace = state.workspace.write().await;
    let node = workspace.add_node(req.into_new_node())?;
    Ok((StatusCode::CREATED, Json(node.clone())))
}

async fn update_node(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    body: Bytes,
) -> Result<Json<Node>, AppError> {
    let req: UpdateNodeRequest = parse_body(&body)?;
    let mut workspace = state.workspace.write().await;
    let node = workspace.update_node(NodeId(id), req.into_update())?;
    Ok(Json(node.clone()))
}

/// Delete a node and its incident edges, returning the removed node.
async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Node>, AppError> {
    let node = state.workspace.write().await.delete_node(NodeId(id))?;
    Ok(Json(node))
}

async fn set_start(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, AppError> {
    state.workspace.write().await.set_start(NodeId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_edge(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<EdgeResult>), AppError> {
    let req: AddEdgeRequest = parse_body(&body)?;
    let mut workspace = state.workspace.write().await;
    let index = workspace.add_edge(req.from, req.to, req.base_cost, req.is_one_way)?;
    let edge = &workspace.graph().edges()[index];
    Ok((StatusCode::CREATED, Json(EdgeResult::from_edge(index, edge))))
}

async fn update_edge(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    body: Bytes,
) -> Result<Json<EdgeResult>, AppError> {
    let req: UpdateEdgeRequest = parse_body(&body)?;
    let mut workspace = state.workspace.write().await;
    let edge = workspace.update_edge(index, req.into_update())?;
    Ok(Json(EdgeResult::from_edge(index, edge)))
}

async fn delete_edge(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<EdgeResult>, AppError> {
    let edge = state.workspace.write().await.delete_edge(index)?;
    Ok(Json(EdgeResult::from_edge(index, &edge)))
}

/// Effective cost of every edge under the active time slot.
async fn edge_costs(State(state): State<AppState>) -> Json<Vec<EdgeCostResult>> {
    let workspace = state.workspace.read().await;
    let costs = workspace
        .graph()
        .edges()
        .iter()
        .zip(workspace.scaled_edge_costs())
        .enumerate()
        .map(|(index, (edge, cost))| EdgeCostResult {
            index,
            from: edge.from,
            to: edge.to,
            base_cost: edge.base_cost,
            cost,
        })
        .collect();
    Json(costs)
}

// ========== Configuration ==========

async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse::from_config(state.workspace.read().await.config()))
}

/// Change the time slot, one-way mode or depth limit.
///
/// The whole request is validated before anything is applied.
async fn update_config(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConfigResponse>, AppError> {
    let req: UpdateConfigRequest = parse_body(&body)?;
    if let Some(depth) = req.depth_limit {
        if !SearchConfig::depth_limit_in_range(depth) {
            return Err(AppError::BadRequest {
                message: format!(
                    "Depth limit must be between {MIN_DEPTH_LIMIT} and {MAX_DEPTH_LIMIT}, got {depth}"
                ),
            });
        }
    }

    let mut workspace = state.workspace.write().await;
    if let Some(time_slot) = req.time_slot {
        workspace.set_time_slot(time_slot);
    }
    if let Some(enabled) = req.one_way_enabled {
        workspace.set_one_way(enabled);
    }
    if let Some(depth) = req.depth_limit {
        workspace.set_depth_limit(depth);
    }
    Ok(Json(ConfigResponse::from_config(workspace.config())))
}

// ========== Search ==========

async fn list_algorithms() -> Json<Vec<AlgorithmInfo>> {
    Json(
        Algorithm::ALL
            .into_iter()
            .map(AlgorithmInfo::from_algorithm)
            .collect(),
    )
}

/// Run one strategy against the current graph.
async fn search(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AlgorithmResultDto>, AppError> {
    let algorithm: Algorithm = key.parse()?;
    let workspace = state.workspace.read().await;
    let result = workspace.planner().run(algorithm);
    Ok(Json(AlgorithmResultDto::from_result(
        &result,
        workspace.graph(),
    )))
}

/// Run all nine strategies against one snapshot.
async fn compare(State(state): State<AppState>) -> Json<ComparisonResponse> {
    let workspace = state.workspace.read().await;
    let comparison = workspace.planner().compare_all();
    Json(ComparisonResponse::from_comparison(
        &comparison,
        workspace.graph(),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownNode(_) | GraphError::UnknownEdge(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<SnapshotError> for AppError {
    fn from(e: SnapshotError) -> Self {
        match e {
            SnapshotError::Io(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<InvalidAlgorithm> for AppError {
    fn from(e: InvalidAlgorithm) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
