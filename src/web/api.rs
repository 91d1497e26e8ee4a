use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::{AllPairsResult, AllPairsShortestPaths};
use crate::graph::generators::{generate_demo_graph, generate_random_graph, DEMO_WEIGHTS};
use crate::graph::{Distance, GraphBuilder, LabeledGraph};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Default limit on the node count of generated or uploaded graphs
pub const DEFAULT_MAX_NODES: usize = 500;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    /// Largest graph accepted by generate and upload; the matrices grow as n²
    pub max_nodes: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(1000, DEFAULT_MAX_NODES)
    }

    pub fn with_limits(max_sessions: usize, max_nodes: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            max_nodes: max_nodes.max(1),
        }
    }

    /// Rejects graphs above `max_nodes` before anything is allocated for them
    fn check_node_count(&self, node_count: usize) -> Result<(), ApiError> {
        if node_count > self.max_nodes {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "invalid_graph",
                format!(
                    "Graph has {} nodes, the limit is {}",
                    node_count, self.max_nodes
                ),
            ));
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        // Sessions are plain data, a panic elsewhere cannot leave them half-written
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a session, evicting the oldest ones beyond the limit
    fn insert(&self, session: Session) {
        let mut sessions = self.lock();
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id);
            match oldest {
                Some(id) => {
                    log::info!("Evicting session {}", id);
                    sessions.remove(&id);
                }
                None => break,
            }
        }
        sessions.insert(session.id, session);
    }

    /// Runs `f` on a session under the lock; `f` should copy out only what it needs
    fn with_session<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&Session) -> T,
    ) -> Result<T, ApiError> {
        self.lock().get(&session_id).map(f).ok_or_else(session_not_found)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/solve/:session_id", post(solve_graph))
        .route("/api/path/:session_id", get(get_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Generate a new random graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<Session>, ApiError> {
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = match request.node_count {
        None if request.out_degree.is_none()
            && request.min_weight.is_none()
            && request.max_weight.is_none() =>
        {
            generate_demo_graph(&mut rng)
        }
        node_count => {
            let node_count = node_count.unwrap_or(10);
            state.check_node_count(node_count)?;
            let out_degree = request.out_degree.unwrap_or(node_count / 3);
            let min_weight = request.min_weight.unwrap_or(*DEMO_WEIGHTS.start());
            let max_weight = request.max_weight.unwrap_or(*DEMO_WEIGHTS.end());
            generate_random_graph(node_count, out_degree, min_weight..=max_weight, &mut rng)
        }
    }
    .map_err(error_to_response)?;

    let graph = generated
        .map_weights(|w| OrderedFloat(w as f64))
        .map_err(error_to_response)?;
    let session = Session::new(graph);
    log::info!(
        "Generated graph for session {} with {} nodes",
        session.id,
        session.graph.nodes.len()
    );
    state.insert(session.clone());

    Ok(Json(session))
}

/// Store a caller-supplied graph
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphUploadRequest>,
) -> Result<Json<Session>, ApiError> {
    state.check_node_count(request.nodes.len())?;
    let graph = build_uploaded_graph(&request).map_err(|err| match err {
        // Labels in the body are part of the graph, not a lookup
        Error::UnknownLabel(_) => {
            error_response(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string())
        }
        err => error_to_response(err),
    })?;
    let session = Session::new(graph);
    log::info!(
        "Uploaded graph for session {} with {} nodes",
        session.id,
        session.graph.nodes.len()
    );
    state.insert(session.clone());

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    Ok(Json(state.with_session(session_id, |s| s.graph.clone())?))
}

/// Solve all pairs for a session's graph
pub async fn solve_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let graph = state.with_session(session_id, |s| Arc::clone(&s.labeled))?;

    let algorithm = request.algorithm.clone();
    let parallel = request.parallel;
    let start_time = Instant::now();
    let result = tokio::task::spawn_blocking(move || {
        let adjacency = graph.adjacency();
        let result = match algorithm.as_str() {
            "floyd-warshall" => FloydWarshall::new().with_parallel(parallel).solve(adjacency),
            "dijkstra" => Dijkstra::new().solve(adjacency),
            _ => return None,
        };
        Some((graph, result))
    })
    .await
    .map_err(|err| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "solver_panicked",
            format!("Solver task failed: {}", err),
        )
    })?;
    let execution_time = start_time.elapsed();

    let Some((graph, result)) = result else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_algorithm",
            format!("Unknown algorithm: {}", request.algorithm),
        ));
    };
    let result = result.map_err(error_to_response)?;

    let response = solve_response(&graph, &result, &request, execution_time.as_secs_f64() * 1000.0);

    {
        let mut sessions = state.lock();
        match sessions.get_mut(&session_id) {
            Some(session) => {
                session.result = Some(Arc::new(result));
                session.last_solve = Some(response.clone());
            }
            None => return Err(session_not_found()),
        }
    }

    Ok(Json(response))
}

/// Look up the shortest route between two labelled nodes
pub async fn get_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let solved = state.with_session(session_id, |s| {
        s.result
            .as_ref()
            .map(|result| (Arc::clone(&s.labeled), Arc::clone(result)))
    })?;
    let Some((graph, result)) = solved else {
        return Err(error_response(
            StatusCode::CONFLICT,
            "not_solved",
            "Solve the graph before querying paths".to_string(),
        ));
    };

    let path = graph
        .route(&result, &query.source, &query.destination)
        .map_err(error_to_response)?;
    let distance = graph
        .distance(&result, &query.source, &query.destination)
        .map_err(error_to_response)?;

    Ok(Json(PathResponse {
        source: query.source,
        destination: query.destination,
        reachable: distance.is_finite(),
        distance: distance.finite().map(OrderedFloat::into_inner),
        path,
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<Uuid>> {
    Json(state.lock().keys().cloned().collect())
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    Ok(Json(state.with_session(session_id, Session::clone)?))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn build_uploaded_graph(request: &GraphUploadRequest) -> crate::Result<LabeledGraph<WebWeight>> {
    let mut builder = GraphBuilder::new();
    for label in &request.nodes {
        builder.add_node(label.as_str());
    }
    for edge in &request.edges {
        for label in [&edge.source, &edge.target] {
            if !builder.contains(label) {
                return Err(Error::UnknownLabel(label.clone()));
            }
        }
        builder.add_edge(&edge.source, &edge.target, OrderedFloat(edge.weight))?;
    }
    builder.build()
}

fn solve_response(
    graph: &LabeledGraph<WebWeight>,
    result: &AllPairsResult<WebWeight>,
    request: &SolveRequest,
    execution_time_ms: f64,
) -> SolveResponse {
    let labels: Vec<String> = graph.labels().iter().map(|(_, l)| l.to_string()).collect();
    let distances: Vec<Vec<Option<f64>>> = result
        .distances()
        .rows()
        .map(|row| {
            row.iter()
                .map(|d| d.finite().map(OrderedFloat::into_inner))
                .collect()
        })
        .collect();
    let reachable_pairs = result
        .distances()
        .rows()
        .flatten()
        .filter(|d| matches!(d, Distance::Finite(_)))
        .count();
    let negative_cycle_nodes = result
        .negative_cycle_nodes()
        .into_iter()
        .filter_map(|i| labels.get(i).cloned())
        .collect();

    SolveResponse {
        execution_id: Uuid::new_v4(),
        algorithm: request.algorithm.clone(),
        parallel: request.parallel,
        execution_time_ms,
        labels,
        distances,
        reachable_pairs,
        negative_cycle_nodes,
    }
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    error_response(
        StatusCode::NOT_FOUND,
        "session_not_found",
        "Session not found".to_string(),
    )
}

/// Maps library errors onto HTTP responses
fn error_to_response(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::UnknownLabel(_) => (StatusCode::NOT_FOUND, "unknown_label"),
        Error::InternalInconsistency { .. } => {
            log::warn!("Inconsistent solver output: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_inconsistency")
        }
        Error::NegativeWeight { .. } => (StatusCode::BAD_REQUEST, "negative_weight"),
        Error::IndexOutOfRange { .. } => (StatusCode::BAD_REQUEST, "index_out_of_range"),
        Error::InvalidShape(_)
        | Error::InvalidDiagonal { .. }
        | Error::InvalidWeight { .. }
        | Error::InvalidEdge(..)
        | Error::DuplicateEdge(..) => (StatusCode::BAD_REQUEST, "invalid_graph"),
    };
    error_response(status, code, err.to_string())
}
