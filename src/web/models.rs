use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::AllPairsResult;
use crate::graph::LabeledGraph;

/// Edge weight type used by the web layer
pub type WebWeight = OrderedFloat<f64>;

/// Represents a node in the graph for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
}

/// Represents a directed edge between two labelled nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Represents a complete graph for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl WebGraph {
    pub fn from_labeled(graph: &LabeledGraph<WebWeight>) -> Self {
        let nodes = graph
            .labels()
            .iter()
            .map(|(id, label)| WebNode {
                id,
                label: label.to_string(),
            })
            .collect();
        let links = graph
            .edges()
            .map(|(source, target, weight)| WebEdge {
                source: source.to_string(),
                target: target.to_string(),
                weight: weight.into_inner(),
            })
            .collect();
        WebGraph { nodes, links }
    }
}

/// Parameters for random graph generation; omitted fields follow the demo
/// generator
#[derive(Debug, Default, Deserialize)]
pub struct GraphGenerationRequest {
    #[serde(default)]
    pub node_count: Option<usize>,
    #[serde(default)]
    pub out_degree: Option<usize>,
    #[serde(default)]
    pub min_weight: Option<i64>,
    #[serde(default)]
    pub max_weight: Option<i64>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A caller-supplied graph
#[derive(Debug, Deserialize)]
pub struct GraphUploadRequest {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// Parameters for a solve
#[derive(Debug, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default)]
    pub parallel: bool,
}

fn default_algorithm() -> String {
    "floyd-warshall".to_string()
}

/// Distance matrix produced by a solve
#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub parallel: bool,
    pub execution_time_ms: f64,
    pub labels: Vec<String>,
    /// Row `i`, column `j` is the shortest distance, `null` if unreachable
    pub distances: Vec<Vec<Option<f64>>>,
    pub reachable_pairs: usize,
    pub negative_cycle_nodes: Vec<String>,
}

/// Query string of a route lookup
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: String,
    pub destination: String,
}

/// A reconstructed route between two labelled nodes
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub source: String,
    pub destination: String,
    pub reachable: bool,
    pub distance: Option<f64>,
    pub path: Vec<String>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a graph and its most recent solve
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_solve: Option<SolveResponse>,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub labeled: Arc<LabeledGraph<WebWeight>>,
    #[serde(skip)]
    pub result: Option<Arc<AllPairsResult<WebWeight>>>,
}

impl Session {
    pub fn new(labeled: LabeledGraph<WebWeight>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: WebGraph::from_labeled(&labeled),
            last_solve: None,
            created_at: Utc::now(),
            labeled: Arc::new(labeled),
            result: None,
        }
    }
}
