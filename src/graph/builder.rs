use std::collections::HashMap;

use crate::algorithm::AllPairsResult;
use crate::graph::labels::NodeLabels;
use crate::graph::matrix::{AdjacencyMatrix, Distance, Matrix};
use crate::graph::traits::Weight;
use crate::{Error, Result};

/// Collects labelled nodes and edges and produces an immutable graph
#[derive(Debug, Clone)]
pub struct GraphBuilder<W> {
    labels: NodeLabels,
    edges: HashMap<(usize, usize), W>,
}

impl<W: Weight> Default for GraphBuilder<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> GraphBuilder<W> {
    pub fn new() -> Self {
        GraphBuilder {
            labels: NodeLabels::new(),
            edges: HashMap::new(),
        }
    }

    /// Adds a node, returning its index. Adding a known label is a no-op.
    pub fn add_node(&mut self, label: impl Into<String>) -> usize {
        self.labels.insert(label)
    }

    /// Adds a directed edge, registering unknown labels as new nodes
    ///
    /// Self-loops and a second edge between the same ordered pair are
    /// rejected; the graph must stay a simple digraph.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<&mut Self> {
        let source = self.labels.insert(from);
        let target = self.labels.insert(to);
        if source == target {
            return Err(Error::InvalidEdge(source, target));
        }
        if self.edges.contains_key(&(source, target)) {
            return Err(Error::DuplicateEdge(from.to_string(), to.to_string()));
        }
        self.edges.insert((source, target), weight);
        Ok(self)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Produces the labelled graph; an empty builder is an invalid shape
    pub fn build(self) -> Result<LabeledGraph<W>> {
        let n = self.labels.len();
        if n == 0 {
            return Err(Error::InvalidShape("graph has no nodes".to_string()));
        }

        let edges = &self.edges;
        let weights = Matrix::from_fn(n, |i, j| {
            if i == j {
                Distance::zero()
            } else {
                edges.get(&(i, j)).copied().into()
            }
        });
        let adjacency = AdjacencyMatrix::from_matrix(weights)?;
        log::debug!(
            "Built graph with {} nodes and {} edges",
            n,
            self.edges.len()
        );

        Ok(LabeledGraph {
            labels: self.labels,
            adjacency,
        })
    }
}

/// Adjacency matrix paired with the labels of its nodes
#[derive(Debug, Clone)]
pub struct LabeledGraph<W> {
    labels: NodeLabels,
    adjacency: AdjacencyMatrix<W>,
}

impl<W: Weight> LabeledGraph<W> {
    /// Pairs an existing adjacency matrix with labels, one per node
    pub fn new(labels: NodeLabels, adjacency: AdjacencyMatrix<W>) -> Result<Self> {
        if labels.len() != adjacency.size() {
            return Err(Error::InvalidShape(format!(
                "{} labels for {} nodes",
                labels.len(),
                adjacency.size()
            )));
        }
        Ok(LabeledGraph { labels, adjacency })
    }

    pub fn labels(&self) -> &NodeLabels {
        &self.labels
    }

    pub fn adjacency(&self) -> &AdjacencyMatrix<W> {
        &self.adjacency
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.size()
    }

    /// Converts every weight, keeping labels and edges
    pub fn map_weights<U, F>(&self, f: F) -> Result<LabeledGraph<U>>
    where
        U: Weight,
        F: Fn(W) -> U,
    {
        let source = self.adjacency.as_matrix();
        let weights = Matrix::from_fn(source.size(), |i, j| match *source.get(i, j) {
            _ if i == j => Distance::zero(),
            Distance::Finite(w) => Distance::Finite(f(w)),
            Distance::Unreachable => Distance::Unreachable,
        });
        Ok(LabeledGraph {
            labels: self.labels.clone(),
            adjacency: AdjacencyMatrix::from_matrix(weights)?,
        })
    }

    /// Iterates over edges as `(from label, to label, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, W)> + '_ {
        self.adjacency.edges().filter_map(move |(i, j, w)| {
            let from = self.labels.label_of(i).ok()?;
            let to = self.labels.label_of(j).ok()?;
            Some((from, to, w))
        })
    }

    /// Shortest route between two labelled nodes, as labels
    ///
    /// Empty when the destination is unreachable.
    pub fn route(&self, result: &AllPairsResult<W>, from: &str, to: &str) -> Result<Vec<String>> {
        let source = self.labels.index_of(from)?;
        let destination = self.labels.index_of(to)?;
        result
            .path(source, destination)?
            .into_iter()
            .map(|index| self.labels.label_of(index).map(str::to_string))
            .collect()
    }

    /// Shortest distance between two labelled nodes
    pub fn distance(&self, result: &AllPairsResult<W>, from: &str, to: &str) -> Result<Distance<W>> {
        let source = self.labels.index_of(from)?;
        let destination = self.labels.index_of(to)?;
        result.distance(source, destination)
    }
}
