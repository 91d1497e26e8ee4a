use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::algorithm::{AllPairsResult, AllPairsShortestPaths};
use crate::graph::{AdjacencyMatrix, Distance, Graph, Matrix, Weight};
use crate::{Error, Result};

/// All-pairs shortest paths by running Dijkstra's algorithm from every node
///
/// Only valid for non-negative weights; a negative edge is reported as
/// `NegativeWeight` before any search starts.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Single-source search, returning distances and the first hop from
    /// `source` towards every node
    fn search<W, G>(&self, graph: &G, source: usize) -> (Vec<Distance<W>>, Vec<Option<usize>>)
    where
        W: Weight + Ord,
        G: Graph<W>,
    {
        let n = graph.vertex_count();

        let mut distances: Vec<Distance<W>> = vec![Distance::Unreachable; n];
        let mut first_hops: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = Distance::zero();

        let mut queue = BinaryHeap::new();
        queue.push(Reverse((W::zero(), source)));

        while let Some(Reverse((dist_u, u))) = queue.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let candidate = Distance::Finite(dist_u + weight);
                if candidate.is_shorter_than(&distances[v]) {
                    distances[v] = candidate;
                    // Leaving the source directly makes `v` its own first hop
                    first_hops[v] = if u == source { Some(v) } else { first_hops[u] };
                    queue.push(Reverse((dist_u + weight, v)));
                }
            }
        }

        (distances, first_hops)
    }
}

impl<W> AllPairsShortestPaths<W> for Dijkstra
where
    W: Weight + Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&self, adjacency: &AdjacencyMatrix<W>) -> Result<AllPairsResult<W>> {
        if let Some((from, to, _)) = adjacency.edges().find(|(_, _, w)| w.is_negative()) {
            return Err(Error::NegativeWeight { from, to });
        }

        let n = adjacency.size();
        let start = Instant::now();
        let mut distances = Matrix::filled(n, Distance::Unreachable);
        let mut next_hops = Matrix::filled(n, None);

        for source in 0..n {
            let (row_dist, row_hops) = self.search(adjacency, source);
            for (target, (dist, hop)) in row_dist.into_iter().zip(row_hops).enumerate() {
                distances.set(source, target, dist);
                next_hops.set(source, target, hop);
            }
        }

        log::debug!(
            "{} solved {} nodes in {:?}",
            <Self as AllPairsShortestPaths<W>>::name(self),
            n,
            start.elapsed()
        );

        AllPairsResult::new(distances, next_hops)
    }
}
