use std::time::Instant;

use rayon::prelude::*;

use crate::algorithm::{AllPairsResult, AllPairsShortestPaths};
use crate::graph::{AdjacencyMatrix, Distance, Matrix, Weight};
use crate::Result;

/// Floyd–Warshall all-pairs shortest paths with next-hop reconstruction
///
/// Runs in `O(n³)` time and `O(n²)` space. Intermediate nodes are considered
/// in index order and only strictly shorter routes replace existing ones, so
/// repeated runs on the same input produce identical matrices.
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall {
    /// Relax the rows of each round on the rayon thread pool
    parallel: bool,
}

impl FloydWarshall {
    /// Creates a new sequential Floyd–Warshall instance
    pub fn new() -> Self {
        FloydWarshall { parallel: false }
    }

    /// Enable or disable parallel row relaxation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }
}

/// Relaxes one row `i` through intermediate node `k`
///
/// `pivot_dist` is row `k` of the distance matrix. Row `k` never changes
/// during round `k` unless `k` lies on a negative cycle, so a snapshot of it
/// is equivalent to reading it in place.
fn relax_row<W: Weight>(
    k: usize,
    dist_row: &mut [Distance<W>],
    next_row: &mut [Option<usize>],
    pivot_dist: &[Distance<W>],
) {
    let via_k = dist_row[k];
    if via_k.is_unreachable() {
        return;
    }
    let hop = next_row[k];

    for j in 0..dist_row.len() {
        let leg = pivot_dist[j];
        if leg.is_unreachable() {
            continue;
        }
        let candidate = via_k.extend(leg);
        if candidate.is_shorter_than(&dist_row[j]) {
            dist_row[j] = candidate;
            next_row[j] = hop;
        }
    }
}

impl<W> AllPairsShortestPaths<W> for FloydWarshall
where
    W: Weight + Send + Sync,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn solve(&self, adjacency: &AdjacencyMatrix<W>) -> Result<AllPairsResult<W>> {
        let n = adjacency.size();
        let start = Instant::now();

        let mut distances = adjacency.as_matrix().clone();
        let mut next_hops = Matrix::from_fn(n, |i, j| {
            if i != j && distances.get(i, j).is_finite() {
                Some(j)
            } else {
                None
            }
        });

        for k in 0..n {
            let pivot: Vec<Distance<W>> = distances.row(k).to_vec();
            let dist_rows = distances.as_mut_slice();
            let next_rows = next_hops.as_mut_slice();

            if self.parallel {
                dist_rows
                    .par_chunks_mut(n)
                    .zip(next_rows.par_chunks_mut(n))
                    .for_each(|(dist_row, next_row)| relax_row(k, dist_row, next_row, &pivot));
            } else {
                for (dist_row, next_row) in dist_rows.chunks_mut(n).zip(next_rows.chunks_mut(n)) {
                    relax_row(k, dist_row, next_row, &pivot);
                }
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
