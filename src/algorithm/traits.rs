use crate::graph::{AdjacencyMatrix, Distance, Matrix, Weight};
use crate::{Error, Result};

/// Result of an all-pairs shortest path computation
///
/// Owns the distance matrix and the next-hop matrix produced by a single
/// solve. Neither can be mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<W> {
    /// Shortest distance for every ordered pair
    distances: Matrix<Distance<W>>,

    /// First node to move to from `i` towards `j`, `None` when there is no path
    /// or `i == j`
    next_hops: Matrix<Option<usize>>,
}

impl<W: Weight> AllPairsResult<W> {
    /// Wraps solver output; both matrices must have the same size
    pub fn new(distances: Matrix<Distance<W>>, next_hops: Matrix<Option<usize>>) -> Result<Self> {
        if distances.size() != next_hops.size() {
            return Err(Error::InvalidShape(format!(
                "distance matrix is {0}x{0} but next-hop matrix is {1}x{1}",
                distances.size(),
                next_hops.size()
            )));
        }
        Ok(AllPairsResult {
            distances,
            next_hops,
        })
    }

    pub fn node_count(&self) -> usize {
        self.distances.size()
    }

    pub fn distances(&self) -> &Matrix<Distance<W>> {
        &self.distances
    }

    pub fn next_hops(&self) -> &Matrix<Option<usize>> {
        &self.next_hops
    }

    /// Shortest distance from `source` to `destination`
    pub fn distance(&self, source: usize, destination: usize) -> Result<Distance<W>> {
        self.check_index(source)?;
        self.check_index(destination)?;
        Ok(*self.distances.get(source, destination))
    }

    /// First hop from `source` towards `destination`
    pub fn next_hop(&self, source: usize, destination: usize) -> Result<Option<usize>> {
        self.check_index(source)?;
        self.check_index(destination)?;
        Ok(*self.next_hops.get(source, destination))
    }

    /// Reconstructs the shortest route from `source` to `destination`
    ///
    /// Returns `[source]` when both ends coincide and an empty route when the
    /// destination is unreachable. Following more than `n` hops means the
    /// next-hop matrix contains a cycle, reported as `InternalInconsistency`.
    pub fn path(&self, source: usize, destination: usize) -> Result<Vec<usize>> {
        self.check_index(source)?;
        self.check_index(destination)?;

        if source == destination {
            return Ok(vec![source]);
        }
        if self.next_hops.get(source, destination).is_none() {
            return Ok(Vec::new());
        }

        let n = self.node_count();
        let mut path = vec![source];
        let mut current = source;
        let mut steps = 0;

        while current != destination {
            if steps >= n {
                log::warn!(
                    "Route from {} to {} did not terminate within {} hops",
                    source,
                    destination,
                    n
                );
                return Err(Error::InternalInconsistency {
                    from: source,
                    to: destination,
                    steps,
                });
            }
            current = match *self.next_hops.get(current, destination) {
                Some(hop) if hop < n => hop,
                _ => {
                    return Err(Error::InternalInconsistency {
                        from: source,
                        to: destination,
                        steps,
                    })
                }
            };
            path.push(current);
            steps += 1;
        }

        Ok(path)
    }

    /// Nodes lying on a negative cycle, i.e. with `dist[i][i] < 0`
    pub fn negative_cycle_nodes(&self) -> Vec<usize> {
        (0..self.node_count())
            .filter(|&i| matches!(self.distances.get(i, i), Distance::Finite(w) if w.is_negative()))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.node_count() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.node_count(),
            })
        }
    }
}

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsShortestPaths<W>
where
    W: Weight,
{
    /// Compute shortest distances and next hops between every pair of nodes
    fn solve(&self, adjacency: &AdjacencyMatrix<W>) -> Result<AllPairsResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
