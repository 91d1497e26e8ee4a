use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// Length of a direct edge or of a shortest path
///
/// `Unreachable` is the explicit "no edge" / "no path" sentinel. It orders
/// after every finite value, and extending a distance by an unreachable leg
/// is unreachable without ever touching the weight arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W: Weight> Distance<W> {
    /// Distance of a node to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Returns the finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    /// Concatenates two legs; unreachable if either leg is unreachable
    pub fn extend(self, other: Self) -> Self {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a + b),
            _ => Distance::Unreachable,
        }
    }

    /// Strict comparison used by relaxation
    pub fn is_shorter_than(&self, other: &Self) -> bool {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a < b,
            (Distance::Finite(_), Distance::Unreachable) => true,
            (Distance::Unreachable, _) => false,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Finite(w),
            None => Distance::Unreachable,
        }
    }
}

/// Dense square matrix stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a `size × size` matrix with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        Matrix {
            size,
            data: vec![value; size * size],
        }
    }

    /// Creates a matrix whose cell `(i, j)` is `f(i, j)`
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                data.push(f(i, j));
            }
        }
        Matrix { size, data }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at row `i`, column `j`
    ///
    /// # Panics
    /// Panics if either index is not below `size()`.
    pub fn get(&self, i: usize, j: usize) -> &T {
        assert!(j < self.size, "column {} out of range for size {}", j, self.size);
        &self.data[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Iterates over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics, and a zero-sized matrix has no rows anyway
        self.data.chunks(self.size.max(1))
    }

    /// Copies the matrix into nested vectors
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: T) {
        let size = self.size;
        self.data[i * size + j] = value;
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// Validated `n × n` table of direct edge weights
///
/// Guarantees `n ≥ 1`, a zero diagonal, and comparable weights. Instances
/// are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W> {
    weights: Matrix<Distance<W>>,
}

impl<W: Weight> AdjacencyMatrix<W> {
    /// Builds an adjacency matrix from nested rows
    ///
    /// Fails with `InvalidShape` for an empty or non-square input, with
    /// `InvalidDiagonal` for any diagonal entry that is not zero, and with
    /// `InvalidWeight` for weights that cannot be compared (NaN).
    pub fn from_rows(rows: Vec<Vec<Distance<W>>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::InvalidShape("matrix has no nodes".to_string()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidShape(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }

        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            data.extend(row);
        }
        Self::from_matrix(Matrix { size: n, data })
    }

    /// Builds an adjacency matrix from rows where `None` means "no edge"
    pub fn from_options(rows: Vec<Vec<Option<W>>>) -> Result<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Distance::from).collect())
                .collect(),
        )
    }

    /// Builds an adjacency matrix of `n` nodes from an edge list
    ///
    /// Self-loops are rejected with `InvalidEdge` and a second edge between
    /// the same ordered pair with `DuplicateEdge`.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        if n == 0 {
            return Err(Error::InvalidShape("matrix has no nodes".to_string()));
        }
        let mut weights = Matrix::from_fn(n, |i, j| {
            if i == j {
                Distance::zero()
            } else {
                Distance::Unreachable
            }
        });

        for (from, to, weight) in edges {
            for index in [from, to] {
                if index >= n {
                    return Err(Error::IndexOutOfRange { index, size: n });
                }
            }
            if from == to {
                return Err(Error::InvalidEdge(from, to));
            }
            if weights.get(from, to).is_finite() {
                return Err(Error::DuplicateEdge(from.to_string(), to.to_string()));
            }
            weights.set(from, to, Distance::Finite(weight));
        }

        Self::from_matrix(weights)
    }

    pub(crate) fn from_matrix(weights: Matrix<Distance<W>>) -> Result<Self> {
        let n = weights.size();
        for i in 0..n {
            for j in 0..n {
                let cell = weights.get(i, j);
                if let Distance::Finite(w) = cell {
                    if !w.is_comparable() {
                        return Err(Error::InvalidWeight { from: i, to: j });
                    }
                }
                if i == j && *cell != Distance::zero() {
                    return Err(Error::InvalidDiagonal { index: i });
                }
            }
        }
        Ok(AdjacencyMatrix { weights })
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.weights.size()
    }

    /// Direct edge weight from `from` to `to`
    pub fn get(&self, from: usize, to: usize) -> Result<Distance<W>> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(*self.weights.get(from, to))
    }

    pub fn as_matrix(&self) -> &Matrix<Distance<W>> {
        &self.weights
    }

    /// Iterates over all off-diagonal edges as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |i| {
            self.weights
                .row(i)
                .iter()
                .enumerate()
                .filter_map(move |(j, cell)| match cell {
                    Distance::Finite(w) if i != j => Some((i, j, *w)),
                    _ => None,
                })
        })
    }

    /// Total weight of a route given as consecutive node indices
    ///
    /// An empty route is unreachable, a single node has length zero, and a
    /// route that uses a missing edge is unreachable.
    pub fn route_weight(&self, route: &[usize]) -> Result<Distance<W>> {
        let Some(&first) = route.first() else {
            return Ok(Distance::Unreachable);
        };
        self.check_index(first)?;

        let mut total = Distance::zero();
        for pair in route.windows(2) {
            total = total.extend(self.get(pair[0], pair[1])?);
        }
        Ok(total)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.size(),
            })
        }
    }
}

impl<W: Weight> Graph<W> for AdjacencyMatrix<W> {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.weights
                .row(vertex)
                .iter()
                .enumerate()
                .filter_map(move |(j, cell)| match cell {
                    Distance::Finite(w) if j != vertex => Some((j, *w)),
                    _ => None,
                }),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from == to || !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        self.weights.get(from, to).finite()
    }
}
