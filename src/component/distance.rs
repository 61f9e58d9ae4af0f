use itertools::Itertools;

use crate::utils::{InputError, Result};

/// Square matrix of travel costs, `get(i, j)` being the cost from i to j.
///
/// Construction guarantees every entry is finite and non-negative and every
/// off-diagonal entry is strictly positive, so inverse distances are finite.
/// Symmetry is not required.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(InputError::Empty.into());
        }
        if n < 2 {
            return Err(InputError::TooFewNodes(n).into());
        }
        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(InputError::NotSquare { row: i, len: row.len(), expected: n }.into());
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(InputError::BadDistance(i, j, d).into());
                }
                if i != j && d == 0.0 {
                    return Err(InputError::ZeroDistance(i, j).into());
                }
            }
            cells.extend(row);
        }
        Ok(DistanceMatrix { n, cells })
    }
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.n && to < self.n);
        self.cells[from * self.n + to]
    }
    pub fn row(&self, from: usize) -> &[f64] {
        &self.cells[from * self.n..(from + 1) * self.n]
    }
    /// Sum of the edge costs along `tour`.
    ///
    /// # Panics
    /// If the tour names a node outside the matrix.
    pub fn tour_distance(&self, tour: &[usize]) -> f64 {
        tour.iter()
            .tuple_windows()
            .map(|(&a, &b)| {
                assert!(a < self.n && b < self.n, "node out of range in tour {:?}", tour);
                self.get(a, b)
            })
            .sum()
    }
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).tuple_combinations()
            .all(|(i, j)| self.get(i, j) == self.get(j, i))
    }
}
