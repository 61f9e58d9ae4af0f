use hashbrown::HashSet;
use ordered_float::OrderedFloat;

use super::DistanceMatrix;

/// Node indices of a closed walk, starting and ending at node 0.
pub type Tour = Vec<usize>;

pub const START: usize = 0;

/// A tour together with its total distance; ordered by distance.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoredTour {
    pub distance: OrderedFloat<f64>,
    pub tour: Tour,
}

impl ScoredTour {
    pub fn new(tour: Tour, distances: &DistanceMatrix) -> Self {
        let distance = OrderedFloat(distances.tour_distance(&tour));
        ScoredTour { distance, tour }
    }
    pub fn distance(&self) -> f64 {
        self.distance.into_inner()
    }
}

/// Starts and ends at node 0 with `n + 1` entries.
pub fn is_closed(tour: &[usize], n: usize) -> bool {
    tour.len() == n + 1
        && tour.first() == Some(&START)
        && tour.last() == Some(&START)
}

/// Closed, and every node of `0..n` is visited exactly once.
pub fn is_hamiltonian(tour: &[usize], n: usize) -> bool {
    if !is_closed(tour, n) {
        return false;
    }
    let inner = &tour[..n];
    let seen: HashSet<usize> = inner.iter().copied().collect();
    seen.len() == n && seen.iter().all(|&node| node < n)
}
