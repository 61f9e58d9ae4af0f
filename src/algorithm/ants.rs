use rand::Rng;

use super::base::pheromone::PheromoneMatrix;
use super::base::roulette;
use crate::component::tour::{Tour, START};
use crate::component::DistanceMatrix;
use crate::utils::{Result, VisitRule};

/// Read-only state shared by every ant of one iteration.
///
/// An ant is nothing more than one call to [`TrailView::run_tour`]; it keeps
/// no state between tours and never writes to the pheromone matrix.
#[derive(Clone, Copy)]
pub struct TrailView<'a> {
    pub pheromone: &'a PheromoneMatrix,
    pub distances: &'a DistanceMatrix,
    pub alpha: f64,
    pub beta: f64,
    pub visit: VisitRule,
}

impl<'a> TrailView<'a> {
    /// Build one closed tour from node 0, drawing one uniform number per step.
    pub fn run_tour<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tour> {
        let n = self.distances.len();
        debug_assert_eq!(n, self.pheromone.len());
        let mut tour = Vec::with_capacity(n + 1);
        let mut visited = vec![false; n];
        tour.push(START);
        visited[START] = true;
        while tour.len() < n {
            let current = *tour.last().unwrap_or(&START);
            let weights = self.desirability(current, &visited);
            let next = roulette::spin(&weights, rng.gen::<f64>(), current)?;
            visited[next] = true;
            tour.push(next);
        }
        tour.push(START);
        Ok(tour)
    }

    /// `tau^alpha * (1/d)^beta` towards every admissible node, 0 elsewhere.
    pub fn desirability(&self, current: usize, visited: &[bool]) -> Vec<f64> {
        let pheromone = self.pheromone.row(current);
        let distances = self.distances.row(current);
        (0..distances.len())
            .map(|j| {
                if !self.admits(current, j, visited) {
                    return 0.0;
                }
                pheromone[j].powf(self.alpha) * (1.0 / distances[j]).powf(self.beta)
            })
            .collect()
    }

    fn admits(&self, current: usize, next: usize, visited: &[bool]) -> bool {
        match self.visit {
            VisitRule::Exclusive => !visited[next],
            // the zero self-distance would make its score infinite
            VisitRule::Revisit => next != current,
        }
    }
}
