use std::fmt::Write;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use super::ants::TrailView;
use super::base::pheromone::PheromoneMatrix;
use super::incumbent::{Incumbent, IncumbentEnum};
use crate::component::{tour, DistanceMatrix, ScoredTour, Tour};
use crate::utils::{Config, Parameters, Result, VisitRule};

/// Ant colony over a fixed distance matrix.
///
/// Each iteration every ant builds a tour from the same frozen pheromone
/// matrix; afterwards each tour reinforces its edges and the whole matrix
/// decays once.
pub struct Colony {
    distances: DistanceMatrix,
    parameters: Parameters,
    pheromone: Option<PheromoneMatrix>,
}

impl Colony {
    /// Colony with decay 0.5, alpha 1 and beta 1.
    pub fn new(distances: Vec<Vec<f64>>, n_ants: usize, n_iterations: usize) -> Result<Self> {
        let distances = DistanceMatrix::new(distances)?;
        Colony::with_parameters(distances, Parameters::new(n_ants, n_iterations))
    }
    pub fn with_parameters(distances: DistanceMatrix, parameters: Parameters) -> Result<Self> {
        parameters.validate()?;
        Ok(Colony { distances, parameters, pheromone: None })
    }
    pub fn from_config(distances: DistanceMatrix, config: &Config) -> Result<Self> {
        Colony::with_parameters(distances, config.parameters())
    }
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
    /// Pheromone matrix as left by the last run.
    pub fn pheromone(&self) -> Option<&PheromoneMatrix> {
        self.pheromone.as_ref()
    }
    /// Run with the configured seed, or a fresh one if none is set.
    pub fn run(&mut self) -> Result<Tour> {
        let mut rng = match self.parameters.seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }
    pub fn run_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Tour> {
        let Parameters { n_ants, n_iterations, decay, alpha, beta, visit, selection, .. } =
            self.parameters;
        let distances = &self.distances;
        let mut pheromone = PheromoneMatrix::uniform(distances.len());
        let mut incumbent: IncumbentEnum = selection.into();

        for _epoch in 0..n_iterations {
            let tours = {
                let trail = TrailView { pheromone: &pheromone, distances, alpha, beta, visit };
                (0..n_ants)
                    .map(|_| trail.run_tour(&mut *rng))
                    .collect::<Result<Vec<Tour>>>()?
            };
            debug_assert!(tours.iter().all(|tour| match visit {
                VisitRule::Exclusive => tour::is_hamiltonian(tour, distances.len()),
                VisitRule::Revisit => tour::is_closed(tour, distances.len()),
            }));
            for tour in tours.iter() {
                pheromone.deposit(tour, distances);
            }
            pheromone.evaporate(decay);

            let batch: Vec<ScoredTour> = tours.into_iter()
                .map(|tour| ScoredTour::new(tour, distances))
                .collect();
            #[cfg(debug_assertions)]
            println!("iteration #{} shortest = {:?}", _epoch,
                     batch.iter().map(ScoredTour::distance).fold(f64::INFINITY, f64::min));
            incumbent.offer(batch);
        }
        self.pheromone = Some(pheromone);
        let best = incumbent.best()
            .expect("a validated colony builds at least one tour");
        Ok(best.tour.clone())
    }
    /// Total distance of `tour` under this colony's matrix.
    ///
    /// # Panics
    /// If the tour names a node outside the matrix.
    pub fn get_tour_distance(&self, tour: &[usize]) -> f64 {
        self.distances.tour_distance(tour)
    }
    /// Human-readable report of `tour` against this colony's matrices.
    pub fn summarize(&self, tour: &[usize]) -> String {
        let mut msg = String::new();
        writeln!(msg, "tour {:?} over {} nodes", tour, self.distances.len()).unwrap();
        if !self.distances.is_symmetric() {
            writeln!(msg, "distances are asymmetric, trails were reinforced both ways").unwrap();
        }
        for (&a, &b) in tour.iter().tuple_windows() {
            let trail = match &self.pheromone {
                Some(pheromone) => format!("{:.4}", pheromone.get(a, b)),
                None => String::from("-"),
            };
            writeln!(msg, "- edge #{:02} -> #{:02}, distance {:.2}, pheromone {}",
                     a, b, self.distances.get(a, b), trail).unwrap();
        }
        writeln!(msg, "the tour has distance {:.2}", self.get_tour_distance(tour)).unwrap();
        msg
    }
}
