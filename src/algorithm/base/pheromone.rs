use itertools::Itertools;

use crate::component::DistanceMatrix;

/// Trail strength between every ordered pair of nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    trails: Vec<f64>,
}

impl PheromoneMatrix {
    /// Every trail starts at `1/n`.
    pub fn uniform(n: usize) -> Self {
        debug_assert!(n > 0);
        let tau0 = 1.0 / n as f64;
        PheromoneMatrix { n, trails: vec![tau0; n * n] }
    }
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.trails[from * self.n + to]
    }
    pub fn row(&self, from: usize) -> &[f64] {
        &self.trails[from * self.n..(from + 1) * self.n]
    }
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.trails.iter().copied()
    }
    /// Reinforce both directions of every edge of `tour` by the inverse of
    /// its distance in that direction.
    pub fn deposit(&mut self, tour: &[usize], distances: &DistanceMatrix) {
        debug_assert_eq!(self.n, distances.len());
        for (&a, &b) in tour.iter().tuple_windows() {
            debug_assert!(a != b);
            self.trails[a * self.n + b] += 1.0 / distances.get(a, b);
            self.trails[b * self.n + a] += 1.0 / distances.get(b, a);
        }
    }
    pub fn evaporate(&mut self, decay: f64) {
        debug_assert!(decay > 0.0 && decay <= 1.0);
        for trail in self.trails.iter_mut() {
            *trail *= decay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square4() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0.0, 2.0, 2.0, 5.0],
            vec![2.0, 0.0, 4.0, 1.0],
            vec![2.0, 4.0, 0.0, 3.0],
            vec![5.0, 1.0, 3.0, 0.0],
        ]).unwrap()
    }

    #[test]
    fn it_starts_uniform() {
        let pheromone = PheromoneMatrix::uniform(4);
        assert_eq!(pheromone.len(), 4);
        assert!(pheromone.iter().all(|tau| tau == 0.25));
    }

    #[test]
    fn it_halves_every_trail() {
        let mut pheromone = PheromoneMatrix::uniform(4);
        pheromone.deposit(&[0, 1, 3, 2, 0], &square4());
        let before: Vec<f64> = pheromone.iter().collect();
        pheromone.evaporate(0.5);
        for (after, before) in pheromone.iter().zip(before) {
            assert_eq!(after, before / 2.0);
        }
    }

    #[test]
    fn it_deposits_both_directions() {
        let mut pheromone = PheromoneMatrix::uniform(4);
        pheromone.deposit(&[0, 1, 3, 2, 0], &square4());
        // edges: 0-1 (2), 1-3 (1), 3-2 (3), 2-0 (2)
        assert_eq!(pheromone.get(0, 1), 0.25 + 0.5);
        assert_eq!(pheromone.get(1, 0), 0.25 + 0.5);
        assert_eq!(pheromone.get(1, 3), 0.25 + 1.0);
        assert_eq!(pheromone.get(3, 1), 0.25 + 1.0);
        assert_eq!(pheromone.get(0, 2), 0.25 + 0.5);
        assert_eq!(pheromone.get(0, 3), 0.25);
        assert_eq!(pheromone.get(1, 2), 0.25);
        assert_eq!(pheromone.row(2), &[0.75, 0.25, 0.25, 0.25 + 1.0 / 3.0]);
    }

    #[test]
    fn it_deposits_asymmetric_costs_per_direction() {
        let distances = DistanceMatrix::new(vec![
            vec![0.0, 1.0],
            vec![4.0, 0.0],
        ]).unwrap();
        let mut pheromone = PheromoneMatrix::uniform(2);
        pheromone.deposit(&[0, 1, 0], &distances);
        // each edge touches both cells once per traversal
        assert_eq!(pheromone.get(0, 1), 0.5 + 1.0 + 1.0);
        assert_eq!(pheromone.get(1, 0), 0.5 + 0.25 + 0.25);
    }
}
