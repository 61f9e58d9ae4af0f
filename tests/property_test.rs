//! Property-based checks of colony invariants over random instances.

use ant_colony_tsp::component::tour;
use ant_colony_tsp::utils::{Error, InputError, Parameters, Selection, VisitRule};
use ant_colony_tsp::{Colony, DistanceMatrix};
use proptest::prelude::*;

/// Random asymmetric matrix with 2-7 nodes and off-diagonal costs in [1, 100).
fn random_rows() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (2usize..8).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(1.0..100.0f64, n), n).prop_map(|mut rows| {
            for (i, row) in rows.iter_mut().enumerate() {
                row[i] = 0.0;
            }
            rows
        })
    })
}

fn random_parameters() -> impl Strategy<Value = Parameters> {
    (
        1usize..6,
        1usize..5,
        0.05..=1.0f64,
        0.0..3.0f64,
        0.0..5.0f64,
        any::<bool>(),
        any::<bool>(),
        any::<u64>(),
    )
        .prop_map(|(n_ants, n_iterations, decay, alpha, beta, revisit, last, seed)| Parameters {
            decay,
            alpha,
            beta,
            visit: if revisit { VisitRule::Revisit } else { VisitRule::Exclusive },
            selection: if last { Selection::LastIteration } else { Selection::AllTime },
            seed: Some(seed),
            ..Parameters::new(n_ants, n_iterations)
        })
}

fn edge_sum(rows: &[Vec<f64>], tour: &[usize]) -> f64 {
    let mut total = 0.0;
    for edge in tour.windows(2) {
        total += rows[edge[0]][edge[1]];
    }
    total
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_tours_are_closed(rows in random_rows(), parameters in random_parameters()) {
        let n = rows.len();
        let visit = parameters.visit;
        let distances = DistanceMatrix::new(rows).unwrap();
        let mut colony = Colony::with_parameters(distances, parameters).unwrap();
        let best = colony.run().unwrap();

        prop_assert!(tour::is_closed(&best, n));
        if visit == VisitRule::Exclusive {
            prop_assert!(tour::is_hamiltonian(&best, n));
        }
    }

    #[test]
    fn prop_tour_distance_matches_edge_sum(rows in random_rows(), parameters in random_parameters()) {
        let distances = DistanceMatrix::new(rows.clone()).unwrap();
        let mut colony = Colony::with_parameters(distances, parameters).unwrap();
        let best = colony.run().unwrap();

        prop_assert_eq!(colony.get_tour_distance(&best), edge_sum(&rows, &best));
    }

    #[test]
    fn prop_pheromone_stays_non_negative(rows in random_rows(), parameters in random_parameters()) {
        let n = rows.len();
        let distances = DistanceMatrix::new(rows).unwrap();
        let mut colony = Colony::with_parameters(distances, parameters).unwrap();
        colony.run().unwrap();

        let pheromone = colony.pheromone().unwrap();
        prop_assert_eq!(pheromone.len(), n);
        prop_assert!(pheromone.iter().all(|tau| tau >= 0.0 && tau.is_finite()));
    }

    #[test]
    fn prop_zero_distance_is_rejected(rows in random_rows(), pick in any::<prop::sample::Index>()) {
        let n = rows.len();
        let cell = pick.index(n * (n - 1));
        let (i, j) = (cell / (n - 1), cell % (n - 1));
        // skip the diagonal
        let j = if j >= i { j + 1 } else { j };
        let mut rows = rows;
        rows[i][j] = 0.0;
        match DistanceMatrix::new(rows) {
            Err(Error::InvalidInput(err)) => prop_assert_eq!(err, InputError::ZeroDistance(i, j)),
            Err(err) => prop_assert!(false, "unexpected {}", err),
            Ok(_) => prop_assert!(false, "accepted a zero distance at ({}, {})", i, j),
        }
    }
}
