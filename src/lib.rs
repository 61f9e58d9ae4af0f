//! Ant colony optimization for the traveling salesman problem.
//!
//! A [`Colony`](algorithm::Colony) owns a validated distance matrix and a set
//! of [`Parameters`](utils::Parameters). Each iteration its ants build tours
//! biased by pheromone and inverse distance, every tour reinforces the
//! pheromone along its edges, and the whole matrix then decays.

pub mod algorithm;
pub mod component;
pub mod utils;

pub use algorithm::Colony;
pub use component::{DistanceMatrix, Tour};
pub use utils::{Error, Parameters, Result};
