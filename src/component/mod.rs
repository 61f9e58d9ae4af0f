mod distance;

pub mod tour;

pub use distance::DistanceMatrix;
pub use tour::{ScoredTour, Tour};
