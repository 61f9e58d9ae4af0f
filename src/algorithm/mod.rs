mod base;
mod aco;
mod ants;
mod incumbent;

pub use aco::Colony;
pub use ants::TrailView;
pub use base::pheromone::PheromoneMatrix;
pub use incumbent::{AllTime, Incumbent, IncumbentEnum, LastIteration};
