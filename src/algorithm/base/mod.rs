pub mod pheromone;
pub mod roulette;
