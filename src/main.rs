use ant_colony_tsp::utils::yaml;
use ant_colony_tsp::{Colony, DistanceMatrix, Result};
use std::time::Instant;

fn main() -> Result<()> {
    let config = yaml::load_config("data/config/default.yaml")?;
    let distances = DistanceMatrix::new(vec![
        vec![0.0, 2.0, 2.0, 5.0],
        vec![2.0, 0.0, 4.0, 1.0],
        vec![2.0, 4.0, 0.0, 3.0],
        vec![5.0, 1.0, 3.0, 0.0],
    ])?;
    let mut colony = Colony::from_config(distances, &config)?;

    let start = Instant::now();
    let tour = colony.run()?;
    let elapsed = start.elapsed().as_micros();

    print!("{}", colony.summarize(&tour));
    println!("--- {} computing time: {} μs ---", config.name, elapsed);
    Ok(())
}
