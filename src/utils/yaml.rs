use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::{InputError, Result};
use crate::component::DistanceMatrix;

#[derive(Deserialize)]
struct ProblemYaml {
    scale: ProblemScaleYaml,
    distances: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct ProblemScaleYaml {
    nodes: usize,
}

pub fn load_distances(path: &str) -> Result<DistanceMatrix> {
    let text = fs::read_to_string(path)?;
    parse_distances(&text)
}

pub fn parse_distances(text: &str) -> Result<DistanceMatrix> {
    let yaml: ProblemYaml = serde_yaml::from_str(text)?;
    if yaml.scale.nodes != yaml.distances.len() {
        let (declared, actual) = (yaml.scale.nodes, yaml.distances.len());
        return Err(InputError::NodeCount { declared, actual }.into());
    }
    DistanceMatrix::new(yaml.distances)
}

pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(text)?;
    config.parameters.validate()?;
    Ok(config)
}
