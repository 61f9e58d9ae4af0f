use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("degenerate distribution leaving node #{node:02}: {weights:?}")]
    InvalidDistribution { node: usize, weights: Vec<f64> },
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("distance matrix is empty")]
    Empty,
    #[error("distance matrix needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("problem declares {declared} nodes but its matrix has {actual} rows")]
    NodeCount { declared: usize, actual: usize },
    #[error("row #{row:02} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("distance ({0}, {1}) is {2}, expected a finite non-negative value")]
    BadDistance(usize, usize, f64),
    #[error("distance ({0}, {1}) between distinct nodes is zero")]
    ZeroDistance(usize, usize),
    #[error("parameter `{name}` must be {expected}, got {value}")]
    BadParameter { name: &'static str, expected: &'static str, value: f64 },
}
