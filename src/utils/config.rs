use serde::Deserialize;

use super::error::{InputError, Result};

const DECAY: f64 = 0.5;
const ALPHA: f64 = 1.0;
const BETA: f64 = 1.0;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub name: String,
    #[serde(default)]
    pub seed: Option<u64>,
    pub parameters: Parameters,
}

/// Hyperparameters fixed for the lifetime of a colony.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub n_ants: usize,
    pub n_iterations: usize,
    /// pheromone retention per iteration, in (0, 1]
    #[serde(default = "default_decay")]
    pub decay: f64,
    /// exponent on pheromone strength
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// exponent on inverse distance
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default)]
    pub visit: VisitRule,
    #[serde(default)]
    pub selection: Selection,
    #[serde(skip)]
    pub seed: Option<u64>,
}

/// Which nodes an ant may step to next.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisitRule {
    /// Only nodes not yet in the tour, so every tour is Hamiltonian.
    Exclusive,
    /// Any node but the current one; nodes may repeat before the tour closes.
    Revisit,
}

/// Which tours compete for the result of a run.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Shortest tour of the final iteration only.
    LastIteration,
    /// Shortest tour seen in any iteration.
    AllTime,
}

impl Default for VisitRule {
    fn default() -> Self {
        VisitRule::Exclusive
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::AllTime
    }
}

fn default_decay() -> f64 { DECAY }
fn default_alpha() -> f64 { ALPHA }
fn default_beta() -> f64 { BETA }

impl Parameters {
    pub fn new(n_ants: usize, n_iterations: usize) -> Self {
        Parameters {
            n_ants,
            n_iterations,
            decay: DECAY,
            alpha: ALPHA,
            beta: BETA,
            visit: VisitRule::default(),
            selection: Selection::default(),
            seed: None,
        }
    }
    pub fn validate(&self) -> Result<()> {
        if self.n_ants == 0 {
            return Err(bad("n_ants", "at least 1", 0.0));
        }
        if self.n_iterations == 0 {
            return Err(bad("n_iterations", "at least 1", 0.0));
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(bad("decay", "in (0, 1]", self.decay));
        }
        if !self.alpha.is_finite() {
            return Err(bad("alpha", "finite", self.alpha));
        }
        if !self.beta.is_finite() {
            return Err(bad("beta", "finite", self.beta));
        }
        Ok(())
    }
}

impl Config {
    /// Parameters with the config-level seed applied.
    pub fn parameters(&self) -> Parameters {
        let mut parameters = self.parameters.clone();
        parameters.seed = self.seed;
        parameters
    }
}

fn bad(name: &'static str, expected: &'static str, value: f64) -> super::error::Error {
    InputError::BadParameter { name, expected, value }.into()
}
