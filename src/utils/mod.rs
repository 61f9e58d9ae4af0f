pub mod config;
pub mod error;
pub mod yaml;

pub use config::{Config, Parameters, Selection, VisitRule};
pub use error::{Error, InputError, Result};
