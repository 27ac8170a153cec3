#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate simplelog;
extern crate rand;

mod data;
mod disjoint_set;
mod error;
mod percolation;
mod stats;
pub mod config;

pub use config::Config;
pub use data::{Site, Direction};
pub use disjoint_set::DisjointSet;
pub use error::{PercolationError, Result};
pub use percolation::Percolation;
pub use stats::{PercolationStats, Summary, run_trial};
