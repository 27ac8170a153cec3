use std::path::PathBuf;
use std::str::FromStr;

use simplelog::LevelFilter;

use error::{PercolationError, Result};

pub const SEED_VAR: &str = "PERCOLATION_SEED";
pub const LOG_FILE_VAR: &str = "PERCOLATION_LOG";
pub const LOG_LEVEL_VAR: &str = "PERCOLATION_LOG_LEVEL";

/// Settings for one command-line run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub n: usize,
    pub trials: usize,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

fn parse_size(name: &'static str, raw: &str) -> Result<usize> {
    let value = i64::from_str(raw.trim()).map_err(|_| PercolationError::InvalidArgument {
        name,
        value: raw.to_string(),
    })?;
    if value <= 0 {
        return Err(PercolationError::InvalidSize { what: name, value });
    }
    Ok(value as usize)
}

impl Config {
    /// Builds a config from positional arguments (program name already
    /// stripped) and an environment lookup.
    pub fn from_args<F>(args: &[String], env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        if args.len() != 2 {
            return Err(PercolationError::ArgumentCount { expected: 2, found: args.len() });
        }
        let n = parse_size("grid size", &args[0])?;
        let trials = parse_size("trial count", &args[1])?;

        let seed = match env(SEED_VAR) {
            Some(raw) => Some(u64::from_str(raw.trim()).map_err(|_| {
                PercolationError::InvalidArgument { name: SEED_VAR, value: raw.clone() }
            })?),
            None => None,
        };

        let log_level = match env(LOG_LEVEL_VAR) {
            Some(raw) => LevelFilter::from_str(raw.trim()).map_err(|_| {
                PercolationError::InvalidArgument { name: LOG_LEVEL_VAR, value: raw.clone() }
            })?,
            None => LevelFilter::Warn,
        };

        Ok(Config {
            n,
            trials,
            seed,
            log_file: env(LOG_FILE_VAR).map(PathBuf::from),
            log_level,
        })
    }
}
