#[macro_use] extern crate log;
extern crate simplelog;
extern crate percolation;

use simplelog::*;
use std::env;
use std::fs::File;
use std::process;

use percolation::{Config, PercolationStats};

fn init_logging(config: &Config) -> percolation::Result<()> {
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		TermLogger::new(
			config.log_level,
			simplelog::Config::default(),
			TerminalMode::Stderr,
			ColorChoice::Auto),
	];
	if let Some(ref path) = config.log_file {
		loggers.push(WriteLogger::new(
			LevelFilter::Info,
			simplelog::Config::default(),
			File::create(path)?));
	}
	CombinedLogger::init(loggers)?;
	Ok(())
}

fn run() -> percolation::Result<()> {
	let args: Vec<String> = env::args().skip(1).collect();
	let config = Config::from_args(&args, |k| env::var(k).ok())?;
	init_logging(&config)?;
	info!("n: {}, trials: {}, seed: {:?}", config.n, config.trials, config.seed);

	let stats = match config.seed {
		Some(seed) => PercolationStats::with_seed(config.n, config.trials, seed)?,
		None => PercolationStats::new(config.n, config.trials)?,
	};
	println!("{}", stats.summary());
	Ok(())
}

fn main() {
	if let Err(e) = run() {
		eprintln!("error: {}", e);
		process::exit(1);
	}
}
