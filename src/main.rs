//! route-ga: headless route search over 2-D points.
//!
//! Reads a point file (or builds a grid of tile centres), evolves routes
//! until a stopping rule fires, and prints the best route found. Set
//! `RUST_LOG=debug` to follow every generation.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use route_ga::ga::{Coordinate, RouteGaConfig, RouteResult, RouteRunner};
use route_ga::points::{grid_points, read_points};
use route_ga::GaError;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "route-ga")]
#[command(author, version, about = "Search a short visiting order over 2-D points with a genetic algorithm")]
struct Args {
    /// Point file, one `x,y` or `x y` pair per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "grid")]
    input: Option<PathBuf>,

    /// Use the centres of a ROWSxCOLUMNS grid of tiles instead of a file
    #[arg(long, value_name = "ROWSxCOLUMNS", value_parser = parse_grid)]
    grid: Option<(usize, usize)>,

    /// Tile edge length for --grid
    #[arg(long, default_value_t = 90.0)]
    tile: f64,

    /// Routes per generation
    #[arg(short, long, default_value_t = 50)]
    population: usize,

    /// Mutation rate in percent (0-100)
    #[arg(short, long, default_value_t = 1.0)]
    mutation_percent: f64,

    /// Divisor applied to the fitness of first-seen routes
    #[arg(short = 'f', long, default_value_t = 1.0)]
    minimizing_factor: f64,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<usize>,

    /// Stop once the best route is this many generations old (0 disables)
    #[arg(short, long, default_value_t = 100)]
    threshold: usize,

    /// Wall-clock limit in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write per-generation statistics as JSON
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,
}

fn parse_grid(value: &str) -> Result<(usize, usize), String> {
    let (rows, columns) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLUMNS, got {value:?}"))?;
    let rows = rows.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let columns = columns.trim().parse::<usize>().map_err(|e| e.to_string())?;
    Ok((rows, columns))
}

impl Args {
    fn config(&self) -> RouteGaConfig {
        let mut config = RouteGaConfig::default()
            .with_population_size(self.population)
            .with_mutation_rate(self.mutation_percent / 100.0)
            .with_minimizing_factor(self.minimizing_factor)
            .with_stagnation_limit(self.threshold);
        config.max_generations = self.generations;
        config.time_limit_ms = self.time_limit_ms;
        config.seed = self.seed;
        config
    }

    fn points(&self) -> Result<Vec<Coordinate>, GaError> {
        match (&self.input, self.grid) {
            (Some(path), _) => read_points(path),
            (None, Some((rows, columns))) => Ok(grid_points(rows, columns, self.tile, self.tile)),
            (None, None) => Ok(grid_points(3, 3, self.tile, self.tile)),
        }
    }
}

fn report(result: &RouteResult) {
    let reason = if result.cancelled {
        "cancelled"
    } else if result.stagnated {
        "threshold reached"
    } else if result.timed_out {
        "time limit reached"
    } else {
        "generation limit reached"
    };
    println!("Generations:          {} ({reason})", result.generations);
    println!("Best generation:      {}", result.best_generation);
    println!("Best fitness score:   {:.6}", result.best.fitness_score());
    println!("Best distance:        {:.2}", result.best.total_distance());
    if let Some(last) = result.history.last() {
        println!("Average fitness:      {:.6}", last.average_fitness);
    }
    println!("Route:");
    for (index, stop) in result.best.stops().iter().enumerate() {
        println!("  {index:>3}  ({}, {})", stop.x(), stop.y());
    }
}

fn run(args: &Args) -> Result<(), GaError> {
    let points = args.points()?;
    let config = args.config();

    let result = RouteRunner::run(&points, &config)?;

    report(&result);

    if let Some(path) = &args.history {
        let json = serde_json::to_string_pretty(&result.history)
            .map_err(|err| GaError::Io(err.into()))?;
        fs::write(path, json)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "route search failed");
            ExitCode::FAILURE
        }
    }
}
