mod cli;
mod logging;

use std::collections::HashSet;
use std::fs;
use std::time::{Duration, Instant};

use clap::Parser;
use colored::Colorize;
use eyre::{Result, WrapErr, eyre};
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use cli::{Args, Command, MapArgs};
use grid_search::{Algorithm, Coordinate, Grid, ParsedMap, SearchResult, WeightGrid, search};
use logging::Logger;

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    match args.command {
        Command::Solve {
            map,
            algorithm,
            render,
        } => {
            let problem = Problem::load(&map)?;
            run_solver(&problem, algorithm.into(), render)?;
        }
        Command::Benchmark { map } => {
            let problem = Problem::load(&map)?;
            run_benchmark(&problem)?;
        }
    }

    Ok(())
}

struct Problem {
    grid: Grid,
    start: Coordinate,
    target: Coordinate,
    weights: Option<WeightGrid>,
    limit: Option<usize>,
}

impl Problem {
    fn load(args: &MapArgs) -> Result<Self> {
        let contents = fs::read_to_string(&args.path)
            .wrap_err_with(|| format!("failed to read {}", args.path.display()))?;
        let map: ParsedMap = contents
            .parse()
            .wrap_err_with(|| format!("failed to parse {}", args.path.display()))?;

        let start = args
            .start
            .or(map.start)
            .ok_or_else(|| eyre!("no start: mark one with `S` or pass --start"))?;
        let target = args
            .target
            .or(map.target)
            .ok_or_else(|| eyre!("no target: mark one with `T` or pass --target"))?;

        let weights = args.weighted.then(|| match args.seed {
            Some(seed) => {
                debug!("weights seeded with {}", seed);
                WeightGrid::random(&map.grid, &mut StdRng::seed_from_u64(seed))
            }
            None => WeightGrid::random(&map.grid, &mut rand::rng()),
        });

        debug!(
            "{}x{} grid: {} -> {}",
            map.grid.cols(),
            map.grid.rows(),
            start,
            target
        );

        Ok(Self {
            grid: map.grid,
            start,
            target,
            weights,
            limit: args.limit,
        })
    }

    fn solve(&self, algorithm: Algorithm) -> Result<Report> {
        let planning_start = Instant::now();
        let result = search(
            algorithm,
            self.start,
            self.target,
            &self.grid,
            self.weights.as_ref(),
            self.limit,
        )?;
        let elapsed = planning_start.elapsed();

        let cost = result.path.as_deref().map(|path| match &self.weights {
            Some(weights) => weights.path_cost(path),
            None => path.len().saturating_sub(1) as u64,
        });

        Ok(Report {
            result,
            cost,
            elapsed,
        })
    }
}

struct Report {
    result: SearchResult,
    cost: Option<u64>,
    elapsed: Duration,
}

fn run_solver(problem: &Problem, algorithm: Algorithm, render: bool) -> Result<()> {
    info!("solving with {}", algorithm.name());
    if problem.weights.is_some() && !algorithm.is_weighted() {
        warn!("{} ignores weights", algorithm.name());
    }
    if problem.limit.is_some() && !algorithm.is_depth_limited() {
        warn!("{} ignores the depth limit", algorithm.name());
    }

    let report = problem.solve(algorithm)?;
    print_report(&report);

    if render {
        print_map(problem, &report.result);
    }

    Ok(())
}

fn run_benchmark(problem: &Problem) -> Result<()> {
    info!("benchmarking every algorithm");

    let mut completed = Vec::new();
    for algorithm in Algorithm::all() {
        debug!("testing {}", algorithm.name());
        completed.push((algorithm.name(), problem.solve(algorithm)?));
    }

    print_benchmark_summary(&completed);
    Ok(())
}

// ========== Utilities ==========

fn print_report(report: &Report) {
    match (report.result.hops(), report.cost) {
        (Some(hops), Some(cost)) => {
            info!("found a {} step path, cost {} ({:?})", hops, cost, report.elapsed)
        }
        _ => info!("no path ({:?})", report.elapsed),
    }
    info!("explored {} cells", report.result.explored.len());
}

fn print_benchmark_summary(results: &[(&str, Report)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<18} {:>7} {:>7} {:>9}  {:>12}",
        "algorithm", "steps", "cost", "explored", "time"
    );
    info!("{:-<60}", "");

    for (name, report) in results {
        let steps = report
            .result
            .hops()
            .map_or_else(|| "-".to_string(), |hops| hops.to_string());
        let cost = report
            .cost
            .map_or_else(|| "-".to_string(), |cost| cost.to_string());

        info!(
            "{:<18} {:>7} {:>7} {:>9}  {:>12?}",
            name,
            steps,
            cost,
            report.result.explored.len(),
            report.elapsed,
        );
    }

    let solved = results.iter().filter(|(_, r)| r.cost.is_some());

    if let Some((name, report)) = solved.clone().min_by_key(|(_, r)| r.cost) {
        info!("\ncheapest: {} (cost {})", name, report.cost.unwrap_or_default());
    }

    if let Some((name, report)) = solved.min_by_key(|(_, r)| r.result.explored.len()) {
        info!("leanest: {} ({} explored)", name, report.result.explored.len());
    }

    if let Some((name, report)) = results.iter().min_by_key(|(_, r)| r.elapsed) {
        info!("fastest: {} ({:?})", name, report.elapsed);
    }
}

fn print_map(problem: &Problem, result: &SearchResult) {
    let explored: HashSet<Coordinate> = result.explored.iter().copied().collect();
    let path: HashSet<Coordinate> = result.path.iter().flatten().copied().collect();

    for y in 0..problem.grid.rows() {
        let mut line = String::new();

        for x in 0..problem.grid.cols() {
            let pos = Coordinate::new(x, y);
            let glyph = if pos == problem.start {
                "S".green().bold()
            } else if pos == problem.target {
                "T".red().bold()
            } else if !problem.grid.is_open(pos) {
                "#".dimmed()
            } else if path.contains(&pos) {
                "*".blue().bold()
            } else if explored.contains(&pos) {
                "o".cyan()
            } else {
                ".".normal()
            };

            line.push_str(&glyph.to_string());
        }

        println!("{line}");
    }
}
