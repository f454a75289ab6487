#![forbid(unsafe_code)]

mod input;

use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use perc::{Indexing, Percolation, PercolationStats};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

#[derive(Parser, Debug)]
#[command(name = "perc-runner")]
#[command(about = "Open sites of a percolation grid or estimate its threshold")]
struct Args {
    /// Log verbosity written to stderr
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the sites listed in FILE and report whether the grid percolates
    Grid {
        /// Grid size followed by whitespace-separated `row col` pairs
        file: PathBuf,

        /// Row of a site to test for fullness
        #[arg(requires = "col")]
        row: Option<usize>,

        /// Column of a site to test for fullness
        col: Option<usize>,

        /// Coordinates in FILE and on the command line start at 1
        #[arg(long)]
        one_based: bool,

        /// Print the grid after opening
        #[arg(long)]
        show: bool,
    },
    /// Estimate the percolation threshold of an N-by-N grid over T trials
    Stats {
        n: usize,
        trials: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Run trials on all cores, seeded with --seed or 0
        #[arg(long)]
        parallel: bool,
    },
}

////////////////////////////////////////////////////////////////////////////////

fn run_grid<W: Write>(
    out: &mut W,
    script: &input::Script,
    query: Option<(usize, usize)>,
    indexing: Indexing,
    show: bool,
) -> Result<(), Box<dyn Error>> {
    let mut grid = Percolation::new(script.size)?;
    for &(row, col) in &script.sites {
        let site = indexing.site(row, col, script.size)?;
        grid.open(site.row, site.col)?;
    }
    info!("opened {} sites", grid.number_of_open_sites());

    if show {
        write!(out, "{grid}")?;
    }
    writeln!(out, "{} open sites", grid.number_of_open_sites())?;
    if grid.percolates() {
        writeln!(out, "percolates")?;
    } else {
        writeln!(out, "does not percolate")?;
    }

    if let Some((row, col)) = query {
        let site = indexing.site(row, col, script.size)?;
        writeln!(out, "{}", grid.is_full(site.row, site.col)?)?;
    }
    Ok(())
}

fn run_stats<W: Write>(
    out: &mut W,
    n: usize,
    trials: usize,
    seed: Option<u64>,
    parallel: bool,
) -> Result<(), Box<dyn Error>> {
    let stats = match (seed, parallel) {
        (seed, true) => PercolationStats::par_with_seed(n, trials, seed.unwrap_or_default())?,
        (Some(seed), false) => PercolationStats::with_seed(n, trials, seed)?,
        (None, false) => PercolationStats::new(n, trials)?,
    };

    writeln!(out, "mean           = {:.6}", stats.mean())?;
    writeln!(out, "stddev         = {:.6}", stats.stddev())?;
    writeln!(out, "confidenceLow  = {:.6}", stats.confidence_low())?;
    writeln!(out, "confidenceHigh = {:.6}", stats.confidence_high())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut out = io::stdout().lock();
    match args.command {
        Command::Grid {
            file,
            row,
            col,
            one_based,
            show,
        } => {
            let script = input::read(&file)?;
            let indexing = if one_based {
                Indexing::OneBased
            } else {
                Indexing::ZeroBased
            };
            run_grid(&mut out, &script, row.zip(col), indexing, show)
        }
        Command::Stats {
            n,
            trials,
            seed,
            parallel,
        } => run_stats(&mut out, n, trials, seed, parallel),
    }
}

////////////////////////////////////////////////////////////////////////////////
