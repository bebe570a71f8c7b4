use std::error::Error;
use std::fs;
use std::path::PathBuf;
use avltree::check::{self, Mode};
use avltree::{graph, keys, AvlTree};
use clap::Parser;
use log::{info, warn, LevelFilter};
use rayon::prelude::*;
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[clap(version = "1.0", about = "Insert and remove random keys, checking the tree after every step")]
struct Opts {
    /// Keys are drawn from [0, range]
    #[clap(short = 'r', long, default_value = "256")]
    range: u32,

    #[clap(short = 'n', long, default_value = "17")]
    num_keys: usize,

    /// Seed for the key generator; drawn from entropy if absent
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// Write a Graphviz .dot file for every step into this directory
    #[clap(short = 'g', long)]
    graphs: Option<PathBuf>,

    /// Number of trials; more than one runs them in parallel, without graphs
    #[clap(short = 't', long, default_value = "1")]
    trials: usize,

    #[clap(short = 'v', long, parse(from_occurrences))]
    verbose: u64,
}

static MODES: [Mode; 2] = [Mode::Balanced, Mode::Unbalanced];

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;
    info!("{:?}", opts);

    let seed = opts.seed.unwrap_or_else(rand::random);

    if opts.trials > 1 {
        return run_trials(&opts, seed);
    }

    if let Some(dir) = &opts.graphs {
        fs::create_dir_all(dir)?;
    }
    let keys = keys::seeded_keys(opts.range, opts.num_keys, seed)?;
    println!("seed {}: keys {:?}", seed, keys);
    println!();

    let mut failures = 0;

    for &mode in MODES.iter() {
        println!("Test of {} insertion and removal", mode.name());

        let observer = |label: &str, tree: &AvlTree<u32>| {
            if let Some(dir) = &opts.graphs {
                if let Err(e) = graph::write_dot(tree, label, dir) {
                    warn!("could not write graph {}: {}", label, e);
                }
            }
        };
        match check::run_case(mode, &keys, observer) {
            Ok(report) => println!(" -> passed (max height {})", report.max_height),
            Err(e) => {
                println!(" -> failed: {}", e);
                failures += 1;
            }
        }
        println!();
    }

    if failures > 0 {
        return Err(format!("{} of {} cases failed", failures, MODES.len()).into());
    }
    Ok(())
}

fn run_trials(opts: &Opts, seed: u64) -> Result<(), Box<dyn Error>> {
    if opts.graphs.is_some() {
        warn!("graphs are not written when running several trials");
    }
    let start = std::time::Instant::now();

    let failed: Vec<(u64, String)> = (seed..seed.wrapping_add(opts.trials as u64))
        .into_par_iter()
        .flat_map_iter(|trial| {
            let keys = keys::seeded_keys(opts.range, opts.num_keys, trial);
            MODES.iter().filter_map(move |&mode| {
                let outcome = match &keys {
                    Ok(keys) => check::run_case(mode, keys, |_, _| {}).map(|_| ()),
                    Err(e) => Err(*e),
                };
                outcome.err().map(|e| (trial, format!("{} case: {}", mode.name(), e)))
            })
        })
        .collect();

    println!("trials ................ {}", opts.trials);
    println!("keys per trial ........ {}", opts.num_keys);
    println!("failed cases .......... {}", failed.len());
    println!("total ................. {}s", start.elapsed().as_secs_f64());

    for (trial, message) in &failed {
        println!("seed {}: {}", trial, message);
    }
    if !failed.is_empty() {
        return Err(format!("{} cases failed", failed.len()).into());
    }
    Ok(())
}
