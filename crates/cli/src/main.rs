use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use knights::api::{check_tour, search_with, MoveSet, Outcome};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod config;
mod progress;
mod provenance;
mod record;

use config::{Overrides, SolveConfig};
use progress::LogProgress;
use record::{outcome_name, SolveRecord};

#[derive(Parser)]
#[command(name = "knights")]
#[command(about = "Knight's-tour search over rectangular boards")]
struct Cmd {
    /// Debug-level logs, including periodic search progress
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Search for a tour and print the labelled board
    Solve(SolveArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct SolveArgs {
    /// JSON file with any of: width, height, start, moves, prune, iterative, max_calls
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<i64>,
    #[arg(long)]
    height: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    start_x: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    start_y: Option<i32>,
    /// Ordered move list, e.g. "1,2;2,1;-1,2"
    #[arg(long, allow_hyphen_values = true)]
    moves: Option<MoveSet>,
    /// Disable dead-end pruning
    #[arg(long)]
    no_prune: bool,
    /// Use the explicit-stack engine (no native recursion)
    #[arg(long)]
    iterative: bool,
    /// Give up after this many engine calls
    #[arg(long)]
    max_calls: Option<u64>,
    /// Log progress every N engine calls (needs --verbose)
    #[arg(long, default_value_t = 1_000_000)]
    progress_every: u64,
    /// Write a JSON record (plus provenance sidecar) here
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    match cmd.action {
        Action::Solve(args) => solve(args),
        Action::Report => report(),
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let over = Overrides {
        width: args.width,
        height: args.height,
        start_x: args.start_x,
        start_y: args.start_y,
        moves: args.moves,
        no_prune: args.no_prune,
        iterative: args.iterative,
        max_calls: args.max_calls,
    };
    let cfg = SolveConfig::resolve(args.config.as_deref(), over)?;
    let dims = cfg.dims()?;
    let moves = cfg.move_set();
    let start = cfg.start();
    let scfg = cfg.search_cfg();
    tracing::info!(
        width = dims.width,
        height = dims.height,
        start_x = start.x,
        start_y = start.y,
        moves = %moves,
        prune = scfg.prune_dead_ends,
        strategy = ?scfg.strategy,
        max_calls = ?scfg.max_calls,
        "solve"
    );
    if scfg.prune_dead_ends && !moves.is_symmetric() {
        tracing::warn!("move set is not closed under negation; dead-end pruning disabled");
    }
    if moves.is_empty() && dims.total() > 1 {
        tracing::warn!("empty move set: no tour is possible on this board");
    }

    let observer = LogProgress::new(moves.len(), args.progress_every);
    let t0 = Instant::now();
    let search = search_with(dims, &moves, start, scfg, observer);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    match search.outcome {
        Outcome::Found => {
            check_tour(&search.table, &moves).context("engine produced an invalid tour")?;
            print!("{}", search.table);
        }
        Outcome::NotFound => println!("No path found."),
        Outcome::BudgetExhausted => println!("No path found within the call budget."),
    }
    println!("Calculation completed after {} iterations.", search.calls);
    tracing::info!(
        outcome = outcome_name(search.outcome),
        calls = search.calls,
        elapsed_ms,
        "done"
    );

    if let Some(out) = args.out {
        let prov = SolveRecord::new(cfg, &search, elapsed_ms).write(&out)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote record");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": knights::VERSION,
        "defaults": SolveConfig::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
