//! beacon — run one light-seeking robot on a random obstacle grid.
//!
//! Configuration is layered: built-in defaults, then an optional JSON file
//! (`--config`), then individual flags.  The transcript goes to stdout and
//! logs go to stderr (`RUST_LOG=debug` shows every move decision).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bg_core::GridConfig;
use bg_render::TranscriptObserver;
use bg_sim::SimBuilder;

#[derive(Parser, Debug)]
#[command(name = "beacon", version, about = "Grid robot that hunts a relocating light")]
struct Cli {
    /// JSON file with any subset of the `GridConfig` fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid.
    #[arg(long)]
    grid_size: Option<u32>,

    /// Movement budget for the whole run.
    #[arg(long)]
    max_movements: Option<u64>,

    /// Number of obstacles to scatter.
    #[arg(long = "obstacles")]
    num_obstacles: Option<usize>,

    /// Capacity of the robot's path history.
    #[arg(long)]
    max_path_length: Option<usize>,

    /// Capacity of the robot's visit history.
    #[arg(long)]
    max_visited_length: Option<usize>,

    /// RNG seed; drawn from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the obstacle list, arrival notices and the final state.
    #[arg(long)]
    quiet: bool,

    /// Print the run summary as JSON after the transcript.
    #[arg(long)]
    summary_json: bool,
}

impl Cli {
    fn grid_config(&self) -> Result<GridConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GridConfig::default(),
        };

        if let Some(v) = self.grid_size          { config.grid_size = v; }
        if let Some(v) = self.max_movements      { config.max_movements = v; }
        if let Some(v) = self.num_obstacles      { config.num_obstacles = v; }
        if let Some(v) = self.max_path_length    { config.max_path_length = v; }
        if let Some(v) = self.max_visited_length { config.max_visited_length = v; }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if config.seed.is_none() {
            let seed = clock_seed();
            info!(seed, "no seed given; rerun with --seed {seed} to replay");
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.grid_config()?;

    let mut sim = SimBuilder::new(config.clone())
        .build()
        .context("building simulation")?;

    let stdout = io::stdout();
    let mut obs = TranscriptObserver::new(stdout.lock(), config.max_movements).quiet(cli.quiet);
    let summary = sim.run(&mut obs);
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing transcript");
    }

    let mut out = obs.into_inner();
    if cli.summary_json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
