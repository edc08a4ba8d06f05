//! meadow — a herd of agents idling and wandering around a fenced meadow.
//!
//! Usage: `meadow [--verbose] [CONFIG]` (see `meadow --help`)
//!
//! The optional JSON file may set any of `sim`, `wander`, `agents`,
//! `duration_secs`, `spawn_spread` and `output_dir`; missing fields keep
//! their defaults.
//! Output lands in `output/meadow/` unless `output_dir` says otherwise.

mod field;
mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use wander_behavior::WanderConfig;
use wander_core::{Frame, SimConfig, SimTime, Vec3};
use wander_nav::{AreaId, AreaMask, GridAgentConfig, PathAgent};
use wander_output::{CsvWriter, OutputWriter, SimOutputObserver};
use wander_sim::{AgentView, FrameSummary, SimBuilder, SimObserver};

/// Wandering agents in a fenced meadow, written out as CSV.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON run configuration; defaults apply to any field it leaves out
    config: Option<PathBuf>,
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MeadowConfig {
    sim:           SimConfig,
    wander:        WanderConfig,
    agents:        usize,
    /// Run length in seconds; overrides `sim.total_frames` when set.
    duration_secs: Option<f32>,
    /// Agents spawn within this distance of the meadow centre.
    spawn_spread:  f32,
    output_dir:    PathBuf,
}

impl Default for MeadowConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig {
                total_frames: 30 * 120, // two minutes at 30 fps
                seed:         42,
                ..SimConfig::default()
            },
            wander:        WanderConfig::default(),
            agents:        24,
            duration_secs: None,
            spawn_spread:  18.0,
            output_dir:    PathBuf::from("output/meadow"),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<MeadowConfig> {
    let Some(path) = path else {
        return Ok(MeadowConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    accepted:      u64,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, accepted: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, summary: &FrameSummary) {
        self.summary_rows += 1;
        self.accepted += summary.accepted as u64;
        self.inner.on_frame_end(frame, summary);
    }

    fn on_snapshot(&mut self, frame: Frame, now: SimTime, agents: &[AgentView]) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(frame, now, agents);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(secs) = config.duration_secs {
        config.sim.total_frames = config.sim.make_clock().frames_for_secs(secs);
    }

    println!("=== meadow — rust_wander ===");
    println!(
        "Agents: {}  |  Frames: {} ({:.1} s)  |  Seed: {}",
        config.agents,
        config.sim.total_frames,
        config.sim.total_frames as f32 * config.sim.frame_dt,
        config.sim.seed
    );
    println!();

    // 1. Build the meadow.
    let surface = field::build_meadow()?;
    println!(
        "Meadow: {}x{} cells, {} walkable",
        surface.width,
        surface.depth,
        surface.walkable_count()
    );

    // 2. Build sim.  Agents stay off the flowerbed.
    let template = GridAgentConfig {
        area_mask: AreaMask::only(AreaId::WALKABLE),
        ..GridAgentConfig::default()
    };
    let mut sim = SimBuilder::new(config.sim.clone(), surface)
        .wander(config.wander.clone())
        .agent_template(template)
        .random_spawns(config.agents, Vec3::ZERO, config.spawn_spread)
        .build()?;

    // 3. Set up output.
    let writer = CsvWriter::new(&config.output_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config.sim));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let stats = sim.total_stats();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  frame_summaries.csv : {} rows", obs.summary_rows);
    println!(
        "  picks: {} ({} accepted, {} exhausted, {} recoveries)",
        stats.picks, stats.accepted, stats.exhausted, stats.recoveries
    );
    println!("  destinations issued during the run: {}", obs.accepted);
    println!();

    // 6. Final agent table.
    println!("{:<6} {:>8} {:>8} {:<10} {:>7}", "Agent", "x", "z", "Path", "Picks");
    println!("{}", "-".repeat(43));
    for (i, c) in sim.controllers.iter().enumerate() {
        let p = c.agent().position();
        println!(
            "{:<6} {:>8.2} {:>8.2} {:<10} {:>7}",
            i,
            p.x,
            p.z,
            c.agent().path_status().to_string(),
            c.stats().picks
        );
    }

    Ok(())
}
