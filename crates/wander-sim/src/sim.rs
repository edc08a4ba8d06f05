//! The `Sim` struct and its frame loop.

use wander_behavior::{TickReport, WanderController, WanderStats};
use wander_core::{AgentId, AgentRng, SimClock, SimConfig, SimTime};
use wander_nav::{GridAgent, NavSurface, ParamBlock, PathAgent};

use crate::{AgentView, FrameSummary, SimObserver};

/// The controller type every simulated agent runs.
pub type AgentController = WanderController<GridAgent, ParamBlock>;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each frame:
///
/// 1. **Tick** every controller: animation update, arrival pick, recovery
///    pick (optionally parallel with the `parallel` feature).
/// 2. **Move** every agent by one frame along its current goal.  Done in
///    the same per-agent closure as the tick, so agents never observe each
///    other mid-frame.
/// 3. **Report** the frame summary.  At snapshot intervals a view of every
///    agent is reported before step 1, so it matches the frame's start time.
///
/// Every agent has its own RNG and the surface is read-only, so the result
/// of a run depends only on the seed, never on thread scheduling.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<N: NavSurface> {
    /// Global configuration (frame length, frame count, seed, …).
    pub config: SimConfig,

    /// Simulation clock.
    pub clock: SimClock,

    /// The surface shared by every agent.
    pub surface: N,

    /// One controller per agent, indexed by `AgentId`.
    pub controllers: Vec<AgentController>,

    /// Per-agent deterministic RNGs, parallel to `controllers`.
    pub rngs: Vec<AgentRng>,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<N: NavSurface> Sim<N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current frame to `config.end_frame()`.
    ///
    /// Calls observer hooks at every frame boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        log::info!(
            "running {} agents from {} to {}",
            self.agent_count(),
            self.clock.frame,
            self.config.end_frame()
        );
        while self.clock.frame < self.config.end_frame() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.frame);

        let stats = self.total_stats();
        log::info!(
            "finished at {}: {} picks, {} accepted, {} exhausted, {} recoveries",
            self.clock,
            stats.picks,
            stats.accepted,
            stats.exhausted,
            stats.recoveries
        );
    }

    /// Run exactly `n` frames from the current position (ignores `end_frame`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    pub fn agent_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn controller(&self, agent: AgentId) -> Option<&AgentController> {
        self.controllers.get(agent.index())
    }

    /// Counters summed over every controller, including the picks each ran
    /// while being built.
    pub fn total_stats(&self) -> WanderStats {
        self.controllers.iter().fold(WanderStats::default(), |mut acc, c| {
            let s = c.stats();
            acc.picks += s.picks;
            acc.accepted += s.accepted;
            acc.exhausted += s.exhausted;
            acc.recoveries += s.recoveries;
            acc
        })
    }

    /// A view of every agent, indexed by `AgentId`.
    pub fn agent_views(&self) -> Vec<AgentView> {
        self.controllers
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let agent = c.agent();
                AgentView {
                    id:          AgentId(i as u32),
                    position:    agent.position(),
                    speed:       agent.velocity().length(),
                    path_status: agent.path_status(),
                    idle_until:  c.idle_until(),
                    goal:        agent.goal(),
                }
            })
            .collect()
    }

    // ── Core frame processing ─────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let frame = self.clock.frame;
        let now = self.clock.now;

        observer.on_frame_start(frame);

        // Agents have not moved yet, so positions are as of `now`.
        let interval = self.config.snapshot_interval_frames;
        if interval > 0 && frame.0 % interval == 0 {
            observer.on_snapshot(frame, now, &self.agent_views());
        }

        let summary = self.process_frame(now);
        observer.on_frame_end(frame, &summary);

        self.clock.advance();
    }

    fn process_frame(&mut self, now: SimTime) -> FrameSummary {
        let reports = self.tick_agents(now);
        let mut summary = FrameSummary::default();
        for report in &reports {
            summary.record(report);
        }
        summary
    }

    /// Tick and move every agent.
    ///
    /// With the `parallel` Cargo feature, agents are processed on Rayon's
    /// thread pool (the builder's dedicated pool when `num_threads` is set).
    fn tick_agents(&mut self, now: SimTime) -> Vec<TickReport> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let surface     = &self.surface;
        let dt          = self.clock.frame_dt;
        let controllers = &mut self.controllers;
        let rngs        = &mut self.rngs;

        #[cfg(not(feature = "parallel"))]
        {
            controllers
                .iter_mut()
                .zip(rngs.iter_mut())
                .map(|(c, rng)| tick_agent(c, surface, now, dt, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut run = || {
                controllers
                    .par_iter_mut()
                    .zip(rngs.par_iter_mut())
                    .map(|(c, rng)| tick_agent(c, surface, now, dt, rng))
                    .collect::<Vec<_>>()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        }
    }
}

fn tick_agent<N: NavSurface>(
    controller: &mut AgentController,
    surface:    &N,
    now:        SimTime,
    dt:         f32,
    rng:        &mut AgentRng,
) -> TickReport {
    let report = controller.on_tick(surface, now, rng);
    controller.agent_mut().advance(surface, dt);
    report
}

