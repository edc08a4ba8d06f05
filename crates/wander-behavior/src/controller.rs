//! The wander controller and its builder.

use wander_core::{flatten, AgentRng, SimTime, Vec3};
use wander_nav::{AnimationSink, NavSurface, PathAgent};

use crate::{
    BehaviorError, BehaviorResult, PickOutcome, Rejections, TickReport, WanderConfig, WanderStats,
};

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`WanderController`].
///
/// Both collaborators are required; [`build`][Self::build] fails if either
/// was never supplied.
///
/// # Example
///
/// ```rust,ignore
/// let controller = WanderControllerBuilder::new(WanderConfig::default())
///     .path_agent(GridAgent::new(GridAgentConfig::default(), spawn))
///     .animation_sink(ParamBlock::new())
///     .build(&surface, clock.now, &mut rng)?;
/// ```
pub struct WanderControllerBuilder<A: PathAgent, S: AnimationSink> {
    config:    WanderConfig,
    agent:     Option<A>,
    animation: Option<S>,
}

impl<A: PathAgent, S: AnimationSink> WanderControllerBuilder<A, S> {
    pub fn new(config: WanderConfig) -> Self {
        Self { config, agent: None, animation: None }
    }

    pub fn path_agent(mut self, agent: A) -> Self {
        self.agent = Some(agent);
        self
    }

    pub fn animation_sink(mut self, animation: S) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Validate, configure the path agent, and run the first pick.
    ///
    /// Setup raises the agent's obstacle-avoidance quality to
    /// `config.avoidance`, lifts its radius to at least
    /// `config.min_agent_radius`, and records its current position as the
    /// leash origin.
    pub fn build<N: NavSurface + ?Sized>(
        self,
        surface: &N,
        now:     SimTime,
        rng:     &mut AgentRng,
    ) -> BehaviorResult<WanderController<A, S>> {
        self.config.validate()?;
        let mut agent = self.agent.ok_or(BehaviorError::MissingPathAgent)?;
        let animation = self.animation.ok_or(BehaviorError::MissingAnimationSink)?;

        agent.set_obstacle_avoidance(self.config.avoidance);
        let radius = agent.radius();
        agent.set_radius(radius.max(self.config.min_agent_radius));

        let mut controller = WanderController {
            origin: agent.position(),
            idle_until: now,
            config: self.config,
            agent,
            animation,
            stats: WanderStats::default(),
        };
        controller.pick_destination(surface, now, rng);
        Ok(controller)
    }
}

// ── WanderController ──────────────────────────────────────────────────────────

/// Drives one agent through pick → walk → idle → pick.
///
/// The controller owns its path agent and animation sink; the surface is
/// borrowed per call because it is shared by every agent.  All per-agent
/// state lives here, so independent controllers can be ticked in any order
/// or on different threads.
pub struct WanderController<A: PathAgent, S: AnimationSink> {
    config:     WanderConfig,
    agent:      A,
    animation:  S,
    origin:     Vec3,
    idle_until: SimTime,
    stats:      WanderStats,
}

impl<A: PathAgent, S: AnimationSink> WanderController<A, S> {
    // ── Per-tick entry point ──────────────────────────────────────────────

    /// Run one simulation tick.
    ///
    /// 1. Forward the agent's speed to the animation sink.
    /// 2. If the agent has arrived and the idle window is over, pick again.
    /// 3. If the path is invalid or partial, pick again regardless of the
    ///    idle window.
    ///
    /// Step 3 is checked even when step 2 just picked, so a broken status
    /// left over from the previous path can trigger a second pick in the
    /// same tick.
    pub fn on_tick<N: NavSurface + ?Sized>(
        &mut self,
        surface: &N,
        now:     SimTime,
        rng:     &mut AgentRng,
    ) -> TickReport {
        let speed = self.update_animation();

        let arrival_pick = if self.has_arrived() && now >= self.idle_until {
            Some(self.pick_destination(surface, now, rng))
        } else {
            None
        };

        let status = self.agent.path_status();
        let recovery_pick = if status.is_broken() {
            log::debug!("path {status}, picking a new destination");
            self.stats.recoveries += 1;
            Some(self.pick_destination(surface, now, rng))
        } else {
            None
        };

        TickReport { speed, arrival_pick, recovery_pick }
    }

    /// Write the agent's current speed to the animation sink (if a parameter
    /// name is configured) and return it.
    pub fn update_animation(&mut self) -> f32 {
        let speed = self.agent.velocity().length();
        if let Some(name) = self.config.speed_param() {
            self.animation.set_float(name, speed);
        }
        speed
    }

    /// `true` when no path is being computed and the agent is within its
    /// stopping distance (plus tolerance) of the goal.
    pub fn has_arrived(&self) -> bool {
        !self.agent.path_pending()
            && self.agent.remaining_distance()
                <= self.agent.stopping_distance() + self.config.arrival_tolerance
    }

    /// `true` while the idle window is still open at `now`.
    #[inline]
    pub fn is_idle(&self, now: SimTime) -> bool {
        now < self.idle_until
    }

    // ── Destination picking ───────────────────────────────────────────────

    /// Choose a random reachable destination and send the agent there.
    ///
    /// The idle window is reserved first, so an accepted pick is followed by
    /// one idle period after arrival and a failed pick still leaves the agent
    /// idle.  Each of up to `max_pick_tries` samples is snapped onto the
    /// surface and must be at least `min_next_distance` from the agent,
    /// within the leash around the origin, and in straight-line sight.  When
    /// every try fails the idle window is replaced by the shorter
    /// `failure_cooldown` and the agent's current destination is kept.
    pub fn pick_destination<N: NavSurface + ?Sized>(
        &mut self,
        surface: &N,
        now:     SimTime,
        rng:     &mut AgentRng,
    ) -> PickOutcome {
        let cfg = &self.config;
        self.idle_until = now + rng.gen_range(cfg.min_idle_time..=cfg.max_idle_time);
        self.stats.picks += 1;

        let here  = self.agent.position();
        let areas = cfg.area_mask.unwrap_or_else(|| self.agent.area_mask());
        let leash = cfg.max_origin_distance();
        let mut rejections = Rejections::default();

        for attempt in 1..=cfg.max_pick_tries {
            let candidate = here + flatten(rng.inside_unit_sphere() * cfg.wander_radius);

            let Some(hit) = surface.sample_nearest(candidate, cfg.wander_radius, areas) else {
                log::trace!("try {attempt}: nothing navigable near {candidate}");
                rejections.missed += 1;
                continue;
            };
            let point = hit.position;

            if here.distance(point) < cfg.min_next_distance {
                log::trace!("try {attempt}: {point} too close");
                rejections.too_close += 1;
                continue;
            }
            if self.origin.distance(point) > leash {
                log::trace!("try {attempt}: {point} beyond leash {leash}");
                rejections.too_far += 1;
                continue;
            }
            if surface.raycast(here, point, areas).is_some() {
                log::trace!("try {attempt}: {point} out of sight");
                rejections.obstructed += 1;
                continue;
            }

            if !self.agent.set_destination(point) {
                log::debug!("path agent refused destination {point}");
            }
            self.stats.accepted += 1;
            log::debug!("wandering to {point} (try {attempt}), idle until {}", self.idle_until);
            return PickOutcome { destination: Some(point), attempts: attempt, rejections };
        }

        self.idle_until = now + cfg.failure_cooldown;
        self.stats.exhausted += 1;
        log::debug!(
            "no destination after {} tries ({rejections:?}), retrying after {}",
            cfg.max_pick_tries,
            self.idle_until
        );
        PickOutcome { destination: None, attempts: cfg.max_pick_tries, rejections }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Where the agent stood when the controller was built.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// No arrival-triggered pick happens before this time.
    pub fn idle_until(&self) -> SimTime {
        self.idle_until
    }

    pub fn stats(&self) -> &WanderStats {
        &self.stats
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Mutable access for the engine's movement update.
    pub fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    pub fn animation(&self) -> &S {
        &self.animation
    }

    /// Tear down the controller, returning its collaborators.
    pub fn into_parts(self) -> (A, S) {
        (self.agent, self.animation)
    }
}
