//! Fluent builder for constructing a [`Sim`].

use wander_behavior::{WanderConfig, WanderControllerBuilder};
use wander_core::{AgentId, AgentRng, SimConfig, SimRng, Vec3};
use wander_nav::{GridAgent, GridAgentConfig, NavSurface, ParamBlock};

use crate::{Sim, SimError, SimResult};

/// How far a spawn point may be from the surface and still snap onto it.
const SPAWN_SNAP_DISTANCE: f32 = 1.0;

/// Random spawn samples drawn per requested agent before giving up.
const RANDOM_SPAWN_TRIES: usize = 32;

struct RandomSpawns {
    count:  usize,
    center: Vec3,
    spread: f32,
}

/// Fluent builder for [`Sim<N>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — frame length, frame count, seed, …
/// - `N: NavSurface` — the shared surface every agent walks on
/// - at least one spawn, from [`spawn_points`][Self::spawn_points] and/or
///   [`random_spawns`][Self::random_spawns]
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                      |
/// |-----------------------|------------------------------|
/// | `.wander(c)`          | `WanderConfig::default()`    |
/// | `.agent_template(c)`  | `GridAgentConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, surface)
///     .wander(WanderConfig { wander_radius: 6.0, ..Default::default() })
///     .random_spawns(50, Vec3::ZERO, 15.0)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<N: NavSurface> {
    config:   SimConfig,
    surface:  N,
    wander:   WanderConfig,
    template: GridAgentConfig,
    points:   Vec<Vec3>,
    random:   Option<RandomSpawns>,
}

impl<N: NavSurface> SimBuilder<N> {
    pub fn new(config: SimConfig, surface: N) -> Self {
        Self {
            config,
            surface,
            wander:   WanderConfig::default(),
            template: GridAgentConfig::default(),
            points:   Vec::new(),
            random:   None,
        }
    }

    /// Wander settings shared by every agent.
    pub fn wander(mut self, wander: WanderConfig) -> Self {
        self.wander = wander;
        self
    }

    /// Movement settings every spawned [`GridAgent`] starts with.
    pub fn agent_template(mut self, template: GridAgentConfig) -> Self {
        self.template = template;
        self
    }

    /// Spawn one agent at each point.  Points are snapped onto the surface;
    /// [`build`][Self::build] fails if any is too far from it.
    pub fn spawn_points(mut self, points: Vec<Vec3>) -> Self {
        self.points = points;
        self
    }

    /// Spawn `count` agents at random surface points within `spread` of
    /// `center`, after any explicit spawn points.  Placement is drawn from
    /// the run's seed.
    pub fn random_spawns(mut self, count: usize, center: Vec3, spread: f32) -> Self {
        self.random = Some(RandomSpawns { count, center, spread });
        self
    }

    /// Validate inputs, place the agents, build one controller per agent
    /// (running its first pick), and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<N>> {
        self.config.validate()?;
        self.wander.validate()?;

        let mask = self.template.area_mask;
        let mut spawns = Vec::with_capacity(self.points.len());
        for (index, &position) in self.points.iter().enumerate() {
            let hit = self
                .surface
                .sample_nearest(position, SPAWN_SNAP_DISTANCE, mask)
                .ok_or(SimError::SpawnOffSurface { index, position })?;
            spawns.push(hit.position);
        }
        if let Some(random) = &self.random {
            spawns.extend(self.place_random(random)?);
        }
        if spawns.is_empty() {
            return Err(SimError::NoAgents);
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("cannot start thread pool: {e}")))?,
            ),
            None => None,
        };

        let clock = self.config.make_clock();
        let mut controllers = Vec::with_capacity(spawns.len());
        let mut rngs = Vec::with_capacity(spawns.len());
        for (i, &position) in spawns.iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many agents ({})", spawns.len())))?;
            let mut rng = AgentRng::new(self.config.seed, id);
            let controller = WanderControllerBuilder::new(self.wander.clone())
                .path_agent(GridAgent::new(self.template.clone(), position))
                .animation_sink(ParamBlock::new())
                .build(&self.surface, clock.now, &mut rng)?;
            controllers.push(controller);
            rngs.push(rng);
        }

        log::info!("placed {} wandering agents", controllers.len());

        Ok(Sim {
            config:  self.config,
            clock,
            surface: self.surface,
            controllers,
            rngs,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    fn place_random(&self, random: &RandomSpawns) -> SimResult<Vec<Vec3>> {
        if !random.spread.is_finite() || random.spread < 0.0 {
            return Err(SimError::Config(format!(
                "random spawn spread must be a non-negative distance, got {}",
                random.spread
            )));
        }

        let mut rng = SimRng::new(self.config.seed);
        let mut placed = Vec::with_capacity(random.count);
        let budget = random.count * RANDOM_SPAWN_TRIES;
        for _ in 0..budget {
            if placed.len() == random.count {
                break;
            }
            let offset = Vec3::new(
                rng.gen_range(-random.spread..=random.spread),
                0.0,
                rng.gen_range(-random.spread..=random.spread),
            );
            if offset.length() > random.spread {
                continue;
            }
            if let Some(hit) =
                self.surface
                    .sample_nearest(random.center + offset, SPAWN_SNAP_DISTANCE, self.template.area_mask)
            {
                placed.push(hit.position);
            }
        }

        if placed.len() < random.count {
            return Err(SimError::Config(format!(
                "placed only {} of {} random spawns within {} of {}",
                placed.len(),
                random.count,
                random.spread,
                random.center
            )));
        }
        Ok(placed)
    }
}
