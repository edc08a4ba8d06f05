use thiserror::Error;
use wander_behavior::BehaviorError;
use wander_core::{Vec3, WanderError};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("simulation has no agents; supply spawn points or random spawns")]
    NoAgents,

    #[error("spawn point {index} at {position} is not on the nav surface")]
    SpawnOffSurface { index: usize, position: Vec3 },

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Core(#[from] WanderError),
}

pub type SimResult<T> = Result<T, SimError>;
