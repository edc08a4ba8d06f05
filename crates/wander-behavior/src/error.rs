use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("wander controller needs a path agent")]
    MissingPathAgent,

    #[error("wander controller needs an animation sink")]
    MissingAnimationSink,

    #[error("behavior configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
