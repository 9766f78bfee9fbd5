use thiserror::Error;

/// Errors raised while building or steering a [`SceneFlow`](crate::SceneFlow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("scene sequence needs at least {min} scenes, got {len}")]
    TooFewScenes { len: usize, min: usize },
    #[error("scene {index} is out of range for a sequence of {len}")]
    OutOfRange { index: usize, len: usize },
}
