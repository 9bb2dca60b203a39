//! Error types for sg-scene.

use sg_core::{SkaterId, WalkerId};
use thiserror::Error;

/// Errors returned by per-agent scene operations.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no walker with id {0} in this scene")]
    UnknownWalker(WalkerId),

    #[error("no skater with id {0} in this scene")]
    UnknownSkater(SkaterId),
}

/// Alias for `Result<T, SceneError>`.
pub type SceneResult<T> = Result<T, SceneError>;
