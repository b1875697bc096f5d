use thiserror::Error;

/// Errors raised by the scene layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error(
        "unknown scene {0:?} (expected one of \"Solar System\", \"Galaxy\", \"Space Station\")"
    )]
    UnknownScene(String),
}
