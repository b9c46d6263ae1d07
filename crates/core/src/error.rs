use crate::{ConfigError, GridError, NormalizeError};

/// Errors that can occur while running an analysis.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid input range: {0}")]
    Grid(#[from] GridError),

    #[error("cannot normalize output: {0}")]
    Normalize(#[from] NormalizeError),
}
