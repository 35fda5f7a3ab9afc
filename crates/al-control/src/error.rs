use al_core::AlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("invalid configuration: {0}")]
    Config(#[from] AlError),

    #[error("airlock tag must not be empty")]
    EmptyTag,
}

pub type ControlResult<T> = Result<T, ControlError>;
