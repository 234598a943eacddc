use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdError {
    #[error("Invalid MSF timestamp: {0}")]
    InvalidMsfFormat(String),

    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("Unsupported track type: {0}")]
    UnsupportedTrackType(String),
}

pub type CdResult<T> = Result<T, CdError>;
