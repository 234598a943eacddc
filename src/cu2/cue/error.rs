use crate::cd::error::CdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error(transparent)]
    CdError(#[from] CdError),

    #[error("Multi bin cue files are not supported")]
    MultiBinCueFile,

    #[error("INDEX directive found before any TRACK directive")]
    IndexOutsideTrack,

    #[error("Malformed directive: {0}")]
    MalformedDirective(String),
}

pub type CueResult<T> = Result<T, CueError>;
