use crate::cd::error::CdError;
use crate::cu2::cue::error::CueError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Cu2Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    CdError(#[from] CdError),

    #[error("Could not find the referenced bin file: {0}")]
    BinFileMissing(PathBuf),

    #[error("No files are referenced in the CUE sheet")]
    NoFileReferencedInCueSheet,

    #[error("No tracks found in the CUE sheet")]
    NoTracksInCueSheet,

    #[error("Track {0:02} has no INDEX entries")]
    TrackWithoutIndex(u8),
}

pub type Cu2Result<T> = Result<T, Cu2Error>;
