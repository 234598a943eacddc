use crate::cd::Msf;

#[derive(Debug, Clone)]
pub struct CueSheet {
    pub files: Vec<CueFile>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone)]
pub struct CueFile {
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct Track {
    pub number: u8,
    /// Raw mode tag from the TRACK directive. Only the first track's tag is
    /// ever interpreted, when the image block size is looked up.
    pub track_type: String,
    pub indices: Vec<Index>,
}

#[derive(Debug, Clone, Copy)]
pub struct Index {
    pub number: u8,
    pub position: Msf,
}
