use crate::cu2::cue::error::{CueError, CueResult};
use crate::cu2::cue::models::{CueFile, CueSheet, Index, Track};
use std::io::{BufRead, Cursor};
use std::path::{Path, PathBuf};

pub mod error;
pub mod models;

/// Line-oriented CUE sheet parser. Only the FILE, TRACK and INDEX
/// directives are acted upon, everything else is skipped.
pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    pub async fn parse(&self) -> CueResult<CueSheet> {
        let data = tokio::fs::read(&self.cue_path).await?;

        Self::parse_reader(Cursor::new(data))
    }

    fn parse_reader(reader: impl BufRead) -> CueResult<CueSheet> {
        let mut cue_sheet = CueSheet {
            files: Vec::new(),
            tracks: Vec::new(),
        };

        for line in reader.lines() {
            let line = line?;

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            match parts[0] {
                "FILE" => {
                    if !cue_sheet.files.is_empty() {
                        return Err(CueError::MultiBinCueFile);
                    }

                    cue_sheet.files.push(CueFile {
                        filename: Self::extract_file_name(&parts, &line)?,
                    });
                }
                "TRACK" => {
                    if parts.len() < 3 {
                        return Err(CueError::MalformedDirective(line.clone()));
                    }

                    cue_sheet.tracks.push(Track {
                        number: parts[1].parse()?,
                        track_type: parts[2].to_string(),
                        indices: Vec::new(),
                    });
                }
                "INDEX" => {
                    if parts.len() < 3 {
                        return Err(CueError::MalformedDirective(line.clone()));
                    }

                    let index = Index {
                        number: parts[1].parse()?,
                        position: parts[2].parse()?,
                    };

                    let track = cue_sheet
                        .tracks
                        .last_mut()
                        .ok_or(CueError::IndexOutsideTrack)?;
                    track.indices.push(index);
                }
                _ => {}
            }
        }

        Ok(cue_sheet)
    }

    /// Recovers the referenced file name from `FILE "<name>" BINARY`. The
    /// name is the joined fields between the first and the last, with
    /// surrounding quotes stripped, so names containing spaces survive.
    fn extract_file_name(parts: &[&str], line: &str) -> CueResult<String> {
        if parts.len() < 3 {
            return Err(CueError::MalformedDirective(line.to_string()));
        }

        Ok(parts[1..parts.len() - 1]
            .join(" ")
            .trim_matches('"')
            .to_string())
    }
}
