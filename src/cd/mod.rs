use crate::cd::error::{CdError, CdResult};
use std::fmt;
use std::str::FromStr;

pub mod error;

pub const SECTORS_PER_SECOND: u32 = 75;
pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECTORS_PER_MINUTE: u32 = SECTORS_PER_SECOND * SECONDS_PER_MINUTE;

/// Fixed 2 second lead-in gap between CUE INDEX stamps and CU2 track stamps.
pub const LEAD_IN_SECTORS: u32 = 2 * SECTORS_PER_SECOND;

/// A Minute:Second:Frame position on the disc, one frame per sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Msf {
    pub fn to_sectors(self) -> u32 {
        self.minutes * SECTORS_PER_MINUTE + self.seconds * SECTORS_PER_SECOND + self.frames
    }

    pub fn from_sectors(sectors: u32) -> Self {
        Self {
            minutes: sectors / SECTORS_PER_MINUTE,
            seconds: (sectors / SECTORS_PER_SECOND) % SECONDS_PER_MINUTE,
            frames: sectors % SECTORS_PER_SECOND,
        }
    }

    pub fn shift(self, sectors: u32) -> Self {
        Self::from_sectors(self.to_sectors() + sectors)
    }
}

impl FromStr for Msf {
    type Err = CdError;

    fn from_str(s: &str) -> CdResult<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(CdError::InvalidMsfFormat(s.to_string()));
        }

        Ok(Self {
            minutes: parts[0].parse()?,
            seconds: parts[1].parse()?,
            frames: parts[2].parse()?,
        })
    }
}

impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes, self.seconds, self.frames
        )
    }
}

/// Track mode tag from a CUE TRACK directive. The mode of the first track
/// decides the bytes-per-sector of the whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Audio,
    CdG,
    Mode1_2048,
    Mode1_2352,
    Mode2_2336,
    Mode2_2352,
    CdI2336,
    CdI2352,
}

impl TrackType {
    pub fn block_size(self) -> u64 {
        match self {
            TrackType::Audio => 2352,
            TrackType::CdG => 2448,
            TrackType::Mode1_2048 => 2048,
            TrackType::Mode1_2352 => 2352,
            TrackType::Mode2_2336 => 2336,
            TrackType::Mode2_2352 => 2352,
            TrackType::CdI2336 => 2336,
            TrackType::CdI2352 => 2352,
        }
    }
}

impl FromStr for TrackType {
    type Err = CdError;

    fn from_str(s: &str) -> CdResult<Self> {
        match s {
            "AUDIO" => Ok(TrackType::Audio),
            "CDG" => Ok(TrackType::CdG),
            "MODE1/2048" => Ok(TrackType::Mode1_2048),
            "MODE1/2352" => Ok(TrackType::Mode1_2352),
            "MODE2/2336" => Ok(TrackType::Mode2_2336),
            "MODE2/2352" => Ok(TrackType::Mode2_2352),
            "CDI/2336" => Ok(TrackType::CdI2336),
            "CDI/2352" => Ok(TrackType::CdI2352),
            _ => Err(CdError::UnsupportedTrackType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msf_parses_and_converts_to_sectors() {
        let msf = "01:00:00".parse::<Msf>().unwrap();
        assert_eq!(msf.to_sectors(), 4500);

        let msf = "00:02:00".parse::<Msf>().unwrap();
        assert_eq!(msf.to_sectors(), 150);

        let msf = "13:37:42".parse::<Msf>().unwrap();
        assert_eq!(msf.to_sectors(), 13 * 4500 + 37 * 75 + 42);
    }

    #[test]
    fn msf_from_sectors_splits_fields() {
        assert_eq!(
            Msf::from_sectors(0),
            Msf {
                minutes: 0,
                seconds: 0,
                frames: 0
            }
        );
        assert_eq!(
            Msf::from_sectors(4500 + 2 * 75 + 30),
            Msf {
                minutes: 1,
                seconds: 2,
                frames: 30
            }
        );
    }

    #[test]
    fn msf_displays_zero_padded() {
        assert_eq!(Msf::from_sectors(150).to_string(), "00:02:00");
        assert_eq!(Msf::from_sectors(0).to_string(), "00:00:00");
        assert_eq!("99:59:74".parse::<Msf>().unwrap().to_string(), "99:59:74");
    }

    #[test]
    fn sectors_round_trip_over_full_range() {
        for sectors in 0..100 * SECTORS_PER_MINUTE {
            assert_eq!(Msf::from_sectors(sectors).to_sectors(), sectors);
        }
    }

    #[test]
    fn stamp_round_trips_through_parse_and_display() {
        for stamp in ["00:00:00", "00:00:74", "00:59:00", "01:02:03", "99:59:74"] {
            assert_eq!(stamp.parse::<Msf>().unwrap().to_string(), stamp);
        }
    }

    #[test]
    fn shift_adds_the_lead_in_gap() {
        let msf = "02:02:00".parse::<Msf>().unwrap();
        assert_eq!(msf.shift(LEAD_IN_SECTORS).to_string(), "02:04:00");
    }

    #[test]
    fn msf_with_wrong_field_count_is_rejected() {
        assert!(matches!(
            "00:00".parse::<Msf>(),
            Err(CdError::InvalidMsfFormat(_))
        ));
        assert!(matches!(
            "00:00:00:00".parse::<Msf>(),
            Err(CdError::InvalidMsfFormat(_))
        ));
    }

    #[test]
    fn msf_with_non_integer_field_is_rejected() {
        assert!(matches!(
            "aa:00:00".parse::<Msf>(),
            Err(CdError::ParseIntError(_))
        ));
    }

    #[test]
    fn block_sizes_match_the_mode_table() {
        assert_eq!("AUDIO".parse::<TrackType>().unwrap().block_size(), 2352);
        assert_eq!("CDG".parse::<TrackType>().unwrap().block_size(), 2448);
        assert_eq!(
            "MODE1/2048".parse::<TrackType>().unwrap().block_size(),
            2048
        );
        assert_eq!(
            "MODE1/2352".parse::<TrackType>().unwrap().block_size(),
            2352
        );
        assert_eq!(
            "MODE2/2336".parse::<TrackType>().unwrap().block_size(),
            2336
        );
        assert_eq!(
            "MODE2/2352".parse::<TrackType>().unwrap().block_size(),
            2352
        );
        assert_eq!("CDI/2336".parse::<TrackType>().unwrap().block_size(), 2336);
        assert_eq!("CDI/2352".parse::<TrackType>().unwrap().block_size(), 2352);
    }

    #[test]
    fn unknown_track_type_is_rejected() {
        assert!(matches!(
            "FOO/1234".parse::<TrackType>(),
            Err(CdError::UnsupportedTrackType(_))
        ));
    }
}
