use crate::cd::{LEAD_IN_SECTORS, Msf};
use crate::cu2::cue::models::Track;
use crate::cu2::error::{Cu2Error, Cu2Result};

/// Renders the CU2 text body for the given track map and total image size.
///
/// The first track is the data track and is represented by the fixed
/// `data1` line, so only the tracks after it get pregap/track lines. Track
/// start stamps are shifted by the 150 sector lead-in gap; the pregap stamp
/// stays unshifted except for tracks carrying a single index, where both
/// lines share the shifted stamp.
pub fn render_cu2(tracks: &[Track], size: Msf) -> Cu2Result<String> {
    let mut cu2 = format!("ntracks {}\n", tracks.len());
    cu2 += &format!("size      {size}\n");
    cu2 += "data1     00:02:00\n";

    for track in tracks.iter().skip(1) {
        let reference = track
            .indices
            .get(1)
            .or_else(|| track.indices.first())
            .ok_or(Cu2Error::TrackWithoutIndex(track.number))?;

        let start = reference.position.shift(LEAD_IN_SECTORS);
        let pregap = if track.indices.len() == 1 {
            start
        } else {
            reference.position
        };

        cu2 += &format!("pregap{:02}  {pregap}\n", track.number);
        cu2 += &format!("track{:02}   {start}\n", track.number);
    }

    cu2 += &format!("\ntrk end   {}", size.shift(LEAD_IN_SECTORS));

    Ok(cu2)
}
