use crate::cd::{Msf, TrackType};
use crate::cu2::cue::CueParser;
use crate::cu2::cue::models::CueSheet;
use crate::cu2::error::{Cu2Error, Cu2Result};
use crate::cu2::writer::render_cu2;
use crate::util::fs::find_cue_files;
use indicatif::{MultiProgress, ProgressBar};
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;

pub mod cue;
pub mod error;
pub mod writer;

/// Converts a single CUE sheet into a CU2 file inside `destination`.
///
/// The referenced bin file is resolved next to the CUE sheet and only its
/// byte length is read. The destination directory is created if missing and
/// the CU2 file takes the CUE's base name with a `.cu2` extension.
pub async fn generate(cue_path: &Path, destination: &Path) -> Cu2Result<PathBuf> {
    debug!("Parsing CUE file: {cue_path:?}");
    let cue_sheet = CueParser::new(cue_path).parse().await?;

    let bin_name = cue_sheet
        .files
        .first()
        .map(|file| file.filename.clone())
        .ok_or(Cu2Error::NoFileReferencedInCueSheet)?;

    let cue_dir = cue_path.parent().unwrap_or(Path::new("."));
    let bin_path = cue_dir.join(&bin_name);

    debug!("Reading size of bin file: {bin_path:?}");
    let bin_size = fs::metadata(&bin_path)
        .await
        .map_err(|_| Cu2Error::BinFileMissing(bin_path.clone()))?
        .len();

    let cu2 = render(&cue_sheet, bin_size)?;

    fs::create_dir_all(destination).await?;

    let cu2_path = destination.join(cu2_file_name(cue_path));
    fs::write(&cu2_path, cu2).await?;

    info!("Wrote {cu2_path:?}");

    Ok(cu2_path)
}

/// The core conversion: track map plus bin byte length in, CU2 text out.
pub fn render(cue_sheet: &CueSheet, bin_size: u64) -> Cu2Result<String> {
    let first_track = cue_sheet
        .tracks
        .first()
        .ok_or(Cu2Error::NoTracksInCueSheet)?;

    let block_size = first_track.track_type.parse::<TrackType>()?.block_size();
    let size = Msf::from_sectors((bin_size / block_size) as u32);

    debug!(
        "Image size {bin_size} bytes at {block_size} bytes per sector, {} sectors total",
        size.to_sectors()
    );

    render_cu2(&cue_sheet.tracks, size)
}

/// Converts every CUE sheet found below `input_dir` into `destination`.
///
/// Existing CU2 files are skipped unless `force` is set, and a failing
/// conversion only costs that one file, not the whole batch.
pub async fn generate_batch(
    pb: MultiProgress,
    input_dir: &Path,
    destination: &Path,
    force: bool,
) -> Cu2Result<()> {
    let cue_files = find_cue_files(input_dir).await?;

    if cue_files.is_empty() {
        warn!("No CUE files found in {input_dir:?}");
        return Ok(());
    }

    info!("Found {} CUE files in {input_dir:?}", cue_files.len());

    let bar = pb.add(ProgressBar::new(cue_files.len() as u64));

    for cue_path in &cue_files {
        let cu2_path = destination.join(cu2_file_name(cue_path));

        if fs::try_exists(&cu2_path).await? && !force {
            warn!("Skipping {cue_path:?}, {cu2_path:?} already exists (use --force to overwrite)");
            bar.inc(1);
            continue;
        }

        if let Err(err) = generate(cue_path, destination).await {
            warn!("Failed to convert {cue_path:?}: {err}");
        }

        bar.inc(1);
    }

    bar.finish();

    Ok(())
}

fn cu2_file_name(cue_path: &Path) -> PathBuf {
    let stem = cue_path.file_stem().unwrap_or_else(|| OsStr::new("image"));

    PathBuf::from(stem).with_extension("cu2")
}
