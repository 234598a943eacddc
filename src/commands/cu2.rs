use clap::Parser;
use std::path::PathBuf;

/// Converts a single .cue file to a .cu2 file.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Converts a single .cue file to a .cu2 file\n\nThe referenced .bin file must sit next to the .cue file, only its size is read. The output file keeps the base name of the .cue file."
)]
pub struct GenerateCommand {
    /// Input path of the .cue file describing the disc image
    #[arg(value_name = "INPUT_CUE")]
    pub input_cue: PathBuf,

    /// Output directory for the generated .cu2 file, created if missing
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,
}

/// Converts every .cue file found below a directory to .cu2 files.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct BatchCommand {
    /// Input directory, scanned recursively for .cue files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for the generated .cu2 files, created if missing
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Force overwrite of .cu2 files that already exist in the output directory
    #[arg(long, short = 'f', value_name = "FORCE", default_value_t = false)]
    pub force: bool,
}
