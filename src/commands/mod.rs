use crate::commands::cu2::{BatchCommand, GenerateCommand};
use clap::{Parser, Subcommand};

pub mod cu2;

/// CLI for converting CUE sheets of CD images to CU2 files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate(GenerateCommand),
    Batch(BatchCommand),
}
