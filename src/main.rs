use crate::commands::{Cli, Commands};
use crate::cu2::{generate, generate_batch};
use anyhow::Result;
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

mod cd;
mod commands;
mod cu2;
mod util;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(cmd) => {
            generate(&cmd.input_cue, &cmd.output).await?;
        }
        Commands::Batch(cmd) => {
            generate_batch(pb.clone(), &cmd.input_dir, &cmd.output, cmd.force).await?
        }
    }

    Ok(())
}
