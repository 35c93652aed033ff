pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use zipsizer_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::init_logging(cli.verbose);
    handlers::handle_estimate(
        cli.directory,
        cli.algorithm.into(),
        cli.level,
        cli.sampling_ratio,
        cli.chunk_size,
        cli.verbose,
    )
}
