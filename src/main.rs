use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod harness;
mod parsing;
mod scoring;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("shift_scorer=debug,info")
    } else {
        EnvFilter::new("shift_scorer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = cli.scoring_config();

    match cli.command {
        cli::Commands::Solve(args) => {
            cli::solve::run(args, cli.format, config, cli.verbose)?;
        }
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format, config, cli.verbose)?;
        }
    }

    Ok(())
}
