use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod matching;
mod regexmatch;
mod similarity;
mod tokenize;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fuzzphrase=debug,info")
    } else {
        EnvFilter::new("fuzzphrase=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Match(args) => {
            cli::matchcmd::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format)?;
        }
        cli::Commands::Patterns => {
            cli::patterns::run(cli.format)?;
        }
    }

    Ok(())
}
