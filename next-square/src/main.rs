use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        2.. => "trace",
    };

    // Results go to stdout, so logs stay on stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        None => {
            info!("No command given, running samples");
            cli::commands::samples::execute(Default::default(), cli.config.as_deref())?;
        }
        Some(Commands::Samples(args)) => {
            info!("Samples command: {:?}", args);
            cli::commands::samples::execute(args, cli.config.as_deref())?;
        }
        Some(Commands::Check(args)) => {
            info!("Check command: {:?}", args);
            cli::commands::check::execute(args, cli.config.as_deref())?;
        }
        Some(Commands::InitConfig(args)) => {
            info!("Init-config command: {:?}", args);
            cli::commands::init_config::execute(args)?;
        }
    }

    Ok(())
}
