use clap::{Parser, Subcommand};
use next_square_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "next-square",
    version,
    about = "Next Square - find the next perfect square after a perfect square",
    long_about = "Next Square checks whether integers are perfect squares and prints the next perfect square above each one. Without a subcommand it runs the sample inputs 1, 2, 3 and 4."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sample driver
    #[command(about = "Evaluate the configured sample inputs (1, 2, 3, 4 by default)")]
    Samples(SamplesArgs),

    /// Check specific numbers
    #[command(about = "Print the next perfect square for each given number")]
    Check(CheckArgs),

    /// Write a default configuration file
    #[command(name = "init-config", about = "Write the default driver configuration to disk")]
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug, Default)]
pub struct SamplesArgs {
    /// Output format (legacy, text, json)
    #[arg(short, long, help = "Override the configured output format")]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Numbers to evaluate
    #[arg(required = true, allow_negative_numbers = true, help = "Integers to check")]
    pub numbers: Vec<i64>,

    /// Output format (legacy, text, json)
    #[arg(short, long, help = "Override the configured output format")]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct InitConfigArgs {
    /// Where to write the file
    #[arg(long, help = "Config file path (defaults to .next-square/config.toml)")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["next-square"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_check_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["next-square", "check", "4", "-9", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.numbers, vec![4, -9]);
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_numbers() {
        assert!(Cli::try_parse_from(["next-square", "check"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["next-square", "samples", "-f", "xml"]).is_err());
    }
}
