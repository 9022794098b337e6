//! Check command - evaluate numbers given on the command line

use crate::cli::app::CheckArgs;
use anyhow::Result;
use next_square_core::{DriverConfig, SampleDriver};
use std::io;
use std::path::Path;
use tracing::debug;

pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    // Only the format comes from the config; inputs come from the command line
    let mut config = DriverConfig::load_or_default(config_path)?;
    config.inputs = args.numbers;
    if let Some(format) = args.format {
        config.format = format;
    }

    debug!("Checking {} numbers", config.inputs.len());
    let stdout = io::stdout();
    SampleDriver::new(config).run(&mut stdout.lock())
}
