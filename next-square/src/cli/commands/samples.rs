//! Samples command - run the driver over the configured inputs

use crate::cli::app::SamplesArgs;
use anyhow::Result;
use next_square_core::{DriverConfig, SampleDriver};
use std::io;
use std::path::Path;

pub fn execute(args: SamplesArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = DriverConfig::load_or_default(config_path)?;
    if let Some(format) = args.format {
        config.format = format;
    }

    let stdout = io::stdout();
    SampleDriver::new(config).run(&mut stdout.lock())
}
