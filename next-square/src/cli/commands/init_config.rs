//! Init-config command - write the default configuration file

use crate::cli::app::InitConfigArgs;
use anyhow::{Result, bail};
use next_square_core::DriverConfig;
use tracing::info;

pub fn execute(args: InitConfigArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(DriverConfig::default_config_path);

    if path.exists() && !args.force {
        bail!("Config file already exists: {} (use --force to overwrite)", path.display());
    }

    DriverConfig::default().save(&path)?;
    info!("Wrote default config to {:?}", path);
    println!("Created {}", path.display());

    Ok(())
}
