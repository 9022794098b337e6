//! Sample driver
//!
//! Evaluates each configured input in order and writes one line per result.

use crate::checker::SquareOutcome;
use crate::config::{DriverConfig, OutputFormat};
use crate::error::SquareError;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

pub struct SampleDriver {
    config: DriverConfig,
}

impl SampleDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Evaluate every input without formatting
    pub fn outcomes(&self) -> Vec<SquareOutcome> {
        self.config.inputs.iter().map(|&n| SquareOutcome::evaluate(n)).collect()
    }

    /// Evaluate every input and write the results to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        info!(
            "Running driver over {} inputs ({} format)",
            self.config.inputs.len(),
            self.config.format
        );

        for outcome in self.outcomes() {
            let line = self.render(&outcome)?;
            debug!("{} => {}", outcome.input, line);
            writeln!(out, "{}", line).context("Failed to write driver output")?;
        }

        out.flush().context("Failed to flush driver output")?;
        Ok(())
    }

    fn render(&self, outcome: &SquareOutcome) -> Result<String> {
        let line = match self.config.format {
            OutputFormat::Legacy => match outcome.next_square {
                Some(next) => next.to_string(),
                None => SquareError::SENTINEL.to_string(),
            },
            OutputFormat::Text => match (&outcome.next_square, &outcome.error) {
                (Some(next), _) => format!("{} -> {}", outcome.input, next),
                (None, Some(error)) => format!("{} -> {}", outcome.input, error),
                (None, None) => format!("{} -> no result", outcome.input),
            },
            OutputFormat::Json => {
                serde_json::to_string(outcome).context("Failed to serialize outcome")?
            }
        };
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(config: DriverConfig) -> String {
        let mut buf = Vec::new();
        SampleDriver::new(config).run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_run_matches_classic_output() {
        assert_eq!(run_to_string(DriverConfig::default()), "4\n-1\n-1\n9\n");
    }

    #[test]
    fn test_text_format() {
        let config = DriverConfig { inputs: vec![0, 2, -9], format: OutputFormat::Text };
        assert_eq!(
            run_to_string(config),
            "0 -> 1\n\
             2 -> not a perfect square: 2\n\
             -9 -> negative input cannot be a perfect square: -9\n"
        );
    }

    #[test]
    fn test_json_format() {
        let config = DriverConfig { inputs: vec![16, 3], format: OutputFormat::Json };
        let output = run_to_string(config);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"input":16,"next_square":25}"#);

        let failed: SquareOutcome = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(failed.input, 3);
        assert_eq!(failed.next_square, None);
        assert!(failed.error.is_some());
    }

    #[test]
    fn test_empty_inputs_write_nothing() {
        let config = DriverConfig { inputs: Vec::new(), format: OutputFormat::Legacy };
        assert_eq!(run_to_string(config), "");
    }

    #[test]
    fn test_outcomes_preserve_order() {
        let driver = SampleDriver::new(DriverConfig::default());
        let inputs: Vec<i64> = driver.outcomes().iter().map(|o| o.input).collect();
        assert_eq!(inputs, driver.config().inputs);
    }
}
