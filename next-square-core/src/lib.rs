//! Core functionality for next-square
//!
//! This crate holds the perfect square checker, its error type, and the
//! sample driver that prints results for a configured list of inputs.

pub mod checker;
pub mod config;
pub mod driver;
pub mod error;

pub use checker::{SquareOutcome, find_next_square, is_perfect_square, perfect_square_root};
pub use config::{DriverConfig, OutputFormat};
pub use driver::SampleDriver;
pub use error::{Result, SquareError};
