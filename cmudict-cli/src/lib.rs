//! cmudict CLI library
//!
//! This library provides the command-line interface for validating and
//! converting CMU-style pronunciation dictionaries.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
