//! Sailkit CLI Library
//!
//! Argument parsing, command implementations, and report formatting for the
//! `sailkit` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
