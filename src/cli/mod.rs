//! CLI commands and formatted output

pub mod commands;
pub mod display;
pub mod helm;

pub use commands::CliArgs;
