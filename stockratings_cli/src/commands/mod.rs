//! CLI subcommand implementations.

pub mod ratings;
