//! Command line interface for the `yubin` binary.

pub mod args;
pub mod commands;
pub mod output;
