//! CLI internals: argument parsing, config, the JSON data store, commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;
