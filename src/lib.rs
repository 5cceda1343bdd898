//! Core library entry for the `blueprint` CLI.
//!
//! A draft declares entities (columns and relationships) and controllers
//! (methods as statement lists). The library resolves both into a [`tree::Tree`],
//! infers relationship accessors, compiles statements to controller code and
//! test metadata, and renders model, controller and test classes through an
//! [`ports::ArtifactStore`].

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod draft;
pub mod generate;
pub mod model;
pub mod naming;
pub mod ports;
pub mod relationship;
pub mod statement;
pub mod tree;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
