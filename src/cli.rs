//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generate::ArtifactKind;

/// Top-level CLI parser for `blueprint`.
#[derive(Debug, Parser)]
#[command(name = "blueprint", version, about = "Compile model and controller drafts into Laravel source")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate models, controllers and tests from a draft.
    Build(BuildArgs),
    /// Print resolved relationships and compiled controller methods as JSON.
    Inspect(InspectArgs),
    /// List the embedded stub templates.
    Stubs,
}

/// Arguments for `blueprint build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Draft file to compile.
    #[arg(default_value = "draft.yaml")]
    pub draft: PathBuf,
    /// Configuration file; defaults apply when it does not exist.
    #[arg(long, default_value = "blueprint.yaml")]
    pub config: PathBuf,
    /// Cache of previously generated entities.
    #[arg(long, default_value = ".blueprint")]
    pub cache: PathBuf,
    /// Directory of custom stubs overriding the embedded ones.
    #[arg(long)]
    pub stubs: Option<PathBuf>,
    /// Directory generated paths are written below.
    #[arg(long, default_value = ".")]
    pub output: PathBuf,
    /// Generate only these artifact kinds.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<ArtifactKind>,
}

/// Arguments for `blueprint inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Draft file to compile.
    #[arg(default_value = "draft.yaml")]
    pub draft: PathBuf,
    /// Configuration file; defaults apply when it does not exist.
    #[arg(long, default_value = "blueprint.yaml")]
    pub config: PathBuf,
}
