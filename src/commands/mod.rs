//! Command dispatch and handlers.

pub mod build;
pub mod inspect;
pub mod stubs;

use std::path::Path;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::draft::{self, Draft};
use crate::tree::CachedEntities;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Build(args) => {
            let ctx = ServiceContext::live(&args.output, args.stubs.as_deref());
            build::run_with_context(&ctx, args)
        }
        Command::Inspect(args) => {
            let ctx = ServiceContext::live(Path::new("."), None);
            inspect::run_with_context(&ctx, args)
        }
        Command::Stubs => stubs::run(),
    }
}

/// Loads the configuration file, falling back to defaults when absent.
fn load_config(ctx: &ServiceContext, path: &Path) -> Result<Config, String> {
    Config::load(ctx.artifacts.as_ref(), path).map_err(|e| e.to_string())
}

/// Reads and parses a draft; a missing draft is an error.
fn load_draft(ctx: &ServiceContext, path: &Path) -> Result<Draft, String> {
    let content = ctx
        .artifacts
        .read(path)
        .map_err(|e| format!("Failed to read draft {}: {e}", path.display()))?
        .ok_or_else(|| format!("Draft file {} not found", path.display()))?;
    draft::parse(&content).map_err(|e| format!("Invalid draft {}: {e}", path.display()))
}

/// Reads the entity cache; a missing cache is empty.
fn load_cache(ctx: &ServiceContext, path: &Path) -> Result<Option<CachedEntities>, String> {
    let Some(content) = ctx
        .artifacts
        .read(path)
        .map_err(|e| format!("Failed to read cache {}: {e}", path.display()))?
    else {
        return Ok(None);
    };
    draft::parse_cache(&content)
        .map(Some)
        .map_err(|e| format!("Invalid cache {}: {e}", path.display()))
}
