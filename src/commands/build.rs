//! `blueprint build` command.

use crate::cli::BuildArgs;
use crate::context::ServiceContext;
use crate::generate::{self, ArtifactKind, GenerationReport};

/// Execute the `build` command with the given service context.
///
/// Parses the draft, builds the tree and writes every selected artifact.
/// Artifacts that fail are reported after the rest are written.
///
/// # Errors
///
/// Returns an error string if an input cannot be read or parsed, or if any
/// artifact failed to generate.
pub fn run_with_context(ctx: &ServiceContext, args: &BuildArgs) -> Result<(), String> {
    let config = super::load_config(ctx, &args.config)?;
    let draft = super::load_draft(ctx, &args.draft)?;
    let cache = super::load_cache(ctx, &args.cache)?;
    let tree = draft.into_tree(&config, cache.as_ref());

    let kinds: &[ArtifactKind] = if args.only.is_empty() { &ArtifactKind::ALL } else { &args.only };
    let report = generate::generate_only(&tree, &config, ctx.artifacts.as_ref(), kinds);
    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} artifact(s) failed to generate", report.failures.len()))
    }
}

fn print_report(report: &GenerationReport) {
    if report.created.is_empty() && report.failures.is_empty() {
        println!("Nothing to generate.");
        return;
    }
    if !report.created.is_empty() {
        println!("Created:");
        for path in &report.created {
            println!("- {}", path.display());
        }
    }
    if !report.failures.is_empty() {
        println!("\nFailed:");
        for failure in &report.failures {
            println!("- {failure}");
        }
    }
}
