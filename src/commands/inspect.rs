//! `blueprint inspect` command.

use serde::Serialize;

use crate::cli::InspectArgs;
use crate::context::ServiceContext;
use crate::relationship::{RelationshipDescriptor, RelationshipEngine};
use crate::statement::{CompiledMethod, StatementCompiler};
use crate::tree::Tree;

/// What `inspect` prints: the compiler's view of a draft.
#[derive(Debug, Serialize)]
pub struct Inspection {
    /// Relationship accessors per entity, or the resolution error.
    pub models: Vec<ModelInspection>,
    /// Compiled methods per controller.
    pub controllers: Vec<ControllerInspection>,
}

/// Resolved relationships of one entity.
#[derive(Debug, Serialize)]
pub struct ModelInspection {
    /// Fully-qualified entity class.
    pub class: String,
    /// Table name.
    pub table: String,
    /// Resolved accessors.
    pub relationships: Vec<RelationshipDescriptor>,
    /// Resolution error, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Compiled methods of one controller.
#[derive(Debug, Serialize)]
pub struct ControllerInspection {
    /// Fully-qualified controller class.
    pub class: String,
    /// Methods in declaration order.
    pub methods: Vec<CompiledMethod>,
}

/// Builds the inspection of a tree.
#[must_use]
pub fn inspect(tree: &Tree) -> Inspection {
    let config = tree.config();
    let engine = RelationshipEngine::new(tree);
    let compiler = StatementCompiler::new(config, tree);

    let models = tree
        .entities()
        .map(|entity| {
            let (relationships, error) = match engine.resolve_all(entity) {
                Ok(descriptors) => (descriptors, None),
                Err(err) => (Vec::new(), Some(err.to_string())),
            };
            ModelInspection {
                class: entity.fully_qualified_name(config),
                table: entity.table_name(),
                relationships,
                error,
            }
        })
        .collect();

    let controllers = tree
        .controllers()
        .iter()
        .map(|container| ControllerInspection {
            class: container.fully_qualified_name(config),
            methods: compiler.compile_container(container),
        })
        .collect();

    Inspection { models, controllers }
}

/// Execute the `inspect` command with the given service context.
///
/// # Errors
///
/// Returns an error string if the draft or config cannot be read or parsed.
pub fn run_with_context(ctx: &ServiceContext, args: &InspectArgs) -> Result<(), String> {
    let config = super::load_config(ctx, &args.config)?;
    let tree = super::load_draft(ctx, &args.draft)?.into_tree(&config, None);
    let json = serde_json::to_string_pretty(&inspect(&tree))
        .map_err(|e| format!("Failed to serialize inspection: {e}"))?;
    println!("{json}");
    Ok(())
}
