//! `tabgen derive` command.

use std::path::Path;

use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::deriver::LocalTaskDeriver;
use crate::policy::RevisionPolicy;
use crate::registry::manifest;
use crate::task::{DerivedTaskSet, TaskDefaults};

/// Execute the `derive` command.
///
/// Builds the registry from the manifest, runs one derivation pass, and
/// writes the stamped artifact to `out` (or stdout when `out` is absent).
///
/// # Errors
///
/// Returns an error string if the manifest cannot be loaded or the
/// artifact cannot be serialized or written.
pub fn run(
    ctx: &AppContext,
    manifest_path: &Path,
    out: Option<&Path>,
    format: OutputFormat,
) -> Result<(), String> {
    let registry = manifest::load(ctx, manifest_path)?;
    let deriver = LocalTaskDeriver::new(&registry, &RevisionPolicy);
    let tasks = deriver.derive(&TaskDefaults::for_provider("tabgen"));
    let set = DerivedTaskSet::stamp(ctx, tasks);

    let serialized = serialize(&set, format)?;
    match out {
        Some(path) => {
            ctx.fs
                .write(path, &serialized)
                .map_err(|e| format!("failed to write artifact to {}: {e}", path.display()))?;
            println!(
                "Derived {} tasks from {} entity types (pass {})",
                set.tasks.len(),
                registry.len(),
                set.pass_id,
            );
            println!("Written to {}", path.display());
        }
        None => print!("{serialized}"),
    }
    Ok(())
}

fn serialize(set: &DerivedTaskSet, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(set)
            .map_err(|e| format!("failed to serialize derived tasks: {e}")),
        OutputFormat::Json => serde_json::to_string_pretty(set)
            .map_err(|e| format!("failed to serialize derived tasks: {e}")),
    }
}
