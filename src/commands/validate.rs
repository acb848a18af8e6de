//! `tabgen validate` command.

use std::path::Path;

use crate::context::AppContext;
use crate::deriver::LocalTaskDeriver;
use crate::policy::RevisionPolicy;
use crate::registry::manifest;
use crate::routes::RouteCatalog;
use crate::task::TaskDefaults;

/// Execute the `validate` command.
///
/// Runs a derivation pass, then checks every derived base route against
/// the route catalog built from the same registry snapshot.
///
/// # Errors
///
/// Returns an error string if the manifest cannot be loaded or any
/// derived base route is unresolvable.
pub fn run(ctx: &AppContext, manifest_path: &Path) -> Result<(), String> {
    let registry = manifest::load(ctx, manifest_path)?;
    let tasks = LocalTaskDeriver::new(&registry, &RevisionPolicy)
        .derive(&TaskDefaults::for_provider("tabgen"));
    let catalog = RouteCatalog::from_registry(&registry);

    let missing = catalog.missing_base_routes(&tasks);
    if missing.is_empty() {
        println!("All {} derived base routes resolve.", tasks.len());
        return Ok(());
    }

    for (derivative, base_route) in &missing {
        eprintln!("  {derivative}: base route {base_route} does not resolve");
    }
    Err(format!("{} of {} derived base routes do not resolve", missing.len(), tasks.len()))
}
