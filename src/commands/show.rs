//! `tabgen show` command.

use std::path::Path;

use crate::context::AppContext;
use crate::registry::{manifest, EntityTypeDescriptor};

/// Execute the `show` command.
///
/// Prints each registered entity type with its capability flags and
/// declared link templates.
///
/// # Errors
///
/// Returns an error string if the manifest cannot be loaded.
pub fn run(ctx: &AppContext, manifest_path: &Path) -> Result<(), String> {
    let registry = manifest::load(ctx, manifest_path)?;

    if registry.is_empty() {
        println!("No entity types in manifest.");
        return Ok(());
    }

    println!("Entity types ({}):", registry.len());
    for descriptor in registry.iter() {
        print_descriptor(descriptor);
    }
    Ok(())
}

fn print_descriptor(descriptor: &EntityTypeDescriptor) {
    let label = if descriptor.label.is_empty() {
        descriptor.id.as_str()
    } else {
        descriptor.label.as_str()
    };
    let moderation = if descriptor.revisionable { "revisionable" } else { "not revisionable" };
    println!("  {}: {label} ({moderation})", descriptor.id);

    for (template, pattern) in &descriptor.link_templates {
        println!("    {}: {pattern}", template.route_suffix());
    }
}
