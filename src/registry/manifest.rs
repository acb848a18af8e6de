//! Manifest loading: the YAML file a registry is populated from.
//!
//! ```yaml
//! entity_types:
//!   - id: article
//!     label: Article
//!     revisionable: true
//!     link_templates:
//!       canonical: /article/{article}
//!       edit-form: /article/{article}/edit
//!       latest-version: /article/{article}/latest
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::registry::{EntityTypeDescriptor, EntityTypeRegistry};

/// On-disk manifest shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// The entity types to register, in file order.
    pub entity_types: Vec<EntityTypeDescriptor>,
}

/// Loads a manifest file and builds the startup registry from it.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid manifest
/// YAML, or contains an empty or duplicate entity type id.
pub fn load(ctx: &AppContext, path: &Path) -> Result<EntityTypeRegistry, String> {
    let contents = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("failed to read manifest {}: {e}", path.display()))?;
    let manifest: Manifest = serde_yaml::from_str(&contents)
        .map_err(|e| format!("failed to parse manifest {}: {e}", path.display()))?;
    EntityTypeRegistry::from_descriptors(manifest.entity_types)
        .map_err(|e| format!("invalid manifest {}: {e}", path.display()))
}
