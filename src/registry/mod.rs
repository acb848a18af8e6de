//! Entity type registry: typed descriptors populated once at startup.
//!
//! The registry replaces runtime string-keyed metadata lookups with a
//! statically typed mapping from [`EntityTypeId`] to
//! [`EntityTypeDescriptor`]. It is built from a manifest file (see
//! [`manifest`]) and read-only for the rest of the process.

pub mod manifest;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an entity type (e.g. `article`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityTypeId(String);

impl EntityTypeId {
    /// Creates an identifier from a raw string.
    ///
    /// Emptiness and uniqueness are enforced when a registry is built,
    /// not here.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The link templates this system consults, keyed in kebab-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkTemplate {
    /// Default view of an entity.
    Canonical,
    /// Edit form of an entity.
    EditForm,
    /// Delete confirmation form of an entity.
    DeleteForm,
    /// Most recent (possibly unpublished) revision of an entity.
    LatestVersion,
}

impl LinkTemplate {
    /// The route-name segment this template maps to, e.g. `edit-form`
    /// becomes `entity.<id>.edit_form`.
    #[must_use]
    pub const fn route_suffix(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::EditForm => "edit_form",
            Self::DeleteForm => "delete_form",
            Self::LatestVersion => "latest_version",
        }
    }
}

/// Capabilities and link templates of a single entity type.
///
/// Immutable once the registry is built; a generation pass only ever
/// reads descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTypeDescriptor {
    /// Unique identifier of this entity type.
    pub id: EntityTypeId,
    /// Human-readable label; falls back to the id when empty.
    #[serde(default)]
    pub label: String,
    /// Whether instances of this type carry revisions.
    #[serde(default)]
    pub revisionable: bool,
    /// Declared link templates and their path patterns.
    #[serde(default)]
    pub link_templates: BTreeMap<LinkTemplate, String>,
}

impl EntityTypeDescriptor {
    /// Returns `true` if this type declares the given link template.
    #[must_use]
    pub fn has_link_template(&self, template: LinkTemplate) -> bool {
        self.link_templates.contains_key(&template)
    }

    /// Returns the path pattern declared for the given link template.
    #[must_use]
    pub fn link_template(&self, template: LinkTemplate) -> Option<&str> {
        self.link_templates.get(&template).map(String::as_str)
    }
}

/// Typed mapping from entity type id to descriptor.
///
/// Iteration order is the id order, so every pass over the registry is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityTypeRegistry {
    types: BTreeMap<EntityTypeId, EntityTypeDescriptor>,
}

impl EntityTypeRegistry {
    /// Builds a registry from a list of descriptors.
    ///
    /// # Errors
    ///
    /// Returns an error if any descriptor has an empty id or an id that
    /// is already registered.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = EntityTypeDescriptor>,
    ) -> Result<Self, String> {
        let mut types = BTreeMap::new();
        for descriptor in descriptors {
            if descriptor.id.as_str().is_empty() {
                return Err("entity type with empty id".to_string());
            }
            let id = descriptor.id.clone();
            if types.insert(id.clone(), descriptor).is_some() {
                return Err(format!("duplicate entity type id: {id}"));
            }
        }
        Ok(Self { types })
    }

    /// Looks up a descriptor by id.
    #[must_use]
    pub fn get(&self, id: &EntityTypeId) -> Option<&EntityTypeDescriptor> {
        self.types.get(id)
    }

    /// Iterates descriptors in id order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityTypeDescriptor> {
        self.types.values()
    }

    /// Number of registered entity types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no entity types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str, revisionable: bool) -> EntityTypeDescriptor {
        EntityTypeDescriptor {
            id: EntityTypeId::new(id),
            label: String::new(),
            revisionable,
            link_templates: BTreeMap::new(),
        }
    }

    #[test]
    fn builds_registry_in_id_order() {
        let registry = EntityTypeRegistry::from_descriptors(vec![
            descriptor("page", true),
            descriptor("article", false),
        ])
        .unwrap();

        let ids: Vec<&str> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["article", "page"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = EntityTypeRegistry::from_descriptors(vec![
            descriptor("article", true),
            descriptor("article", false),
        ]);

        let err = result.unwrap_err();
        assert!(err.contains("duplicate entity type id: article"));
    }

    #[test]
    fn rejects_empty_id() {
        let result = EntityTypeRegistry::from_descriptors(vec![descriptor("", true)]);
        assert!(result.unwrap_err().contains("empty id"));
    }

    #[test]
    fn link_template_lookup_is_typed() {
        let mut d = descriptor("article", true);
        d.link_templates.insert(LinkTemplate::LatestVersion, "/article/{article}/latest".into());

        assert!(d.has_link_template(LinkTemplate::LatestVersion));
        assert!(!d.has_link_template(LinkTemplate::EditForm));
        assert_eq!(d.link_template(LinkTemplate::LatestVersion), Some("/article/{article}/latest"));
    }

    #[test]
    fn link_template_serde_uses_kebab_case() {
        let yaml = serde_yaml::to_string(&LinkTemplate::LatestVersion).unwrap();
        assert_eq!(yaml.trim(), "latest-version");

        let parsed: LinkTemplate = serde_yaml::from_str("edit-form").unwrap();
        assert_eq!(parsed, LinkTemplate::EditForm);
    }
}
