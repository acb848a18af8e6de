//! Route catalog: the route names a task consumer can resolve.
//!
//! The deriver emits base routes without checking they exist; this module
//! is the opt-in cross-check. The catalog is rebuilt from the registry on
//! demand: one route per declared link template, plus the moderation
//! form route registered for every revisionable type.

use std::collections::{BTreeMap, BTreeSet};

use crate::registry::EntityTypeRegistry;
use crate::task::TaskDefinition;

/// Set of resolvable route names derived from a registry snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteCatalog {
    routes: BTreeSet<String>,
}

impl RouteCatalog {
    /// Builds the catalog for a registry.
    #[must_use]
    pub fn from_registry(registry: &EntityTypeRegistry) -> Self {
        let mut routes = BTreeSet::new();
        for descriptor in registry.iter() {
            let id = descriptor.id.as_str();
            for template in descriptor.link_templates.keys() {
                routes.insert(format!("entity.{id}.{}", template.route_suffix()));
            }
            if descriptor.revisionable {
                routes.insert(format!("entity.{id}.moderation"));
            }
        }
        Self { routes }
    }

    /// Returns `true` if the route name is resolvable.
    #[must_use]
    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    /// Returns `(derivative_id, base_route)` pairs whose base route is not
    /// in the catalog, in derivative id order.
    #[must_use]
    pub fn missing_base_routes(
        &self,
        tasks: &BTreeMap<String, TaskDefinition>,
    ) -> Vec<(String, String)> {
        tasks
            .iter()
            .filter(|(_, task)| !self.contains(&task.base_route))
            .map(|(id, task)| (id.clone(), task.base_route.clone()))
            .collect()
    }

    /// Number of routes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the catalog has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deriver::LocalTaskDeriver;
    use crate::policy::RevisionPolicy;
    use crate::registry::{EntityTypeDescriptor, EntityTypeId, LinkTemplate};
    use crate::task::TaskDefaults;

    fn descriptor(id: &str, revisionable: bool, templates: &[LinkTemplate]) -> EntityTypeDescriptor {
        EntityTypeDescriptor {
            id: EntityTypeId::new(id),
            label: String::new(),
            revisionable,
            link_templates: templates.iter().map(|t| (*t, format!("/{id}"))).collect(),
        }
    }

    #[test]
    fn catalog_covers_link_templates_and_moderation_routes() {
        let registry = EntityTypeRegistry::from_descriptors(vec![descriptor(
            "article",
            true,
            &[LinkTemplate::Canonical, LinkTemplate::EditForm],
        )])
        .unwrap();

        let catalog = RouteCatalog::from_registry(&registry);

        assert!(catalog.contains("entity.article.canonical"));
        assert!(catalog.contains("entity.article.edit_form"));
        assert!(catalog.contains("entity.article.moderation"));
        assert!(!catalog.contains("entity.article.latest_version"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn fully_declared_types_validate_cleanly() {
        let registry = EntityTypeRegistry::from_descriptors(vec![descriptor(
            "article",
            true,
            &[LinkTemplate::Canonical, LinkTemplate::EditForm, LinkTemplate::LatestVersion],
        )])
        .unwrap();
        let tasks = LocalTaskDeriver::new(&registry, &RevisionPolicy)
            .derive(&TaskDefaults::default());

        let catalog = RouteCatalog::from_registry(&registry);

        assert!(catalog.missing_base_routes(&tasks).is_empty());
    }

    #[test]
    fn missing_edit_form_is_reported() {
        // Revisionable but declares no edit-form template: the moderation
        // tab's base route cannot resolve.
        let registry = EntityTypeRegistry::from_descriptors(vec![descriptor(
            "snippet",
            true,
            &[LinkTemplate::Canonical],
        )])
        .unwrap();
        let tasks = LocalTaskDeriver::new(&registry, &RevisionPolicy)
            .derive(&TaskDefaults::default());

        let catalog = RouteCatalog::from_registry(&registry);
        let missing = catalog.missing_base_routes(&tasks);

        assert_eq!(
            missing,
            vec![("snippet.moderation_tab".to_string(), "entity.snippet.edit_form".to_string())]
        );
    }

    #[test]
    fn empty_registry_has_empty_catalog() {
        let catalog = RouteCatalog::from_registry(&EntityTypeRegistry::default());
        assert!(catalog.is_empty());
    }
}
