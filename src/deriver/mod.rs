//! Local task derivation: one tab set per matching entity type.
//!
//! [`LocalTaskDeriver`] is a pure computation over the registry and
//! policy it is constructed with. It performs no I/O, holds no state
//! between calls, and is safe to invoke from independent passes.

use std::collections::BTreeMap;

use crate::policy::ModerationPolicy;
use crate::registry::{EntityTypeRegistry, LinkTemplate};
use crate::task::{TaskDefaults, TaskDefinition, TaskOverlay};

/// Derives moderation-related local tasks from entity type metadata.
pub struct LocalTaskDeriver<'a> {
    registry: &'a EntityTypeRegistry,
    policy: &'a dyn ModerationPolicy,
}

impl<'a> LocalTaskDeriver<'a> {
    /// Creates a deriver over the given registry and policy.
    #[must_use]
    pub fn new(registry: &'a EntityTypeRegistry, policy: &'a dyn ModerationPolicy) -> Self {
        Self { registry, policy }
    }

    /// Computes the full derivative mapping for one generation pass.
    ///
    /// Emits one `<id>.moderation_tab` per moderatable entity type and one
    /// `<id>.latest_version_tab` per revisionable entity declaring the
    /// `latest-version` link template. The two key namespaces are disjoint
    /// by suffix, so the result never sees a collision.
    #[must_use]
    pub fn derive(&self, defaults: &TaskDefaults) -> BTreeMap<String, TaskDefinition> {
        let mut tasks = BTreeMap::new();

        for descriptor in self.policy.revisionable_entity_types(self.registry) {
            let id = descriptor.id.as_str();
            tasks.insert(
                format!("{id}.moderation_tab"),
                TaskDefinition::overlay(
                    defaults,
                    TaskOverlay {
                        route_name: format!("entity.{id}.moderation"),
                        title: "Manage moderation".to_string(),
                        base_route: format!("entity.{id}.edit_form"),
                        weight: 30,
                    },
                ),
            );
        }

        let latest_version_entities = self
            .policy
            .revisionable_entities(self.registry)
            .into_iter()
            .filter(|d| d.has_link_template(LinkTemplate::LatestVersion));

        for descriptor in latest_version_entities {
            let id = descriptor.id.as_str();
            tasks.insert(
                format!("{id}.latest_version_tab"),
                TaskDefinition::overlay(
                    defaults,
                    TaskOverlay {
                        route_name: format!("entity.{id}.latest_version"),
                        title: "Latest version".to_string(),
                        base_route: format!("entity.{id}.canonical"),
                        weight: 1,
                    },
                ),
            );
        }

        tasks
    }
}
