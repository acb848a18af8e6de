//! Moderation policy: which entity types participate in moderation.
//!
//! The deriver never decides moderatability itself; it asks a
//! [`ModerationPolicy`] passed in explicitly. The two queries are kept
//! separate because a policy may legitimately answer them with different
//! sets: one is type-oriented (where does the moderation settings tab
//! go), the other instance-oriented (which entities can show a pending
//! revision).

use crate::registry::{EntityTypeDescriptor, EntityTypeRegistry};

/// Selects the moderatable subsets of a registry.
pub trait ModerationPolicy: Send + Sync {
    /// Entity types whose moderation settings can be managed.
    fn revisionable_entity_types<'a>(
        &self,
        registry: &'a EntityTypeRegistry,
    ) -> Vec<&'a EntityTypeDescriptor>;

    /// Entity types whose instances participate in a revision workflow.
    fn revisionable_entities<'a>(
        &self,
        registry: &'a EntityTypeRegistry,
    ) -> Vec<&'a EntityTypeDescriptor>;
}

/// Default policy: both queries answer with the revisionable descriptors,
/// in registry order.
pub struct RevisionPolicy;

impl ModerationPolicy for RevisionPolicy {
    fn revisionable_entity_types<'a>(
        &self,
        registry: &'a EntityTypeRegistry,
    ) -> Vec<&'a EntityTypeDescriptor> {
        registry.iter().filter(|d| d.revisionable).collect()
    }

    fn revisionable_entities<'a>(
        &self,
        registry: &'a EntityTypeRegistry,
    ) -> Vec<&'a EntityTypeDescriptor> {
        registry.iter().filter(|d| d.revisionable).collect()
    }
}
