//! Core task definition type and the defaults overlay.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults::TaskDefaults;

/// The derivative-specific fields of a local task.
///
/// These are the fields a deriver computes per entity type; the overlay
/// guarantees they survive any collision with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskOverlay {
    /// Route this tab links to.
    pub route_name: String,
    /// Display label.
    pub title: String,
    /// Parent route the tab is displayed under.
    pub base_route: String,
    /// Ordering weight among sibling tabs; lower sorts first.
    pub weight: i32,
}

/// A named, routed admin UI tab.
///
/// Created fresh each generation pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Route this tab links to.
    pub route_name: String,
    /// Display label.
    pub title: String,
    /// Parent route the tab is displayed under.
    pub base_route: String,
    /// Ordering weight among sibling tabs; lower sorts first.
    pub weight: i32,
    /// Name of the system providing this task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Menu the tab attaches to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_name: Option<String>,
    /// Opaque passthrough fields from the defaults.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl TaskDefinition {
    /// Builds a definition by overlaying derivative-specific fields on a
    /// defaults record.
    ///
    /// Precedence is fixed: `specific` wins for `route_name`, `title`,
    /// `base_route`, and `weight`; `provider`, `menu_name`, and `options`
    /// come from `defaults` only.
    #[must_use]
    pub fn overlay(defaults: &TaskDefaults, specific: TaskOverlay) -> Self {
        Self {
            route_name: specific.route_name,
            title: specific.title,
            base_route: specific.base_route,
            weight: specific.weight,
            provider: defaults.provider.clone(),
            menu_name: defaults.menu_name.clone(),
            options: defaults.options.clone(),
        }
    }
}
