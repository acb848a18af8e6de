//! Default fields merged into every derived task.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Base fields a consumer wants applied to every derivative.
///
/// Every field is optional; a derivative's own fields always win over
/// these (see [`TaskDefinition::overlay`](crate::task::TaskDefinition::overlay)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDefaults {
    /// Name of the system providing the tasks.
    #[serde(default)]
    pub provider: Option<String>,
    /// Menu the tabs attach to.
    #[serde(default)]
    pub menu_name: Option<String>,
    /// Fallback display label.
    #[serde(default)]
    pub title: Option<String>,
    /// Fallback route name.
    #[serde(default)]
    pub route_name: Option<String>,
    /// Fallback base route.
    #[serde(default)]
    pub base_route: Option<String>,
    /// Fallback ordering weight.
    #[serde(default)]
    pub weight: Option<i32>,
    /// Opaque passthrough fields copied onto every derivative.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl TaskDefaults {
    /// Defaults carrying only a provider name.
    #[must_use]
    pub fn for_provider(provider: impl Into<String>) -> Self {
        Self { provider: Some(provider.into()), ..Self::default() }
    }
}
