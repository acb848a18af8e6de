//! Serialized artifact of one generation pass.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::definition::TaskDefinition;
use crate::context::AppContext;

/// The output of one generation pass, stamped for traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTaskSet {
    /// Unique identifier of this pass.
    pub pass_id: String,
    /// Timestamp when the pass ran.
    pub generated_at: DateTime<Utc>,
    /// Derivative id → task definition.
    pub tasks: BTreeMap<String, TaskDefinition>,
}

impl DerivedTaskSet {
    /// Stamps a derived mapping with a pass id and timestamp from the
    /// context's ports.
    #[must_use]
    pub fn stamp(ctx: &AppContext, tasks: BTreeMap<String, TaskDefinition>) -> Self {
        Self { pass_id: ctx.id_gen.generate_id(), generated_at: ctx.clock.now(), tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_uses_context_ports() {
        let now = DateTime::parse_from_rfc3339("2025-06-15T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let ctx = AppContext::in_memory(now);

        let set = DerivedTaskSet::stamp(&ctx, BTreeMap::new());

        assert_eq!(set.pass_id, "pass-1");
        assert_eq!(set.generated_at, now);
        assert!(set.tasks.is_empty());
    }
}
