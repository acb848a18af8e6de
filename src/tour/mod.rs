//! Guided-tour tips: typed definitions with weight-ordered iteration.
//!
//! A tour is a set of tips attached to an admin page. Tips expose their
//! label, weight, and markup attributes through accessors; producing
//! rendered output is a consumer concern and has no surface here.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::AppContext;

/// Declarative fields shared by every tip implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipDefinition {
    /// Unique identifier of this tip within its tour.
    pub id: String,
    /// Label shown as the tip heading.
    pub label: String,
    /// Ordering weight; lower-weighted tips are shown first.
    #[serde(default)]
    pub weight: i32,
    /// Attributes applied to the tip's markup.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// Common accessor surface of a tour tip.
///
/// Implementations store a [`TipDefinition`] and get the accessors for
/// free; only `definition` is required.
pub trait Tip {
    /// The declarative definition backing this tip.
    fn definition(&self) -> &TipDefinition;

    /// Unique identifier of this tip.
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Label shown as the tip heading.
    fn label(&self) -> &str {
        &self.definition().label
    }

    /// Ordering weight; lower-weighted tips are shown first.
    fn weight(&self) -> i32 {
        self.definition().weight
    }

    /// Attributes applied to the tip's markup.
    fn attributes(&self) -> &BTreeMap<String, String> {
        &self.definition().attributes
    }
}

/// A tip whose content is plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTip {
    #[serde(flatten)]
    definition: TipDefinition,
    /// The text shown in the tip body.
    pub body: String,
}

impl TextTip {
    /// Creates a text tip from a definition and body text.
    #[must_use]
    pub fn new(definition: TipDefinition, body: impl Into<String>) -> Self {
        Self { definition, body: body.into() }
    }
}

impl Tip for TextTip {
    fn definition(&self) -> &TipDefinition {
        &self.definition
    }
}

/// A named collection of tips for one admin page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Unique identifier of the tour.
    pub id: String,
    /// Human-readable tour label.
    pub label: String,
    /// The tips, in file order.
    tips: Vec<TextTip>,
}

impl Tour {
    /// Returns the tips ordered by ascending weight, id as tiebreak.
    #[must_use]
    pub fn tips(&self) -> Vec<&TextTip> {
        let mut ordered: Vec<&TextTip> = self.tips.iter().collect();
        ordered.sort_by(|a, b| a.weight().cmp(&b.weight()).then_with(|| a.id().cmp(b.id())));
        ordered
    }
}

/// Loads a tour file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid tour YAML.
pub fn load(ctx: &AppContext, path: &Path) -> Result<Tour, String> {
    let contents = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("failed to read tour {}: {e}", path.display()))?;
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("failed to parse tour {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tip(id: &str, weight: i32) -> TextTip {
        TextTip::new(
            TipDefinition {
                id: id.to_string(),
                label: format!("Tip {id}"),
                weight,
                attributes: BTreeMap::new(),
            },
            "body",
        )
    }

    #[test]
    fn tips_are_ordered_by_weight_then_id() {
        let tour = Tour {
            id: "first-run".into(),
            label: "First run".into(),
            tips: vec![tip("c", 5), tip("a", 10), tip("b", 5)],
        };

        let ids: Vec<&str> = tour.tips().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn accessors_read_through_to_the_definition() {
        let mut attributes = BTreeMap::new();
        attributes.insert("data-class".to_string(), "edit-link".to_string());
        let tip = TextTip::new(
            TipDefinition {
                id: "intro".into(),
                label: "Welcome".into(),
                weight: 2,
                attributes,
            },
            "Start here.",
        );

        assert_eq!(tip.id(), "intro");
        assert_eq!(tip.label(), "Welcome");
        assert_eq!(tip.weight(), 2);
        assert_eq!(tip.attributes().get("data-class").map(String::as_str), Some("edit-link"));
        assert_eq!(tip.body, "Start here.");
    }

    #[test]
    fn loads_tour_yaml() {
        let yaml = "\
id: moderation-intro
label: Moderation overview
tips:
  - id: states
    label: States
    weight: 1
    body: Content moves through states.
  - id: tabs
    label: Tabs
    attributes:
      data-id: toolbar
    body: Use the moderation tab.
";
        let ctx = AppContext::in_memory(Utc::now());
        ctx.fs.write(Path::new("/tour.yaml"), yaml).unwrap();

        let tour = load(&ctx, Path::new("/tour.yaml")).unwrap();

        assert_eq!(tour.id, "moderation-intro");
        let ordered = tour.tips();
        assert_eq!(ordered[0].id(), "tabs"); // weight 0 sorts before weight 1
        assert_eq!(ordered[1].id(), "states");
    }

    #[test]
    fn load_rejects_malformed_yaml() {
        let ctx = AppContext::in_memory(Utc::now());
        ctx.fs.write(Path::new("/tour.yaml"), "id: [").unwrap();

        assert!(load(&ctx, Path::new("/tour.yaml")).is_err());
    }
}
