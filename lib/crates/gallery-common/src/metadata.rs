// lib/crates/gallery-common/src/metadata.rs

use serde::{Deserialize, Serialize};

/// Example metadata document (`metadata.json`).
///
/// Every field is optional at the serde level: presence of required fields
/// is a validation concern, not a parse concern, so the validator can report
/// ALL missing fields in one message instead of failing on the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,
    /// Job-to-be-done statement ("When I ..., I want to ...").
    #[serde(default)]
    pub jtbd: Option<String>,
    /// Source language of the example code (e.g. `"python"`).
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub tech_stack: Option<Vec<TechStackEntry>>,
    /// Slugs of related examples, rendered as cross-links on the site.
    #[serde(default)]
    pub related: Vec<String>,
    /// Upstream sample this example was derived from, if any.
    #[serde(default)]
    pub source_sample: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub time_to_complete: Option<String>,
    #[serde(default)]
    pub what_youll_learn: Vec<String>,
    /// Lifecycle status: `ready`, `coming_soon`, or `planned`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<i64>,
}

/// One entry of the `tech_stack` list.
///
/// Fields are optional for the same reason as [`Metadata`]'s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechStackEntry {
    #[serde(default)]
    pub name: Option<String>,
    /// Provider code: `adk`, `gcp`, `third`, or `oss`.
    #[serde(default)]
    pub provider: Option<String>,
    /// Icon glyph shown on the site card.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Metadata {
    /// Lifecycle status with the `ready` default applied.
    ///
    /// Does not mutate the stored record; an absent `status` is only
    /// *treated* as ready by downstream logic.
    #[must_use]
    pub fn resolved_status(&self) -> &str {
        self.status.as_deref().unwrap_or("ready")
    }

    /// True when the example declares a not-yet-implemented lifecycle
    /// status (`coming_soon` or `planned`), exempting it from code and
    /// README checks.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.resolved_status(), "coming_soon" | "planned")
    }
}
