//! Validation rule sets.
//!
//! One immutable [`Rules`] value is built at startup and passed by reference
//! into every validator. No module-level mutable state.

/// Closed sets and filenames the checks validate against.
#[derive(Debug, Clone)]
pub struct Rules {
    /// Valid `language` values in metadata.
    pub languages: &'static [&'static str],
    /// Valid `difficulty` values in metadata.
    pub difficulties: &'static [&'static str],
    /// Valid lifecycle `status` values in metadata.
    pub statuses: &'static [&'static str],
    /// Valid `provider` codes in tech-stack entries.
    pub providers: &'static [&'static str],
    /// Approved model identifiers.
    pub approved_models: &'static [&'static str],
    /// Unit names allowed to demonstrate alternative model providers.
    /// Bypasses the model allow-list check only, nothing else.
    pub alt_model_units: &'static [&'static str],
    /// Section headers every README must carry.
    pub required_sections: &'static [&'static str],
    /// Literal phrase marking the job-to-be-done statement in a README.
    pub sentinel: &'static str,
    /// Procedural agent definition filename.
    pub procedural_file: &'static str,
    /// Declarative agent configuration filename.
    pub declarative_file: &'static str,
    /// Companion files every unit must carry alongside its definition.
    pub companion_files: &'static [&'static str],
    /// Metadata document filename.
    pub metadata_file: &'static str,
    /// Documentation filename.
    pub readme_file: &'static str,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            languages: &["python", "go", "typescript", "java"],
            difficulties: &["beginner", "intermediate", "advanced"],
            statuses: &["ready", "coming_soon", "planned"],
            providers: &["adk", "gcp", "third", "oss"],
            approved_models: &["gemini-2.5-flash", "gemini-2.5-pro"],
            alt_model_units: &["use-claude", "use-vertex-ai", "local-ollama", "use-openai"],
            required_sections: &["Quick Start", "The Problem", "The Solution"],
            sentinel: "\"When",
            procedural_file: "agent.py",
            declarative_file: "root_agent.yaml",
            companion_files: &["__init__.py", "README.md", "metadata.json"],
            metadata_file: "metadata.json",
            readme_file: "README.md",
        }
    }
}

impl Rules {
    /// Render the approved-model set for failure messages.
    #[must_use]
    pub fn approved_models_hint(&self) -> String {
        self.approved_models.join(" or ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_metadata_file_is_a_companion() {
        let rules = Rules::default();
        assert!(rules.companion_files.contains(&rules.metadata_file));
        assert!(rules.companion_files.contains(&rules.readme_file));
    }

    #[test]
    fn test_approved_models_hint_joins_with_or() {
        let rules = Rules::default();
        assert_eq!(rules.approved_models_hint(), "gemini-2.5-flash or gemini-2.5-pro");
    }
}
