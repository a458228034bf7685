//! Metadata document validation.
//!
//! Operates on an already-parsed [`Metadata`]; parse failures are handled
//! upstream by the orchestrator (they short-circuit the unit's remaining
//! checks, since lifecycle branching depends on parsed metadata).

use gallery_common::{Metadata, TechStackEntry};

use crate::domain::report::{check, CheckResult};
use crate::domain::rules::Rules;

const CHECK: &str = check::METADATA;

/// Validate a parsed metadata document against the rule sets.
///
/// Policy: all missing top-level required fields are enumerated in one
/// message; the tech-stack list reports the first invalid entry
/// (left-to-right, by index) with all of that entry's problems.
#[must_use]
pub fn check_metadata(meta: &Metadata, rules: &Rules) -> CheckResult {
    let mut missing: Vec<&str> = Vec::new();
    if meta.title.is_none() {
        missing.push("title");
    }
    if meta.jtbd.is_none() {
        missing.push("jtbd");
    }
    if meta.language.is_none() {
        missing.push("language");
    }
    if meta.description.is_none() {
        missing.push("description");
    }
    if meta.difficulty.is_none() {
        missing.push("difficulty");
    }
    if meta.tags.is_none() {
        missing.push("tags");
    }
    if meta.tech_stack.is_none() {
        missing.push("tech_stack");
    }
    if !missing.is_empty() {
        return CheckResult::fail(
            CHECK,
            format!("Metadata missing fields: {}", missing.join(", ")),
        );
    }

    // Presence established above; defaults are unreachable.
    let language = meta.language.as_deref().unwrap_or_default();
    if !rules.languages.iter().any(|&l| l == language) {
        return CheckResult::fail(
            CHECK,
            format!("Invalid language: {language}. Valid: {}", rules.languages.join(", ")),
        );
    }

    let difficulty = meta.difficulty.as_deref().unwrap_or_default();
    if !rules.difficulties.iter().any(|&d| d == difficulty) {
        return CheckResult::fail(
            CHECK,
            format!(
                "Invalid difficulty: {difficulty}. Valid: {}",
                rules.difficulties.join(", ")
            ),
        );
    }

    let tech_stack = meta.tech_stack.as_deref().unwrap_or_default();
    for (idx, entry) in tech_stack.iter().enumerate() {
        if let Some(problems) = entry_problems(entry, rules) {
            return CheckResult::fail(CHECK, format!("tech_stack[{idx}] {problems}"));
        }
    }

    if let Some(status) = meta.status.as_deref()
        && !rules.statuses.iter().any(|&s| s == status)
    {
        return CheckResult::fail(
            CHECK,
            format!("Invalid status: {status}. Valid: {}", rules.statuses.join(", ")),
        );
    }

    CheckResult::pass(
        CHECK,
        format!(
            "Metadata valid (lang: {language}, tech_stack: {}, status: {})",
            tech_stack.len(),
            meta.resolved_status()
        ),
    )
}

/// All problems with one tech-stack entry, or `None` if it is valid.
fn entry_problems(entry: &TechStackEntry, rules: &Rules) -> Option<String> {
    let mut missing: Vec<&str> = Vec::new();
    if entry.name.is_none() {
        missing.push("name");
    }
    if entry.provider.is_none() {
        missing.push("provider");
    }
    if entry.icon.is_none() {
        missing.push("icon");
    }
    if entry.description.is_none() {
        missing.push("description");
    }

    let mut problems: Vec<String> = Vec::new();
    if !missing.is_empty() {
        problems.push(format!("missing fields: {}", missing.join(", ")));
    }
    if let Some(provider) = entry.provider.as_deref()
        && !rules.providers.iter().any(|&p| p == provider)
    {
        problems.push(format!(
            "has invalid provider '{provider}'. Valid: {}",
            rules.providers.join(", ")
        ));
    }

    if problems.is_empty() {
        None
    } else {
        Some(problems.join("; "))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn tech(name: &str, provider: &str) -> TechStackEntry {
        TechStackEntry {
            name: Some(name.to_string()),
            provider: Some(provider.to_string()),
            icon: Some("🤖".to_string()),
            description: Some(format!("{name} description")),
        }
    }

    fn valid_metadata() -> Metadata {
        Metadata {
            title: Some("First Agent".to_string()),
            jtbd: Some("When I'm new, I need a working agent.".to_string()),
            language: Some("python".to_string()),
            description: Some("The simplest agent.".to_string()),
            difficulty: Some("beginner".to_string()),
            tags: Some(vec!["basics".to_string()]),
            tech_stack: Some(vec![tech("ADK", "adk")]),
            ..Metadata::default()
        }
    }

    #[test]
    fn test_valid_metadata_passes_with_summary_counters() {
        let result = check_metadata(&valid_metadata(), &Rules::default());
        assert!(result.passed);
        assert_eq!(result.message, "Metadata valid (lang: python, tech_stack: 1, status: ready)");
    }

    #[test]
    fn test_all_missing_fields_enumerated_in_one_message() {
        let meta = Metadata {
            title: Some("Only title".to_string()),
            ..Metadata::default()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert_eq!(
            result.message,
            "Metadata missing fields: jtbd, language, description, difficulty, tags, tech_stack"
        );
    }

    #[test]
    fn test_invalid_language_names_value_and_valid_set() {
        let meta = Metadata {
            language: Some("rust".to_string()),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert_eq!(result.message, "Invalid language: rust. Valid: python, go, typescript, java");
    }

    #[test]
    fn test_invalid_difficulty_names_value_and_valid_set() {
        let meta = Metadata {
            difficulty: Some("expert".to_string()),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert_eq!(
            result.message,
            "Invalid difficulty: expert. Valid: beginner, intermediate, advanced"
        );
    }

    #[test]
    fn test_first_invalid_tech_entry_reported_by_index() {
        let meta = Metadata {
            tech_stack: Some(vec![
                tech("ADK", "adk"),
                tech("Mystery", "vendor"),
                tech("Also bad", "nope"),
            ]),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert_eq!(
            result.message,
            "tech_stack[1] has invalid provider 'vendor'. Valid: adk, gcp, third, oss"
        );
    }

    #[test]
    fn test_tech_entry_missing_subfields_enumerated() {
        let entry = TechStackEntry {
            name: Some("BigQuery".to_string()),
            ..TechStackEntry::default()
        };
        let meta = Metadata {
            tech_stack: Some(vec![entry]),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert_eq!(result.message, "tech_stack[0] missing fields: provider, icon, description");
    }

    #[test]
    fn test_tech_entry_combined_missing_and_invalid_provider() {
        let entry = TechStackEntry {
            name: Some("X".to_string()),
            provider: Some("vendor".to_string()),
            ..TechStackEntry::default()
        };
        let meta = Metadata {
            tech_stack: Some(vec![entry]),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert_eq!(
            result.message,
            "tech_stack[0] missing fields: icon, description; \
             has invalid provider 'vendor'. Valid: adk, gcp, third, oss"
        );
    }

    #[test]
    fn test_valid_entries_around_invalid_one_do_not_mask_it() {
        let meta = Metadata {
            tech_stack: Some(vec![tech("A", "adk"), tech("B", "bad"), tech("C", "oss")]),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert!(result.message.starts_with("tech_stack[1]"));
    }

    #[test]
    fn test_empty_tech_stack_is_valid() {
        let meta = Metadata {
            tech_stack: Some(vec![]),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(result.passed);
        assert!(result.message.contains("tech_stack: 0"));
    }

    #[test]
    fn test_invalid_status_names_value_and_valid_set() {
        let meta = Metadata {
            status: Some("someday".to_string()),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(!result.passed);
        assert_eq!(result.message, "Invalid status: someday. Valid: ready, coming_soon, planned");
    }

    #[test]
    fn test_coming_soon_status_is_valid_and_reported_in_summary() {
        let meta = Metadata {
            status: Some("coming_soon".to_string()),
            ..valid_metadata()
        };
        let result = check_metadata(&meta, &Rules::default());
        assert!(result.passed);
        assert!(result.message.contains("status: coming_soon"));
    }
}
