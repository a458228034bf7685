//! README content validation.

use regex::Regex;

use crate::domain::report::{check, CheckResult};
use crate::domain::rules::Rules;

const CHECK: &str = check::README;

/// Scan README text for the required section headers and the JTBD sentinel.
///
/// Heading matches tolerate decorative glyphs between `##` and the section
/// name (`## 🚀 Quick Start`), case-insensitively. All missing items are
/// combined into one message.
#[must_use]
pub fn check_readme(content: &str, rules: &Rules) -> CheckResult {
    let missing_sections: Vec<&str> = rules
        .required_sections
        .iter()
        .filter(|s| !has_section(content, s))
        .copied()
        .collect();
    let missing_sentinel = !content.contains(rules.sentinel);

    let mut problems: Vec<String> = Vec::new();
    if !missing_sections.is_empty() {
        problems.push(format!("missing sections: {}", missing_sections.join(", ")));
    }
    if missing_sentinel {
        problems.push("missing JTBD statement".to_string());
    }

    if problems.is_empty() {
        CheckResult::pass(CHECK, "README complete")
    } else {
        CheckResult::fail(CHECK, format!("README {}", problems.join("; ")))
    }
}

fn has_section(content: &str, section: &str) -> bool {
    let pattern = format!(r"(?i)##\s*[^\w]*\s*{}", regex::escape(section));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE_README: &str = r#"# First Agent

"When I'm new to the framework, I need a working agent in seconds."

## 🚀 Quick Start

Run it.

## The Problem

You need an agent.

## ✅ The Solution

Here is one.
"#;

    #[test]
    fn test_complete_readme_passes() {
        let result = check_readme(COMPLETE_README, &Rules::default());
        assert!(result.passed);
        assert_eq!(result.message, "README complete");
    }

    #[test]
    fn test_missing_one_section_names_only_that_section() {
        let trimmed = COMPLETE_README.replace("## The Problem", "## Something Else");
        let result = check_readme(&trimmed, &Rules::default());
        assert!(!result.passed);
        assert_eq!(result.message, "README missing sections: The Problem");
    }

    #[test]
    fn test_missing_multiple_sections_all_named() {
        let result = check_readme("\"When I need things.\"\n## Quick Start\n", &Rules::default());
        assert!(!result.passed);
        assert_eq!(result.message, "README missing sections: The Problem, The Solution");
    }

    #[test]
    fn test_missing_sentinel_with_all_sections_cites_only_sentinel() {
        let no_sentinel = COMPLETE_README.replace("\"When", "When");
        let result = check_readme(&no_sentinel, &Rules::default());
        assert!(!result.passed);
        assert_eq!(result.message, "README missing JTBD statement");
    }

    #[test]
    fn test_missing_sections_and_sentinel_combined_in_one_message() {
        let result = check_readme("# Bare readme\n", &Rules::default());
        assert!(!result.passed);
        assert_eq!(
            result.message,
            "README missing sections: Quick Start, The Problem, The Solution; \
             missing JTBD statement"
        );
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let lowercased = COMPLETE_README.replace("## The Problem", "## the problem");
        assert!(check_readme(&lowercased, &Rules::default()).passed);
    }

    #[test]
    fn test_heading_match_tolerates_leading_glyphs() {
        let decorated = COMPLETE_README.replace("## The Problem", "## ❓ 🎯 The Problem");
        assert!(check_readme(&decorated, &Rules::default()).passed);
    }

    #[test]
    fn test_section_text_outside_heading_does_not_count() {
        let body_only = COMPLETE_README.replace("## The Problem", "The Problem is described here");
        let result = check_readme(&body_only, &Rules::default());
        assert!(!result.passed);
        assert!(result.message.contains("The Problem"));
    }
}
