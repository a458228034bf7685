//! Structure check — one definition form plus the companion files.

use std::collections::BTreeSet;

use crate::domain::report::{check, CheckResult};
use crate::domain::rules::Rules;

const CHECK: &str = check::STRUCTURE;

/// Check that a unit carries exactly one agent-definition form and all
/// companion files. Runs for every unit regardless of lifecycle status.
#[must_use]
pub fn check_structure(files: &BTreeSet<String>, rules: &Rules) -> CheckResult {
    let has_procedural = files.contains(rules.procedural_file);
    let has_declarative = files.contains(rules.declarative_file);

    if !has_procedural && !has_declarative {
        return CheckResult::fail(
            CHECK,
            format!("Missing {} or {}", rules.procedural_file, rules.declarative_file),
        );
    }
    if has_procedural && has_declarative {
        return CheckResult::fail(
            CHECK,
            format!(
                "Both {} and {} present; keep exactly one",
                rules.procedural_file, rules.declarative_file
            ),
        );
    }

    let missing: Vec<&str> = rules
        .companion_files
        .iter()
        .filter(|f| !files.contains(**f))
        .copied()
        .collect();

    if missing.is_empty() {
        CheckResult::pass(CHECK, "Structure OK")
    } else {
        CheckResult::fail(CHECK, format!("Missing files: {}", missing.join(", ")))
    }
}
