//! Agent artifact validation — declarative configs and procedural sources.
//!
//! Everything here is pure text/structure analysis. Nothing in this module
//! executes agent code; module loading lives in `crate::infra::depth` and
//! only its *outcome* is classified here.

use std::sync::LazyLock;

use gallery_common::AgentConfig;
use regex::Regex;

use crate::domain::report::{check, CheckResult};
use crate::domain::rules::Rules;

const CHECK: &str = check::AGENT_CODE;

/// Matches a `model="..."` or `model='...'` literal in procedural source.
pub static MODEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r#"model=["']([^"']+)["']"#).expect("valid regex")
});

/// How declarative configs are read, decided once per run.
///
/// `Parsed` loads the document as structured data; `TextScan` is the
/// line-oriented fallback used at structural depth, where the original
/// tool ran without a config parser installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    Parsed,
    TextScan,
}

/// Outcome of loading a procedural definition through the host interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntrospectOutcome {
    /// Module loaded and the root entry point materialized.
    Loaded,
    /// Module loaded but no root entry point was found afterwards.
    MissingRootAgent,
    /// Import failed because the agent framework is not installed.
    /// Not a code defect; reported as a pass with a downgraded message.
    FrameworkMissing,
    /// Any other load-time error — a genuine failure.
    Failed(String),
}

// ── Declarative path ──────────────────────────────────────────────────────────

/// Validate a declarative configuration (`root_agent.yaml` content).
#[must_use]
pub fn check_declarative(content: &str, mode: ConfigMode, rules: &Rules) -> CheckResult {
    match mode {
        ConfigMode::Parsed => check_declarative_parsed(content, rules),
        ConfigMode::TextScan => check_declarative_scan(content, rules),
    }
}

fn check_declarative_parsed(content: &str, rules: &Rules) -> CheckResult {
    let config: AgentConfig = match serde_yaml::from_str(content) {
        Ok(config) => config,
        Err(e) => return CheckResult::fail(CHECK, format!("Error validating YAML: {e}")),
    };

    if config.name.is_none() {
        return CheckResult::fail(CHECK, "YAML missing 'name' field");
    }
    let Some(model) = config.model.as_deref() else {
        return CheckResult::fail(CHECK, "YAML missing 'model' field");
    };
    if !rules.approved_models.iter().any(|&m| m == model) {
        return CheckResult::fail(CHECK, format!("YAML using unapproved model: {model}"));
    }
    CheckResult::pass(CHECK, format!("YAML config valid (model: {model})"))
}

fn check_declarative_scan(content: &str, rules: &Rules) -> CheckResult {
    if !content.contains("name:") {
        return CheckResult::fail(CHECK, "YAML missing 'name:' field");
    }
    if !content.contains("model:") {
        return CheckResult::fail(CHECK, "YAML missing 'model:' field");
    }
    match rules.approved_models.iter().find(|m| content.contains(**m)) {
        Some(model) => {
            CheckResult::pass(CHECK, format!("YAML config valid (scan mode, model: {model})"))
        }
        None => CheckResult::fail(CHECK, "YAML using unapproved model"),
    }
}

// ── Procedural path ───────────────────────────────────────────────────────────

/// Structural scan of a procedural definition (`agent.py` content).
///
/// Returns the model label to report on success, or the failure message.
/// Units named in the alternative-model exception set bypass only the
/// allow-list check; the root-entry-point check still applies.
///
/// # Errors
///
/// Returns the failing check message when the source has no root entry
/// point, no model literal, or an unapproved model.
pub fn scan_procedural(content: &str, unit_name: &str, rules: &Rules) -> Result<String, String> {
    if !content.contains("root_agent") {
        return Err("No 'root_agent' defined".to_string());
    }

    let approved = rules.approved_models.iter().find(|m| {
        content.contains(&format!("model=\"{m}\"")) || content.contains(&format!("model='{m}'"))
    });

    if rules.alt_model_units.iter().any(|&u| u == unit_name) {
        return Ok("alternative (allowed)".to_string());
    }
    if let Some(model) = approved {
        return Ok((*model).to_string());
    }

    if content.contains("model=") {
        match MODEL_RE.captures(content).and_then(|c| c.get(1)) {
            Some(m) => Err(format!(
                "Using unapproved model: {}. Use {}",
                m.as_str(),
                rules.approved_models_hint()
            )),
            None => Err("Model specified but couldn't determine which one".to_string()),
        }
    } else {
        Err("No model specified".to_string())
    }
}

/// Build the structural-depth check result for a procedural definition.
#[must_use]
pub fn check_procedural_structural(content: &str, unit_name: &str, rules: &Rules) -> CheckResult {
    match scan_procedural(content, unit_name, rules) {
        Ok(model) => {
            CheckResult::pass(CHECK, format!("Code structure valid (scan mode, model: {model})"))
        }
        Err(message) => CheckResult::fail(CHECK, message),
    }
}

/// Fold an introspection outcome into the check result for a procedural
/// definition whose structural scan already passed with `model`.
#[must_use]
pub fn check_procedural_introspected(model: &str, outcome: &IntrospectOutcome) -> CheckResult {
    match outcome {
        IntrospectOutcome::Loaded => {
            CheckResult::pass(CHECK, format!("Agent valid (model: {model})"))
        }
        IntrospectOutcome::FrameworkMissing => CheckResult::pass(
            CHECK,
            format!("Code structure valid (model: {model}, framework not installed)"),
        ),
        IntrospectOutcome::MissingRootAgent => {
            CheckResult::fail(CHECK, "root_agent not found after import")
        }
        IntrospectOutcome::Failed(e) => CheckResult::fail(CHECK, format!("Error loading agent: {e}")),
    }
}

/// Classify the raw result of a module-load attempt.
///
/// Exit code 0 means the module loaded and the root entry point exists;
/// [`crate::infra::depth::MISSING_ROOT_AGENT_EXIT`] means it loaded without
/// one. Any other failure is split on whether the error text names the
/// agent framework — a missing framework is expected on hosts that only
/// author examples, and must not be conflated with broken code.
#[must_use]
pub fn classify_introspection(exit_code: Option<i32>, stderr: &str) -> IntrospectOutcome {
    match exit_code {
        Some(0) => IntrospectOutcome::Loaded,
        Some(code) if code == crate::infra::depth::MISSING_ROOT_AGENT_EXIT => {
            IntrospectOutcome::MissingRootAgent
        }
        _ => {
            let lowered = stderr.to_lowercase();
            let import_error = lowered.contains("modulenotfounderror")
                || lowered.contains("importerror")
                || lowered.contains("no module named");
            if import_error && (lowered.contains("google") || lowered.contains("adk")) {
                IntrospectOutcome::FrameworkMissing
            } else {
                IntrospectOutcome::Failed(last_stderr_line(stderr))
            }
        }
    }
}

fn last_stderr_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("interpreter exited abnormally")
        .trim()
        .to_string()
}
