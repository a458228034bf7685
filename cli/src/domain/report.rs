//! Check results and run-level aggregation.

use serde::Serialize;

/// Check identifiers, shared between the domain validators and the
/// orchestrator so report consumers see one stable vocabulary.
pub mod check {
    pub const STRUCTURE: &str = "structure";
    pub const METADATA: &str = "metadata";
    pub const AGENT_CODE: &str = "agent_code";
    pub const README: &str = "readme";
}

/// Outcome of a single check. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (`structure`, `metadata`, `agent_code`, `readme`).
    pub name: &'static str,
    pub passed: bool,
    /// Human-readable reason or success summary.
    pub message: String,
}

impl CheckResult {
    #[must_use]
    pub fn pass(name: &'static str, message: impl Into<String>) -> Self {
        Self { name, passed: true, message: message.into() }
    }

    #[must_use]
    pub fn fail(name: &'static str, message: impl Into<String>) -> Self {
        Self { name, passed: false, message: message.into() }
    }
}

/// All check results for one unit; `passed` is the AND of its checks.
#[derive(Debug, Serialize)]
pub struct UnitResult {
    pub category: String,
    pub name: String,
    pub passed: bool,
    pub checks: Vec<CheckResult>,
}

impl UnitResult {
    #[must_use]
    pub fn new(category: String, name: String, checks: Vec<CheckResult>) -> Self {
        let passed = checks.iter().all(|c| c.passed);
        Self { category, name, passed, checks }
    }
}

/// Aggregate of a whole validation run — the only machine-readable artifact
/// besides console output and the process exit code. Byte-identical across
/// runs on an unchanged tree, so it carries no timestamps.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage of passing units, 0.0–100.0.
    pub pass_rate: f64,
    /// Per-unit results in locator order (category, then name).
    pub units: Vec<UnitResult>,
}

impl RunReport {
    /// Aggregate unit results. The input order is preserved; callers hand in
    /// units in locator order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // unit counts are far below 2^52
    pub fn from_units(units: Vec<UnitResult>) -> Self {
        let total = units.len();
        let passed = units.iter().filter(|u| u.passed).count();
        let failed = total - passed;
        let pass_rate = if total > 0 {
            passed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self { total, passed, failed, pass_rate, units }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
