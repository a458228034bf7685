//! Validation depth probe and module-load introspection.
//!
//! The original behavior caught an import failure mid-check to decide how
//! deep to validate; here the capability is probed exactly once per run,
//! up front, and the per-unit checks just branch on the resulting
//! [`ValidationDepth`].

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// How deep the agent artifact validator goes this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationDepth {
    /// Text/pattern checks only. Never executes anything. Selected in CI,
    /// when the host interpreter is unavailable, or on request.
    Structural,
    /// Structural checks plus loading each procedural definition as a
    /// module to confirm the root entry point materializes.
    Introspective,
}

/// Exit code the loader snippet uses to signal "module loaded but no
/// root_agent attribute". Distinct from ordinary interpreter failures.
pub const MISSING_ROOT_AGENT_EXIT: i32 = 3;

const INTERPRETER: &str = "python3";

/// Loads the file given as argv[1] the same way the framework's discovery
/// does, then reports whether `root_agent` exists.
const LOADER_SNIPPET: &str = r#"
import importlib.util, sys
spec = importlib.util.spec_from_file_location("agent", sys.argv[1])
module = importlib.util.module_from_spec(spec)
spec.loader.exec_module(module)
sys.exit(0 if hasattr(module, "root_agent") else 3)
"#;

/// Decide the validation depth for this run.
///
/// Structural when forced by the caller, when a CI indicator is set
/// (`CI=true` or `GITHUB_ACTIONS=true`), or when the host interpreter is
/// not available to load modules with.
#[must_use]
pub fn probe(force_structural: bool) -> ValidationDepth {
    if force_structural || ci_environment() || !interpreter_available() {
        ValidationDepth::Structural
    } else {
        ValidationDepth::Introspective
    }
}

fn ci_environment() -> bool {
    let flagged = |var: &str| std::env::var(var).is_ok_and(|v| v == "true");
    flagged("CI") || flagged("GITHUB_ACTIONS")
}

fn interpreter_available() -> bool {
    Command::new(INTERPRETER)
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

/// Raw result of one module-load attempt, classified by
/// [`crate::domain::agent::classify_introspection`].
#[derive(Debug)]
pub struct IntrospectRaw {
    /// Interpreter exit code; `None` when killed by a signal.
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Load `agent_file` as a module through the host interpreter.
///
/// # Errors
///
/// Returns an error only when the interpreter cannot be spawned at all —
/// availability was probed at startup, so this is unexpected host drift,
/// not a property of the unit under validation.
pub fn load_module(agent_file: &Path) -> Result<IntrospectRaw> {
    let output = Command::new(INTERPRETER)
        .arg("-c")
        .arg(LOADER_SNIPPET)
        .arg(agent_file)
        .output()
        .with_context(|| format!("spawning {INTERPRETER} for {}", agent_file.display()))?;
    Ok(IntrospectRaw {
        exit_code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_forced_structural_wins_over_everything() {
        assert_eq!(probe(true), ValidationDepth::Structural);
    }

    #[test]
    fn test_loader_snippet_uses_the_sentinel_exit_code() {
        // The snippet and MISSING_ROOT_AGENT_EXIT must stay in sync.
        assert!(LOADER_SNIPPET.contains(&format!("else {MISSING_ROOT_AGENT_EXIT}")));
    }
}
