//! `gallery validate` — run the full check pipeline over a gallery tree.
//!
//! Per unit the state machine is: structure → metadata parse → metadata →
//! (agent code, readme — skipped for placeholder units). Checks never abort
//! each other; the one exception is a malformed metadata document, which
//! short-circuits the unit's remaining checks because lifecycle branching
//! depends on parsed metadata. Units never affect each other.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use gallery_common::Metadata;
use owo_colors::OwoColorize as _;

use crate::domain::agent::{self, ConfigMode};
use crate::domain::error::MetadataError;
use crate::domain::metadata::check_metadata;
use crate::domain::readme::check_readme;
use crate::domain::report::{check, CheckResult, RunReport, UnitResult};
use crate::domain::rules::Rules;
use crate::domain::structure::check_structure;
use crate::domain::unit::ExampleUnit;
use crate::infra::depth::{self, ValidationDepth};
use crate::infra::locator;
use crate::output::OutputContext;

const BANNER_WIDTH: usize = 60;

/// Arguments for `gallery validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Gallery root containing category directories
    #[arg(value_name = "ROOT", default_value = "examples")]
    pub root: PathBuf,

    /// Print passing-check detail too
    #[arg(long)]
    pub verbose: bool,

    /// Write a machine-readable run report (JSON) to PATH
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "validation_report.json"
    )]
    pub report: Option<PathBuf>,

    /// Force structural depth (never load agent modules)
    #[arg(long)]
    pub structural: bool,
}

/// Run `gallery validate`.
///
/// # Errors
///
/// Returns an error on fatal discovery failures or when the report file
/// cannot be written; per-unit check failures are reflected in the exit
/// code, not as errors.
pub fn run(ctx: &OutputContext, args: &ValidateArgs) -> Result<ExitCode> {
    let rules = Rules::default();
    let depth = depth::probe(args.structural);

    // Fatal: aborts before any checks execute.
    let units = locator::discover(&args.root)?;

    banner(ctx, "Example Gallery - Validation");

    let category_count = {
        let mut categories: Vec<&str> = units.iter().map(|u| u.category.as_str()).collect();
        categories.dedup();
        categories.len()
    };
    ctx.line(&format!(
        "Found {} examples in {category_count} categories",
        units.len()
    ));

    let mut results = Vec::with_capacity(units.len());
    let mut current_category = "";
    for unit in &units {
        if unit.category != current_category {
            ctx.line("");
            ctx.line(&format!(
                "{}",
                format!("Category: {}", unit.category).style(ctx.styles.info)
            ));
            ctx.line(&format!("{}", "-".repeat(40).style(ctx.styles.dim)));
            current_category = &unit.category;
        }

        let result = validate_unit(unit, &rules, depth);
        render_unit(ctx, &result, args.verbose);
        results.push(result);
    }

    let report = RunReport::from_units(results);
    render_summary(ctx, &report);

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report).context("serializing run report")?;
        fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        ctx.line(&format!("\nReport saved to: {}", path.display()));
    }

    if report.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

// ── Per-unit pipeline ─────────────────────────────────────────────────────────

fn validate_unit(unit: &ExampleUnit, rules: &Rules, depth: ValidationDepth) -> UnitResult {
    let mut checks = vec![check_structure(&unit.files, rules)];

    let meta = match read_metadata(unit, rules) {
        Ok(meta) => meta,
        Err(e) => {
            // Lifecycle branching needs parsed metadata; nothing further can
            // run for this unit. The structure result above still stands.
            checks.push(CheckResult::fail(check::METADATA, e.to_string()));
            return UnitResult::new(unit.category.clone(), unit.name.clone(), checks);
        }
    };

    checks.push(check_metadata(&meta, rules));

    if !meta.is_placeholder() {
        checks.push(agent_check(unit, rules, depth));
        checks.push(readme_check(unit, rules));
    }

    UnitResult::new(unit.category.clone(), unit.name.clone(), checks)
}

fn read_metadata(unit: &ExampleUnit, rules: &Rules) -> Result<Metadata, MetadataError> {
    let path = unit.path.join(rules.metadata_file);
    let text =
        fs::read_to_string(&path).map_err(|e| MetadataError::Unreadable(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| MetadataError::Malformed(e.to_string()))
}

fn agent_check(unit: &ExampleUnit, rules: &Rules, depth: ValidationDepth) -> CheckResult {
    if unit.has(rules.declarative_file) && !unit.has(rules.procedural_file) {
        let path = unit.path.join(rules.declarative_file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                return CheckResult::fail(
                    check::AGENT_CODE,
                    format!("Error reading {}: {e}", rules.declarative_file),
                );
            }
        };
        let mode = match depth {
            ValidationDepth::Structural => ConfigMode::TextScan,
            ValidationDepth::Introspective => ConfigMode::Parsed,
        };
        return agent::check_declarative(&content, mode, rules);
    }

    let path = unit.path.join(rules.procedural_file);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            return CheckResult::fail(
                check::AGENT_CODE,
                format!("Error reading {}: {e}", rules.procedural_file),
            );
        }
    };

    match depth {
        ValidationDepth::Structural => {
            agent::check_procedural_structural(&content, &unit.name, rules)
        }
        ValidationDepth::Introspective => {
            let model = match agent::scan_procedural(&content, &unit.name, rules) {
                Ok(model) => model,
                Err(message) => return CheckResult::fail(check::AGENT_CODE, message),
            };
            match depth::load_module(&path) {
                Ok(raw) => {
                    let outcome = agent::classify_introspection(raw.exit_code, &raw.stderr);
                    agent::check_procedural_introspected(&model, &outcome)
                }
                Err(e) => {
                    CheckResult::fail(check::AGENT_CODE, format!("Error loading agent: {e:#}"))
                }
            }
        }
    }
}

fn readme_check(unit: &ExampleUnit, rules: &Rules) -> CheckResult {
    let path = unit.path.join(rules.readme_file);
    match fs::read_to_string(&path) {
        Ok(content) => check_readme(&content, rules),
        Err(e) => CheckResult::fail(
            check::README,
            format!("Error reading {}: {e}", rules.readme_file),
        ),
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn banner(ctx: &OutputContext, title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    ctx.line("");
    ctx.line(&format!("{}", rule.style(ctx.styles.bold)));
    ctx.line(&format!("{}", title.style(ctx.styles.bold)));
    ctx.line(&format!("{}\n", rule.style(ctx.styles.bold)));
}

fn render_unit(ctx: &OutputContext, result: &UnitResult, verbose: bool) {
    if result.passed {
        ctx.success(&result.name);
    } else {
        // Failing lines stay on stdout next to their category, and are
        // printed even under --quiet.
        println!("  {} {}", "✗".style(ctx.styles.error), result.name);
    }

    for check_result in &result.checks {
        if !check_result.passed || (verbose && !ctx.quiet) {
            println!("     └─ {}: {}", check_result.name, check_result.message);
        }
    }
}

fn render_summary(ctx: &OutputContext, report: &RunReport) {
    banner(ctx, "Validation Summary");

    ctx.line(&format!("Total Examples: {}", report.total));
    ctx.line(&format!(
        "{}",
        format!("Passed: {}", report.passed).style(ctx.styles.success)
    ));
    if report.failed > 0 {
        ctx.line(&format!(
            "{}",
            format!("Failed: {}", report.failed).style(ctx.styles.error)
        ));
    }
    ctx.line(&format!("\nPass Rate: {:.1}%", report.pass_rate));

    ctx.line("");
    if report.all_passed() {
        ctx.success("All examples validated successfully!");
    } else {
        ctx.warn("Some examples have issues. Please fix them before committing.");
    }
}
