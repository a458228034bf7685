//! Shared schema types for the example gallery tooling.
//!
//! Both the validator CLI and the static-site generator read the same
//! `metadata.json` and `root_agent.yaml` documents; the serde shapes for
//! those documents live here so the two stay in lockstep.

pub mod agent_config;
pub mod metadata;

pub use agent_config::AgentConfig;
pub use metadata::{Metadata, TechStackEntry};
